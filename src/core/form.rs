//! # Forms
//!
//! The input side of each action. A `Form` is the editable field buffer the
//! UI shows; `FormValues` is what gets harvested from it at submit time.
//!
//! Forms know their defaults so a successful submit can re-arm them.

use std::collections::BTreeMap;

use chrono::Local;

use super::outcome::Region;

pub const TOPIC_NAME: &str = "topicName";
pub const TOPIC_ARN: &str = "topicArn";
pub const EMAIL: &str = "email";
pub const SUBJECT: &str = "subject";
pub const USER_NAME: &str = "userName";
pub const GIFT_CARD_TYPE: &str = "giftCardType";
pub const AMOUNT: &str = "amount";
pub const DATE: &str = "date";

pub const DEFAULT_SUBJECT: &str = "Gift Card Delivery Notification";

/// The form-backed actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    CreateTopic,
    Subscribe,
    DeleteTopic,
    Publish,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::CreateTopic,
        FormKind::Subscribe,
        FormKind::DeleteTopic,
        FormKind::Publish,
    ];

    /// The region this form's outcome is rendered into.
    pub fn region(self) -> Region {
        match self {
            FormKind::CreateTopic => Region::CreateTopic,
            FormKind::Subscribe => Region::Subscribe,
            FormKind::DeleteTopic => Region::DeleteTopic,
            FormKind::Publish => Region::Publish,
        }
    }

    pub fn label(self) -> &'static str {
        self.region().label()
    }

    /// Whether a successful submit makes the displayed topic list stale.
    pub fn invalidates_topics(self) -> bool {
        matches!(self, FormKind::CreateTopic | FormKind::DeleteTopic)
    }

    /// Whether the action operates on an existing topic.
    pub fn targets_topic(self) -> bool {
        !matches!(self, FormKind::CreateTopic)
    }

    pub fn next(self) -> Self {
        match self {
            FormKind::CreateTopic => FormKind::Subscribe,
            FormKind::Subscribe => FormKind::DeleteTopic,
            FormKind::DeleteTopic => FormKind::Publish,
            FormKind::Publish => FormKind::CreateTopic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormKind::CreateTopic => FormKind::Publish,
            FormKind::Subscribe => FormKind::CreateTopic,
            FormKind::DeleteTopic => FormKind::Subscribe,
            FormKind::Publish => FormKind::DeleteTopic,
        }
    }
}

/// A raw value harvested from a form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

/// Field name → value, captured at submit time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.insert(name.to_string(), FieldValue::Text(value.into()));
        self
    }

    pub fn with_number(mut self, name: &str, value: f64) -> Self {
        self.0.insert(name.to_string(), FieldValue::Number(value));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// The field as text. Missing fields read as empty.
    pub fn text(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(FieldValue::Text(s)) => s.clone(),
            Some(FieldValue::Number(n)) => n.to_string(),
            None => String::new(),
        }
    }

    /// The field as a finite number, parsing text if needed.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.0.get(name) {
            Some(FieldValue::Number(n)) => Some(*n),
            Some(FieldValue::Text(s)) => leading_number(s),
            None => None,
        }
        .filter(|n| n.is_finite())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// One editable input.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl Field {
    fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            value: String::new(),
        }
    }

    fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(name, label)
        }
    }
}

/// Values a freshly reset form starts with, beyond empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub subject: String,
    pub gift_card_type: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            gift_card_type: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub kind: FormKind,
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(kind: FormKind, defaults: &FormDefaults) -> Self {
        let fields = match kind {
            FormKind::CreateTopic => vec![Field::text(TOPIC_NAME, "Topic name")],
            FormKind::Subscribe => vec![
                Field::text(TOPIC_ARN, "Topic ARN"),
                Field::text(EMAIL, "Email"),
            ],
            FormKind::DeleteTopic => vec![Field::text(TOPIC_ARN, "Topic ARN")],
            FormKind::Publish => vec![
                Field::text(TOPIC_ARN, "Topic ARN"),
                Field::text(SUBJECT, "Subject"),
                Field::text(USER_NAME, "User name"),
                Field::text(GIFT_CARD_TYPE, "Gift card type"),
                Field::number(AMOUNT, "Amount"),
                Field::text(DATE, "Date"),
            ],
        };
        let mut form = Self { kind, fields };
        form.reset(defaults);
        form
    }

    /// Restores every field to its default value.
    pub fn reset(&mut self, defaults: &FormDefaults) {
        for field in &mut self.fields {
            field.value = match field.name {
                SUBJECT => defaults.subject.clone(),
                GIFT_CARD_TYPE => defaults.gift_card_type.clone(),
                DATE => today(),
                _ => String::new(),
            };
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.into();
        }
    }

    /// Harvests the current field contents.
    ///
    /// Number fields that parse are captured as numbers; anything else stays
    /// text so the raw input is not lost.
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in &self.fields {
            values = match field.kind {
                FieldKind::Number => match leading_number(&field.value) {
                    Some(n) => values.with_number(field.name, n),
                    None => values.with_text(field.name, field.value.clone()),
                },
                FieldKind::Text => values.with_text(field.name, field.value.clone()),
            };
        }
        values
    }
}

/// The longest numeric prefix of `input` after leading whitespace, so
/// `"25 USD"` reads as 25. `None` when there is no leading number.
fn leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        has_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !has_digits {
        return None;
    }
    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
