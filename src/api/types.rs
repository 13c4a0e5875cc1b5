use serde::{Deserialize, Serialize};

/// Opaque identifier of a remote topic (its ARN). Never parsed locally.
pub type TopicReference = String;

/// `{message}` responses from create-topic and subscribe.
///
/// The service also returns the ARN it created; we only log it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
    #[serde(default)]
    pub topic_arn: Option<String>,
    #[serde(default)]
    pub subscription_arn: Option<String>,
}

/// Gift card payload nested inside a publish request.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GiftCard {
    pub user_name: String,
    pub gift_card_type: String,
    /// `None` when the form value was not a number; sent as JSON `null`.
    pub amount: Option<f64>,
    pub date: String,
}

/// Body of `POST /api/sns/publish`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub topic_arn: String,
    pub subject: String,
    pub gift_card: GiftCard,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub message: String,
    pub message_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_request_uses_camel_case() {
        let req = PublishRequest {
            topic_arn: "t1".to_string(),
            subject: "S".to_string(),
            gift_card: GiftCard {
                user_name: "U".to_string(),
                gift_card_type: "AMAZON".to_string(),
                amount: Some(25.0),
                date: "2024-01-01".to_string(),
            },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "topicArn": "t1",
                "subject": "S",
                "giftCard": {
                    "userName": "U",
                    "giftCardType": "AMAZON",
                    "amount": 25.0,
                    "date": "2024-01-01"
                }
            })
        );
    }

    #[test]
    fn test_missing_amount_serializes_as_null() {
        let card = GiftCard {
            user_name: String::new(),
            gift_card_type: String::new(),
            amount: None,
            date: String::new(),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert!(json["amount"].is_null());
    }

    #[test]
    fn test_message_response_extra_fields_optional() {
        let resp: MessageResponse = serde_json::from_str(r#"{"message":"Created"}"#).unwrap();
        assert_eq!(resp.message, "Created");
        assert_eq!(resp.topic_arn, None);

        let resp: MessageResponse = serde_json::from_str(
            r#"{"message":"Topic created successfully","topicArn":"arn:aws:sns:us-east-1:1:orders"}"#,
        )
        .unwrap();
        assert_eq!(resp.topic_arn.as_deref(), Some("arn:aws:sns:us-east-1:1:orders"));
    }

    #[test]
    fn test_publish_response_parses() {
        let resp: PublishResponse =
            serde_json::from_str(r#"{"message":"Sent","messageId":"m-1"}"#).unwrap();
        assert_eq!(resp.message, "Sent");
        assert_eq!(resp.message_id, "m-1");
    }
}
