//! # Query Encoding
//!
//! Every simple action sends its inputs as query parameters. They all go
//! through `QueryParams` so escaping happens in exactly one place
//! (`application/x-www-form-urlencoded`, via `Url::query_pairs_mut`).

use reqwest::Url;

use super::service::ApiError;

/// Ordered list of query parameters for one request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Order is preserved in the encoded URL.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Writes the parameters into `url`, replacing any existing query.
    pub fn apply(&self, url: &mut Url) {
        url.set_query(None);
        if self.is_empty() {
            return;
        }
        let mut query = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            query.append_pair(key, value);
        }
    }
}

/// Joins `base_url` and an absolute `path`, then attaches `params`.
///
/// The base may carry its own path prefix (`http://host/proxy`); it is kept.
pub fn endpoint_url(base_url: &str, path: &str, params: &QueryParams) -> Result<Url, ApiError> {
    let raw = format!("{}{}", base_url.trim_end_matches('/'), path);
    let mut url = Url::parse(&raw).map_err(|e| ApiError::Config(format!("{raw}: {e}")))?;
    params.apply(&mut url);
    Ok(url)
}
