//! HTTP client for a running prediction server.

use std::env;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Environment variable holding the prediction server URL
pub const TYPIFIER_URL_VAR: &str = "LISTINATOR_TYPIFIER_URL";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Invalid uuid in response: {0:?}")]
    InvalidUuid(Option<String>),
}

#[derive(Debug, Serialize)]
struct Input<'a> {
    product: &'a str,
}

#[derive(Debug, Deserialize)]
struct Output {
    #[allow(dead_code)]
    product: String,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    label: String,
    uuid: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TypifierClient {
    http: reqwest::Client,
    url: String,
}

impl TypifierClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Builds a client from `LISTINATOR_TYPIFIER_URL`. Returns `None` when the
    /// variable is unset or empty, meaning categorization is disabled.
    pub fn from_env() -> Option<Self> {
        match env::var(TYPIFIER_URL_VAR) {
            Ok(url) if !url.is_empty() => Some(Self::new(url)),
            _ => None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Asks the server for the category UUID of a list entry.
    /// A null or malformed uuid in the response is an error.
    pub async fn get_uuid(&self, entry: &str) -> Result<Uuid, ClientError> {
        let output: Output = self.http
            .post(&self.url)
            .json(&Input { product: entry })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match output.uuid {
            Some(ref raw) => Uuid::parse_str(raw).map_err(|_| ClientError::InvalidUuid(output.uuid.clone())),
            None => Err(ClientError::InvalidUuid(None)),
        }
    }
}
