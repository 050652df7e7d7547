//! Shared authenticated transport for Groclake services.
//!
//! The API key is wrapped in [`SecretString`] and only exposed when the
//! request headers are built.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;

use reminisce_types::config::UpstreamConfig;
use reminisce_types::error::{ConfigError, RepositoryError};
use reminisce_types::llm::LlmError;

const API_KEY_HEADER: &str = "GROCLAKE-API-KEY";
const ACCOUNT_ID_HEADER: &str = "GROCLAKE-ACCOUNT-ID";

/// A failed Groclake call, before it is mapped to the caller's error type.
#[derive(Debug, thiserror::Error)]
pub enum GroclakeFailure {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("authentication failed")]
    Unauthorized,

    #[error("rate limited")]
    RateLimited,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl From<GroclakeFailure> for RepositoryError {
    fn from(failure: GroclakeFailure) -> Self {
        match failure {
            GroclakeFailure::Transport(msg) => RepositoryError::Connection(msg),
            GroclakeFailure::Unauthorized => RepositoryError::AuthenticationFailed,
            GroclakeFailure::Decode(msg) => RepositoryError::Deserialization(msg),
            other => RepositoryError::Query(other.to_string()),
        }
    }
}

impl From<GroclakeFailure> for LlmError {
    fn from(failure: GroclakeFailure) -> Self {
        match failure {
            GroclakeFailure::Unauthorized => LlmError::AuthenticationFailed,
            GroclakeFailure::RateLimited => LlmError::RateLimited {
                retry_after_ms: None,
            },
            GroclakeFailure::Decode(msg) => LlmError::Deserialization(msg),
            GroclakeFailure::Status { status: 400, body } => LlmError::InvalidRequest(body),
            other => LlmError::Provider {
                message: other.to_string(),
            },
        }
    }
}

/// Authenticated JSON-over-HTTP transport to one Groclake base URL.
///
/// Intentionally does NOT derive Debug.
#[derive(Clone)]
pub struct GroclakeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    account_id: String,
}

impl GroclakeClient {
    pub fn new(
        upstream: &UpstreamConfig,
        api_key: SecretString,
        account_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(upstream.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            api_key,
            account_id: account_id.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` as JSON and return the response if its status is a success.
    async fn send<B>(&self, path: &str, body: &B) -> Result<reqwest::Response, GroclakeFailure>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.url(path))
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(ACCOUNT_ID_HEADER, &self.account_id)
            .json(body)
            .send()
            .await
            .map_err(|e| GroclakeFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => GroclakeFailure::Unauthorized,
                429 => GroclakeFailure::RateLimited,
                code => GroclakeFailure::Status { status: code, body },
            });
        }

        Ok(response)
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, GroclakeFailure>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(path, body)
            .await?
            .json::<R>()
            .await
            .map_err(|e| GroclakeFailure::Decode(e.to_string()))
    }

    /// POST `body` as JSON to `path`; any success status is an acknowledgement
    /// and the response body is not inspected.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<(), GroclakeFailure>
    where
        B: Serialize + ?Sized,
    {
        self.send(path, body).await.map(drop)
    }
}
