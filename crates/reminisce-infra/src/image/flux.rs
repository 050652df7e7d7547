//! FluxImageClient: [`ImageGenerator`] over a Hugging Face style inference endpoint.
//!
//! The endpoint accepts `{inputs, parameters}` as JSON and answers with raw
//! image bytes. Only HTTP 200 counts as success. Without a configured
//! endpoint every call returns [`ImageError::NotConfigured`].

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use reminisce_core::image::generator::ImageGenerator;
use reminisce_types::config::ImageConfig;
use reminisce_types::error::{ConfigError, ImageError};
use reminisce_types::image::{GeneratedImage, ImageRequest};

/// Used when the endpoint does not send an `image/*` content type.
const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Intentionally does NOT derive Debug.
pub struct FluxImageClient {
    http: reqwest::Client,
    endpoint: Option<String>,
    token: Option<SecretString>,
}

impl FluxImageClient {
    pub fn new(
        config: &ImageConfig,
        endpoint: Option<String>,
        token: Option<SecretString>,
    ) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
            token,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }
}

impl ImageGenerator for FluxImageClient {
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageError> {
        let endpoint = self.endpoint.as_deref().ok_or(ImageError::NotConfigured)?;

        let mut builder = self.http.post(endpoint).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ImageError::Request(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim())
            .filter(|v| v.starts_with("image/"))
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageError::Request(format!("failed to read image body: {e}")))?;
        if bytes.is_empty() {
            return Err(ImageError::Request("image service returned an empty body".to_string()));
        }

        debug!(bytes = bytes.len(), mime_type = %mime_type, "Generated image");
        Ok(GeneratedImage {
            bytes: bytes.to_vec(),
            mime_type,
        })
    }
}
