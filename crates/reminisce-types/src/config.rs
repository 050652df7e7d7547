//! Service configuration types for Reminisce.
//!
//! `ServiceConfig` represents the top-level `config.toml`. Every section and
//! field has a default, so an empty file (or no file at all) yields a
//! runnable configuration. Credentials are never part of this file.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::image::ImageParameters;

/// Top-level configuration for the Reminisce service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub vector_lake: UpstreamConfig,
    #[serde(default)]
    pub model_lake: UpstreamConfig,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Chunk sizing, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

fn default_max_chunk_size() -> usize {
    500
}

fn default_overlap() -> usize {
    100
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: default_max_chunk_size(),
            overlap: default_overlap(),
        }
    }
}

/// Retrieval settings for the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    5
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
        }
    }
}

impl RetrievalConfig {
    /// Reject settings that would make every search come back empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::Invalid(
                "[retrieval] top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Connection settings for a Groclake-style upstream (VectorLake, ModelLake).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_groclake_base_url")]
    pub base_url: String,
    #[serde(default = "default_upstream_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_groclake_base_url() -> String {
    "https://api.groclake.ai".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    60
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_groclake_base_url(),
            timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

/// Text-to-image endpoint settings.
///
/// With no `endpoint` (and no `FLUX_API_URL` in the environment) image
/// generation is disabled and every recollection carries `image: null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_image_size")]
    pub height: u32,
    #[serde(default = "default_image_size")]
    pub width: u32,
    #[serde(default = "default_guidance_scale")]
    pub guidance_scale: f32,
    #[serde(default = "default_inference_steps")]
    pub num_inference_steps: u32,
    #[serde(default = "default_image_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_image_size() -> u32 {
    1024
}

fn default_guidance_scale() -> f32 {
    3.5
}

fn default_inference_steps() -> u32 {
    50
}

fn default_image_timeout_secs() -> u64 {
    120
}

impl ImageConfig {
    /// The sampling parameters sent with every image request.
    pub fn parameters(&self) -> ImageParameters {
        ImageParameters {
            height: self.height,
            width: self.width,
            guidance_scale: self.guidance_scale,
            num_inference_steps: self.num_inference_steps,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            height: default_image_size(),
            width: default_image_size(),
            guidance_scale: default_guidance_scale(),
            num_inference_steps: default_inference_steps(),
            timeout_secs: default_image_timeout_secs(),
        }
    }
}

/// Output format of the log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Bridge tracing spans to OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub otel: bool,
}
