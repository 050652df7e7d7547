//! Service configuration loader for Reminisce.
//!
//! Reads `config.toml` and deserializes it into [`ServiceConfig`]. Falls
//! back to defaults when the file is missing or malformed, so the service
//! always starts with a usable configuration.

use std::path::{Path, PathBuf};

use reminisce_types::config::ServiceConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "REMINISCE_CONFIG";

/// Resolve which config file to read.
///
/// Priority:
/// 1. An explicit path (the `--config` flag)
/// 2. `$REMINISCE_CONFIG`
/// 3. `~/.reminisce/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".reminisce")
        .join("config.toml")
}

/// Load service configuration from `config_path`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_service_config(config_path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}
