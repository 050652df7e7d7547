//! Credential resolution from the environment.
//!
//! Credentials never live in `config.toml`. They are read once at start-up
//! and wrapped in [`SecretString`] so they cannot leak through `Debug` or logs.
//!
//! | Variable | Required | Purpose |
//! |---|---|---|
//! | `GROCLAKE_API_KEY` | yes | VectorLake / ModelLake authentication |
//! | `GROCLAKE_ACCOUNT_ID` | yes | Account header; owner of every stored record |
//! | `HUGGINGFACE_API_KEY` | no | Bearer token for the image endpoint |
//! | `FLUX_API_URL` | no | Image endpoint, overrides `[image] endpoint` |

use secrecy::SecretString;

use reminisce_types::error::ConfigError;

pub const GROCLAKE_API_KEY: &str = "GROCLAKE_API_KEY";
pub const GROCLAKE_ACCOUNT_ID: &str = "GROCLAKE_ACCOUNT_ID";
pub const HUGGINGFACE_API_KEY: &str = "HUGGINGFACE_API_KEY";
pub const FLUX_API_URL: &str = "FLUX_API_URL";

/// Resolved upstream credentials.
///
/// Intentionally does NOT derive Debug.
pub struct Credentials {
    pub groclake_api_key: SecretString,
    pub groclake_account_id: String,
    pub image_token: Option<SecretString>,
    pub image_endpoint: Option<String>,
}

impl Credentials {
    /// Read credentials from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key =
            get(GROCLAKE_API_KEY).ok_or_else(|| ConfigError::MissingCredential(GROCLAKE_API_KEY.into()))?;
        let account_id = get(GROCLAKE_ACCOUNT_ID)
            .ok_or_else(|| ConfigError::MissingCredential(GROCLAKE_ACCOUNT_ID.into()))?;

        Ok(Self {
            groclake_api_key: SecretString::from(api_key),
            groclake_account_id: account_id,
            image_token: get(HUGGINGFACE_API_KEY).map(SecretString::from),
            image_endpoint: get(FLUX_API_URL),
        })
    }
}
