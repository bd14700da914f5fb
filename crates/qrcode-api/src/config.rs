//! Backend Configuration
//!
//! Base URL and API key, read once and never mutated.

use crate::error::ConfigError;

/// Variable holding the backend base URL
pub const API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";
/// Variable holding the static API key sent on every request
pub const API_KEY_VAR: &str = "NEXT_PUBLIC_API_KEY";

/// Validated backend settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            base_url: base_url.to_string(),
            api_key,
        })
    }

    /// Values inlined at compile time. The browser has no process environment,
    /// so this is what the WASM build uses.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("NEXT_PUBLIC_API_URL").unwrap_or_default(),
            option_env!("NEXT_PUBLIC_API_KEY").unwrap_or_default(),
        )
    }

    /// Values read from the running process (native tools and tests).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            std::env::var(API_URL_VAR).unwrap_or_default(),
            std::env::var(API_KEY_VAR).unwrap_or_default(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `GET` target for the collection
    pub fn qrcodes_url(&self) -> String {
        format!("{}/qrcodes", self.base_url)
    }
}
