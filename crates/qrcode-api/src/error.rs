//! Error Types
//!
//! Every fetch outcome that is not a collection lands in [`FetchError`].
//! Callers still treat all variants on one path (log, keep prior data), but
//! the variant decides what the dashboard tells the operator.

use thiserror::Error;

/// Invalid or absent backend settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("NEXT_PUBLIC_API_URL is not set")]
    MissingBaseUrl,

    #[error("NEXT_PUBLIC_API_URL must start with http:// or https:// (got {0:?})")]
    InvalidBaseUrl(String),

    #[error("NEXT_PUBLIC_API_KEY is not set")]
    MissingApiKey,
}

/// Failure of one read of the QR code collection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("network: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("decode: {0}")]
    Decode(String),
}

/// Longest response body kept inside an error
const MAX_ERROR_BODY: usize = 256;

impl FetchError {
    pub fn http(status: u16, body: &str) -> Self {
        let mut body = body.trim().to_string();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
            body.push_str("...");
        }
        FetchError::Http { status, body }
    }

    /// Worth trying again later without changing anything
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Network(_) => true,
            FetchError::Http { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Rejected credentials
    pub fn is_auth(&self) -> bool {
        matches!(self, FetchError::Http { status: 401 | 403, .. })
    }

    /// Short text for the dashboard notice
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Config(e) => format!("Dashboard is not configured: {}", e),
            FetchError::Network(_) => "Could not reach the QR code service.".to_string(),
            e if e.is_auth() => "The QR code service rejected the API key.".to_string(),
            FetchError::Http { status, .. } if *status >= 500 => {
                format!("The QR code service failed (HTTP {}).", status)
            }
            FetchError::Http { status, .. } => {
                format!("The QR code service refused the request (HTTP {}).", status)
            }
            FetchError::Decode(_) => "The QR code service sent an unexpected response.".to_string(),
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(FetchError::Network("refused".into()).is_transient());
        assert!(FetchError::http(503, "").is_transient());
        assert!(FetchError::http(429, "").is_transient());
        assert!(!FetchError::http(404, "").is_transient());
        assert!(FetchError::http(401, "").is_auth());
        assert!(FetchError::http(403, "").is_auth());
        assert!(!FetchError::Decode("x".into()).is_auth());
    }

    #[test]
    fn test_messages_per_variant() {
        assert!(FetchError::http(401, "").user_message().contains("API key"));
        assert!(FetchError::http(500, "").user_message().contains("HTTP 500"));
        assert!(FetchError::http(400, "").user_message().contains("refused"));
        assert!(FetchError::from(ConfigError::MissingApiKey)
            .user_message()
            .contains("NEXT_PUBLIC_API_KEY"));
    }

    #[test]
    fn test_http_body_truncated() {
        let long = "é".repeat(300);
        match FetchError::http(500, &long) {
            FetchError::Http { body, .. } => {
                assert!(body.ends_with("..."));
                assert!(body.len() <= MAX_ERROR_BODY + 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
