//! Client configuration.

use serde::{Deserialize, Serialize};

use crate::providers::DYNV6_API_BASE;
use crate::providers::common::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::utils::log_sanitizer::mask_secret;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "DYNV6_TOKEN";
/// Environment variable overriding the API endpoint.
pub const API_BASE_ENV: &str = "DYNV6_API_BASE";

/// Validation error for [`Dynv6Config`].
///
/// Returned when a field is missing, empty, or has an invalid format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A field has an invalid format.
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Settings for a dynv6 client.
///
/// Deserializes from camelCase keys; everything except `token` has a default:
///
/// ```json
/// { "token": "...", "baseUrl": "https://dynv6.com/api/v2", "requestTimeoutSecs": 30 }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dynv6Config {
    /// HTTP API token (<https://dynv6.com/keys>).
    pub token: String,
    /// API endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DYNV6_API_BASE.to_string()
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl std::fmt::Debug for Dynv6Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dynv6Config")
            .field("token", &mask_secret(&self.token))
            .field("base_url", &self.base_url)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Dynv6Config {
    /// Config with default endpoint and timeouts.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Read `DYNV6_TOKEN` (required) and `DYNV6_API_BASE` (optional).
    pub fn from_env() -> Result<Self, CredentialValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CredentialValidationError> {
        let token = lookup(TOKEN_ENV).ok_or_else(|| CredentialValidationError::MissingField {
            field: "token".to_string(),
            label: format!("API Token ({TOKEN_ENV})"),
        })?;

        let mut config = Self::new(token);
        if let Some(base_url) = lookup(API_BASE_ENV)
            && !base_url.trim().is_empty()
        {
            config.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the token and timeouts.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        if self.token.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: "token".to_string(),
                label: "API Token".to_string(),
            });
        }
        if self.token.chars().any(char::is_whitespace) {
            return Err(CredentialValidationError::InvalidFormat {
                field: "token".to_string(),
                label: "API Token".to_string(),
                reason: "must not contain whitespace".to_string(),
            });
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(CredentialValidationError::InvalidFormat {
                field: "baseUrl".to_string(),
                label: "API Base URL".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(CredentialValidationError::InvalidFormat {
                field: "timeout".to_string(),
                label: "Timeout".to_string(),
                reason: "must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}
