//! dynv6 DNS Provider

mod client;
mod error;
mod http;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::config::Dynv6Config;
use crate::error::Result;
use crate::providers::common::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client,
};
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::RecordBody;

/// dynv6 REST API v2
pub const DYNV6_API_BASE: &str = "https://dynv6.com/api/v2";
pub(crate) const PROVIDER_NAME: &str = "dynv6";

/// HTTP client for the dynv6 REST API, implementing [`ZoneClient`](crate::ZoneClient).
pub struct Dynv6Client {
    pub(crate) client: Client,
    pub(crate) token: String,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for Dynv6Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dynv6Client")
            .field("token", &mask_secret(&self.token))
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// dynv6 Client Builder
pub struct Dynv6ClientBuilder {
    token: String,
    base_url: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl Dynv6ClientBuilder {
    fn new(token: String) -> Self {
        Self {
            token,
            base_url: DYNV6_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the API endpoint (self-hosted proxies, mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Dynv6Client> {
        Ok(Dynv6Client {
            client: create_http_client(PROVIDER_NAME, self.connect_timeout, self.request_timeout)?,
            token: self.token,
            base_url: self.base_url,
        })
    }
}

impl Dynv6Client {
    pub fn new(token: String) -> Result<Self> {
        Self::builder(token).build()
    }

    pub fn builder(token: String) -> Dynv6ClientBuilder {
        Dynv6ClientBuilder::new(token)
    }

    /// Build a client from validated configuration.
    pub fn from_config(config: &Dynv6Config) -> Result<Self> {
        Self::builder(config.token.clone())
            .base_url(config.base_url.clone())
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .request_timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
    }
}
