//! Generic HTTP client tools
//!
//! Shared request handling for the dynv6 client: sending, logging, reading
//! the body and parsing JSON. Requests are sent exactly once; nothing here
//! retries.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// Unified processing: sending requests, logging, error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any status other than 429 and 502..=504
    /// * `Err(ProviderError::Timeout)` - request timed out
    /// * `Err(ProviderError::RateLimited)` - HTTP 429
    /// * `Err(ProviderError::NetworkError)` - send failure, gateway errors, unreadable body
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Read before the body consumes the response
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Extract a human-readable message from an error body.
    ///
    /// Uses the `error` or `message` field of a JSON object when present,
    /// otherwise the trimmed body itself.
    pub fn error_message(response_text: &str) -> String {
        serde_json::from_str::<serde_json::Value>(response_text)
            .ok()
            .and_then(|v| {
                ["error", "message"]
                    .iter()
                    .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(str::to_string))
            })
            .unwrap_or_else(|| truncate_for_log(response_text.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Zone {
            id: i64,
        }
        let result: Result<Zone, ProviderError> = HttpUtils::parse_json(r#"{"id":42}"#, "dynv6");
        assert!(
            matches!(&result, Ok(Zone { id: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Zone {
            id: i64,
        }
        let result: Result<Zone, ProviderError> = HttpUtils::parse_json("<html>", "dynv6");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { provider, .. }) if provider == "dynv6"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn error_message_from_error_field() {
        assert_eq!(
            HttpUtils::error_message(r#"{"error":"zone not found"}"#),
            "zone not found"
        );
    }

    #[test]
    fn error_message_from_message_field() {
        assert_eq!(
            HttpUtils::error_message(r#"{"message":"invalid data"}"#),
            "invalid data"
        );
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(HttpUtils::error_message("  Unauthorized\n"), "Unauthorized");
        assert_eq!(HttpUtils::error_message(r#"{"code":1}"#), r#"{"code":1}"#);
    }
}
