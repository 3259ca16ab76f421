//! dynv6 HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Dynv6Client;

impl Dynv6Client {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// 非 2xx 状态映射为统一错误
    fn check_status(&self, status: u16, response_text: &str, ctx: ErrorContext) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        let message = HttpUtils::error_message(response_text);
        let err = self.map_error(RawApiError::with_code(status.to_string(), message), ctx);
        if err.is_expected() {
            log::warn!("API error: {err}");
        } else {
            log::error!("API error: {err}");
        }
        Err(err)
    }

    fn serialize_body<B: Serialize>(&self, body: &B) -> Result<String> {
        let payload = serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {payload}");
        Ok(payload)
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, ctx: ErrorContext) -> Result<T> {
        let url = self.url(path);
        let request = self.authorized(self.client.get(&url));

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;
        self.check_status(status, &response_text, ctx)?;

        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let payload = self.serialize_body(body)?;
        let request = self
            .authorized(self.client.post(&url))
            .header("Content-Type", "application/json")
            .body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;
        self.check_status(status, &response_text, ctx)?;

        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 执行 PATCH 请求
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let payload = self.serialize_body(body)?;
        let request = self
            .authorized(self.client.patch(&url))
            .header("Content-Type", "application/json")
            .body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "PATCH", &url).await?;
        self.check_status(status, &response_text, ctx)?;

        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 执行 DELETE 请求（响应体忽略）
    pub(crate) async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        let url = self.url(path);
        let request = self.authorized(self.client.delete(&url));

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "DELETE", &url).await?;
        self.check_status(status, &response_text, ctx)
    }
}
