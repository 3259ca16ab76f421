use async_trait::async_trait;

use crate::error::{BatchResult, ProviderError, Result};
use crate::types::{ProviderRecord, Record, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（dynv6 为 HTTP 状态码）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// 区域名称或 ID（用于 `ZoneNotFound`）
    pub zone: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: impl Into<String>) -> Self {
        Self {
            zone: Some(zone.into()),
            ..Self::default()
        }
    }

    pub fn record(zone: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            record_id: Some(record_id.into()),
            zone: Some(zone.into()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Remote zone API used by the reconciler.
///
/// Implemented by [`Dynv6Client`](crate::Dynv6Client) over HTTP; tests can
/// substitute an in-memory zone. Cancelling an operation means dropping its
/// future.
#[async_trait]
pub trait ZoneClient: Send + Sync {
    /// Identifier used in error messages and logs.
    fn provider_name(&self) -> &'static str;

    /// Resolve a zone by name. Fails with `ZoneNotFound` if it does not exist.
    async fn resolve_zone(&self, name: &str) -> Result<Zone>;

    /// All records of a zone, in the provider's listing order.
    async fn list_records(&self, zone_id: i64) -> Result<Vec<ProviderRecord>>;

    /// Create a record and return it with its assigned id.
    async fn create_record(&self, zone_id: i64, record: &ProviderRecord) -> Result<ProviderRecord>;

    /// Update the record identified by `record.id`.
    async fn update_record(&self, zone_id: i64, record: &ProviderRecord) -> Result<ProviderRecord>;

    /// Delete a record by id.
    async fn delete_record(&self, zone_id: i64, record_id: i64) -> Result<()>;
}

/// DNS record management for one provider account.
///
/// Every operation resolves `zone` by name and works on a fresh snapshot of
/// its records. Batch operations run sequentially and stop at the first
/// failure; the [`BatchError`](crate::BatchError) carries what was applied
/// before it.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 列出区域内全部记录
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// 创建记录，返回已创建的记录
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult;

    /// 按 (name, type) 更新已有记录，不存在则创建
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult;

    /// 按 (name, type, value) 删除记录，返回已删除的记录
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}
