//! dynv6 ZoneClient trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_zone_name;
use crate::traits::{ErrorContext, ZoneClient};
use crate::types::{ProviderRecord, Zone};

use super::{Dynv6Client, PROVIDER_NAME, RecordBody};

impl Dynv6Client {
    /// 列出账号下全部区域
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.get("/zones", ErrorContext::default()).await
    }

    /// 验证 token 是否有效
    ///
    /// Returns `Ok(false)` when the API rejects the token; other failures
    /// (network, unexpected status) are returned as errors.
    pub async fn validate_credentials(&self) -> Result<bool> {
        match self.list_zones().await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. } | ProviderError::PermissionDenied { .. }) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl ZoneClient for Dynv6Client {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn resolve_zone(&self, name: &str) -> Result<Zone> {
        let name = normalize_zone_name(name);
        if name.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: PROVIDER_NAME.to_string(),
                param: "zone".to_string(),
                detail: "zone name must not be empty".to_string(),
            });
        }

        let path = format!("/zones/by-name/{}", urlencoding::encode(&name));
        self.get(&path, ErrorContext::zone(name)).await
    }

    async fn list_records(&self, zone_id: i64) -> Result<Vec<ProviderRecord>> {
        self.get(
            &format!("/zones/{zone_id}/records"),
            ErrorContext::zone(zone_id.to_string()),
        )
        .await
    }

    async fn create_record(&self, zone_id: i64, record: &ProviderRecord) -> Result<ProviderRecord> {
        let created: ProviderRecord = self
            .post(
                &format!("/zones/{zone_id}/records"),
                &RecordBody::from(record),
                ErrorContext::zone(zone_id.to_string()),
            )
            .await?;

        log::info!(
            "[{PROVIDER_NAME}] Created record {:?} {} {} in zone {zone_id}",
            created.id,
            created.name,
            created.record_type
        );
        Ok(created)
    }

    async fn update_record(&self, zone_id: i64, record: &ProviderRecord) -> Result<ProviderRecord> {
        let Some(record_id) = record.id else {
            return Err(ProviderError::InvalidParameter {
                provider: PROVIDER_NAME.to_string(),
                param: "id".to_string(),
                detail: format!(
                    "record '{} {}' has no id and cannot be updated",
                    record.name, record.record_type
                ),
            });
        };

        let updated: ProviderRecord = self
            .patch(
                &format!("/zones/{zone_id}/records/{record_id}"),
                &RecordBody::from(record),
                ErrorContext::record(zone_id.to_string(), record_id.to_string()),
            )
            .await?;

        log::info!("[{PROVIDER_NAME}] Updated record {record_id} in zone {zone_id}");
        Ok(updated)
    }

    async fn delete_record(&self, zone_id: i64, record_id: i64) -> Result<()> {
        self.delete(
            &format!("/zones/{zone_id}/records/{record_id}"),
            ErrorContext::record(zone_id.to_string(), record_id.to_string()),
        )
        .await?;

        log::info!("[{PROVIDER_NAME}] Deleted record {record_id} from zone {zone_id}");
        Ok(())
    }
}
