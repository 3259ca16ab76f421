//! dynv6 error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{Dynv6Client, PROVIDER_NAME};

/// dynv6 reports failures through the HTTP status; the code carried in
/// [`RawApiError`] is that status.
impl ProviderErrorMapper for Dynv6Client {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("401") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("403") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 404 on a record path means the record, anywhere else the zone
            Some("404") => match context {
                ErrorContext {
                    record_id: Some(record),
                    ..
                } => ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record,
                    raw_message: Some(raw.message),
                },
                ErrorContext {
                    zone: Some(zone), ..
                } => ProviderError::ZoneNotFound {
                    provider: self.provider_name().to_string(),
                    zone,
                    raw_message: Some(raw.message),
                },
                _ => self.unknown_error(raw),
            },

            Some("400" | "422") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "record".to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
