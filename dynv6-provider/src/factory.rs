//! Provider factory functions.

use std::sync::Arc;

use crate::config::{CredentialValidationError, Dynv6Config};
use crate::error::{ProviderError, Result};
use crate::providers::Dynv6Client;
use crate::reconciler::RecordReconciler;
use crate::traits::DnsProvider;

/// Reconciler over the HTTP dynv6 client.
pub type Dynv6Provider = RecordReconciler<Dynv6Client>;

/// Creates a [`DnsProvider`] for dynv6 from the given configuration.
///
/// The configuration is validated first. The returned provider is wrapped in
/// `Arc<dyn DnsProvider>` for easy sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use dynv6_provider::{create_provider, Dynv6Config};
///
/// let provider = create_provider(&Dynv6Config::new("your-token")).unwrap();
/// ```
pub fn create_provider(config: &Dynv6Config) -> Result<Arc<dyn DnsProvider>> {
    config.validate().map_err(invalid_config)?;
    let client = Dynv6Client::from_config(config)?;
    log::debug!("Created dynv6 provider for {}", config.base_url);
    Ok(Arc::new(Dynv6Provider::new(client)))
}

fn invalid_config(e: CredentialValidationError) -> ProviderError {
    let param = match &e {
        CredentialValidationError::MissingField { field, .. }
        | CredentialValidationError::EmptyField { field, .. }
        | CredentialValidationError::InvalidFormat { field, .. } => field.clone(),
    };
    ProviderError::InvalidParameter {
        provider: "dynv6".to_string(),
        param,
        detail: e.to_string(),
    }
}
