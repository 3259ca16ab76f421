//! # dynv6-provider
//!
//! Manage DNS records of a [dynv6](https://dynv6.com/) zone through a
//! provider-neutral record model.
//!
//! The [`DnsProvider`] trait exposes four operations, each taking a zone name:
//!
//! | Operation | Behavior |
//! |-----------|----------|
//! | [`list_records`](DnsProvider::list_records) | All records of the zone |
//! | [`append_records`](DnsProvider::append_records) | Create every record |
//! | [`set_records`](DnsProvider::set_records) | Update the first record with the same name and type, or create one |
//! | [`delete_records`](DnsProvider::delete_records) | Delete the first record with the same name, type and value |
//!
//! The remote side sits behind the [`ZoneClient`] trait. [`Dynv6Client`] talks
//! to the dynv6 REST API; [`RecordReconciler`] works with any implementation.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use dynv6_provider::{create_provider, Dynv6Config, Record, RecordData};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(&Dynv6Config::from_env()?)?;
//!
//!     let wanted = [Record::new(
//!         "www",
//!         Duration::from_secs(300),
//!         RecordData::A { address: "192.0.2.1".to_string() },
//!     )];
//!     let applied = provider.set_records("example.dynv6.net", &wanted).await?;
//!
//!     for record in provider.list_records("example.dynv6.net").await? {
//!         println!("{record}");
//!     }
//!     # let _ = applied;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Single-shot operations return [`Result<T, ProviderError>`](ProviderError).
//! Batch operations stop at the first failure and return a [`BatchError`]
//! holding the records already applied plus the failure:
//!
//! ```rust,no_run
//! # use dynv6_provider::*;
//! # async fn example(provider: std::sync::Arc<dyn DnsProvider>, records: Vec<Record>) {
//! match provider.delete_records("example.dynv6.net", &records).await {
//!     Ok(deleted) => println!("deleted {}", deleted.len()),
//!     Err(BatchError { processed, error }) => {
//!         eprintln!("deleted {} before failing: {error}", processed.len());
//!     }
//! }
//! # }
//! ```
//!
//! Nothing is retried.

mod config;
mod convert;
mod error;
mod factory;
mod http_client;
mod providers;
mod reconciler;
mod traits;
mod types;
mod utils;

// Re-export configuration
pub use config::{API_BASE_ENV, CredentialValidationError, Dynv6Config, TOKEN_ENV};

// Re-export error types
pub use error::{BatchError, BatchResult, ProviderError, Result};

// Re-export factory functions
pub use factory::{Dynv6Provider, create_provider};

// Re-export public traits only (error mapping stays internal)
pub use traits::{DnsProvider, ZoneClient};

// Re-export types
pub use types::{DnsRecordType, ProviderRecord, Record, RecordData, Zone};

pub use reconciler::RecordReconciler;

// Re-export utils module
pub use utils::datetime;

// Re-export the concrete client
pub use providers::{DYNV6_API_BASE, Dynv6Client, Dynv6ClientBuilder};
