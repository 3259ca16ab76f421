//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod dynv6;

pub use dynv6::{DYNV6_API_BASE, Dynv6Client, Dynv6ClientBuilder};
