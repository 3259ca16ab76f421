//! Utility modules.

/// Timestamp serde helpers for zone metadata.
pub mod datetime;

/// Log sanitization utilities to keep tokens and large payloads out of logs.
pub mod log_sanitizer;
