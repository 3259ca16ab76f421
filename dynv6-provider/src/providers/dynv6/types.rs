//! dynv6 API 请求体

use serde::Serialize;

use crate::types::ProviderRecord;

/// Body of `POST`/`PATCH /zones/{zone}/records`.
///
/// The record id travels in the path; the zone id is implied by it.
#[derive(Debug, Serialize)]
pub struct RecordBody<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl<'a> From<&'a ProviderRecord> for RecordBody<'a> {
    fn from(record: &'a ProviderRecord) -> Self {
        Self {
            name: &record.name,
            record_type: &record.record_type,
            data: &record.data,
            priority: record.priority,
            weight: record.weight,
            port: record.port,
            flags: record.flags,
            tag: record.tag.as_deref(),
            ttl: record.ttl,
        }
    }
}
