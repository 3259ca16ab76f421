//! Translation between [`Record`] and dynv6's [`ProviderRecord`].

use std::time::Duration;

use crate::error::{ProviderError, Result};
use crate::providers::common::{from_wire_name, parse_record_type, to_wire_name};
use crate::types::{DnsRecordType, ProviderRecord, Record, RecordData};

/// Build the wire form of a generic record. The result has no id.
///
/// Fails with `UnsupportedRecordType` for kinds dynv6 cannot store and with
/// `InvalidParameter` when the record's value is empty.
pub(crate) fn to_provider_record(record: &Record, provider: &str) -> Result<ProviderRecord> {
    if record.value().trim().is_empty() {
        return Err(ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param: "data".to_string(),
            detail: format!("{} record '{}' has an empty value", record.record_type(), record.name),
        });
    }

    let mut wire = ProviderRecord {
        name: to_wire_name(&record.name),
        record_type: record.record_type().as_str().to_string(),
        data: record.value().to_string(),
        ttl: ttl_to_wire(record.ttl),
        ..ProviderRecord::default()
    };

    match &record.data {
        RecordData::A { .. }
        | RecordData::AAAA { .. }
        | RecordData::CNAME { .. }
        | RecordData::TXT { .. } => {}
        RecordData::MX { priority, .. } => wire.priority = Some(*priority),
        RecordData::SRV {
            priority,
            weight,
            port,
            ..
        } => {
            wire.priority = Some(*priority);
            wire.weight = Some(*weight);
            wire.port = Some(*port);
        }
        RecordData::CAA { flags, tag, .. } => {
            wire.flags = Some(*flags);
            wire.tag = Some(tag.clone());
        }
        // dynv6 manages a zone's name servers itself
        RecordData::NS { .. } => {
            return Err(ProviderError::UnsupportedRecordType {
                provider: provider.to_string(),
                record_type: DnsRecordType::Ns.to_string(),
            });
        }
    }

    Ok(wire)
}

/// Build the generic form of a record read from dynv6.
///
/// Fails with `UnsupportedRecordType` for wire types outside [`RecordData`].
pub(crate) fn to_generic_record(wire: &ProviderRecord, provider: &str) -> Result<Record> {
    let value = wire.data.clone();
    let data = match parse_record_type(&wire.record_type, provider)? {
        DnsRecordType::A => RecordData::A { address: value },
        DnsRecordType::Aaaa => RecordData::AAAA { address: value },
        DnsRecordType::Cname => RecordData::CNAME { target: value },
        DnsRecordType::Txt => RecordData::TXT { text: value },
        DnsRecordType::Ns => RecordData::NS { nameserver: value },
        DnsRecordType::Mx => RecordData::MX {
            priority: wire.priority.unwrap_or_default(),
            exchange: value,
        },
        DnsRecordType::Srv => RecordData::SRV {
            priority: wire.priority.unwrap_or_default(),
            weight: wire.weight.unwrap_or_default(),
            port: wire.port.unwrap_or_default(),
            target: value,
        },
        DnsRecordType::Caa => RecordData::CAA {
            flags: wire.flags.unwrap_or_default(),
            tag: wire.tag.clone().unwrap_or_default(),
            value,
        },
    };

    Ok(Record {
        name: from_wire_name(&wire.name),
        ttl: Duration::from_secs(u64::from(wire.ttl.unwrap_or_default())),
        data,
    })
}

/// Whole seconds; zero leaves the TTL to the provider.
fn ttl_to_wire(ttl: Duration) -> Option<u32> {
    match ttl.as_secs() {
        0 => None,
        secs => Some(u32::try_from(secs).unwrap_or(u32::MAX)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, ttl: u64, data: RecordData) -> Record {
        Record::new(name, Duration::from_secs(ttl), data)
    }

    #[test]
    fn a_record_to_wire() {
        let wire = to_provider_record(
            &record(
                "www",
                300,
                RecordData::A {
                    address: "1.2.3.4".to_string(),
                },
            ),
            "dynv6",
        )
        .unwrap();

        assert_eq!(wire.id, None);
        assert_eq!(wire.name, "www");
        assert_eq!(wire.record_type, "A");
        assert_eq!(wire.data, "1.2.3.4");
        assert_eq!(wire.ttl, Some(300));
        assert_eq!(wire.priority, None);
    }

    #[test]
    fn apex_and_zero_ttl_to_wire() {
        let wire = to_provider_record(
            &record(
                "@",
                0,
                RecordData::TXT {
                    text: "v=spf1 -all".to_string(),
                },
            ),
            "dynv6",
        )
        .unwrap();

        assert_eq!(wire.name, "");
        assert_eq!(wire.ttl, None);
    }

    #[test]
    fn srv_and_caa_extras_to_wire() {
        let srv = to_provider_record(
            &record(
                "_sip._tcp",
                60,
                RecordData::SRV {
                    priority: 10,
                    weight: 5,
                    port: 5060,
                    target: "sip.example.com".to_string(),
                },
            ),
            "dynv6",
        )
        .unwrap();
        assert_eq!(
            (srv.priority, srv.weight, srv.port),
            (Some(10), Some(5), Some(5060))
        );
        assert_eq!(srv.data, "sip.example.com");

        let caa = to_provider_record(
            &record(
                "@",
                60,
                RecordData::CAA {
                    flags: 128,
                    tag: "issue".to_string(),
                    value: "letsencrypt.org".to_string(),
                },
            ),
            "dynv6",
        )
        .unwrap();
        assert_eq!(caa.flags, Some(128));
        assert_eq!(caa.tag.as_deref(), Some("issue"));
    }

    #[test]
    fn ns_is_unsupported() {
        let err = to_provider_record(
            &record(
                "sub",
                60,
                RecordData::NS {
                    nameserver: "ns1.example.com".to_string(),
                },
            ),
            "dynv6",
        );
        assert!(matches!(
            err,
            Err(ProviderError::UnsupportedRecordType { record_type, .. }) if record_type == "NS"
        ));
    }

    #[test]
    fn empty_value_is_rejected() {
        let err = to_provider_record(
            &record(
                "www",
                60,
                RecordData::CNAME {
                    target: "  ".to_string(),
                },
            ),
            "dynv6",
        );
        assert!(matches!(
            err,
            Err(ProviderError::InvalidParameter { param, .. }) if param == "data"
        ));
    }

    #[test]
    fn huge_ttl_saturates() {
        assert_eq!(ttl_to_wire(Duration::from_secs(u64::MAX)), Some(u32::MAX));
    }

    #[test]
    fn mx_from_wire() {
        let wire = ProviderRecord {
            id: Some(3),
            name: String::new(),
            record_type: "MX".to_string(),
            data: "mail.example.com".to_string(),
            priority: Some(10),
            ..ProviderRecord::default()
        };
        let rec = to_generic_record(&wire, "dynv6").unwrap();

        assert_eq!(rec.name, "@");
        assert_eq!(rec.ttl, Duration::ZERO);
        assert_eq!(
            rec.data,
            RecordData::MX {
                priority: 10,
                exchange: "mail.example.com".to_string(),
            }
        );
    }

    #[test]
    fn unknown_wire_type_is_unsupported() {
        let wire = ProviderRecord {
            name: "old".to_string(),
            record_type: "SPF".to_string(),
            data: "v=spf1 -all".to_string(),
            ..ProviderRecord::default()
        };
        assert!(matches!(
            to_generic_record(&wire, "dynv6"),
            Err(ProviderError::UnsupportedRecordType { .. })
        ));
    }

    #[test]
    fn translation_preserves_generic_fields() {
        let original = record(
            "_acme-challenge",
            120,
            RecordData::TXT {
                text: "token-value".to_string(),
            },
        );
        let mut wire = to_provider_record(&original, "dynv6").unwrap();
        wire.id = Some(99);

        let back = to_generic_record(&wire, "dynv6").unwrap();
        assert_eq!(back, original);
    }
}
