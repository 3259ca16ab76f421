use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ DNS Record Types ============

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl DnsRecordType {
    /// Uppercase wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe representation of DNS record data.
///
/// Each variant carries the fields specific to that record type.
/// Use [`record_type()`](Self::record_type) to get the [`DnsRecordType`] discriminant,
/// or [`value()`](Self::value) to get the primary value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — maps a hostname to an IPv4 address.
    A {
        /// IPv4 address (e.g., `"1.2.3.4"`).
        address: String,
    },

    /// AAAA record — maps a hostname to an IPv6 address.
    AAAA {
        /// IPv6 address (e.g., `"2001:db8::1"`).
        address: String,
    },

    /// CNAME record — alias from one name to another.
    CNAME {
        /// Target hostname.
        target: String,
    },

    /// MX record — mail exchange server.
    MX {
        /// Priority (lower = preferred).
        priority: u16,
        /// Mail server hostname.
        exchange: String,
    },

    /// TXT record — arbitrary text data.
    TXT {
        /// Text content.
        text: String,
    },

    /// NS record — authoritative name server.
    NS {
        /// Name server hostname.
        nameserver: String,
    },

    /// SRV record — service locator.
    SRV {
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// CAA record — Certificate Authority Authorization.
    CAA {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        /// CA domain or reporting URI.
        value: String,
    },
}

impl RecordData {
    /// Returns the [`DnsRecordType`] discriminant for this record data.
    pub fn record_type(&self) -> DnsRecordType {
        match self {
            Self::A { .. } => DnsRecordType::A,
            Self::AAAA { .. } => DnsRecordType::Aaaa,
            Self::CNAME { .. } => DnsRecordType::Cname,
            Self::MX { .. } => DnsRecordType::Mx,
            Self::TXT { .. } => DnsRecordType::Txt,
            Self::NS { .. } => DnsRecordType::Ns,
            Self::SRV { .. } => DnsRecordType::Srv,
            Self::CAA { .. } => DnsRecordType::Caa,
        }
    }

    /// Returns the primary value of the record (the IP address for A/AAAA,
    /// the target for CNAME/SRV, the exchange for MX).
    ///
    /// This is what dynv6 stores in a record's `data` field.
    pub fn value(&self) -> &str {
        match self {
            Self::A { address } | Self::AAAA { address } => address,
            Self::CNAME { target } | Self::SRV { target, .. } => target,
            Self::MX { exchange, .. } => exchange,
            Self::TXT { text } => text,
            Self::NS { nameserver } => nameserver,
            Self::CAA { value, .. } => value,
        }
    }
}

/// A DNS record in provider-neutral form.
///
/// `name` is relative to the zone, with `"@"` for the apex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Record name (e.g., `"www"` or `"@"` for apex).
    pub name: String,
    /// Time to live. Zero means "provider default".
    #[serde(with = "ttl_seconds")]
    pub ttl: Duration,
    /// Type-specific record data.
    pub data: RecordData,
}

impl Record {
    pub fn new(name: impl Into<String>, ttl: Duration, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }

    /// Record type, e.g. `"A"` or `"TXT"`.
    pub fn record_type(&self) -> DnsRecordType {
        self.data.record_type()
    }

    /// Record value as stored by the provider.
    pub fn value(&self) -> &str {
        self.data.value()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_type(), self.value())
    }
}

/// `Duration` <-> whole seconds.
mod ttl_seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(ttl.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

// ============ Provider Wire Types ============

/// A record in dynv6's wire format.
///
/// `id` is assigned by dynv6 and is `None` until the record has been created.
/// `data` holds the primary value; MX/SRV/CAA carry their extra fields in
/// `priority`, `weight`, `port`, `flags` and `tag`. The apex is named `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Provider-assigned record id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Zone-relative record name.
    #[serde(default)]
    pub name: String,
    /// Uppercase record type.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Primary record value.
    #[serde(default)]
    pub data: String,
    /// MX/SRV priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// SRV weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    /// SRV port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// CAA flags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u8>,
    /// CAA tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Owning zone id, as echoed by the API.
    #[serde(rename = "zoneID", default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<i64>,
}

impl ProviderRecord {
    /// Same name, type and value.
    ///
    /// The value includes the extras the type keeps outside `data`: MX
    /// priority, SRV priority/weight/port and CAA flags/tag. Extras of other
    /// types are ignored, as dynv6 may echo them back as zero.
    pub fn same_value_as(&self, other: &Self) -> bool {
        self.same_name_and_type(other) && self.data == other.data && self.same_extras_as(other)
    }

    fn same_extras_as(&self, other: &Self) -> bool {
        let priority = self.priority.unwrap_or_default() == other.priority.unwrap_or_default();
        match self.record_type.to_uppercase().as_str() {
            "MX" => priority,
            "SRV" => {
                priority
                    && self.weight.unwrap_or_default() == other.weight.unwrap_or_default()
                    && self.port.unwrap_or_default() == other.port.unwrap_or_default()
            }
            "CAA" => {
                self.flags.unwrap_or_default() == other.flags.unwrap_or_default()
                    && self.tag.as_deref().unwrap_or_default()
                        == other.tag.as_deref().unwrap_or_default()
            }
            _ => true,
        }
    }

    /// Same name and type.
    pub fn same_name_and_type(&self, other: &Self) -> bool {
        self.name == other.name && self.record_type == other.record_type
    }

    /// Copy the value (and its type-specific extras) from `other`, keeping
    /// this record's id, name, type and TTL.
    pub fn take_value_from(&mut self, other: &Self) {
        self.data.clone_from(&other.data);
        self.priority = other.priority;
        self.weight = other.weight;
        self.port = other.port;
        self.flags = other.flags;
        self.tag.clone_from(&other.tag);
    }
}

// ============ Zone Types ============

/// A dynv6 zone, resolved by name at the start of every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Provider-specific zone identifier.
    pub id: i64,
    /// Zone name (e.g., `"example.dynv6.net"`).
    pub name: String,
    /// IPv4 address of the zone apex, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4address: Option<String>,
    /// IPv6 prefix delegated to the zone, if set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6prefix: Option<String>,

    /// When the zone was created, if known.
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    /// When the zone was last updated, if known.
    #[serde(default, with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
