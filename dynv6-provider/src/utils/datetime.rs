//! Serde helpers for optional timestamps.
//!
//! dynv6 reports `createdAt`/`updatedAt` as RFC3339 strings; some endpoints
//! have been seen returning Unix seconds instead, so both are accepted.
//! Serialization always writes RFC3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Seconds(i64),
    }

    match Option::<RawTimestamp>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTimestamp::Text(s)) if s.is_empty() => Ok(None),
        Some(RawTimestamp::Text(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp '{s}': {e}"))),
        Some(RawTimestamp::Seconds(secs)) => DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("timestamp out of range: {secs}"))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "super")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let s: Stamped = serde_json::from_str(r#"{"at":"2024-03-01T12:00:00+02:00"}"#).unwrap();
        assert_eq!(s.at, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).single());
    }

    #[test]
    fn parses_unix_seconds() {
        let s: Stamped = serde_json::from_str(r#"{"at":1700000000}"#).unwrap();
        assert_eq!(s.at.map(|dt| dt.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn empty_and_null_are_none() {
        let empty: Stamped = serde_json::from_str(r#"{"at":""}"#).unwrap();
        let null: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        let missing: Stamped = serde_json::from_str("{}").unwrap();
        assert!(empty.at.is_none() && null.at.is_none() && missing.at.is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn writes_rfc3339() {
        let s = Stamped {
            at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single(),
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"at":"2024-01-02T03:04:05+00:00"}"#);
    }
}
