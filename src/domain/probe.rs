//! Probe domain type

use crate::domain::measurement::RawStatus;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Status id of a probe that has never connected
pub const PROBE_NEVER_CONNECTED: i64 = 0;
/// Status id of a connected probe
pub const PROBE_CONNECTED: i64 = 1;
/// Status id of a disconnected probe
pub const PROBE_DISCONNECTED: i64 = 2;
/// Status id of an abandoned probe
pub const PROBE_ABANDONED: i64 = 3;

/// A measurement vantage point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Probe {
    pub id: u64,
    pub asn_v4: Option<u32>,
    pub asn_v6: Option<u32>,
    pub country_code: Option<String>,
    pub status: String,
    pub status_id: Option<i64>,
    pub description: Option<String>,
    #[serde(skip)]
    pub meta_data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RawProbe {
    id: u64,
    asn_v4: Option<u32>,
    asn_v6: Option<u32>,
    country_code: Option<String>,
    #[serde(default)]
    status: RawStatus,
    description: Option<String>,
}

impl Probe {
    /// Create a probe with only an id and status
    pub fn new(id: u64, status: impl Into<String>, status_id: i64) -> Self {
        Self {
            id,
            asn_v4: None,
            asn_v6: None,
            country_code: None,
            status: status.into(),
            status_id: Some(status_id),
            description: None,
            meta_data: serde_json::Value::Null,
        }
    }

    /// Set the IPv4 and IPv6 ASNs
    pub fn with_asns(mut self, asn_v4: Option<u32>, asn_v6: Option<u32>) -> Self {
        self.asn_v4 = asn_v4;
        self.asn_v6 = asn_v6;
        self
    }

    /// Set the country code
    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Build a probe from one entry of the API `results` array
    pub fn from_json(value: serde_json::Value) -> Result<Self, ApiError> {
        let raw: RawProbe = serde_json::from_value(value.clone())
            .map_err(|e| ApiError::Decode(format!("probe: {}", e)))?;

        Ok(Self {
            id: raw.id,
            asn_v4: raw.asn_v4,
            asn_v6: raw.asn_v6,
            country_code: raw.country_code,
            status: raw.status.name.unwrap_or_default(),
            status_id: raw.status.id,
            description: raw.description,
            meta_data: value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let probe = Probe::from_json(json!({
            "id": 6001,
            "asn_v4": 3333,
            "asn_v6": null,
            "country_code": "NL",
            "status": {"id": 1, "name": "Connected", "since": "2024-01-01T00:00:00Z"},
            "description": "Amsterdam office"
        }))
        .unwrap();

        assert_eq!(probe.id, 6001);
        assert_eq!(probe.asn_v4, Some(3333));
        assert_eq!(probe.asn_v6, None);
        assert_eq!(probe.country_code.as_deref(), Some("NL"));
        assert_eq!(probe.status_id, Some(PROBE_CONNECTED));
        assert_eq!(probe.status, "Connected");
    }

    #[test]
    fn test_from_json_rejects_bad_id() {
        let result = Probe::from_json(json!({"id": "six"}));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
