//! Measurement domain type
//!
//! A measurement record as returned by the Atlas API.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status id of a measurement that has been specified but not scheduled
pub const STATUS_SPECIFIED: i64 = 0;
/// Status id of a scheduled measurement
pub const STATUS_SCHEDULED: i64 = 1;
/// Status id of a running measurement
pub const STATUS_ONGOING: i64 = 2;
/// Status id of a measurement stopped by its owner
pub const STATUS_STOPPED: i64 = 4;
/// Status id of a measurement stopped by the platform
pub const STATUS_FORCED_STOP: i64 = 5;
/// Status id of a measurement that found no suitable probes
pub const STATUS_NO_SUITABLE_PROBES: i64 = 6;
/// Status id of a failed measurement
pub const STATUS_FAILED: i64 = 7;

/// A remote measurement record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Measurement id
    pub id: u64,
    /// Measurement type (ping, traceroute, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Human readable status name
    pub status: String,
    /// Numeric status id, if the API reported one
    pub status_id: Option<i64>,
    /// Raw record as returned by the API
    #[serde(skip)]
    pub meta_data: serde_json::Value,
    /// Target host name or address
    pub destination_name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMeasurement {
    id: u64,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    status: RawStatus,
    description: Option<String>,
    target: Option<String>,
}

/// `{"id": 2, "name": "Ongoing"}` as used by both measurements and probes
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawStatus {
    pub(crate) id: Option<i64>,
    pub(crate) name: Option<String>,
}

impl Measurement {
    /// Create a new measurement with no description or target
    pub fn new(id: u64, kind: impl Into<String>, status: impl Into<String>, status_id: i64) -> Self {
        Self {
            id,
            kind: kind.into(),
            status: status.into(),
            status_id: Some(status_id),
            meta_data: serde_json::Value::Null,
            destination_name: None,
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the destination name
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination_name = Some(destination.into());
        self
    }

    /// Build a measurement from one entry of the API `results` array
    pub fn from_json(value: serde_json::Value) -> Result<Self, ApiError> {
        let raw: RawMeasurement = serde_json::from_value(value.clone())
            .map_err(|e| ApiError::Decode(format!("measurement: {}", e)))?;

        Ok(Self {
            id: raw.id,
            kind: raw.kind,
            status: raw.status.name.unwrap_or_default(),
            status_id: raw.status.id,
            meta_data: value,
            destination_name: raw.target,
            description: raw.description,
        })
    }

    /// Web page of this measurement under the given site root
    pub fn url(&self, web_url: &str) -> String {
        format!("{}/measurements/{}/", web_url.trim_end_matches('/'), self.id)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.kind, self.status)
    }
}
