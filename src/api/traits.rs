//! Trait definitions for Atlas API access
//!
//! These traits abstract over the HTTP client to enable testing with mocks.

use crate::domain::{Filters, Measurement, Probe};
use crate::error::ApiError;
use serde::Serialize;

/// Records returned by a search, in API order, plus the server-side total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPage<T> {
    /// Number of records matching the filters on the server
    pub total_count: u64,
    /// Records actually fetched (at most the requested limit)
    pub records: Vec<T>,
}

impl<T> RecordPage<T> {
    /// Create a page from fetched records and the reported total
    pub fn new(records: Vec<T>, total_count: u64) -> Self {
        Self {
            total_count,
            records,
        }
    }

    /// Number of records fetched
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Trait for searching the Atlas platform
///
/// Implemented by the HTTP client in production and by an in-memory mock
/// in tests.
pub trait AtlasApi {
    /// Fetch up to `limit` measurements matching `filters`
    fn measurements(
        &self,
        filters: &Filters,
        limit: usize,
    ) -> Result<RecordPage<Measurement>, ApiError>;

    /// Fetch up to `limit` probes matching `filters`
    fn probes(&self, filters: &Filters, limit: usize) -> Result<RecordPage<Probe>, ApiError>;
}
