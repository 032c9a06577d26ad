//! Mock implementations for testing
//!
//! Provides an in-memory Atlas API for unit testing without network access.

use crate::api::{AtlasApi, RecordPage};
use crate::domain::{Filters, Measurement, Probe};
use crate::error::ApiError;

use std::sync::Mutex;

/// Mock API returning canned records
#[derive(Debug, Default)]
pub struct MockApi {
    measurements: Vec<Measurement>,
    probes: Vec<Probe>,
    total_count: Option<u64>,
    fail_with_status: Option<u16>,
    calls: Mutex<Vec<(Filters, usize)>>,
}

impl MockApi {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the measurements returned
    pub fn with_measurements(mut self, measurements: Vec<Measurement>) -> Self {
        self.measurements = measurements;
        self
    }

    /// Builder: set the probes returned
    pub fn with_probes(mut self, probes: Vec<Probe>) -> Self {
        self.probes = probes;
        self
    }

    /// Builder: report a server-side total other than the record count
    pub fn with_total_count(mut self, total: u64) -> Self {
        self.total_count = Some(total);
        self
    }

    /// Builder: answer every request with this HTTP status
    pub fn failing(mut self, status: u16) -> Self {
        self.fail_with_status = Some(status);
        self
    }

    /// Filters and limits of every request made so far
    pub fn calls(&self) -> Vec<(Filters, usize)> {
        self.calls.lock().unwrap().clone()
    }

    fn page<T: Clone>(
        &self,
        records: &[T],
        filters: &Filters,
        limit: usize,
    ) -> Result<RecordPage<T>, ApiError> {
        self.calls.lock().unwrap().push((filters.clone(), limit));

        if let Some(status) = self.fail_with_status {
            return Err(ApiError::Status {
                status,
                url: "mock://atlas".to_string(),
            });
        }

        let total = self.total_count.unwrap_or(records.len() as u64);
        let fetched = records.iter().take(limit).cloned().collect();
        Ok(RecordPage::new(fetched, total))
    }
}

impl AtlasApi for MockApi {
    fn measurements(
        &self,
        filters: &Filters,
        limit: usize,
    ) -> Result<RecordPage<Measurement>, ApiError> {
        self.page(&self.measurements, filters, limit)
    }

    fn probes(&self, filters: &Filters, limit: usize) -> Result<RecordPage<Probe>, ApiError> {
        self.page(&self.probes, filters, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_respects_limit() {
        let api = MockApi::new().with_measurements(vec![
            Measurement::new(1, "ping", "Ongoing", 2),
            Measurement::new(2, "dns", "Stopped", 4),
        ]);

        let page = api.measurements(&Filters::new(), 1).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.total_count, 2);
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_mock_failure() {
        let api = MockApi::new().failing(503);
        assert!(api.probes(&Filters::new(), 10).is_err());
    }
}
