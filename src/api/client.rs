//! Blocking HTTP client for the Atlas REST API (v2)

use crate::api::traits::{AtlasApi, RecordPage};
use crate::config::ApiConfig;
use crate::domain::{Filters, Measurement, Probe};
use crate::error::ApiError;

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::time::Duration;

/// Largest page size the API accepts
pub const MAX_PAGE_SIZE: usize = 500;

/// One page of a paginated API listing
#[derive(Debug, Deserialize)]
struct ApiPage {
    count: u64,
    next: Option<String>,
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

/// HTTP implementation of [`AtlasApi`]
pub struct AtlasClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AtlasClient {
    /// Build a client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(format!("atlasctl/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.key.clone(),
        })
    }

    fn get_page(&self, url: &str, query: &[(String, String)]) -> Result<ApiPage, ApiError> {
        log::debug!("GET {} {:?}", url, query);

        let mut request = self.http.get(url).query(query);
        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Key {}", key));
        }

        let response = request.send().map_err(|e| ApiError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ApiError::Unauthorized(status.as_u16()));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<ApiPage>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn collect<T>(
        &self,
        endpoint: &str,
        filters: &Filters,
        limit: usize,
        parse: fn(serde_json::Value) -> Result<T, ApiError>,
    ) -> Result<RecordPage<T>, ApiError> {
        let url = endpoint_url(&self.base_url, endpoint);
        let page = collect_pages(&url, filters, limit, parse, |url, query| {
            self.get_page(url, query)
        })?;

        log::debug!("fetched {} of {} from {}", page.len(), page.total_count, endpoint);
        Ok(page)
    }
}

/// Walk the `next` links of a listing until `limit` records are collected
///
/// `fetch` retrieves one page given its URL and query; the server's `count`
/// of the first page becomes the total.
fn collect_pages<T, F>(
    url: &str,
    filters: &Filters,
    limit: usize,
    parse: fn(serde_json::Value) -> Result<T, ApiError>,
    mut fetch: F,
) -> Result<RecordPage<T>, ApiError>
where
    F: FnMut(&str, &[(String, String)]) -> Result<ApiPage, ApiError>,
{
    let mut query = filters.to_query_pairs();
    query.push(("page_size".to_string(), page_size(limit).to_string()));

    let mut page = fetch(url, &query)?;
    let total_count = page.count;
    let mut records = Vec::with_capacity(limit.min(total_count as usize));

    loop {
        for value in page.results.drain(..) {
            if records.len() >= limit {
                break;
            }
            records.push(parse(value)?);
        }

        match page.next.take() {
            // `next` already carries the query string
            Some(next) if records.len() < limit => page = fetch(&next, &[])?,
            _ => break,
        }
    }

    Ok(RecordPage::new(records, total_count))
}

impl AtlasApi for AtlasClient {
    fn measurements(
        &self,
        filters: &Filters,
        limit: usize,
    ) -> Result<RecordPage<Measurement>, ApiError> {
        self.collect("measurements", filters, limit, Measurement::from_json)
    }

    fn probes(&self, filters: &Filters, limit: usize) -> Result<RecordPage<Probe>, ApiError> {
        self.collect("probes", filters, limit, Probe::from_json)
    }
}

/// Page size to request for a given record limit
pub fn page_size(limit: usize) -> usize {
    limit.clamp(1, MAX_PAGE_SIZE)
}

/// Listing URL for an endpoint under the API root
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), endpoint)
}
