use kodigo_common::SearchResultItem;
use reqwest::{Client, Error as ReqwestError};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::models::SearchEnvelope;
use super::normalize::normalize_records;

/// Proxied search path, relative to the site origin
pub const SEARCH_PATH: &str = "/api/itunes/search";
/// Entity types requested from the catalog
pub const SEARCH_ENTITIES: &str = "song,musicVideo";
/// Attribute hint for artist-name relevance
pub const SEARCH_ATTRIBUTE: &str = "artistTerm";
/// Result-count ceiling per search
pub const RESULT_LIMIT: u32 = 12;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    /// Transport failures and non-success statuses
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Request(_) | CatalogError::Status(_))
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the site at `base_url` (scheme + host, no path)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    /// Search the catalog for `term`.
    ///
    /// Callers are expected to have rejected blank terms already. An empty or
    /// missing `results` array is a successful, empty search.
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResultItem>, CatalogError> {
        let url = self.search_url();
        let limit = RESULT_LIMIT.to_string();
        let query_params: [(&str, &str); 4] = [
            ("term", term),
            ("entity", SEARCH_ENTITIES),
            ("limit", &limit),
            ("attribute", SEARCH_ATTRIBUTE),
        ];

        info!("Catalog search: GET {} term={:?}", url, term);
        let response = self.client.get(&url).query(&query_params).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            warn!("Catalog search failed with status {}", status);
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: SearchEnvelope = serde_json::from_str(&body)?;
        if let Some(reported) = envelope.result_count {
            debug!("Catalog reported resultCount={}", reported);
        }

        let records = envelope.results.unwrap_or_default();
        let raw_count = records.len();
        let items = normalize_records(records);
        info!(
            "Catalog search returned {} record(s), {} playable",
            raw_count,
            items.len()
        );

        Ok(items)
    }
}
