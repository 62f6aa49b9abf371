//! HTTP client for the BEAM listing API.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SyncError;
use crate::payload::BeamListing;

/// HTTP request timeout for a single BEAM call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Successful create/update responses carry the external listing id.
#[derive(Debug, Deserialize)]
struct ListingResponse {
    listing_id: Option<String>,
}

/// Thin client over BEAM's listing endpoints.
pub struct BeamClient {
    base_url: String,
    client: reqwest::Client,
}

impl BeamClient {
    /// Create a client for the BEAM API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Create a new listing. Returns the external listing id.
    pub async fn create_listing(&self, listing: &BeamListing) -> Result<String, SyncError> {
        let url = format!("{}/listings", self.base_url.trim_end_matches('/'));
        let response = self.client.post(&url).json(listing).send().await?;
        Self::extract_listing_id(response).await
    }

    /// Replace an existing listing. BEAM answers with the same listing id.
    pub async fn update_listing(
        &self,
        listing_id: &str,
        listing: &BeamListing,
    ) -> Result<String, SyncError> {
        let url = format!(
            "{}/listings/{listing_id}",
            self.base_url.trim_end_matches('/')
        );
        let response = self.client.put(&url).json(listing).send().await?;
        Self::extract_listing_id(response).await
    }

    async fn extract_listing_id(response: reqwest::Response) -> Result<String, SyncError> {
        if !response.status().is_success() {
            return Err(SyncError::HttpStatus(response.status().as_u16()));
        }
        let body: ListingResponse = response.json().await?;
        body.listing_id.ok_or(SyncError::MissingListingId)
    }
}
