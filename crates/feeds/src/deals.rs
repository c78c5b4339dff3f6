//! Steam deal listings from the CheapShark API.

use crate::FeedError;
use dealwatch_core::Deal;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://www.cheapshark.com/api/1.0";

/// CheapShark store ID for Steam.
const STEAM_STORE_ID: &str = "1";

/// Client for the CheapShark deals listing endpoint.
pub struct DealsClient {
    client: reqwest::Client,
    base_url: String,
}

impl DealsClient {
    /// Create a client against the production endpoint.
    pub fn new() -> Result<Self, FeedError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the current page of Steam deals, sorted by deal rating.
    ///
    /// Deals are returned in the order the API lists them.
    pub async fn steam_deals(&self) -> Result<Vec<Deal>, FeedError> {
        let url = format!("{}/deals", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("storeID", STEAM_STORE_ID),
                ("limit", "100"),
                ("offset", "0"),
                ("sortBy", "dealRating"),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let deals: Vec<Deal> = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        debug!(count = deals.len(), "Fetched Steam deals");
        Ok(deals)
    }
}
