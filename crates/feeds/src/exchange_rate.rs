//! USD/INR exchange rate fetching.
//!
//! Fetches the current conversion rate from ExchangeRate-API for pricing
//! Steam deals in INR.

use crate::FeedError;
use dealwatch_core::ExchangeRate;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// ExchangeRate-API access key, embedded in the request path.
const API_KEY: &str = "e165674924e0f00b2fb916c8";

const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Response body of the `latest/USD` endpoint.
#[derive(Debug, Deserialize)]
struct LatestRates {
    conversion_rates: HashMap<String, f64>,
}

/// Client for the ExchangeRate-API conversion endpoint.
pub struct ExchangeRateClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExchangeRateClient {
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

    /// Fetch the current USD→INR conversion rate.
    pub async fn usd_to_inr(&self) -> Result<ExchangeRate, FeedError> {
        let url = format!("{}/v6/{}/latest/USD", self.base_url, API_KEY);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let body: LatestRates = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        let rate = body
            .conversion_rates
            .get("INR")
            .copied()
            .ok_or(FeedError::MissingRate("INR"))?;

        debug!(rate, "Fetched USD/INR exchange rate");
        Ok(ExchangeRate(rate))
    }
}
