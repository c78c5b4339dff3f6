//! Deal records returned by the CheapShark deals API.

use serde::{Deserialize, Deserializer};

/// One discounted game from the deals listing.
///
/// Prices are in USD; CheapShark serializes them as JSON strings ("9.99").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deal {
    /// Game title.
    pub title: String,
    /// Discounted price in USD.
    #[serde(rename = "salePrice", deserialize_with = "price_field")]
    pub sale_price: f64,
    /// Undiscounted price in USD.
    #[serde(rename = "normalPrice", deserialize_with = "price_field")]
    pub normal_price: f64,
    /// Opaque deal identifier.
    #[serde(rename = "dealID")]
    pub deal_id: String,
}

impl Deal {
    /// Storefront link for this deal.
    pub fn store_url(&self) -> String {
        format!("https://store.steampowered.com/app/{}", self.deal_id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Text(String),
    Number(f64),
}

/// Accept prices as either a JSON string or a bare number.
fn price_field<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        PriceRepr::Number(n) => Ok(n),
    }
}
