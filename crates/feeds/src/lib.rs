//! HTTP clients for the upstream deal and currency APIs.
//!
//! This crate provides:
//! - `ExchangeRateClient` - USD/INR conversion rate from ExchangeRate-API
//! - `DealsClient` - Steam deal listings from the CheapShark API

pub mod deals;
pub mod error;
pub mod exchange_rate;

pub use deals::DealsClient;
pub use error::FeedError;
pub use exchange_rate::ExchangeRateClient;
