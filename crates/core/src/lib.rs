//! Core data types for the deal notifier.

pub mod deal;
pub mod price;

pub use deal::*;
pub use price::*;
