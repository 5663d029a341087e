//! HTTP client for the store-location API.

pub mod client;
pub mod error;
pub mod fetch;

pub use client::{StoreClient, StoreLocation};
pub use error::ClientError;
pub use fetch::{fetch_selected, CategorySelection, FetchGuard, FetchOutcome};
