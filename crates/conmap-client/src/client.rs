//! Thin typed wrapper over `GET /api/{category}/all`.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use conmap_core::Category;

use crate::error::ClientError;

/// One store location as the API returns it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StoreLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Client for the store-location API.
///
/// Holds the HTTP client, bearer token, and base URL. Point `base_url` at a
/// mock server in tests.
pub struct StoreClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl StoreClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, token: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("conmap/0.1 (store-density)")
            .build()?;

        // Normalise: exactly one trailing slash so join() appends to the
        // root path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
        })
    }

    /// Fetches every store location for one category.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of
    ///   `{latitude, longitude}` objects.
    pub async fn fetch_category(
        &self,
        category: Category,
    ) -> Result<Vec<StoreLocation>, ClientError> {
        let url = self
            .base_url
            .join(&format!("api/{}/all", category.endpoint_path()))
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let locations: Vec<StoreLocation> =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: format!("GET {url}"),
                source: e,
            })?;

        tracing::debug!(%category, count = locations.len(), "fetched store locations");
        Ok(locations)
    }
}
