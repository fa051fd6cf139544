//! Shared HTTP plumbing for the Google Maps web services.
//!
//! Wraps `reqwest` with a bounded timeout, base-URL handling (so tests can
//! point at a wiremock server), percent-encoded query building, and typed
//! JSON decoding. Request URLs carry the API key, so they are stripped from
//! errors and never logged.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use stofinder_core::MapsConfig;

use crate::error::MapsError;

/// Upper bound on connection establishment, independent of the total timeout.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// HTTP client shared by [`GeoResolver`](crate::GeoResolver) and
/// [`ShopFinder`](crate::ShopFinder). Cloning is cheap: the connection pool is
/// reference-counted.
#[derive(Debug, Clone)]
pub struct MapsClient {
    client: Client,
    base_url: Url,
}

impl MapsClient {
    /// Builds a client from the timeout, `User-Agent`, and base URL in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`MapsError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(config: &MapsConfig) -> Result<Self, MapsError> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(CONNECT_TIMEOUT_SECS)))
            .user_agent(config.user_agent.as_str())
            .build()?;

        // Exactly one trailing slash, so `join` appends the API path instead
        // of replacing the last segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| MapsError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Builds the full request URL for `path` with percent-encoded query pairs.
    pub(crate) fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, MapsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| MapsError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] on network failure, timeout, or a non-2xx
    /// status, and [`MapsError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MapsError> {
        let url = self.build_url(path, params)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| MapsError::Http(e.without_url()))?;
        let body = response
            .text()
            .await
            .map_err(|e| MapsError::Http(e.without_url()))?;
        serde_json::from_str(&body).map_err(|e| MapsError::Deserialize {
            context: path.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
