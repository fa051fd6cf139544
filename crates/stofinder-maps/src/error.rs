use thiserror::Error;

/// Errors from a single Google Maps API call.
///
/// None of these escape the pipeline: geocoding failures become
/// [`AddressNotFound`] or a numeric fallback name, search failures become an
/// empty `Error` result.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Network, TLS, timeout, or non-2xx failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a status other than `OK`/`ZERO_RESULTS`.
    #[error("Google Maps API status {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status {
        status: String,
        message: Option<String>,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Forward geocoding could not turn the user's text into a location.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("address not found: '{address}'")]
pub struct AddressNotFound {
    pub address: String,
}

impl AddressNotFound {
    #[must_use]
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_owned(),
        }
    }
}
