//! Google Maps API response types.
//!
//! Only the fields the pipeline reads are modelled. Everything the provider
//! may omit is optional or defaulted so that absence is decoded, not guessed
//! at the call site.

use serde::Deserialize;

/// Status reported by every Google Maps web service on success.
pub const STATUS_OK: &str = "OK";

/// Status reported when a query is valid but matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

/// Envelope for forward and reverse geocoding responses.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// Places Nearby Search
// ---------------------------------------------------------------------------

/// Envelope for `place/nearbysearch` responses. Only the first page is read;
/// `next_page_token` is ignored.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
}
