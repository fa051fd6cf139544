//! Repair-shop lookup via Google Places Nearby Search.

use stofinder_core::{Coordinate, MapsConfig, SearchResult, SearchStatus, ShopRecord};

use crate::client::MapsClient;
use crate::error::MapsError;
use crate::types::{NearbySearchResponse, STATUS_OK, STATUS_ZERO_RESULTS};

const NEARBY_SEARCH_PATH: &str = "maps/api/place/nearbysearch/json";

/// Places category filter.
pub const PLACE_TYPE: &str = "car_repair";

/// Keywords biasing results toward heavy-vehicle repair.
pub const HEAVY_VEHICLE_KEYWORDS: &str = "вантажівка TIR truck";

/// Finds repair shops around a coordinate.
pub struct ShopFinder {
    http: MapsClient,
    api_key: String,
    language: String,
    radius_meters: u32,
}

impl ShopFinder {
    /// # Errors
    ///
    /// Returns [`MapsError`] if the HTTP client cannot be built.
    pub fn new(config: &MapsConfig) -> Result<Self, MapsError> {
        Ok(Self::with_client(MapsClient::new(config)?, config))
    }

    /// Reuses an existing HTTP client (and its connection pool).
    #[must_use]
    pub fn with_client(http: MapsClient, config: &MapsConfig) -> Self {
        Self {
            http,
            api_key: config.places_key.clone(),
            language: config.places_language.clone(),
            radius_meters: config.radius_meters,
        }
    }

    /// Searches within the configured radius (50 km by default).
    pub async fn find_nearby(&self, coordinate: Coordinate) -> SearchResult {
        self.find_nearby_within(coordinate, self.radius_meters).await
    }

    /// Searches within `radius_meters`, first page only.
    ///
    /// Never fails: a non-`OK` status or a failed request is logged and
    /// returned as an empty result with [`SearchStatus::Error`].
    pub async fn find_nearby_within(&self, coordinate: Coordinate, radius_meters: u32) -> SearchResult {
        match self.search(coordinate, radius_meters).await {
            Ok(result) => {
                tracing::debug!(
                    status = ?result.status(),
                    shops = result.shops().len(),
                    radius_meters,
                    "places search finished"
                );
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, radius_meters, "places search failed");
                SearchResult::error()
            }
        }
    }

    async fn search(&self, coordinate: Coordinate, radius_meters: u32) -> Result<SearchResult, MapsError> {
        let location = coordinate.to_query_value();
        let radius = radius_meters.to_string();
        let body: NearbySearchResponse = self
            .http
            .get_json(
                NEARBY_SEARCH_PATH,
                &[
                    ("location", location.as_str()),
                    ("radius", radius.as_str()),
                    ("type", PLACE_TYPE),
                    ("keyword", HEAVY_VEHICLE_KEYWORDS),
                    ("key", self.api_key.as_str()),
                    ("language", self.language.as_str()),
                ],
            )
            .await?;

        if body.status == STATUS_ZERO_RESULTS {
            return Ok(SearchResult::zero_results());
        }
        if body.status != STATUS_OK {
            return Err(MapsError::Status {
                status: body.status,
                message: body.error_message,
            });
        }

        let shops = body
            .results
            .into_iter()
            .map(|place| ShopRecord::new(place.name, place.vicinity, place.place_id))
            .collect();
        Ok(SearchResult::new(shops, SearchStatus::Ok))
    }
}
