//! Forward and reverse geocoding via the Google Geocoding API.

use stofinder_core::{numeric_display_name, Coordinate, MapsConfig, ResolvedLocation};

use crate::client::MapsClient;
use crate::error::{AddressNotFound, MapsError};
use crate::types::{GeocodeCandidate, GeocodeResponse, STATUS_OK, STATUS_ZERO_RESULTS};

const GEOCODE_PATH: &str = "maps/api/geocode/json";

/// Resolves addresses to coordinates and coordinates to display names.
pub struct GeoResolver {
    http: MapsClient,
    api_key: String,
    language: String,
}

impl GeoResolver {
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
            api_key: config.geocode_key.clone(),
            language: config.geocode_language.clone(),
        }
    }

    /// Forward-geocodes `address`, taking the first candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AddressNotFound`] for a non-`OK` status, an empty candidate
    /// list, a candidate without usable geometry, or a failed request. No
    /// retries are attempted.
    pub async fn resolve_address(&self, address: &str) -> Result<ResolvedLocation, AddressNotFound> {
        match self.forward(address).await {
            Ok(Some(location)) => {
                tracing::debug!(
                    display_name = location.display_name(),
                    "forward geocoding resolved address"
                );
                Ok(location)
            }
            Ok(None) => {
                tracing::info!("forward geocoding returned no usable candidate");
                Err(AddressNotFound::new(address))
            }
            Err(e) => {
                tracing::warn!(error = %e, "forward geocoding failed");
                Err(AddressNotFound::new(address))
            }
        }
    }

    /// Reverse-geocodes `coordinate` into a display name.
    ///
    /// Never fails: any provider error, empty result, or network failure
    /// yields the `"lat, lon"` rendering at 5 decimal places.
    pub async fn resolve_display_name(&self, coordinate: Coordinate) -> String {
        match self.reverse(coordinate).await {
            Ok(Some(name)) => name,
            Ok(None) => numeric_display_name(coordinate),
            Err(e) => {
                tracing::debug!(error = %e, "reverse geocoding failed, using coordinates");
                numeric_display_name(coordinate)
            }
        }
    }

    async fn forward(&self, address: &str) -> Result<Option<ResolvedLocation>, MapsError> {
        let body: GeocodeResponse = self
            .http
            .get_json(
                GEOCODE_PATH,
                &[
                    ("address", address),
                    ("key", self.api_key.as_str()),
                    ("language", self.language.as_str()),
                ],
            )
            .await?;
        let Some(first) = Self::first_candidate(body)? else {
            return Ok(None);
        };

        let Some(geometry) = first.geometry else {
            return Ok(None);
        };
        let Ok(coordinate) = Coordinate::new(geometry.location.lat, geometry.location.lng) else {
            tracing::warn!(
                lat = geometry.location.lat,
                lng = geometry.location.lng,
                "geocoder returned an out-of-range coordinate"
            );
            return Ok(None);
        };

        let display_name = first
            .formatted_address
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| numeric_display_name(coordinate));
        Ok(Some(ResolvedLocation::new(coordinate, display_name)))
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<Option<String>, MapsError> {
        let latlng = coordinate.to_query_value();
        let body: GeocodeResponse = self
            .http
            .get_json(
                GEOCODE_PATH,
                &[
                    ("latlng", latlng.as_str()),
                    ("key", self.api_key.as_str()),
                    ("language", self.language.as_str()),
                ],
            )
            .await?;
        Ok(Self::first_candidate(body)?
            .and_then(|candidate| candidate.formatted_address)
            .filter(|name| !name.trim().is_empty()))
    }

    /// First candidate of an `OK` response; `None` for `ZERO_RESULTS` or an
    /// empty list; an error for every other status.
    fn first_candidate(body: GeocodeResponse) -> Result<Option<GeocodeCandidate>, MapsError> {
        if body.status == STATUS_OK {
            Ok(body.results.into_iter().next())
        } else if body.status == STATUS_ZERO_RESULTS {
            Ok(None)
        } else {
            Err(MapsError::Status {
                status: body.status,
                message: body.error_message,
            })
        }
    }
}
