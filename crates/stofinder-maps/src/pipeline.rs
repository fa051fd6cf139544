//! Location-to-results pipeline orchestration.

use stofinder_core::{
    format_results, FormattedMessage, LocationQuery, MapsConfig, ResolvedLocation, SearchResult,
};

use crate::client::MapsClient;
use crate::error::{AddressNotFound, MapsError};
use crate::geocode::GeoResolver;
use crate::places::ShopFinder;

/// Where a run currently is. Runs only move forward: `Resolving` then
/// `Searching`, then they finish.
enum Stage {
    Resolving(LocationQuery),
    Searching(ResolvedLocation),
}

/// Turns one user location into one reply message.
///
/// Holds no mutable state, so a single instance can serve any number of
/// concurrent conversations.
pub struct LocationPipeline {
    geo: GeoResolver,
    shops: ShopFinder,
}

impl LocationPipeline {
    /// Builds both clients over one shared HTTP connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError`] if the HTTP client cannot be built.
    pub fn new(config: &MapsConfig) -> Result<Self, MapsError> {
        let http = MapsClient::new(config)?;
        Ok(Self::from_parts(
            GeoResolver::with_client(http.clone(), config),
            ShopFinder::with_client(http, config),
        ))
    }

    #[must_use]
    pub fn from_parts(geo: GeoResolver, shops: ShopFinder) -> Self {
        Self { geo, shops }
    }

    /// Resolves `query`, searches nearby shops, and formats the reply.
    ///
    /// # Errors
    ///
    /// Returns [`AddressNotFound`] when an address query cannot be geocoded.
    /// The formatter is not invoked in that case; the caller shows its fixed
    /// "address not found" text instead. Every other failure degrades inside
    /// the pipeline.
    pub async fn run(&self, query: LocationQuery) -> Result<FormattedMessage, AddressNotFound> {
        let (origin, result) = self.search(query).await?;
        Ok(format_results(&result, &origin))
    }

    /// Same as [`run`](Self::run) but returns the unformatted pieces.
    ///
    /// # Errors
    ///
    /// Returns [`AddressNotFound`] when an address query cannot be geocoded.
    pub async fn search(
        &self,
        query: LocationQuery,
    ) -> Result<(ResolvedLocation, SearchResult), AddressNotFound> {
        let mut stage = Stage::Resolving(query);
        loop {
            stage = match stage {
                Stage::Resolving(query) => {
                    tracing::debug!(stage = "resolving", "pipeline stage");
                    Stage::Searching(self.resolve(query).await?)
                }
                Stage::Searching(origin) => {
                    tracing::debug!(stage = "searching", "pipeline stage");
                    let result = self.shops.find_nearby(origin.coordinate()).await;
                    tracing::info!(
                        origin = origin.display_name(),
                        status = ?result.status(),
                        shops = result.shops().len(),
                        "pipeline finished"
                    );
                    return Ok((origin, result));
                }
            };
        }
    }

    async fn resolve(&self, query: LocationQuery) -> Result<ResolvedLocation, AddressNotFound> {
        match query {
            LocationQuery::Coordinate(coordinate) => {
                let name = self.geo.resolve_display_name(coordinate).await;
                Ok(ResolvedLocation::new(coordinate, name))
            }
            LocationQuery::Address(address) => self.geo.resolve_address(&address).await,
        }
    }
}
