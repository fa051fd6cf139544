//! Google Maps clients and the location-to-results pipeline.
//!
//! [`GeoResolver`] wraps the Geocoding API, [`ShopFinder`] wraps Places
//! Nearby Search, and [`LocationPipeline`] ties them to the formatter in
//! `stofinder-core`.

pub mod client;
pub mod error;
pub mod geocode;
pub mod pipeline;
pub mod places;
pub mod types;

pub use client::MapsClient;
pub use error::{AddressNotFound, MapsError};
pub use geocode::GeoResolver;
pub use pipeline::LocationPipeline;
pub use places::ShopFinder;
