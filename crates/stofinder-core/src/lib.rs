//! Domain types, configuration, and message formatting for the repair-shop
//! finder. Everything in this crate is free of network I/O.

pub mod app_config;
pub mod config;
pub mod format;
pub mod messages;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, MapsConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use format::{format_results, map_search_url, numeric_display_name};
pub use types::{
    Coordinate, FormattedMessage, LocationQuery, ResolvedLocation, SearchResult, SearchStatus,
    ShopRecord, MAX_SHOPS,
};

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        latitude: f64,
        longitude: f64,
        reason: &'static str,
    },

    #[error("address must not be empty")]
    EmptyAddress,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
