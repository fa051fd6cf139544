use crate::app_config::{AppConfig, MapsConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Parsing/validation core, decoupled from the process environment so tests
/// can feed a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Per-API keys fall back to the shared key; the shared key is only
    // required when at least one API has no dedicated key.
    let shared_key = lookup("GOOGLE_MAPS_API_KEY").ok();
    let api_key = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .or_else(|| shared_key.clone())
            .ok_or_else(|| ConfigError::MissingEnvVar("GOOGLE_MAPS_API_KEY".to_string()))
    };

    let geocode_key = api_key("STOFINDER_GEOCODE_API_KEY")?;
    let places_key = api_key("STOFINDER_PLACES_API_KEY")?;

    let radius_meters = parse_u32("STOFINDER_SEARCH_RADIUS_METERS", "50000")?;
    if radius_meters == 0 || radius_meters > 50_000 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOFINDER_SEARCH_RADIUS_METERS".to_string(),
            reason: format!("{radius_meters} is outside 1..=50000"),
        });
    }

    let request_timeout_secs = parse_u64("STOFINDER_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOFINDER_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let maps = MapsConfig {
        geocode_key,
        places_key,
        geocode_language: or_default("STOFINDER_GEOCODE_LANGUAGE", "uk"),
        places_language: or_default("STOFINDER_PLACES_LANGUAGE", "uk,en"),
        radius_meters,
        base_url: or_default("STOFINDER_MAPS_BASE_URL", "https://maps.googleapis.com"),
        request_timeout_secs,
        user_agent: or_default("STOFINDER_USER_AGENT", "stofinder/0.1 (repair-shop-lookup)"),
    };

    Ok(AppConfig {
        log_level: or_default("STOFINDER_LOG_LEVEL", "info"),
        maps,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
