use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GOOGLE_MAPS_API_KEY", "shared-key");
    m
}

#[test]
fn build_app_config_fails_without_any_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_MAPS_API_KEY"),
        "expected MissingEnvVar(GOOGLE_MAPS_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_shared_key_only() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.maps.geocode_key, "shared-key");
    assert_eq!(cfg.maps.places_key, "shared-key");
    assert_eq!(cfg.maps.geocode_language, "uk");
    assert_eq!(cfg.maps.places_language, "uk,en");
    assert_eq!(cfg.maps.radius_meters, 50_000);
    assert_eq!(cfg.maps.base_url, "https://maps.googleapis.com");
    assert_eq!(cfg.maps.request_timeout_secs, 10);
    assert_eq!(cfg.maps.user_agent, "stofinder/0.1 (repair-shop-lookup)");
}

#[test]
fn dedicated_keys_override_shared_key() {
    let mut map = full_env();
    map.insert("STOFINDER_GEOCODE_API_KEY", "geo-key");
    map.insert("STOFINDER_PLACES_API_KEY", "places-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.maps.geocode_key, "geo-key");
    assert_eq!(cfg.maps.places_key, "places-key");
}

#[test]
fn dedicated_keys_alone_are_sufficient() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STOFINDER_GEOCODE_API_KEY", "geo-key");
    map.insert("STOFINDER_PLACES_API_KEY", "places-key");
    assert!(build_app_config(lookup_from_map(&map)).is_ok());
}

#[test]
fn missing_places_key_without_shared_key_fails() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("STOFINDER_GEOCODE_API_KEY", "geo-key");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn radius_override() {
    let mut map = full_env();
    map.insert("STOFINDER_SEARCH_RADIUS_METERS", "20000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.maps.radius_meters, 20_000);
}

#[test]
fn radius_invalid() {
    let mut map = full_env();
    map.insert("STOFINDER_SEARCH_RADIUS_METERS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOFINDER_SEARCH_RADIUS_METERS"),
        "expected InvalidEnvVar(STOFINDER_SEARCH_RADIUS_METERS), got: {result:?}"
    );
}

#[test]
fn radius_above_places_limit_is_rejected() {
    let mut map = full_env();
    map.insert("STOFINDER_SEARCH_RADIUS_METERS", "75000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOFINDER_SEARCH_RADIUS_METERS")
    );
}

#[test]
fn request_timeout_override() {
    let mut map = full_env();
    map.insert("STOFINDER_REQUEST_TIMEOUT_SECS", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.maps.request_timeout_secs, 3);
}

#[test]
fn request_timeout_zero_is_rejected() {
    let mut map = full_env();
    map.insert("STOFINDER_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOFINDER_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOFINDER_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn language_and_base_url_overrides() {
    let mut map = full_env();
    map.insert("STOFINDER_GEOCODE_LANGUAGE", "en");
    map.insert("STOFINDER_PLACES_LANGUAGE", "en");
    map.insert("STOFINDER_MAPS_BASE_URL", "http://127.0.0.1:9000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.maps.geocode_language, "en");
    assert_eq!(cfg.maps.places_language, "en");
    assert_eq!(cfg.maps.base_url, "http://127.0.0.1:9000");
}

#[test]
fn debug_output_redacts_keys() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("shared-key"));
    assert!(rendered.contains("[redacted]"));
}
