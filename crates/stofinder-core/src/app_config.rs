/// Default search radius for the places lookup, in meters.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 50_000;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub maps: MapsConfig,
}

/// Everything the Google Maps clients need, passed explicitly into their
/// constructors.
#[derive(Clone)]
pub struct MapsConfig {
    pub geocode_key: String,
    pub places_key: String,
    pub geocode_language: String,
    pub places_language: String,
    pub radius_meters: u32,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl MapsConfig {
    /// Config pointing both APIs at `base_url` with one shared key and the
    /// default language hints, radius, and timeout. Used by tests and tools.
    #[must_use]
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            geocode_key: api_key.to_owned(),
            places_key: api_key.to_owned(),
            geocode_language: "uk".to_owned(),
            places_language: "uk,en".to_owned(),
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            base_url: base_url.to_owned(),
            request_timeout_secs: 10,
            user_agent: "stofinder/0.1 (repair-shop-lookup)".to_owned(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("maps", &self.maps)
            .finish()
    }
}

impl std::fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsConfig")
            .field("geocode_key", &"[redacted]")
            .field("places_key", &"[redacted]")
            .field("geocode_language", &self.geocode_language)
            .field("places_language", &self.places_language)
            .field("radius_meters", &self.radius_meters)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
