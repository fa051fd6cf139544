//! Values flowing through one location-to-results run.
//!
//! Every type here is immutable once built: constructors enforce the
//! invariants and fields are only reachable through getters.

use std::fmt;

use serde::Serialize;

use crate::CoreError;

/// Hard cap on the number of shops carried by a [`SearchResult`].
pub const MAX_SHOPS: usize = 10;

/// Placeholder used when the places directory omits a shop name.
pub const UNKNOWN_SHOP_NAME: &str = "Невідоме СТО";

/// Placeholder used when the places directory omits a vicinity.
pub const UNKNOWN_VICINITY: &str = "Адреса не вказана";

/// A validated WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting out-of-range or non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when latitude is outside
    /// `[-90, 90]`, longitude is outside `[-180, 180]`, or either is NaN/inf.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let invalid = |reason| CoreError::InvalidCoordinate {
            latitude,
            longitude,
            reason,
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid("values must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `"lat,lng"` as the Google Maps APIs expect it in `latlng`/`location`.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Raw user input before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// A live geolocation share (or a pasted `"lat, lon"` pair).
    Coordinate(Coordinate),
    /// Free text to be forward-geocoded. Never empty.
    Address(String),
}

impl LocationQuery {
    /// Builds an address query from free text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAddress`] if nothing remains after trimming.
    pub fn address(text: &str) -> Result<Self, CoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyAddress);
        }
        Ok(Self::Address(trimmed.to_owned()))
    }

    /// Interprets a typed message.
    ///
    /// A message of exactly two comma-separated numbers forming a valid
    /// coordinate (e.g. `"50.61933, 26.25161"`) becomes a coordinate query;
    /// anything else is treated as an address.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyAddress`] for blank input.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let trimmed = text.trim();
        if let Some((lat, lon)) = trimmed.split_once(',') {
            if let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
                if let Ok(coordinate) = Coordinate::new(lat, lon) {
                    return Ok(Self::Coordinate(coordinate));
                }
            }
        }
        Self::address(trimmed)
    }
}

/// A coordinate paired with the name shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    coordinate: Coordinate,
    display_name: String,
}

impl ResolvedLocation {
    #[must_use]
    pub fn new(coordinate: Coordinate, display_name: impl Into<String>) -> Self {
        Self {
            coordinate,
            display_name: display_name.into(),
        }
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// One repair shop as returned by the places directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShopRecord {
    name: String,
    vicinity: String,
    raw_id: Option<String>,
}

impl ShopRecord {
    /// Builds a record, substituting the fixed placeholders for a missing or
    /// blank name and vicinity.
    #[must_use]
    pub fn new(name: Option<String>, vicinity: Option<String>, raw_id: Option<String>) -> Self {
        Self {
            name: non_blank(name).unwrap_or_else(|| UNKNOWN_SHOP_NAME.to_owned()),
            vicinity: non_blank(vicinity).unwrap_or_else(|| UNKNOWN_VICINITY.to_owned()),
            raw_id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn vicinity(&self) -> &str {
        &self.vicinity
    }

    /// Opaque provider identifier (`place_id` for Google Places).
    #[must_use]
    pub fn raw_id(&self) -> Option<&str> {
        self.raw_id.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Outcome of a places lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Ok,
    ZeroResults,
    Error,
}

/// Shops found near an origin, in provider order, capped at [`MAX_SHOPS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    shops: Vec<ShopRecord>,
    status: SearchStatus,
}

impl SearchResult {
    /// Builds a result, truncating to [`MAX_SHOPS`].
    ///
    /// An `Ok` status with no shops is normalised to `ZeroResults`, and an
    /// `Error` status never carries shops.
    #[must_use]
    pub fn new(mut shops: Vec<ShopRecord>, status: SearchStatus) -> Self {
        shops.truncate(MAX_SHOPS);
        let status = match status {
            SearchStatus::Ok if shops.is_empty() => SearchStatus::ZeroResults,
            other => other,
        };
        if status != SearchStatus::Ok {
            shops.clear();
        }
        Self { shops, status }
    }

    #[must_use]
    pub fn zero_results() -> Self {
        Self::new(Vec::new(), SearchStatus::ZeroResults)
    }

    #[must_use]
    pub fn error() -> Self {
        Self::new(Vec::new(), SearchStatus::Error)
    }

    #[must_use]
    pub fn shops(&self) -> &[ShopRecord] {
        &self.shops
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }
}

/// The final user-facing text of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FormattedMessage {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop(name: &str) -> ShopRecord {
        ShopRecord::new(Some(name.to_owned()), Some("вул. Київська, 1".to_owned()), None)
    }

    #[test]
    fn coordinate_accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinate_rejects_out_of_range_latitude() {
        let err = Coordinate::new(90.5, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCoordinate { .. }));
    }

    #[test]
    fn coordinate_rejects_out_of_range_longitude() {
        assert!(Coordinate::new(0.0, -180.01).is_err());
    }

    #[test]
    fn coordinate_rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn coordinate_query_value_has_no_space() {
        let c = Coordinate::new(50.6199, 26.2516).unwrap();
        assert_eq!(c.to_query_value(), "50.6199,26.2516");
    }

    #[test]
    fn parse_recognises_coordinate_pair() {
        let q = LocationQuery::parse("  50.61933, 26.25161 ").unwrap();
        assert_eq!(
            q,
            LocationQuery::Coordinate(Coordinate::new(50.61933, 26.25161).unwrap())
        );
    }

    #[test]
    fn parse_treats_three_part_text_as_address() {
        let q = LocationQuery::parse("Україна, Рівне, 33000").unwrap();
        assert_eq!(q, LocationQuery::Address("Україна, Рівне, 33000".to_owned()));
    }

    #[test]
    fn parse_treats_out_of_range_pair_as_address() {
        let q = LocationQuery::parse("123.0, 45.0").unwrap();
        assert_eq!(q, LocationQuery::Address("123.0, 45.0".to_owned()));
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(LocationQuery::parse("   ").unwrap_err(), CoreError::EmptyAddress);
    }

    #[test]
    fn shop_record_uses_placeholders_for_missing_fields() {
        let record = ShopRecord::new(None, Some("  ".to_owned()), Some("abc".to_owned()));
        assert_eq!(record.name(), UNKNOWN_SHOP_NAME);
        assert_eq!(record.vicinity(), UNKNOWN_VICINITY);
        assert_eq!(record.raw_id(), Some("abc"));
    }

    #[test]
    fn search_result_truncates_to_cap_preserving_order() {
        let shops: Vec<ShopRecord> = (0..15).map(|i| shop(&format!("СТО {i}"))).collect();
        let result = SearchResult::new(shops, SearchStatus::Ok);
        assert_eq!(result.shops().len(), MAX_SHOPS);
        assert_eq!(result.shops()[0].name(), "СТО 0");
        assert_eq!(result.shops()[9].name(), "СТО 9");
    }

    #[test]
    fn search_result_ok_without_shops_becomes_zero_results() {
        let result = SearchResult::new(Vec::new(), SearchStatus::Ok);
        assert_eq!(result.status(), SearchStatus::ZeroResults);
    }

    #[test]
    fn search_result_error_drops_shops() {
        let result = SearchResult::new(vec![shop("A")], SearchStatus::Error);
        assert!(result.shops().is_empty());
        assert_eq!(result.status(), SearchStatus::Error);
    }

    #[test]
    fn search_status_serializes_like_provider() {
        let json = serde_json::to_string(&SearchStatus::ZeroResults).unwrap();
        assert_eq!(json, "\"ZERO_RESULTS\"");
    }
}
