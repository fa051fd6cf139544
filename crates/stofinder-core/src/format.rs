//! Rendering of search results into the Ukrainian chat message.
//!
//! Output is Telegram-flavoured Markdown and must be byte-for-byte stable for
//! identical inputs: no clocks, no hashing, no locale lookups.

use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::app_config::DEFAULT_SEARCH_RADIUS_METERS;
use crate::types::{
    Coordinate, FormattedMessage, ResolvedLocation, SearchResult, SearchStatus, ShopRecord,
    MAX_SHOPS,
};

const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// RFC 3986 unreserved characters stay literal; everything else is encoded.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Fallback label for a coordinate with no reverse-geocoded name.
#[must_use]
pub fn numeric_display_name(coordinate: Coordinate) -> String {
    format!(
        "{:.5}, {:.5}",
        coordinate.latitude(),
        coordinate.longitude()
    )
}

/// Google Maps search link for a shop name.
#[must_use]
pub fn map_search_url(shop_name: &str) -> String {
    format!(
        "{MAP_SEARCH_URL}{}",
        utf8_percent_encode(shop_name, QUERY_VALUE)
    )
}

/// Renders the reply for one pipeline run.
///
/// `ZeroResults`, `Error` and an empty shop list all produce the same single
/// apology line. Otherwise the origin header is followed by at most
/// [`MAX_SHOPS`] three-line entries separated by blank lines.
#[must_use]
pub fn format_results(result: &SearchResult, origin: &ResolvedLocation) -> FormattedMessage {
    if result.status() != SearchStatus::Ok || result.shops().is_empty() {
        return apology(origin).into();
    }

    let mut message = format!(
        "📍 Місце поломки: {}\nНайближчі СТО:\n",
        origin.display_name()
    );
    for shop in result.shops().iter().take(MAX_SHOPS) {
        message.push('\n');
        push_entry(&mut message, shop);
    }
    message.into()
}

fn apology(origin: &ResolvedLocation) -> String {
    format!(
        "На жаль, СТО не знайдено в радіусі {} км поблизу {} 😔",
        DEFAULT_SEARCH_RADIUS_METERS / 1000,
        origin.display_name()
    )
}

fn push_entry(message: &mut String, shop: &ShopRecord) {
    // Writing into a String cannot fail.
    let _ = write!(
        message,
        "🏁 {name}\n📍 {vicinity}\n🌐 [Карта: {name}]({url})\n",
        name = shop.name(),
        vicinity = shop.vicinity(),
        url = map_search_url(shop.name()),
    );
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
