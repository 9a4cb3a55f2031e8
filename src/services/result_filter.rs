// src/services/result_filter.rs
// DOCUMENTATION: Rating filter and display normalization
// PURPOSE: Turn raw Places API records into display-ready places

use crate::models::{DisplayPlace, RawPlace};
use crate::services::weekday::highlight_today;

/// Placeholder for a place without a display name
pub const NO_NAME: &str = "名前なし";
/// Placeholder for a place without a Google Maps link
pub const NO_LINK: &str = "リンクなし";
/// Placeholder line for a place without opening hours
pub const NO_HOURS: &str = "営業時間情報なし";

/// Base URL of the Instagram keyword search
pub const SOCIAL_SEARCH_BASE: &str = "https://www.instagram.com/explore/search/keyword/?q=";

/// Build an Instagram keyword-search URL from a place name
/// DOCUMENTATION: Only spaces are escaped (as %20); everything else is passed through
pub fn derive_social_search_link(name: &str) -> String {
    format!("{}{}", SOCIAL_SEARCH_BASE, name.replace(' ', "%20"))
}

/// Normalize one raw place
/// DOCUMENTATION: Missing fields degrade to placeholders, never to errors
pub fn normalize(place: &RawPlace, today: &str) -> DisplayPlace {
    let name = place
        .display_name
        .as_ref()
        .and_then(|d| d.text.clone())
        .unwrap_or_else(|| NO_NAME.to_string());

    let rating = place.rating.unwrap_or(0.0);

    let google_maps_link = place
        .google_maps_links
        .as_ref()
        .and_then(|links| links.place_uri.clone())
        .unwrap_or_else(|| NO_LINK.to_string());

    let opening_hours = place
        .current_opening_hours
        .as_ref()
        .and_then(|hours| hours.weekday_descriptions.as_ref())
        .map(|lines| lines.join("\n"))
        .unwrap_or_else(|| NO_HOURS.to_string());

    DisplayPlace {
        social_search_link: derive_social_search_link(&name),
        opening_hours: highlight_today(&opening_hours, today),
        name,
        rating,
        google_maps_link,
        formatted_address: place.formatted_address.clone(),
    }
}

/// Keep places rated at or above `threshold`, in input order
/// DOCUMENTATION: Unrated places count as 0.0, so they only pass a threshold <= 0.0
pub fn filter(places: &[RawPlace], threshold: f64, today: &str) -> Vec<DisplayPlace> {
    let filtered: Vec<DisplayPlace> = places
        .iter()
        .map(|place| normalize(place, today))
        .filter(|place| place.rating >= threshold)
        .collect();

    log::debug!(
        "Rating filter (>= {:.1}) kept {} of {} places",
        threshold,
        filtered.len(),
        places.len()
    );

    filtered
}
