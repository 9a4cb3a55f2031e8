// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Places API response shapes, display-ready records and search inputs

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use validator::{Validate, ValidationError};

/// Text Search response envelope
/// DOCUMENTATION: "places" is omitted entirely when nothing matched
#[derive(Debug, Default, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub places: Vec<RawPlace>,
}

/// Individual place from the Places API
/// DOCUMENTATION: Every field is optional; result_filter::normalize substitutes placeholders
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    /// Localized display name
    pub display_name: Option<LocalizedText>,

    /// Rating (0-5)
    pub rating: Option<f64>,

    /// Links into Google Maps
    pub google_maps_links: Option<GoogleMapsLinks>,

    /// Current week's opening hours
    pub current_opening_hours: Option<OpeningHours>,

    /// Full formatted address
    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleMapsLinks {
    pub place_uri: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    /// One line per weekday, e.g. "月曜日: 11時00分～22時00分"
    pub weekday_descriptions: Option<Vec<String>>,
}

/// Display-ready place
/// DOCUMENTATION: Produced by result_filter::filter, consumed once by the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPlace {
    pub name: String,
    pub rating: f64,
    pub google_maps_link: String,
    /// Derived from name, never empty
    pub social_search_link: String,
    /// Joined weekday lines with today's line emphasised
    pub opening_hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
}

/// Query string for GET /search
/// DOCUMENTATION: Threshold bounds match the form control (2.0-5.0, step 0.1)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchForm {
    #[validate(range(min = 2.0, max = 5.0), custom = "validate_finite")]
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Area or station, e.g. "銀座"
    #[validate(length(max = 200))]
    #[serde(default)]
    pub area: String,

    /// Keyword or shop name, e.g. "焼肉"
    #[validate(length(max = 200))]
    #[serde(default)]
    pub keyword: String,
}

/// Request body for POST /api/search
/// DOCUMENTATION: Wider threshold range than the form; 0.0 admits unrated places
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(range(min = 0.0, max = 5.0), custom = "validate_finite")]
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub area: String,

    #[validate(length(max = 200))]
    #[serde(default)]
    pub keyword: String,
}

/// Response for POST /api/search
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub places: Vec<DisplayPlace>,
    pub total: usize,
}

/// Default rating threshold shown on the form
pub const DEFAULT_THRESHOLD: f64 = 3.0;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Range checks let NaN through (every comparison is false)
fn validate_finite<T: Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    if value.borrow().is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}
