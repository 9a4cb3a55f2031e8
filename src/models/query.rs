// src/models/query.rs
// DOCUMENTATION: Outbound Text Search payload
// PURPOSE: Request body sent to the Places API

use serde::Serialize;

/// Text Search request body
/// DOCUMENTATION: Serialized as {"textQuery": ..., "languageCode": ...}
/// Built fresh per search by services::search_request::build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Combined free-text query ("{area} AND {keyword}")
    pub text_query: String,

    /// Fixed locale tag
    pub language_code: String,
}
