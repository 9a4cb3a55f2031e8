// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: One Text Search call per form submission

use crate::config::Config;
use crate::errors::PlacesError;
use crate::models::{RawPlace, SearchQuery, TextSearchResponse};
use reqwest::Client;

/// Fields requested from the Places API on every call
pub const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.currentOpeningHours,places.reviews,places.googleMapsLinks,places.rating";

/// Google Places API client
/// DOCUMENTATION: Built once from Config at startup and shared read-only
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Text Search endpoint
    endpoint: String,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    /// DOCUMENTATION: Key and endpoint come from Config; an empty key is sent
    /// as-is and rejected by the API
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.places_api_key.clone(),
            endpoint: config.places_endpoint.clone(),
        }
    }

    /// Perform a Text Search
    /// DOCUMENTATION: POSTs the query with the fixed field mask
    ///
    /// # Arguments
    /// * `query` - Payload built by search_request::build
    ///
    /// # Returns
    /// Raw places in API order, or UpstreamFailure carrying the status
    /// code and raw body for any non-success status
    pub async fn search_text(&self, query: &SearchQuery) -> Result<Vec<RawPlace>, PlacesError> {
        log::debug!("Google Places text search: query={}", query.text_query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(query)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Places API request failed: {}", e);
                PlacesError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Places API error {}: {}", status, body);
            return Err(PlacesError::UpstreamFailure {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: TextSearchResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse Google Places response: {}", e);
            PlacesError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        log::info!(
            "Google Places search returned {} results",
            api_response.places.len()
        );
        Ok(api_response.places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::search_request;
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "/v1/places:searchText";

    fn client_for(server: &MockServer) -> GooglePlacesClient {
        let config = Config {
            places_api_key: "test_key".to_string(),
            places_endpoint: server.url(PATH),
            ..Config::default()
        };
        GooglePlacesClient::new(&config)
    }

    #[tokio::test]
    async fn test_search_text_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PATH)
                    .header("x-goog-api-key", "test_key")
                    .header("x-goog-fieldmask", FIELD_MASK)
                    .json_body(json!({"textQuery": "銀座 AND 焼肉", "languageCode": "ja"}));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "places": [
                            {"displayName": {"text": "焼肉 一"}, "rating": 4.4},
                            {"displayName": {"text": "焼肉 二"}}
                        ]
                    }));
            })
            .await;

        let client = client_for(&server);
        let places = client
            .search_text(&search_request::build("銀座", "焼肉"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].rating, Some(4.4));
        assert_eq!(places[1].rating, None);
    }

    #[tokio::test]
    async fn test_search_text_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({}));
            })
            .await;

        let places = client_for(&server)
            .search_text(&search_request::build("", ""))
            .await
            .unwrap();
        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn test_search_text_upstream_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(403).body("{\"error\":{\"status\":\"PERMISSION_DENIED\"}}");
            })
            .await;

        let err = client_for(&server)
            .search_text(&search_request::build("渋谷", "カフェ"))
            .await
            .unwrap_err();

        match err {
            PlacesError::UpstreamFailure { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "{\"error\":{\"status\":\"PERMISSION_DENIED\"}}");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_text_unparsable_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).body("not json");
            })
            .await;

        let err = client_for(&server)
            .search_text(&search_request::build("渋谷", "カフェ"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlacesError::ExternalApiError(_)));
    }
}
