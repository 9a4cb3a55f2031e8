// src/services/search_service.rs
// DOCUMENTATION: Business logic for one search
// PURPOSE: Build query, call Places API, filter and normalize results

use crate::errors::PlacesError;
use crate::models::DisplayPlace;
use crate::services::weekday::WeekdayLabels;
use crate::services::{result_filter, search_request, GooglePlacesClient};

pub struct SearchService;

impl SearchService {
    /// Run one search end to end
    /// DOCUMENTATION: Today's label is resolved at call time; upstream
    /// failures are returned untouched for the caller to display
    pub async fn search(
        client: &GooglePlacesClient,
        labels: &WeekdayLabels,
        area: &str,
        keyword: &str,
        threshold: f64,
    ) -> Result<Vec<DisplayPlace>, PlacesError> {
        let query = search_request::build(area, keyword);
        let raw_places = client.search_text(&query).await?;

        Ok(result_filter::filter(&raw_places, threshold, labels.today()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::JAPANESE_WEEKDAYS;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_search_end_to_end() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/search")
                .json_body(json!({"textQuery": "新宿 AND 寿司", "languageCode": "ja"}));
            then.status(200).json_body(json!({
                "places": [
                    {"displayName": {"text": "寿司 A"}, "rating": 3.9},
                    {"displayName": {"text": "寿司 B"}, "rating": 3.1},
                    {"displayName": {"text": "寿司 C"}, "rating": 4.8}
                ]
            }));
        });

        let client = GooglePlacesClient::new(&Config {
            places_endpoint: server.url("/search"),
            ..Config::default()
        });

        let places = tokio_test::block_on(SearchService::search(
            &client,
            &JAPANESE_WEEKDAYS,
            "新宿",
            "寿司",
            3.5,
        ))
        .unwrap();

        mock.assert();
        let names: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["寿司 A", "寿司 C"]);
        assert!(places[0].social_search_link.ends_with("寿司%20A"));
    }

    #[test]
    fn test_search_propagates_upstream_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/search");
            then.status(500).body("backend error");
        });

        let client = GooglePlacesClient::new(&Config {
            places_endpoint: server.url("/search"),
            ..Config::default()
        });

        let result = tokio_test::block_on(SearchService::search(
            &client,
            &JAPANESE_WEEKDAYS,
            "a",
            "b",
            3.0,
        ));

        assert!(matches!(
            result,
            Err(PlacesError::UpstreamFailure { status: 500, ref body }) if body == "backend error"
        ));
    }
}
