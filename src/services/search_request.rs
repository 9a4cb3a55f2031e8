// src/services/search_request.rs
// DOCUMENTATION: Text Search query construction
// PURPOSE: Combine the two free-text form fields into one Places API query

use crate::models::SearchQuery;

/// Locale used for the query and for returned display text
pub const LANGUAGE_CODE: &str = "ja";

/// Build the Text Search payload
/// DOCUMENTATION: Terms are joined with a literal " AND "; empty terms are
/// kept as-is so the query text is always "{area} AND {keyword}"
pub fn build(area: &str, keyword: &str) -> SearchQuery {
    SearchQuery {
        text_query: format!("{} AND {}", area, keyword),
        language_code: LANGUAGE_CODE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_combines_terms() {
        let query = build("銀座", "焼肉");
        assert_eq!(query.text_query, "銀座 AND 焼肉");
        assert_eq!(query.language_code, "ja");
    }

    #[test]
    fn test_build_keeps_empty_terms() {
        assert_eq!(build("", "").text_query, " AND ");
        assert_eq!(build("渋谷", "").text_query, "渋谷 AND ");
    }

    #[test]
    fn test_payload_shape() {
        let body = serde_json::to_value(build("渋谷", "ラーメン")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"textQuery": "渋谷 AND ラーメン", "languageCode": "ja"})
        );
    }
}
