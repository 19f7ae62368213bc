// file: src/index/types.rs
// description: wire types for the Meilisearch REST API
// reference: https://www.meilisearch.com/docs/reference/api/overview

use crate::models::Memory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SearchRequest {
    pub q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Memory>,
}

#[derive(Debug, Serialize)]
pub struct DocumentsFetchRequest {
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentsPage {
    pub results: Vec<Memory>,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub number_of_documents: u64,
    #[serde(default)]
    pub is_indexing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_request_omits_empty_filter() {
        let req = SearchRequest {
            q: "lunch plans".to_string(),
            filter: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"q": "lunch plans"}));
    }

    #[test]
    fn test_search_request_includes_filter() {
        let req = SearchRequest {
            q: "lunch".to_string(),
            filter: Some(r#"tags = "work""#.to_string()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["filter"], r#"tags = "work""#);
    }

    #[test]
    fn test_documents_page_deserializes() {
        let page: DocumentsPage = serde_json::from_value(serde_json::json!({
            "results": [
                {"id": "abc", "text": "lunch at noon", "tags": ["work"]},
                {"id": "def", "text": "team meeting"}
            ],
            "offset": 0,
            "limit": 1000,
            "total": 2
        }))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].tags, vec!["work"]);
        // tags default to empty when the document has none
        assert!(page.results[1].tags.is_empty());
    }

    #[test]
    fn test_index_stats_camel_case() {
        let stats: IndexStats = serde_json::from_value(serde_json::json!({
            "numberOfDocuments": 42,
            "isIndexing": false,
            "fieldDistribution": {}
        }))
        .unwrap();
        assert_eq!(stats.number_of_documents, 42);
        assert!(!stats.is_indexing);
    }
}
