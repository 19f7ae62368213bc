// file: src/index/client.rs
// description: Meilisearch index client with readiness wait
// reference: https://www.meilisearch.com/docs/reference/api/overview

use crate::config::IndexConfig;
use crate::error::{MemoryError, Result};
use crate::index::types::{
    DocumentsFetchRequest, DocumentsPage, HealthResponse, IndexStats, SearchRequest,
    SearchResponse,
};
use crate::models::Memory;
use reqwest::{Client, RequestBuilder};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Handle to a ready-to-query memory index.
///
/// `connect` establishes readiness once, up front; every query operation
/// takes the handle as an explicit argument instead of reaching for global
/// state. The index owns all storage and ranking internals — this client
/// only issues requests and decodes responses.
pub struct MemoryIndex {
    client: Client,
    config: IndexConfig,
}

impl MemoryIndex {
    /// Build a client and block until the index reports healthy, polling at
    /// the configured interval. Fails with `NotReady` once the overall
    /// timeout elapses.
    pub async fn connect(config: IndexConfig) -> Result<Self> {
        let index = Self {
            client: Client::new(),
            config,
        };

        info!("Waiting for index at {}", index.config.url);

        let deadline = Instant::now() + Duration::from_secs(index.config.ready_timeout_secs);
        let poll = Duration::from_millis(index.config.ready_poll_ms);

        loop {
            match index.ping().await {
                Ok(true) => {
                    debug!("Index is available");
                    return Ok(index);
                }
                Ok(false) => warn!("Index responded but is not available yet"),
                Err(e) => debug!("Index not reachable yet: {}", e),
            }

            if Instant::now() >= deadline {
                return Err(MemoryError::NotReady(index.config.ready_timeout_secs));
            }

            tokio::time::sleep(poll).await;
        }
    }

    /// Health probe; true when the engine reports itself available.
    pub async fn ping(&self) -> Result<bool> {
        let url = format!("{}/health", self.config.url);
        let response = self.authorized(self.client.get(&url)).send().await?;
        let health: HealthResponse = Self::decode(response).await?;
        Ok(health.status == "available")
    }

    /// Token search: the engine does the matching and ranking; hits come
    /// back in the engine's order.
    pub async fn search(&self, query: &str, filter: Option<String>) -> Result<Vec<Memory>> {
        let url = format!(
            "{}/indexes/{}/search",
            self.config.url, self.config.index_uid
        );
        let request = SearchRequest {
            q: query.to_string(),
            filter,
        };

        debug!("Searching index {} for {:?}", self.config.index_uid, query);

        let response = self
            .authorized(self.client.post(&url))
            .json(&request)
            .send()
            .await?;
        let search: SearchResponse = Self::decode(response).await?;

        debug!("Search returned {} hits", search.hits.len());
        Ok(search.hits)
    }

    /// Fetch up to `limit` documents matching `filter`, without any text
    /// query. Used by the TF-IDF path, which ranks locally.
    pub async fn fetch_documents(
        &self,
        limit: usize,
        filter: Option<String>,
    ) -> Result<Vec<Memory>> {
        let url = format!(
            "{}/indexes/{}/documents/fetch",
            self.config.url, self.config.index_uid
        );
        let request = DocumentsFetchRequest { limit, filter };

        debug!(
            "Fetching up to {} documents from index {}",
            limit, self.config.index_uid
        );

        let response = self
            .authorized(self.client.post(&url))
            .json(&request)
            .send()
            .await?;
        let page: DocumentsPage = Self::decode(response).await?;

        debug!("Fetched {} documents", page.results.len());
        Ok(page.results)
    }

    pub async fn stats(&self) -> Result<IndexStats> {
        let url = format!(
            "{}/indexes/{}/stats",
            self.config.url, self.config.index_uid
        );
        let response = self.authorized(self.client.get(&url)).send().await?;
        Self::decode(response).await
    }

    pub fn index_uid(&self) -> &str {
        &self.config.index_uid
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MemoryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MemoryError::Serialization(e.to_string()))
    }
}
