//! ProPublica Nonprofit Explorer client.
//!
//! Issues `GET <base_url>?q=<name>` and decodes the JSON body into a
//! [`SearchResponse`]. The query is forwarded as given, without validation.

use crate::config::ProPublicaConfig;
use crate::dtos::SearchResponse;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use service_core::error::AppError;
use service_core::observability::TracedClientExt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(StatusCode),

    #[error("Invalid upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Search for nonprofits by name.
#[async_trait]
pub trait NonprofitSearch: Send + Sync + 'static {
    async fn fetch_by_name(&self, name: &str) -> Result<SearchResponse, SearchError>;
}

#[derive(Clone)]
pub struct ProPublicaClient {
    client: Client,
    config: ProPublicaConfig,
}

impl ProPublicaClient {
    pub fn new(config: ProPublicaConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                tracing::error!("Failed to create HTTP client: {}", e);
                AppError::InternalError(e.into())
            })?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl NonprofitSearch for ProPublicaClient {
    async fn fetch_by_name(&self, name: &str) -> Result<SearchResponse, SearchError> {
        let response = self
            .client
            .traced_get(&self.config.base_url)
            .query(&[("q", name)])
            .send()
            .await?;

        let status = response.status();

        // The API answers a search without matches with 404.
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(search = %name, "ProPublica search returned no results");
            return Ok(SearchResponse::default());
        }

        if !status.is_success() {
            return Err(SearchError::UpstreamStatus(status));
        }

        let body = response.bytes().await?;
        let results: SearchResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            search = %name,
            total_results = results.total_results,
            "ProPublica search response"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ProPublicaClient {
        ProPublicaClient::new(ProPublicaConfig {
            base_url: format!("{}/search.json", server.uri()),
            timeout_secs: 2,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn forwards_query_and_decodes_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", "oakland zoo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_results": 1,
                "organizations": [{ "ein": 941234567, "name": "Oakland Zoo", "state": "CA" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for(&server)
            .await
            .fetch_by_name("oakland zoo")
            .await
            .unwrap();

        assert_eq!(results.total_results, 1);
        assert_eq!(results.organizations[0].name.as_deref(), Some("Oakland Zoo"));
        assert!(results.err.is_none());
    }

    #[tokio::test]
    async fn not_found_means_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let results = client_for(&server).await.fetch_by_name("zzzz").await.unwrap();
        assert_eq!(results, SearchResponse::default());
    }

    #[tokio::test]
    async fn server_errors_are_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_by_name("x").await.unwrap_err();
        assert!(matches!(err, SearchError::UpstreamStatus(s) if s == StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn invalid_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_by_name("x").await.unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "total_results": 0, "organizations": [] }))
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_by_name("x").await.unwrap_err();
        match err {
            SearchError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other),
        }
    }
}
