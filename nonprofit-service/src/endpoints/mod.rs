//! The `fetch` endpoint and its router.

use async_trait::async_trait;
use axum::Router;
use service_core::endpoint::{Endpoint, EndpointServer};
use std::sync::Arc;

use crate::dtos::{FetchRequest, SearchResponse};
use crate::services::NonprofitSearch;

pub struct FetchEndpoint<P> {
    search: Arc<P>,
}

impl<P> FetchEndpoint<P> {
    pub fn new(search: Arc<P>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl<P: NonprofitSearch> Endpoint for FetchEndpoint<P> {
    type Request = FetchRequest;
    type Response = SearchResponse;

    const NAME: &'static str = "fetch";

    /// Upstream failures still produce an empty result, with the cause in
    /// `err`.
    async fn call(&self, request: FetchRequest) -> SearchResponse {
        match self.search.fetch_by_name(&request.search).await {
            Ok(results) => {
                tracing::info!(
                    search = %request.search,
                    total_results = results.total_results,
                    "Nonprofit search completed"
                );
                results
            }
            Err(e) => {
                tracing::error!(search = %request.search, error = %e, "Nonprofit search failed");
                SearchResponse::failed(e.to_string())
            }
        }
    }
}

/// `/fetch`, backed by `search`.
pub fn routes<P: NonprofitSearch>(search: Arc<P>) -> Router {
    Router::new().route(
        "/fetch",
        EndpointServer::new(FetchEndpoint::new(search)).into_route(),
    )
}
