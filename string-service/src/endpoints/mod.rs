//! Endpoints for the string operations and the router that serves them.

use async_trait::async_trait;
use axum::Router;
use service_core::endpoint::{Endpoint, EndpointServer};
use std::sync::Arc;

use crate::dtos::{
    ConcatRequest, ConcatResponse, CountRequest, CountResponse, UppercaseRequest,
    UppercaseResponse,
};
use crate::services::StringService;

pub struct UppercaseEndpoint<S> {
    svc: Arc<S>,
}

impl<S> UppercaseEndpoint<S> {
    pub fn new(svc: Arc<S>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl<S: StringService> Endpoint for UppercaseEndpoint<S> {
    type Request = UppercaseRequest;
    type Response = UppercaseResponse;

    const NAME: &'static str = "uppercase";

    async fn call(&self, request: UppercaseRequest) -> UppercaseResponse {
        match self.svc.uppercase(&request.s) {
            Ok(v) => UppercaseResponse { v, err: None },
            Err(e) => UppercaseResponse {
                v: String::new(),
                err: Some(e.to_string()),
            },
        }
    }
}

pub struct ConcatEndpoint<S> {
    svc: Arc<S>,
}

impl<S> ConcatEndpoint<S> {
    pub fn new(svc: Arc<S>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl<S: StringService> Endpoint for ConcatEndpoint<S> {
    type Request = ConcatRequest;
    type Response = ConcatResponse;

    const NAME: &'static str = "concat";

    async fn call(&self, request: ConcatRequest) -> ConcatResponse {
        match self.svc.concat(&request.s) {
            Ok(v) => ConcatResponse { v, err: None },
            Err(e) => ConcatResponse {
                v: String::new(),
                err: Some(e.to_string()),
            },
        }
    }
}

pub struct CountEndpoint<S> {
    svc: Arc<S>,
}

impl<S> CountEndpoint<S> {
    pub fn new(svc: Arc<S>) -> Self {
        Self { svc }
    }
}

#[async_trait]
impl<S: StringService> Endpoint for CountEndpoint<S> {
    type Request = CountRequest;
    type Response = CountResponse;

    const NAME: &'static str = "count";

    async fn call(&self, request: CountRequest) -> CountResponse {
        CountResponse {
            v: self.svc.count(&request.s),
        }
    }
}

/// `/uppercase`, `/concat` and `/count`, all backed by `svc`.
pub fn routes<S: StringService>(svc: S) -> Router {
    let svc = Arc::new(svc);

    Router::new()
        .route(
            "/uppercase",
            EndpointServer::new(UppercaseEndpoint::new(svc.clone())).into_route(),
        )
        .route(
            "/concat",
            EndpointServer::new(ConcatEndpoint::new(svc.clone())).into_route(),
        )
        .route(
            "/count",
            EndpointServer::new(CountEndpoint::new(svc)).into_route(),
        )
}
