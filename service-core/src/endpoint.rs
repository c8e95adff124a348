//! Transport-independent endpoints and their HTTP server.
//!
//! An [`Endpoint`] takes a decoded request and produces a response. Domain
//! failures belong inside the response type (usually an `err` field), so an
//! endpoint never fails at the transport level. [`EndpointServer`] wraps an
//! endpoint into an axum route that:
//!
//! 1. decodes the raw body, answering `400 Bad Request` when that fails,
//! 2. invokes the endpoint,
//! 3. encodes the response with `200 OK`.
//!
//! # Example
//!
//! ```ignore
//! use service_core::endpoint::{Endpoint, EndpointServer};
//!
//! let router = axum::Router::new()
//!     .route("/count", EndpointServer::new(CountEndpoint::new(svc)).into_route());
//! ```

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    Json,
    body::Bytes,
    response::{IntoResponse, Response},
    routing::{MethodRouter, post},
};
use metrics::counter;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use thiserror::Error;

/// Failure to turn a raw request body into an endpoint's request type.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid request body: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait Endpoint: Send + Sync + 'static {
    type Request: DeserializeOwned + Send;
    type Response: Serialize + Send;

    /// Operation name used in logs and metrics.
    const NAME: &'static str;

    /// Decode the raw request body.
    ///
    /// The body is parsed as JSON whatever `Content-Type` the caller sent.
    fn decode(body: &[u8]) -> Result<Self::Request, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Encode the endpoint's response.
    fn encode(response: Self::Response) -> Response {
        Json(response).into_response()
    }

    async fn call(&self, request: Self::Request) -> Self::Response;
}

/// HTTP transport for a single [`Endpoint`].
pub struct EndpointServer<E> {
    endpoint: Arc<E>,
}

impl<E> Clone for EndpointServer<E> {
    fn clone(&self) -> Self {
        Self {
            endpoint: Arc::clone(&self.endpoint),
        }
    }
}

impl<E: Endpoint> EndpointServer<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint: Arc::new(endpoint),
        }
    }

    /// Run the decode, invoke, encode pipeline for one request body.
    pub async fn handle(&self, body: Bytes) -> Result<Response, AppError> {
        let request = match E::decode(&body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(operation = E::NAME, error = %e, "Failed to decode request");
                counter!("endpoint_requests_total", "operation" => E::NAME, "outcome" => "decode_error")
                    .increment(1);
                return Err(e.into());
            }
        };

        tracing::debug!(operation = E::NAME, "Dispatching request");
        let response = self.endpoint.call(request).await;
        counter!("endpoint_requests_total", "operation" => E::NAME, "outcome" => "ok").increment(1);

        Ok(E::encode(response))
    }

    /// Build a `POST` route serving this endpoint.
    pub fn into_route<S>(self) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        post(move |body: Bytes| async move { self.handle(body).await })
    }
}
