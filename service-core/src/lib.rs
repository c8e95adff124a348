//! service-core: Shared infrastructure for the string and nonprofit services.
pub mod config;
pub mod endpoint;
pub mod error;
pub mod lifecycle;
pub mod middleware;
pub mod observability;

pub use async_trait;
pub use axum;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;
pub use tracing;
