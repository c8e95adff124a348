//! HTTP handlers outside the endpoint pipeline.

pub mod health;
pub mod whoami;
