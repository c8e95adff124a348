//! Diagnostic page served for every path without a route of its own.

use axum::http::{header::USER_AGENT, HeaderMap, Uri};
use service_core::error::AppError;
use std::net::{IpAddr, Ipv4Addr};

pub async fn whoami(uri: Uri, headers: HeaderMap) -> Result<String, AppError> {
    let path = uri.path();
    let path = path.strip_prefix('/').unwrap_or(path);

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let host = hostname::get().map_err(|e| {
        tracing::error!("Failed to read host name: {}", e);
        AppError::from(e)
    })?;
    let host = host.to_string_lossy();

    let addrs = ipv4_addresses(&host).await;

    Ok(render(path, user_agent, &host, &addrs))
}

async fn ipv4_addresses(host: &str) -> Vec<Ipv4Addr> {
    match tokio::net::lookup_host((host, 0)).await {
        Ok(resolved) => {
            let mut addrs: Vec<Ipv4Addr> = resolved
                .filter_map(|addr| match addr.ip() {
                    IpAddr::V4(v4) => Some(v4),
                    IpAddr::V6(_) => None,
                })
                .collect();
            addrs.dedup();
            addrs
        }
        Err(e) => {
            tracing::warn!(host = %host, error = %e, "Failed to resolve host name");
            Vec::new()
        }
    }
}

fn render(path: &str, user_agent: &str, host: &str, addrs: &[Ipv4Addr]) -> String {
    let mut body = format!("{}\n\n{}\n\n{}\n\n", path, user_agent, host);
    for addr in addrs {
        body.push_str(&addr.to_string());
        body.push('\n');
    }
    body
}
