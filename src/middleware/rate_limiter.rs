//! Per-IP sliding-window request throttling.

use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::{Duration, Instant},
};

use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::warn;

use crate::state::SharedState;

/// Tracks request timestamps per client IP over a sliding window.
///
/// Owned by the application state rather than a process-wide static so each
/// server (and each test) throttles independently.
pub struct RateLimiter {
    requests: Mutex<HashMap<IpAddr, Vec<Instant>>>,
}

impl RateLimiter {
    /// Create an empty limiter.
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request from `ip` and report whether it fits under `limit`
    /// within the trailing `window`.
    pub async fn is_allowed(&self, ip: IpAddr, limit: usize, window: Duration) -> bool {
        let now = Instant::now();
        let cutoff = now.checked_sub(window);

        let mut requests = self.requests.lock().await;
        let timestamps = requests.entry(ip).or_default();

        if let Some(cutoff) = cutoff {
            timestamps.retain(|&ts| ts > cutoff);
        }

        if timestamps.len() >= limit {
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Drop IPs whose every recorded request has left the window.
    pub async fn sweep(&self, window: Duration) {
        let Some(cutoff) = Instant::now().checked_sub(window) else {
            return;
        };

        let mut requests = self.requests.lock().await;
        requests.retain(|_, timestamps| timestamps.iter().any(|&ts| ts > cutoff));
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Axum middleware enforcing the configured per-IP limit before a request
/// reaches any handler.
pub async fn rate_limit(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Response {
    // Requests arriving without connection info (e.g. in-process test
    // clients) are accounted against the unspecified address.
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    let policy = state.config().rate_limit;
    if !state
        .rate_limiter()
        .is_allowed(ip, policy.max_requests, policy.window)
        .await
    {
        warn!(%ip, "rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "message": "Too many requests, please try again later."
            })),
        )
            .into_response();
    }

    state.rate_limiter().sweep(policy.window).await;

    next.run(req).await
}
