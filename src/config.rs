//! Runtime configuration resolved from the environment.

use std::{env, time::Duration};

/// Environment variable selecting the listening port.
const PORT_ENV: &str = "PORT";
/// Port used when [`PORT_ENV`] is unset or unparsable.
const DEFAULT_PORT: u16 = 3000;
/// Maximum accepted request body size in bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 10_000_000;
/// Length of the per-client rate-limit window.
const DEFAULT_RATE_WINDOW: Duration = Duration::from_secs(15 * 60);
/// Requests allowed per client within one window.
const DEFAULT_RATE_MAX_REQUESTS: usize = 100;

/// Immutable runtime configuration shared across the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds to.
    pub port: u16,
    /// Request body cap enforced before a body is buffered.
    pub max_body_bytes: usize,
    /// Per-client request throttling policy.
    pub rate_limit: RateLimitConfig,
}

/// Sliding-window rate-limit policy applied per client IP.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Window over which requests are counted.
    pub window: Duration,
    /// Maximum requests allowed inside one window.
    pub max_requests: usize,
}

impl AppConfig {
    /// Build the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let port = env::var(PORT_ENV)
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            rate_limit: RateLimitConfig {
                window: DEFAULT_RATE_WINDOW,
                max_requests: DEFAULT_RATE_MAX_REQUESTS,
            },
        }
    }
}
