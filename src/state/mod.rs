//! Central application state holding the single shared game record.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::AppConfig, dto::game::GameState, middleware::rate_limiter::RateLimiter};

/// Shared handle cloned into every request handler.
pub type SharedState = Arc<AppState>;

/// Owned application state; constructed once per server (or per test).
pub struct AppState {
    game: RwLock<GameState>,
    rate_limiter: RateLimiter,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The record starts zeroed: 117 zero attention samples and an empty image.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            game: RwLock::new(GameState::default()),
            rate_limiter: RateLimiter::new(),
            config,
        })
    }

    /// Snapshot the current record by value.
    ///
    /// A write racing with this call is observed either fully or not at all;
    /// the read lock rules out a record mixing fields from two writes.
    pub async fn snapshot(&self) -> GameState {
        self.game.read().await.clone()
    }

    /// Replace the record wholesale with an already-validated candidate.
    pub async fn replace(&self, next: GameState) {
        let mut guard = self.game.write().await;
        *guard = next;
    }

    /// Per-IP request throttle owned by this state instance.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Runtime configuration this state was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
