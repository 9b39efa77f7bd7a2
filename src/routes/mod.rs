//! HTTP route trees, one module per concern.

use axum::Router;

use crate::state::SharedState;

pub mod docs;
pub mod game;
pub mod root;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = root::router().merge(game::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
