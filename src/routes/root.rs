use axum::{Router, routing::get};

use crate::state::SharedState;

/// Greeting confirming the server is up without any backing database.
const GREETING: &str = "Hello, the server is running without a database!";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Server is running", body = String))
)]
/// Return a plain-text liveness greeting.
pub async fn greeting() -> &'static str {
    GREETING
}

/// Configure the root routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(greeting))
}
