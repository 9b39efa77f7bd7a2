use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::game::{GameDataPayload, GameState, UpdateResponse},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes serving the shared game-data record.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/game-data", get(get_game_data).post(update_game_data))
}

#[utoipa::path(
    get,
    path = "/api/game-data",
    tag = "game",
    responses((status = 200, description = "Current game record", body = GameState))
)]
/// Return a snapshot of the current game record.
pub async fn get_game_data(State(state): State<SharedState>) -> Json<GameState> {
    let snapshot = game_service::current_game_data(&state).await;
    Json(snapshot)
}

#[utoipa::path(
    post,
    path = "/api/game-data",
    tag = "game",
    request_body = GameDataPayload,
    responses(
        (status = 200, description = "Record replaced", body = UpdateResponse),
        (status = 400, description = "Payload failed validation")
    )
)]
/// Validate the submitted record and replace the stored one wholesale.
pub async fn update_game_data(
    State(state): State<SharedState>,
    Json(payload): Json<GameDataPayload>,
) -> Result<Json<UpdateResponse>, AppError> {
    let confirmation = game_service::update_game_data(&state, payload).await?;
    Ok(Json(confirmation))
}
