//! Read and replace operations on the shared game record.

use tracing::{debug, info, warn};

use crate::{
    dto::game::{GameDataPayload, GameState, UpdateResponse, validate_game_data},
    error::AppError,
    state::SharedState,
};

/// Snapshot the current record. Never fails.
pub async fn current_game_data(state: &SharedState) -> GameState {
    state.snapshot().await
}

/// Validate a write candidate and, on success, replace the record wholesale.
///
/// A rejected candidate leaves the record untouched; the violated check and
/// the offending value's shape are logged before the rejection is returned.
pub async fn update_game_data(
    state: &SharedState,
    payload: GameDataPayload,
) -> Result<UpdateResponse, AppError> {
    debug!(?payload, "received game data");

    match validate_game_data(&payload) {
        Ok(next) => {
            state.replace(next).await;
            info!("game data updated");
            Ok(UpdateResponse::updated())
        }
        Err(violation) => {
            warn!(%violation, "rejected game data");
            Err(AppError::InvalidFormat)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{config::AppConfig, dto::game::ATTENTION_LEN, state::AppState};

    use super::*;

    fn valid_payload() -> GameDataPayload {
        serde_json::from_value(json!({
            "attentions": (1..=ATTENTION_LEN).map(|n| n as f64).collect::<Vec<_>>(),
            "game_result": { "image_base64": "abc" },
        }))
        .expect("payload deserializes")
    }

    #[tokio::test]
    async fn accepted_write_replaces_the_record() {
        let state = AppState::new(AppConfig::default());

        let response = update_game_data(&state, valid_payload())
            .await
            .expect("valid write");
        assert_eq!(response.message, "Game data updated successfully!");

        let stored = current_game_data(&state).await;
        assert_eq!(stored.attentions[0], 1.0);
        assert_eq!(stored.game_result.image_base64, "abc");
    }

    #[tokio::test]
    async fn rejected_write_leaves_the_record_untouched() {
        let state = AppState::new(AppConfig::default());
        let before = current_game_data(&state).await;

        let payload: GameDataPayload = serde_json::from_value(json!({
            "attentions": 42,
            "game_result": { "image_base64": "abc" },
        }))
        .expect("payload deserializes");

        let result = update_game_data(&state, payload).await;
        assert!(matches!(result, Err(AppError::InvalidFormat)));
        assert_eq!(current_game_data(&state).await, before);
    }
}
