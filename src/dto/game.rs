//! Wire types for the shared game record and validation of write candidates.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// Number of samples in the attention vector.
pub const ATTENTION_LEN: usize = 117;

/// The single shared record held by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameState {
    /// Fixed-length vector of attention samples.
    pub attentions: Vec<f64>,
    /// Outcome of the most recent game.
    pub game_result: GameResult,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            attentions: vec![0.0; ATTENTION_LEN],
            game_result: GameResult {
                image_base64: String::new(),
            },
        }
    }
}

/// Result block carried inside the shared record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameResult {
    /// Base64-encoded capture of the finished game, possibly empty.
    pub image_base64: String,
}

/// Raw write candidate as received on the wire.
///
/// Both fields stay untyped so that every shape violation is turned into a
/// [`FormatViolation`] by [`validate_game_data`] instead of bouncing off the
/// JSON extractor with a generic rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GameDataPayload {
    /// Candidate attention vector; must be an array of exactly 117 numbers.
    #[serde(default)]
    #[schema(value_type = Vec<f64>)]
    pub attentions: Value,
    /// Candidate result block; must be an object with a string `image_base64`.
    #[serde(default)]
    #[schema(value_type = GameResult)]
    pub game_result: Value,
}

/// Confirmation returned after a successful write.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateResponse {
    /// Human-readable confirmation message.
    pub message: String,
}

impl UpdateResponse {
    /// Confirmation for an accepted game-data write.
    pub fn updated() -> Self {
        Self {
            message: "Game data updated successfully!".to_string(),
        }
    }
}

/// A failed check on a write candidate, naming the offending value's shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatViolation {
    /// `attentions` is missing or not a sequence.
    #[error("attentions is not an array (got {found})")]
    AttentionsNotArray {
        /// JSON type of the received value.
        found: &'static str,
    },
    /// `attentions` has the wrong number of elements.
    #[error("attentions has {len} elements, expected {ATTENTION_LEN}")]
    AttentionsWrongLength {
        /// Number of elements received.
        len: usize,
    },
    /// An `attentions` element is not numeric.
    #[error("attentions[{index}] is not a number (got {found})")]
    AttentionNotNumeric {
        /// Position of the offending element.
        index: usize,
        /// JSON type of the offending element.
        found: &'static str,
    },
    /// `game_result` is missing or not an object.
    #[error("game_result is not an object (got {found})")]
    GameResultNotObject {
        /// JSON type of the received value.
        found: &'static str,
    },
    /// `game_result.image_base64` is missing or not a string.
    #[error("game_result.image_base64 is not a string (got {found})")]
    ImageNotString {
        /// JSON type of the received value, or "missing".
        found: &'static str,
    },
}

/// Check a write candidate against the record shape, returning the typed
/// record on success or the first violated check.
pub fn validate_game_data(payload: &GameDataPayload) -> Result<GameState, FormatViolation> {
    let entries =
        payload
            .attentions
            .as_array()
            .ok_or(FormatViolation::AttentionsNotArray {
                found: json_type(&payload.attentions),
            })?;

    if entries.len() != ATTENTION_LEN {
        return Err(FormatViolation::AttentionsWrongLength {
            len: entries.len(),
        });
    }

    let mut attentions = Vec::with_capacity(ATTENTION_LEN);
    for (index, entry) in entries.iter().enumerate() {
        let sample = entry.as_f64().ok_or(FormatViolation::AttentionNotNumeric {
            index,
            found: json_type(entry),
        })?;
        attentions.push(sample);
    }

    let result =
        payload
            .game_result
            .as_object()
            .ok_or(FormatViolation::GameResultNotObject {
                found: json_type(&payload.game_result),
            })?;

    let image_base64 = match result.get("image_base64") {
        Some(Value::String(image)) => image.clone(),
        Some(other) => {
            return Err(FormatViolation::ImageNotString {
                found: json_type(other),
            });
        }
        None => return Err(FormatViolation::ImageNotString { found: "missing" }),
    };

    Ok(GameState {
        attentions,
        game_result: GameResult { image_base64 },
    })
}

/// Name of a JSON value's type, for diagnostics.
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: serde_json::Value) -> GameDataPayload {
        serde_json::from_value(value).expect("payload deserializes")
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "attentions": vec![0.5; ATTENTION_LEN],
            "game_result": { "image_base64": "abc" },
        })
    }

    #[test]
    fn accepts_valid_payload() {
        let state = validate_game_data(&payload(valid_body())).expect("valid payload");
        assert_eq!(state.attentions.len(), ATTENTION_LEN);
        assert_eq!(state.attentions[0], 0.5);
        assert_eq!(state.game_result.image_base64, "abc");
    }

    #[test]
    fn rejects_short_and_long_vectors() {
        for len in [ATTENTION_LEN - 1, ATTENTION_LEN + 1] {
            let body = json!({
                "attentions": vec![0.0; len],
                "game_result": { "image_base64": "" },
            });
            assert_eq!(
                validate_game_data(&payload(body)),
                Err(FormatViolation::AttentionsWrongLength { len })
            );
        }
    }

    #[test]
    fn rejects_non_array_attentions() {
        let mut body = valid_body();
        body["attentions"] = json!(42);
        assert_eq!(
            validate_game_data(&payload(body)),
            Err(FormatViolation::AttentionsNotArray { found: "number" })
        );
    }

    #[test]
    fn rejects_missing_attentions() {
        let body = json!({ "game_result": { "image_base64": "" } });
        assert_eq!(
            validate_game_data(&payload(body)),
            Err(FormatViolation::AttentionsNotArray { found: "null" })
        );
    }

    #[test]
    fn rejects_non_numeric_entry() {
        let mut body = valid_body();
        body["attentions"][3] = json!("high");
        assert_eq!(
            validate_game_data(&payload(body)),
            Err(FormatViolation::AttentionNotNumeric {
                index: 3,
                found: "string"
            })
        );
    }

    #[test]
    fn rejects_missing_game_result() {
        let body = json!({ "attentions": vec![0.0; ATTENTION_LEN] });
        assert_eq!(
            validate_game_data(&payload(body)),
            Err(FormatViolation::GameResultNotObject { found: "null" })
        );
    }

    #[test]
    fn rejects_scalar_game_result() {
        let mut body = valid_body();
        body["game_result"] = json!("done");
        assert_eq!(
            validate_game_data(&payload(body)),
            Err(FormatViolation::GameResultNotObject { found: "string" })
        );
    }

    #[test]
    fn rejects_non_string_image() {
        let mut body = valid_body();
        body["game_result"] = json!({ "image_base64": 7 });
        assert_eq!(
            validate_game_data(&payload(body)),
            Err(FormatViolation::ImageNotString { found: "number" })
        );
    }

    #[test]
    fn rejects_absent_image_field() {
        let mut body = valid_body();
        body["game_result"] = json!({});
        assert_eq!(
            validate_game_data(&payload(body)),
            Err(FormatViolation::ImageNotString { found: "missing" })
        );
    }

    #[test]
    fn default_state_is_zeroed() {
        let state = GameState::default();
        assert_eq!(state.attentions, vec![0.0; ATTENTION_LEN]);
        assert!(state.game_result.image_base64.is_empty());
    }
}
