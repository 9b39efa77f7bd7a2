//! Handler-facing operations over the shared state.

pub mod documentation;
pub mod game_service;
