//! Request and response payloads exchanged with HTTP clients.

pub mod game;
