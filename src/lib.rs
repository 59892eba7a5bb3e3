#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Types for playing [snakes and ladders](https://en.wikipedia.org/wiki/Snakes_and_ladders)
//! style board games.
//! The goal is to provide a small, fully deterministic game core that a user
//! interface can drive: you hand a [engine::GameSession] a die value and get back a
//! [engine::TurnOutcome] that already has every ladder and snake resolved, the
//! points awarded and the winner (if any) decided. Animating that outcome is up to
//! the caller.
//!
//! ```
//! # use ladders_game_types::{config::GameConfig, engine::GameSession};
//! let config = GameConfig::from_json_str(r#"{"links": [{"from": 5, "to": 19}], "seed": 7}"#)
//!     .unwrap();
//! let mut session = GameSession::new_game(vec![("ana", "red"), ("bo", "blue")], config).unwrap();
//! session.roll_and_move(4).unwrap();
//! assert_eq!(session.players()[0].position(), 19);
//! ```

use config::GameConfig;

pub mod board;
pub mod bonus;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod leaderboard;
pub mod links;
pub mod player;
pub mod types;

/// Loads a config fixture from a given json string
pub fn config_fixture(config_fixture: &str) -> GameConfig {
    let c: Result<GameConfig, _> = serde_json::from_str(config_fixture);
    c.expect("the json literal is valid")
}
