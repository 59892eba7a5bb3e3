//! Error types for setting up and playing a session.
use thiserror::Error;

use crate::types::{DieValue, PlayerId, Square};

/// A malformed link table. Always fatal at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    #[allow(missing_docs)]
    #[error("link from square {0} points back to itself")]
    SelfLoop(Square),
    #[allow(missing_docs)]
    #[error("link {from} -> {to} leaves the board (last square is {last})")]
    OutOfBounds { from: Square, to: Square, last: Square },
    #[allow(missing_docs)]
    #[error("square {0} is the source of more than one link")]
    DuplicateSource(Square),
    /// a chain of links returns to a square it already visited
    #[error("links starting at square {start} loop back to square {repeated}")]
    Cycle {
        /// where the chain was entered
        start: Square,
        /// the first square reached twice
        repeated: Square,
    },
}

/// Anything that prevents a session from being created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[allow(missing_docs)]
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[allow(missing_docs)]
    #[error("could not parse json config: {0}")]
    Json(#[from] serde_json::Error),
    #[allow(missing_docs)]
    #[error("could not parse toml config: {0}")]
    Toml(#[from] toml::de::Error),
    #[allow(missing_docs)]
    #[error("board side {0} is not supported, expected 2..=16")]
    InvalidBoardSide(u8),
    #[allow(missing_docs)]
    #[error("invalid die: {0}")]
    InvalidDie(String),
    #[allow(missing_docs)]
    #[error("invalid bonus range {min}..={max}")]
    InvalidBonusRange { min: u32, max: u32 },
    #[allow(missing_docs)]
    #[error("a session holds at most {0} players")]
    TooManyPlayers(usize),
    #[allow(missing_docs)]
    #[error(transparent)]
    Links(#[from] LinkError),
}

/// A rejected turn. The session state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[allow(missing_docs)]
    #[error("roll {roll} is outside {min}..={max} (or zero)")]
    InvalidRoll {
        roll: DieValue,
        min: DieValue,
        max: DieValue,
    },
    #[allow(missing_docs)]
    #[error("no players are registered")]
    EmptySession,
    #[allow(missing_docs)]
    #[error("the game is over, {winner} won")]
    GameOver { winner: PlayerId },
    #[allow(missing_docs)]
    #[error(transparent)]
    Link(#[from] LinkError),
}
