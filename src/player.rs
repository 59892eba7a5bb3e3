//! Players registered with a session.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::types::{DieValue, PlayerId, Square};

/// A participant: identity, where they stand and how many points they hold
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    #[allow(missing_docs)]
    pub id: PlayerId,
    #[allow(missing_docs)]
    pub name: String,
    /// opaque token the presentation layer uses to pick a piece color
    pub color: String,
    position: Square,
    points: u32,
}

impl Player {
    /// A fresh player on square 1 with no points
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            color: color.into(),
            position: 1,
            points: 0,
        }
    }

    #[allow(missing_docs)]
    pub fn position(&self) -> Square {
        self.position
    }

    #[allow(missing_docs)]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Where a move of `delta` squares would end, clamped to `1..=last`
    pub fn landing(&self, delta: DieValue, last: Square) -> Square {
        (self.position as i64 + delta as i64).clamp(1, last as i64) as Square
    }

    /// Moves by `delta` squares, clamped to `1..=last`. Returns the new position.
    pub fn move_by(&mut self, delta: DieValue, last: Square) -> Square {
        self.position = self.landing(delta, last);
        self.position
    }

    /// Puts the player on `square`, clamped to `1..=last`
    pub fn place(&mut self, square: Square, last: Square) {
        self.position = square.clamp(1, last);
    }

    /// adds points, never wrapping
    pub fn add_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }

    /// Ranking comparator: more points sorts first, equal points compare equal so a
    /// stable sort keeps registration order for ties.
    pub fn compare(&self, other: &Self) -> Ordering {
        other.points.cmp(&self.points)
    }

    pub(crate) fn reset(&mut self) {
        self.position = 1;
        self.points = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} square: {} points: {})",
            self.name, self.id, self.position, self.points
        )
    }
}
