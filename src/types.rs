//! various types that are useful for working with a ladders game session
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::time::Duration;

/// A square on the board, numbered from 1 up to the terminal square
pub type Square = u16;

/// A die value. Negative values move a player backwards.
pub type DieValue = i32;

/// The most players a single session will register.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// token to represent a player id. Ids are handed out sequentially when players
/// are registered with a session, and are only meaningful within that session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// convert this player ID to a usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u8::deserialize(deserializer).map(PlayerId)
    }
}

/// A game for which one can get the player ids
pub trait PlayerIDGettableGame {
    #[allow(missing_docs)]
    type PlayerIDType: PartialEq + Debug + Serialize + Eq + Hash + Clone + Send;

    #[allow(missing_docs)]
    fn get_player_ids(&self) -> Vec<Self::PlayerIDType>;
}

/// A game which can have it's winner determined
pub trait VictorDeterminableGame: std::fmt::Debug + PlayerIDGettableGame {
    #[allow(missing_docs)]
    fn is_over(&self) -> bool;

    /// get the winner for a given game, will return None if the game is not over
    fn get_winner(&self) -> Option<Self::PlayerIDType>;
}

/// Instruments to be used when playing turns
pub trait TurnInstruments: std::fmt::Debug {
    #[allow(missing_docs)]
    fn observe_turn(&self, duration: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_serializes_as_number() {
        let id = PlayerId(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let back: PlayerId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
        assert_eq!(id.as_usize(), 3);
        assert_eq!(id.to_string(), "p3");
    }
}
