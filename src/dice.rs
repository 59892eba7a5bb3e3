//! Die configurations.
//!
//! Besides the plain six sided die there are two backwards-moving variants: a die
//! that sometimes rolls a small negative value, and a die drawn uniformly from a
//! signed range that skips zero.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::DieValue;

/// chance the reverse die rolls backwards
pub const DEFAULT_REVERSE_CHANCE: f64 = 0.2;

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DieConfig {
    /// rolls 1..=faces
    Standard { faces: DieValue },
    /// rolls -back_faces..=-1 with probability `chance`, otherwise 1..=faces
    Reverse {
        faces: DieValue,
        back_faces: DieValue,
        chance: f64,
    },
    /// rolls min..=max, never zero
    Range { min: DieValue, max: DieValue },
}

impl Default for DieConfig {
    fn default() -> Self {
        DieConfig::Standard { faces: 6 }
    }
}

impl DieConfig {
    /// the reverse die seen in play: 1..=6, or 1..=2 backwards one time in five
    pub fn reverse() -> Self {
        DieConfig::Reverse {
            faces: 6,
            back_faces: 2,
            chance: DEFAULT_REVERSE_CHANCE,
        }
    }

    /// smallest and largest value this die can show
    pub fn bounds(&self) -> (DieValue, DieValue) {
        match *self {
            DieConfig::Standard { faces } => (1, faces),
            DieConfig::Reverse {
                faces, back_faces, ..
            } => (-back_faces, faces),
            DieConfig::Range { min, max } => (min, max),
        }
    }

    /// whether `roll` is a value this die could have produced
    pub fn accepts(&self, roll: DieValue) -> bool {
        let (min, max) = self.bounds();
        roll != 0 && roll >= min && roll <= max
    }

    /// Checks the die can roll at least one non-zero value
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            DieConfig::Standard { faces } if faces < 1 => Err(ConfigError::InvalidDie(format!(
                "a standard die needs at least one face, got {}",
                faces
            ))),
            DieConfig::Reverse {
                faces,
                back_faces,
                chance,
            } => {
                if faces < 1 || back_faces < 1 {
                    Err(ConfigError::InvalidDie(format!(
                        "a reverse die needs faces in both directions, got {} and {}",
                        faces, back_faces
                    )))
                } else if !(0.0..=1.0).contains(&chance) {
                    Err(ConfigError::InvalidDie(format!(
                        "reverse chance {} is not a probability",
                        chance
                    )))
                } else {
                    Ok(())
                }
            }
            DieConfig::Range { min, max } if min > max || (min == 0 && max == 0) => Err(
                ConfigError::InvalidDie(format!("range {}..={} has no non-zero value", min, max)),
            ),
            _ => Ok(()),
        }
    }

    /// Rolls the die
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DieValue {
        match *self {
            DieConfig::Standard { faces } => rng.gen_range(1..=faces),
            DieConfig::Reverse {
                faces,
                back_faces,
                chance,
            } => {
                if rng.gen_bool(chance) {
                    -rng.gen_range(1..=back_faces)
                } else {
                    rng.gen_range(1..=faces)
                }
            }
            DieConfig::Range { min, max } => {
                // draw from the range with zero cut out, then shift the upper half.
                // i64 keeps the span of any pair of i32 bounds in range
                let (min, max) = (min as i64, max as i64);
                let span = max - min + if min <= 0 && max >= 0 { 0 } else { 1 };
                let drawn = min + rng.gen_range(0..span);
                let value = if min <= 0 && drawn >= 0 {
                    drawn + 1
                } else {
                    drawn
                };
                value as DieValue
            }
        }
    }
}
