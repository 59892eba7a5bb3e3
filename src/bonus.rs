//! Per-square bonus points.
use fxhash::FxHashSet;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{is_prime, Board};
use crate::error::ConfigError;
use crate::links::LinkTable;
use crate::types::Square;

/// How the elevated bonus on a link destination combines with the base bonus
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkTargetRule {
    /// keep whichever of the base and elevated bonus is larger
    Max,
    /// the elevated bonus replaces the base bonus
    Replace,
    /// the elevated bonus is added on top of the base bonus
    Additive,
}

impl Default for LinkTargetRule {
    fn default() -> Self {
        LinkTargetRule::Max
    }
}

impl LinkTargetRule {
    fn combine(self, base: u32, elevated: u32) -> u32 {
        match self {
            LinkTargetRule::Max => base.max(elevated),
            LinkTargetRule::Replace => elevated,
            LinkTargetRule::Additive => base.saturating_add(elevated),
        }
    }
}

/// Ranges used when generating a [BonusTable]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct BonusConfig {
    /// smallest base bonus
    pub min: u32,
    /// largest base bonus
    pub max: u32,
    /// smallest elevated bonus on a link destination
    pub link_target_min: u32,
    /// largest elevated bonus on a link destination
    pub link_target_max: u32,
    /// flat bonus on the terminal square
    pub terminal: u32,
    #[allow(missing_docs)]
    pub link_target_rule: LinkTargetRule,
    /// added to every prime square, 0 to disable
    pub prime_bonus: u32,
}

impl Default for BonusConfig {
    fn default() -> Self {
        BonusConfig {
            min: 10,
            max: 50,
            link_target_min: 50,
            link_target_max: 100,
            terminal: 100,
            link_target_rule: LinkTargetRule::default(),
            prime_bonus: 0,
        }
    }
}

impl BonusConfig {
    /// checks both ranges are non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidBonusRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.link_target_min > self.link_target_max {
            return Err(ConfigError::InvalidBonusRange {
                min: self.link_target_min,
                max: self.link_target_max,
            });
        }
        Ok(())
    }
}

/// Bonus points for every square of a board. Index 0 is unused.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BonusTable {
    values: Vec<u32>,
}

impl BonusTable {
    /// Draws a base bonus for every square, then raises link destinations and sets
    /// the terminal square.
    pub fn generate<R: Rng + ?Sized>(
        board: &Board,
        links: &LinkTable,
        config: &BonusConfig,
        rng: &mut R,
    ) -> Self {
        let last = board.last_square();
        let destinations: FxHashSet<Square> = links.destinations();
        let mut values = vec![0; last as usize + 1];
        for square in 1..=last {
            let mut bonus = rng.gen_range(config.min..=config.max);
            if destinations.contains(&square) {
                let elevated = rng.gen_range(config.link_target_min..=config.link_target_max);
                bonus = config.link_target_rule.combine(bonus, elevated);
            }
            if is_prime(square as u32) {
                bonus = bonus.saturating_add(config.prime_bonus);
            }
            values[square as usize] = bonus;
        }
        values[last as usize] = config.terminal;
        BonusTable { values }
    }

    /// Builds a table from explicit values, `values[0]` being square 1
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        let mut all = vec![0];
        all.extend(values);
        BonusTable { values: all }
    }

    /// A table where every square is worth nothing
    pub fn zeroed(board: &Board) -> Self {
        Self::from_values(std::iter::repeat(0).take(board.last_square() as usize))
    }

    /// The bonus for landing on `square`, 0 for squares not in the table
    pub fn bonus_for(&self, square: Square) -> u32 {
        if square == 0 {
            return 0;
        }
        self.values.get(square as usize).copied().unwrap_or(0)
    }

    /// (square, bonus) pairs in board order
    pub fn iter(&self) -> impl Iterator<Item = (Square, u32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .skip(1)
            .map(|(square, bonus)| (square as Square, *bonus))
    }
}
