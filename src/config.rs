//! Session configuration.
//!
//! Every field has a default, so an empty JSON object or an empty TOML document
//! is a valid config describing the standard 8x8 game with no links, a six sided
//! die and the "bust on overshoot" rule.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::{Board, STANDARD_SIDE};
use crate::bonus::BonusConfig;
use crate::dice::DieConfig;
use crate::error::ConfigError;
use crate::links::{self, Link, LinkTable};

/// What happens when a roll would carry a player past the terminal square
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OvershootPolicy {
    /// the roll is forfeited: no movement, no bonus, the turn passes
    Bust,
    /// the player stops on the terminal square
    Clamp,
}

impl Default for OvershootPolicy {
    fn default() -> Self {
        OvershootPolicy::Bust
    }
}

/// Which hops of a chain of links pay out their destination's bonus
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChainBonus {
    /// every hop pays
    PerHop,
    /// only the first hop pays
    FirstHop,
}

impl Default for ChainBonus {
    fn default() -> Self {
        ChainBonus::PerHop
    }
}

/// Built in link tables for the 8x8 board
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkPreset {
    #[allow(missing_docs)]
    None,
    #[allow(missing_docs)]
    ClassicLadders,
    #[allow(missing_docs)]
    ClassicSnakesAndLadders,
}

impl Default for LinkPreset {
    fn default() -> Self {
        LinkPreset::None
    }
}

impl LinkPreset {
    fn links(self) -> Vec<Link> {
        match self {
            LinkPreset::None => vec![],
            LinkPreset::ClassicLadders => links::classic_ladders().links(),
            LinkPreset::ClassicSnakesAndLadders => links::classic_snakes_and_ladders().links(),
        }
    }
}

/// Everything needed to set up a session
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// side length of the square board
    pub board_side: u8,
    #[allow(missing_docs)]
    pub overshoot: OvershootPolicy,
    #[allow(missing_docs)]
    pub die: DieConfig,
    #[allow(missing_docs)]
    pub bonus: BonusConfig,
    #[allow(missing_docs)]
    pub chain_bonus: ChainBonus,
    /// built in table the explicit `links` are added to
    pub preset: LinkPreset,
    #[allow(missing_docs)]
    pub links: Vec<Link>,
    /// seeds the session's random number generator; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_side: STANDARD_SIDE,
            overshoot: OvershootPolicy::default(),
            die: DieConfig::default(),
            bonus: BonusConfig::default(),
            chain_bonus: ChainBonus::default(),
            preset: LinkPreset::default(),
            links: vec![],
            seed: None,
        }
    }
}

impl GameConfig {
    #[allow(missing_docs)]
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    #[allow(missing_docs)]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config file, picking the format from the extension (`.toml`, anything
    /// else is read as JSON).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    /// Checks the die and bonus ranges, then builds the board and link table
    pub fn build(&self) -> Result<(Board, LinkTable), ConfigError> {
        self.die.validate()?;
        self.bonus.validate()?;
        let board = Board::new(self.board_side)?;
        let links = LinkTable::new(
            board.last_square(),
            self.preset.links().into_iter().chain(self.links.iter().copied()),
        )?;
        Ok((board, links))
    }
}
