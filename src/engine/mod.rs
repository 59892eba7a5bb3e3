//! The turn engine.
//!
//! A [GameSession] owns the board, the link and bonus tables, the players and the
//! random number generator. Each call to [GameSession::roll_and_move] resolves a
//! whole turn at once (walk, every link hop, bonuses, win check, turn rotation) and
//! hands back a [TurnOutcome] describing it; nothing is left half applied for a
//! presentation layer to finish.
mod outcome;

pub use outcome::{Step, TurnOutcome};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::bonus::BonusTable;
use crate::config::{ChainBonus, GameConfig, OvershootPolicy};
use crate::error::{ConfigError, TurnError};
use crate::leaderboard::{self, Standing};
use crate::links::{Link, LinkTable};
use crate::player::Player;
use crate::types::{
    DieValue, PlayerIDGettableGame, PlayerId, TurnInstruments, VictorDeterminableGame,
    MAX_PLAYERS,
};

/// Where a session is between turns
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "state", content = "player", rename_all = "snake_case")]
pub enum TurnState {
    /// waiting on the player at this index to roll
    AwaitingRoll(usize),
    /// someone reached the terminal square
    GameOver(PlayerId),
}

/// A running game
#[derive(Debug, Clone)]
pub struct GameSession<R = SmallRng> {
    config: GameConfig,
    board: Board,
    links: LinkTable,
    bonuses: BonusTable,
    players: Vec<Player>,
    state: TurnState,
    turn: u32,
    rng: R,
}

impl GameSession<SmallRng> {
    /// Sets up a session for `players`, given as (name, color) pairs in turn order.
    ///
    /// The random number generator is seeded from `config.seed` when present.
    pub fn new_game<N, C>(
        players: impl IntoIterator<Item = (N, C)>,
        config: GameConfig,
    ) -> Result<Self, ConfigError>
    where
        N: Into<String>,
        C: Into<String>,
    {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(players, config, rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Like [GameSession::new_game] but with a caller supplied random number
    /// generator. The bonus table is drawn from it immediately.
    pub fn with_rng<N, C>(
        players: impl IntoIterator<Item = (N, C)>,
        config: GameConfig,
        mut rng: R,
    ) -> Result<Self, ConfigError>
    where
        N: Into<String>,
        C: Into<String>,
    {
        let (board, links) = config.build()?;
        let bonuses = BonusTable::generate(&board, &links, &config.bonus, &mut rng);
        let mut session = GameSession {
            config,
            board,
            links,
            bonuses,
            players: vec![],
            state: TurnState::AwaitingRoll(0),
            turn: 0,
            rng,
        };
        for (name, color) in players {
            session.add_player(name, color)?;
        }
        debug!(
            players = session.players.len(),
            squares = session.board.last_square(),
            links = session.links.len(),
            "session created"
        );
        Ok(session)
    }

    /// Replaces the generated bonus table
    pub fn with_bonuses(mut self, bonuses: BonusTable) -> Self {
        self.bonuses = bonuses;
        self
    }

    /// Registers another player at the end of the turn order
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<PlayerId, ConfigError> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(MAX_PLAYERS));
        }
        let id = PlayerId(self.players.len() as u8);
        self.players.push(Player::new(id, name, color));
        Ok(id)
    }

    /// Plays one turn for the current player with an already rolled `die`.
    ///
    /// Rejected turns leave the session untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn roll_and_move(&mut self, die: DieValue) -> Result<TurnOutcome, TurnError> {
        let index = self.ready()?;
        if !self.config.die.accepts(die) {
            let (min, max) = self.config.die.bounds();
            warn!(die, min, max, "rejected roll");
            return Err(TurnError::InvalidRoll {
                roll: die,
                min,
                max,
            });
        }

        let last = self.board.last_square();
        let start = self.players[index].position();
        let target = start as i64 + die as i64;
        let busted = target > last as i64 && self.config.overshoot == OvershootPolicy::Bust;

        let mut steps = vec![];
        let mut hops = vec![];
        let mut points_gained = 0u32;
        let mut final_position = start;
        if !busted {
            let landed = self.players[index].landing(die, last);
            // resolve before touching the player so a bad table leaves no trace
            hops = self.links.chain(landed)?;
            if landed != start {
                steps.push(Step::Walk {
                    from: start,
                    to: landed,
                });
            }
            points_gained = self.bonuses.bonus_for(landed);
            final_position = landed;
            for (i, hop) in hops.iter().enumerate() {
                steps.push(Step::hop(*hop));
                if i == 0 || self.config.chain_bonus == ChainBonus::PerHop {
                    points_gained = points_gained.saturating_add(self.bonuses.bonus_for(hop.to));
                }
                final_position = hop.to;
            }
            let player = &mut self.players[index];
            player.move_by(die, last);
            if !hops.is_empty() {
                player.place(final_position, last);
            }
            player.add_points(points_gained);
        }

        self.turn += 1;
        let player = &self.players[index];
        let won = player.position() >= last;
        let link_traversed = match (hops.first(), hops.last()) {
            (Some(first), Some(end)) => Some(Link {
                from: first.from,
                to: end.to,
            }),
            _ => None,
        };
        let outcome = TurnOutcome {
            player: player.id,
            turn: self.turn,
            die,
            start,
            final_position,
            points_gained,
            link_traversed,
            hops,
            steps,
            busted,
            won,
        };
        debug!(
            player = %player.id,
            die,
            start,
            final_position,
            points_gained,
            busted,
            "turn resolved"
        );

        if won {
            info!(player = %player.id, name = %player.name, turn = self.turn, "game won");
            self.state = TurnState::GameOver(player.id);
        } else {
            self.state = TurnState::AwaitingRoll((index + 1) % self.players.len());
        }
        Ok(outcome)
    }

    /// Rolls the configured die with the session's generator and plays the turn
    pub fn roll(&mut self) -> Result<TurnOutcome, TurnError> {
        self.ready()?;
        let die = self.config.die.sample(&mut self.rng);
        self.roll_and_move(die)
    }

    /// [GameSession::roll_and_move], reporting how long the turn took
    pub fn roll_and_move_instrumented<I: TurnInstruments>(
        &mut self,
        instruments: &I,
        die: DieValue,
    ) -> Result<TurnOutcome, TurnError> {
        let start = Instant::now();
        let result = self.roll_and_move(die);
        instruments.observe_turn(start.elapsed());
        result
    }

    /// Keeps rolling until someone wins or `max_turns` turns have been played
    pub fn play_out(&mut self, max_turns: usize) -> Result<Vec<TurnOutcome>, TurnError> {
        let mut outcomes = vec![];
        while outcomes.len() < max_turns && self.winner().is_none() {
            outcomes.push(self.roll()?);
        }
        Ok(outcomes)
    }

    /// Starts a new round with the same players, board, links and bonuses
    pub fn restart(&mut self) {
        for player in self.players.iter_mut() {
            player.reset();
        }
        self.state = TurnState::AwaitingRoll(0);
        self.turn = 0;
        debug!("session restarted");
    }

    fn ready(&self) -> Result<usize, TurnError> {
        if self.players.is_empty() {
            warn!("roll requested with no players registered");
            return Err(TurnError::EmptySession);
        }
        match self.state {
            TurnState::AwaitingRoll(index) => Ok(index),
            TurnState::GameOver(winner) => Err(TurnError::GameOver { winner }),
        }
    }
}

impl<R> GameSession<R> {
    /// The player whose turn it is, `None` with no players or once the game is over
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            TurnState::AwaitingRoll(index) => self.players.get(index),
            TurnState::GameOver(_) => None,
        }
    }

    /// Players ranked by points, ties in turn order
    pub fn standings(&self) -> Vec<&Player> {
        leaderboard::rank(&self.players)
    }

    /// [GameSession::standings] with shared ranks for ties
    pub fn leaderboard(&self) -> Vec<Standing> {
        leaderboard::standings(&self.players)
    }

    /// The winner, once there is one
    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            TurnState::GameOver(id) => self.player(id),
            TurnState::AwaitingRoll(_) => None,
        }
    }

    #[allow(missing_docs)]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.as_usize())
    }

    /// players in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[allow(missing_docs)]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// turns played this round
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[allow(missing_docs)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    #[allow(missing_docs)]
    pub fn bonuses(&self) -> &BonusTable {
        &self.bonuses
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl<R> PlayerIDGettableGame for GameSession<R> {
    type PlayerIDType = PlayerId;

    fn get_player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }
}

impl<R: std::fmt::Debug> VictorDeterminableGame for GameSession<R> {
    fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    fn get_winner(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::GameOver(id) => Some(id),
            TurnState::AwaitingRoll(_) => None,
        }
    }
}
