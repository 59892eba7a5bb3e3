//! Ranking players by points.
use itertools::Itertools;
use serde::Serialize;

use crate::player::Player;
use crate::types::PlayerId;

/// Sorts players by points, highest first. Ties keep the order they were given in.
pub fn rank<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<&'a Player> {
    players
        .into_iter()
        .sorted_by(|a, b| a.compare(b))
        .collect()
}

/// One row of a leaderboard
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// 1 based; players with equal points share a rank
    pub rank: usize,
    #[allow(missing_docs)]
    pub player: PlayerId,
    #[allow(missing_docs)]
    pub points: u32,
}

/// Competition ranking ("1, 1, 3") over [rank]
pub fn standings<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<Standing> {
    let ranked = rank(players);
    let mut rows: Vec<Standing> = Vec::with_capacity(ranked.len());
    for (index, player) in ranked.iter().enumerate() {
        let rank = match rows.last() {
            Some(Standing { rank, points, .. }) if *points == player.points() => *rank,
            _ => index + 1,
        };
        rows.push(Standing {
            rank,
            player: player.id,
            points: player.points(),
        });
    }
    rows
}
