use serde::Serialize;

use crate::links::{Link, LinkKind};
use crate::types::{DieValue, PlayerId, Square};

/// One discrete piece of movement for a presentation layer to animate
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Step {
    /// moving square by square after the roll, forwards or backwards
    Walk { from: Square, to: Square },
    Ladder { from: Square, to: Square },
    Snake { from: Square, to: Square },
}

impl Step {
    pub(crate) fn hop(link: Link) -> Self {
        match link.kind() {
            LinkKind::Ladder => Step::Ladder {
                from: link.from,
                to: link.to,
            },
            LinkKind::Snake => Step::Snake {
                from: link.from,
                to: link.to,
            },
        }
    }

    /// where this step ends
    pub fn to(&self) -> Square {
        match *self {
            Step::Walk { to, .. } | Step::Ladder { to, .. } | Step::Snake { to, .. } => to,
        }
    }
}

/// The fully resolved result of one turn
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// who rolled
    pub player: PlayerId,
    /// 1 based count of turns played this round, including this one
    pub turn: u32,
    /// the value that was rolled
    pub die: DieValue,
    /// the square the player started the turn on
    pub start: Square,
    /// where the player ended up after every link was taken
    pub final_position: Square,
    /// landing bonus plus whatever the links paid
    pub points_gained: u32,
    /// first link source to last link destination, when any link was taken
    pub link_traversed: Option<Link>,
    /// every link taken, in order
    pub hops: Vec<Link>,
    /// the movement to animate, walk first then one step per hop
    pub steps: Vec<Step>,
    /// the roll overshot the terminal square and was forfeited
    pub busted: bool,
    /// this turn ended the game
    pub won: bool,
}

impl TurnOutcome {
    /// whether the links carried the player up or down overall
    pub fn link_kind(&self) -> Option<LinkKind> {
        self.link_traversed.map(|l| l.kind())
    }

    /// Every square the piece passes through, in order, starting with `start`.
    /// Walks are expanded one square at a time; links jump straight to their
    /// destination.
    pub fn path(&self) -> Vec<Square> {
        let mut path = vec![self.start];
        for step in &self.steps {
            match *step {
                Step::Walk { from, to } if to >= from => path.extend(from + 1..=to),
                Step::Walk { from, to } => path.extend((to..from).rev()),
                Step::Ladder { to, .. } | Step::Snake { to, .. } => path.push(to),
            }
        }
        path
    }
}
