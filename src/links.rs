//! Ladders and snakes.
//!
//! A [LinkTable] maps a source square to the square a player is relocated to when
//! they land there. Tables are validated once when they are built; after that,
//! every chain of links is known to terminate.
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::LinkError;
use crate::types::Square;

/// One entry of a link table, as it appears in configuration
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl Link {
    #[allow(missing_docs)]
    pub fn kind(&self) -> LinkKind {
        LinkKind::of(self.from, self.to)
    }
}

/// Whether a link carries a player up or down the board
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// destination is above the source
    Ladder,
    /// destination is below the source
    Snake,
}

impl LinkKind {
    /// classify a hop from `from` to `to`
    pub fn of(from: Square, to: Square) -> Self {
        if to > from {
            LinkKind::Ladder
        } else {
            LinkKind::Snake
        }
    }
}

/// A validated, immutable link table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    links: FxHashMap<Square, Square>,
}

impl LinkTable {
    /// Builds a table for a board whose last square is `last`.
    ///
    /// Rejects self loops, squares off the board, sources that appear twice and
    /// chains of links that loop back on themselves.
    pub fn new(last: Square, links: impl IntoIterator<Item = Link>) -> Result<Self, LinkError> {
        let mut table = FxHashMap::default();
        for Link { from, to } in links {
            if from == to {
                return Err(LinkError::SelfLoop(from));
            }
            let on_board = |s: Square| s >= 1 && s <= last;
            if !on_board(from) || !on_board(to) {
                return Err(LinkError::OutOfBounds { from, to, last });
            }
            if table.insert(from, to).is_some() {
                return Err(LinkError::DuplicateSource(from));
            }
        }
        let table = LinkTable { links: table };
        for source in table.links.keys() {
            table.chain(*source)?;
        }
        Ok(table)
    }

    /// a table with no links at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The destination of the link starting at `square`, if there is one
    pub fn resolve(&self, square: Square) -> Option<Square> {
        self.links.get(&square).copied()
    }

    /// Follows links starting at `square` until landing on a square that is not a
    /// link source. Returns every hop taken, in order; empty if `square` is not a
    /// source.
    pub fn chain(&self, square: Square) -> Result<Vec<Link>, LinkError> {
        let mut hops = vec![];
        let mut visited = FxHashSet::default();
        visited.insert(square);
        let mut current = square;
        while let Some(to) = self.resolve(current) {
            if !visited.insert(to) || hops.len() > self.links.len() {
                return Err(LinkError::Cycle {
                    start: square,
                    repeated: to,
                });
            }
            hops.push(Link { from: current, to });
            current = to;
        }
        Ok(hops)
    }

    /// All links sorted by source square
    pub fn links(&self) -> Vec<Link> {
        self.links
            .iter()
            .map(|(from, to)| Link {
                from: *from,
                to: *to,
            })
            .sorted_by_key(|l| l.from)
            .collect()
    }

    /// Squares that some link leads to
    pub fn destinations(&self) -> FxHashSet<Square> {
        self.links.values().copied().collect()
    }

    #[allow(missing_docs)]
    pub fn ladders(&self) -> Vec<Link> {
        self.links()
            .into_iter()
            .filter(|l| l.kind() == LinkKind::Ladder)
            .collect()
    }

    #[allow(missing_docs)]
    pub fn snakes(&self) -> Vec<Link> {
        self.links()
            .into_iter()
            .filter(|l| l.kind() == LinkKind::Snake)
            .collect()
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

fn pairs(raw: &[(Square, Square)]) -> impl Iterator<Item = Link> + '_ {
    raw.iter().map(|(from, to)| Link {
        from: *from,
        to: *to,
    })
}

const CLASSIC_LADDERS: &[(Square, Square)] =
    &[(3, 22), (5, 19), (11, 26), (20, 38), (27, 46), (36, 55), (43, 61)];

const CLASSIC_SNAKES: &[(Square, Square)] =
    &[(17, 4), (31, 9), (40, 24), (49, 30), (54, 34), (62, 45)];

/// The ladder only table for the 8x8 board
pub fn classic_ladders() -> LinkTable {
    LinkTable {
        links: pairs(CLASSIC_LADDERS).map(|l| (l.from, l.to)).collect(),
    }
}

/// Ladders plus snakes for the 8x8 board
pub fn classic_snakes_and_ladders() -> LinkTable {
    LinkTable {
        links: pairs(CLASSIC_LADDERS)
            .chain(pairs(CLASSIC_SNAKES))
            .map(|l| (l.from, l.to))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(from: Square, to: Square) -> Link {
        Link { from, to }
    }

    #[test]
    fn test_resolve() {
        let table = LinkTable::new(64, vec![link(5, 19), link(40, 24)]).unwrap();
        assert_eq!(table.resolve(5), Some(19));
        assert_eq!(table.resolve(40), Some(24));
        assert_eq!(table.resolve(19), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.ladders(), vec![link(5, 19)]);
        assert_eq!(table.snakes(), vec![link(40, 24)]);
    }

    #[test]
    fn test_rejects_malformed_tables() {
        assert_eq!(
            LinkTable::new(64, vec![link(7, 7)]),
            Err(LinkError::SelfLoop(7))
        );
        assert_eq!(
            LinkTable::new(64, vec![link(60, 65)]),
            Err(LinkError::OutOfBounds {
                from: 60,
                to: 65,
                last: 64
            })
        );
        assert_eq!(
            LinkTable::new(64, vec![link(0, 5)]),
            Err(LinkError::OutOfBounds {
                from: 0,
                to: 5,
                last: 64
            })
        );
        assert_eq!(
            LinkTable::new(64, vec![link(4, 10), link(4, 12)]),
            Err(LinkError::DuplicateSource(4))
        );
    }

    #[test]
    fn test_rejects_cycles() {
        let err = LinkTable::new(64, vec![link(4, 20), link(20, 9), link(9, 4)]).unwrap_err();
        assert!(matches!(err, LinkError::Cycle { .. }));

        let err = LinkTable::new(64, vec![link(10, 30), link(30, 10)]).unwrap_err();
        assert!(matches!(err, LinkError::Cycle { .. }));
    }

    #[test]
    fn test_chain_follows_every_hop() {
        let table = LinkTable::new(64, vec![link(3, 20), link(20, 9), link(9, 33)]).unwrap();
        assert_eq!(
            table.chain(3).unwrap(),
            vec![link(3, 20), link(20, 9), link(9, 33)]
        );
        assert_eq!(table.chain(9).unwrap(), vec![link(9, 33)]);
        assert!(table.chain(33).unwrap().is_empty());
        assert!(table.chain(1).unwrap().is_empty());
    }

    #[test]
    fn test_kind() {
        assert_eq!(LinkKind::of(5, 19), LinkKind::Ladder);
        assert_eq!(LinkKind::of(19, 5), LinkKind::Snake);
    }

    #[test]
    fn test_presets_are_well_formed() {
        for preset in [classic_ladders(), classic_snakes_and_ladders()] {
            let rebuilt = LinkTable::new(64, preset.links()).unwrap();
            assert_eq!(rebuilt, preset);
            for l in preset.links() {
                assert!(preset.resolve(l.to).is_none(), "{:?} chains", l);
            }
        }
        assert!(classic_ladders().snakes().is_empty());
        assert_eq!(classic_snakes_and_ladders().snakes().len(), 6);
    }
}
