use serde::{Deserialize, Serialize};

use super::Player;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The same line seen from the neighbouring cell
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Row/column step towards the neighbour across this side
    pub fn offset(self) -> (isize, isize) {
        match self {
            Side::Top => (-1, 0),
            Side::Bottom => (1, 0),
            Side::Left => (0, -1),
            Side::Right => (0, 1),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }
}

/// Index of an edge in the board's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A line between two dots. Claimed at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    owner: Option<Player>,
}

impl Edge {
    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Returns false without touching the edge if it was already claimed.
    pub(crate) fn claim(&mut self, player: Player) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(player);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            let (dr, dc) = side.offset();
            let (or, oc) = side.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_edge_is_write_once() {
        let mut edge = Edge::default();
        assert!(!edge.is_claimed());
        assert!(edge.claim(Player::Human));
        assert!(!edge.claim(Player::Computer));
        assert_eq!(edge.owner(), Some(Player::Human));
    }
}
