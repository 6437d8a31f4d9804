use super::{EdgeId, Player, Side};

/// One box of the grid. Its four sides are indices into the board's edge
/// arena; neighbouring cells share the id of their common side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    edges: [EdgeId; 4],
    claimed_count: u8,
    owner: Option<Player>,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, edges: [EdgeId; 4]) -> Self {
        Cell {
            row,
            col,
            edges,
            claimed_count: 0,
            owner: None,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn edge(&self, side: Side) -> EdgeId {
        self.edges[side.index()]
    }

    /// Number of claimed sides, 0..=4
    pub fn claimed_count(&self) -> u8 {
        self.claimed_count
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn is_complete(&self) -> bool {
        self.claimed_count == 4
    }

    /// Record one more claimed side. Returns true when this completes the box,
    /// in which case `player` becomes the owner.
    pub(crate) fn record_claim(&mut self, player: Player) -> bool {
        debug_assert!(self.claimed_count < 4, "cell {:?} over-claimed", self.position());
        self.claimed_count += 1;
        if self.claimed_count == 4 {
            self.owner = Some(player);
            return true;
        }
        false
    }

    pub(crate) fn restore(&mut self, claimed_count: u8, owner: Option<Player>) {
        self.claimed_count = claimed_count;
        self.owner = owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> [EdgeId; 4] {
        [EdgeId(0), EdgeId(1), EdgeId(2), EdgeId(3)]
    }

    #[test]
    fn test_owner_set_on_fourth_claim() {
        let mut cell = Cell::new(0, 0, ids());
        assert!(!cell.record_claim(Player::Human));
        assert!(!cell.record_claim(Player::Computer));
        assert!(!cell.record_claim(Player::Human));
        assert_eq!(cell.owner(), None);
        assert!(cell.record_claim(Player::Computer));
        assert_eq!(cell.owner(), Some(Player::Computer));
        assert!(cell.is_complete());
    }

    #[test]
    fn test_edge_lookup_by_side() {
        let cell = Cell::new(2, 3, ids());
        assert_eq!(cell.position(), (2, 3));
        assert_eq!(cell.edge(Side::Top), EdgeId(0));
        assert_eq!(cell.edge(Side::Right), EdgeId(3));
    }
}
