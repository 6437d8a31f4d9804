use crate::game::{Board, CellSide};

/// Anything that can pick an edge to claim.
pub trait Agent {
    /// Select a free `(cell, side)` on `board`. Returns `None` only when no
    /// edge is left.
    fn select_move(&mut self, board: &Board) -> Option<CellSide>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
