use super::{Board, Player, Side};

/// A side of a particular cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSide {
    pub row: usize,
    pub col: usize,
    pub side: Side,
}

impl CellSide {
    pub fn new(row: usize, col: usize, side: Side) -> Self {
        CellSide { row, col, side }
    }
}

/// One logical edge staged for confirmation, seen from the cell it was picked
/// in and, when it is not on the border, from the neighbour sharing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    owner: Player,
    primary: CellSide,
    mirror: Option<CellSide>,
}

impl PendingSelection {
    /// Stage `side` of `(row, col)` for `owner`. Returns `None` when the cell
    /// is off the board.
    pub fn new(board: &Board, owner: Player, row: usize, col: usize, side: Side) -> Option<Self> {
        board.cell(row, col)?;
        let mirror = board
            .neighbor(row, col, side)
            .map(|(r, c)| CellSide::new(r, c, side.opposite()));
        Some(PendingSelection {
            owner,
            primary: CellSide::new(row, col, side),
            mirror,
        })
    }

    /// Player the selection was staged for
    pub fn owner(&self) -> Player {
        self.owner
    }

    pub fn primary(&self) -> CellSide {
        self.primary
    }

    pub fn mirror(&self) -> Option<CellSide> {
        self.mirror
    }

    /// The one or two `(cell, side)` pairs to highlight
    pub fn cell_sides(&self) -> impl Iterator<Item = CellSide> + '_ {
        std::iter::once(self.primary).chain(self.mirror)
    }
}
