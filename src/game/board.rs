use std::num::NonZeroUsize;

use super::snapshot::BoardSnapshot;
use super::{Cell, CellSide, Edge, EdgeId, Player, Side};
use crate::error::{BoardError, SnapshotError};

/// Result of [`Board::claim_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// Out-of-range cell or an edge that was already claimed; nothing changed
    Ignored,
    /// The edge was claimed; `completed` boxes (0, 1 or 2) were closed by it
    Placed { completed: usize },
}

impl Claim {
    pub fn completed(self) -> usize {
        match self {
            Claim::Ignored => 0,
            Claim::Placed { completed } => completed,
        }
    }
}

/// An N×N grid of boxes over a single arena of edges.
///
/// Edge ids are laid out horizontals first, row-major: the top side of cell
/// `(r, c)` is `r * N + c`. Verticals follow: the left side of `(r, c)` is
/// `(N + 1) * N + r * (N + 1) + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
    edges: Vec<Edge>,
    total_claimed_cells: usize,
}

impl Board {
    /// Create a new empty board of `dimension` × `dimension` cells
    pub fn new(dimension: usize) -> Result<Self, BoardError> {
        NonZeroUsize::new(dimension)
            .map(Self::sized)
            .ok_or(BoardError::InvalidDimension(dimension))
    }

    /// Create a new empty board from an already-checked dimension
    pub fn sized(dimension: NonZeroUsize) -> Self {
        let n = dimension.get();
        let horizontals = (n + 1) * n;
        let edge_count = horizontals + n * (n + 1);

        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let mut ids = [EdgeId(0); 4];
                ids[Side::Top.index()] = EdgeId(row * n + col);
                ids[Side::Bottom.index()] = EdgeId((row + 1) * n + col);
                ids[Side::Left.index()] = EdgeId(horizontals + row * (n + 1) + col);
                ids[Side::Right.index()] = EdgeId(horizontals + row * (n + 1) + col + 1);
                cells.push(Cell::new(row, col, ids));
            }
        }

        Board {
            dimension: n,
            cells,
            edges: vec![Edge::default(); edge_count],
            total_claimed_cells: 0,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Number of boxes that have an owner
    pub fn total_claimed_cells(&self) -> usize {
        self.total_claimed_cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        Some(&self.cells[row * self.dimension + col])
    }

    /// All cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The edge behind `id`, or `None` if `id` belongs to a larger board
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge on `side` of cell `(row, col)`
    pub fn edge_at(&self, row: usize, col: usize, side: Side) -> Option<&Edge> {
        self.cell(row, col).and_then(|cell| self.edge(cell.edge(side)))
    }

    pub fn is_claimed(&self, row: usize, col: usize, side: Side) -> bool {
        self.edge_at(row, col, side).is_some_and(Edge::is_claimed)
    }

    /// The cell across `side`, if it is on the board
    pub fn neighbor(&self, row: usize, col: usize, side: Side) -> Option<(usize, usize)> {
        let (dr, dc) = side.offset();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        if r >= self.dimension || c >= self.dimension {
            return None;
        }
        Some((r, c))
    }

    /// Claim the edge on `side` of `(row, col)` for `player`.
    ///
    /// The edge is shared with the neighbour across `side`, so both cells see
    /// the claim. Already-claimed edges and out-of-range cells are ignored.
    pub fn claim_edge(&mut self, row: usize, col: usize, side: Side, player: Player) -> Claim {
        let Some(id) = self.cell(row, col).map(|cell| cell.edge(side)) else {
            return Claim::Ignored;
        };
        if !self.edges[id.index()].claim(player) {
            return Claim::Ignored;
        }

        let mut completed = 0;
        let neighbor = self.neighbor(row, col, side);
        for (r, c) in std::iter::once((row, col)).chain(neighbor) {
            let idx = r * self.dimension + c;
            if self.cells[idx].record_claim(player) {
                completed += 1;
                self.total_claimed_cells += 1;
            }
        }

        debug_assert!(self.check_counts(), "claimed counts diverged from edge arena");
        Claim::Placed { completed }
    }

    /// Unclaimed sides of `(row, col)` that do not hand the neighbour across
    /// them a third side: the neighbour is off the board or has fewer than two
    /// claimed sides.
    pub fn valid_moves_adjacent_to(&self, row: usize, col: usize) -> Vec<Side> {
        if self.cell(row, col).is_none() {
            return Vec::new();
        }

        [Side::Left, Side::Right, Side::Top, Side::Bottom]
            .into_iter()
            .filter(|&side| !self.is_claimed(row, col, side))
            .filter(|&side| match self.neighbor(row, col, side) {
                None => true,
                Some((r, c)) => self.cells[r * self.dimension + c].claimed_count() < 2,
            })
            .collect()
    }

    /// Every unclaimed side of `(row, col)`
    pub fn free_sides(&self, row: usize, col: usize) -> Vec<Side> {
        if self.cell(row, col).is_none() {
            return Vec::new();
        }
        [Side::Bottom, Side::Left, Side::Right, Side::Top]
            .into_iter()
            .filter(|&side| !self.is_claimed(row, col, side))
            .collect()
    }

    /// Every unclaimed edge exactly once. Interior edges are reported from the
    /// cell below or to the right of them.
    pub fn free_edges(&self) -> Vec<CellSide> {
        let last = self.dimension - 1;
        let mut moves = Vec::new();
        for cell in &self.cells {
            let (row, col) = cell.position();
            for side in Side::ALL {
                let canonical = match side {
                    Side::Top | Side::Left => true,
                    Side::Bottom => row == last,
                    Side::Right => col == last,
                };
                if canonical && !self.edges[cell.edge(side).index()].is_claimed() {
                    moves.push(CellSide::new(row, col, side));
                }
            }
        }
        moves
    }

    /// Check if every box has an owner
    pub fn is_game_over(&self) -> bool {
        self.total_claimed_cells == self.cell_count()
    }

    /// Map a point in board coordinates to the cell containing it. Cell
    /// `(r, c)` covers `x ∈ [c, c + 1)` and `y ∈ [r, r + 1)`.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let (row, col) = (y.floor() as usize, x.floor() as usize);
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        Some((row, col))
    }

    /// The side of `(row, col)` closest to the point `(x, y)`, provided it is
    /// still free. Ties resolve bottom, left, right, top.
    pub fn nearest_free_side(&self, row: usize, col: usize, x: f64, y: f64) -> Option<Side> {
        self.cell(row, col)?;
        let (top, left) = (row as f64, col as f64);
        let distances = [
            (Side::Bottom, top + 1.0 - y),
            (Side::Left, x - left),
            (Side::Right, left + 1.0 - x),
            (Side::Top, y - top),
        ];
        let closest = distances
            .iter()
            .map(|&(_, d)| d)
            .fold(f64::INFINITY, f64::min);

        distances
            .iter()
            .find(|&&(side, d)| d == closest && !self.is_claimed(row, col, side))
            .map(|&(side, _)| side)
    }

    /// Capture edge and box ownership for serialization.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            dimension: self.dimension,
            edges: self.edges.iter().map(Edge::owner).collect(),
            owners: self.cells.iter().map(Cell::owner).collect(),
        }
    }

    /// Rebuild a board from a snapshot, recomputing per-cell claim counts.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, SnapshotError> {
        let invalid = || SnapshotError::InvalidDimension(snapshot.dimension);
        let (edge_count, cell_count) = arena_sizes(snapshot.dimension).ok_or_else(invalid)?;

        // Lengths are checked before anything is allocated
        if snapshot.edges.len() != edge_count {
            return Err(SnapshotError::DimensionMismatch {
                what: "edges",
                expected: edge_count,
                found: snapshot.edges.len(),
            });
        }
        if snapshot.owners.len() != cell_count {
            return Err(SnapshotError::DimensionMismatch {
                what: "owners",
                expected: cell_count,
                found: snapshot.owners.len(),
            });
        }
        let mut board = Board::new(snapshot.dimension).map_err(|_| invalid())?;

        for (edge, owner) in board.edges.iter_mut().zip(&snapshot.edges) {
            if let Some(player) = owner {
                edge.claim(*player);
            }
        }

        let mut total = 0;
        for (idx, owner) in snapshot.owners.iter().enumerate() {
            let count = Side::ALL
                .iter()
                .filter(|&&side| board.edges[board.cells[idx].edge(side).index()].is_claimed())
                .count() as u8;
            let (row, col) = board.cells[idx].position();
            match (count == 4, owner) {
                (true, None) => return Err(SnapshotError::EnclosureWithoutOwner { row, col }),
                (false, Some(_)) => return Err(SnapshotError::OwnerWithoutEnclosure { row, col }),
                (true, Some(_)) => total += 1,
                (false, None) => {}
            }
            board.cells[idx].restore(count, *owner);
        }
        board.total_claimed_cells = total;

        Ok(board)
    }

    fn check_counts(&self) -> bool {
        let owned = self.cells.iter().filter(|c| c.owner().is_some()).count();
        owned == self.total_claimed_cells
            && self.cells.iter().all(|cell| {
                let claimed = Side::ALL
                    .iter()
                    .filter(|&&side| self.edges[cell.edge(side).index()].is_claimed())
                    .count();
                claimed == cell.claimed_count() as usize
                    && (cell.owner().is_some() == (claimed == 4))
            })
    }
}

/// Edge and cell counts for an `n` × `n` board, `None` for zero or on overflow.
fn arena_sizes(n: usize) -> Option<(usize, usize)> {
    if n == 0 {
        return None;
    }
    let horizontals = n.checked_add(1)?.checked_mul(n)?;
    let edges = horizontals.checked_mul(2)?;
    let cells = n.checked_mul(n)?;
    Some((edges, cells))
}
