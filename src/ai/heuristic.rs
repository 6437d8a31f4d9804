use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::debug;

use super::agent::Agent;
use crate::game::{Board, CellSide, Side};

/// A cell the heuristic may play in, with the safe sides recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    /// Empty when any free side will do
    pub safe_sides: Vec<Side>,
}

/// Sort every open cell into three priority buckets.
///
/// - 0: three sides claimed, the last one scores.
/// - 1: zero or one side claimed and at least one safe side.
/// - 2: two sides claimed, or zero/one claimed with no safe side left.
pub fn bucket_candidates(board: &Board) -> [Vec<Candidate>; 3] {
    let mut buckets: [Vec<Candidate>; 3] = Default::default();

    for cell in board.cells() {
        let (row, col) = cell.position();
        let (priority, safe_sides) = match cell.claimed_count() {
            3 => (0, Vec::new()),
            0 | 1 => {
                let sides = board.valid_moves_adjacent_to(row, col);
                let priority = if sides.is_empty() { 2 } else { 1 };
                (priority, sides)
            }
            2 => (2, Vec::new()),
            _ => continue,
        };
        buckets[priority].push(Candidate {
            row,
            col,
            safe_sides,
        });
    }

    buckets
}

/// The computer opponent: take a free box if there is one, otherwise avoid
/// giving a neighbour its third side, otherwise concede something.
pub struct HeuristicAgent {
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_move(&mut self, board: &Board) -> Option<CellSide> {
        let buckets = bucket_candidates(board);
        let (priority, bucket) = buckets.iter().enumerate().find(|(_, b)| !b.is_empty())?;
        let candidate = bucket.choose(&mut self.rng)?;

        let side = if candidate.safe_sides.is_empty() {
            *board
                .free_sides(candidate.row, candidate.col)
                .choose(&mut self.rng)?
        } else {
            *candidate.safe_sides.choose(&mut self.rng)?
        };

        debug!(
            priority,
            row = candidate.row,
            col = candidate.col,
            side = ?side,
            "heuristic move"
        );
        Some(CellSide::new(candidate.row, candidate.col, side))
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
