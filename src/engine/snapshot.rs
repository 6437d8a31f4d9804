use crate::game::{Board, CellSide, GameOutcome, Phase, Player, Side};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub current_turn: Player,
    pub human_score: usize,
    pub computer_score: usize,
    pub phase: Phase,
    /// Zero unless the result is being shown
    pub result_ticks_remaining: u32,
    pub outcome: Option<GameOutcome>,
    /// `(cell, side)` pairs of the staged edge: one on the border, two inside
    pub highlighted: Vec<CellSide>,
    /// Who staged the highlighted edge
    pub highlight_owner: Option<Player>,
}

impl Snapshot<'_> {
    pub fn is_highlighted(&self, row: usize, col: usize, side: Side) -> bool {
        self.highlighted
            .iter()
            .any(|cs| cs.row == row && cs.col == col && cs.side == side)
    }
}
