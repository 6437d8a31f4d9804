use std::num::NonZeroUsize;

use tracing::debug;

use super::{Board, CellSide, Claim, PendingSelection, Player};
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    /// Every box is owned; turn is frozen until a new game starts
    ShowingResult,
}

/// Result of [`GameState::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Wrong phase, wrong player, or the edge was already taken
    Ignored,
    Applied {
        completed: usize,
        turn_passed: bool,
        game_over: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_turn: Player,
    human_score: usize,
    computer_score: usize,
    phase: Phase,
}

impl GameState {
    /// Fresh game on an empty board with `first` to move
    pub fn new(dimension: usize, first: Player) -> Result<Self, BoardError> {
        Ok(Self::on_board(Board::new(dimension)?, first))
    }

    /// Fresh game for a dimension that is known to be valid
    pub fn sized(dimension: NonZeroUsize, first: Player) -> Self {
        Self::on_board(Board::sized(dimension), first)
    }

    fn on_board(board: Board, first: Player) -> Self {
        GameState {
            board,
            current_turn: first,
            human_score: 0,
            computer_score: 0,
            phase: Phase::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    pub fn human_score(&self) -> usize {
        self.human_score
    }

    pub fn computer_score(&self) -> usize {
        self.computer_score
    }

    pub fn score(&self, player: Player) -> usize {
        match player {
            Player::Human => self.human_score,
            Player::Computer => self.computer_score,
        }
    }

    /// Get game outcome once every box is owned
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.phase != Phase::ShowingResult {
            return None;
        }
        Some(match self.human_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::Human),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Computer),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }

    /// Every unclaimed edge, once each
    pub fn legal_moves(&self) -> Vec<CellSide> {
        if !self.is_in_progress() {
            return Vec::new();
        }
        self.board.free_edges()
    }

    /// Claim the staged edge for the player whose turn it is.
    ///
    /// Boxes closed by the move are credited to the mover. The turn passes
    /// only if nothing was closed; filling the last box ends the game.
    pub fn commit(&mut self, selection: &PendingSelection) -> Commit {
        if self.phase != Phase::InProgress || selection.owner() != self.current_turn {
            return Commit::Ignored;
        }

        let mover = self.current_turn;
        let at = selection.primary();
        let completed = match self.board.claim_edge(at.row, at.col, at.side, mover) {
            Claim::Ignored => return Commit::Ignored,
            Claim::Placed { completed } => completed,
        };

        match mover {
            Player::Human => self.human_score += completed,
            Player::Computer => self.computer_score += completed,
        }
        debug_assert_eq!(
            self.human_score + self.computer_score,
            self.board.total_claimed_cells(),
            "scores diverged from owned boxes"
        );

        let game_over = self.board.is_game_over();
        let turn_passed = completed == 0;
        if game_over {
            self.phase = Phase::ShowingResult;
        } else if turn_passed {
            self.current_turn = mover.other();
        }

        debug!(
            player = mover.name(),
            row = at.row,
            col = at.col,
            side = ?at.side,
            completed,
            game_over,
            "edge committed"
        );

        Commit::Applied {
            completed,
            turn_passed,
            game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Side;

    fn stage(state: &GameState, row: usize, col: usize, side: Side) -> PendingSelection {
        PendingSelection::new(state.board(), state.current_turn(), row, col, side).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(3, Player::Computer).unwrap();
        assert_eq!(state.current_turn(), Player::Computer);
        assert_eq!(state.phase(), Phase::InProgress);
        assert_eq!((state.human_score(), state.computer_score()), (0, 0));
        assert_eq!(state.legal_moves().len(), 24);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_turn_passes_when_nothing_completed() {
        let mut state = GameState::new(2, Player::Human).unwrap();
        let sel = stage(&state, 0, 0, Side::Top);
        let commit = state.commit(&sel);
        assert_eq!(
            commit,
            Commit::Applied {
                completed: 0,
                turn_passed: true,
                game_over: false
            }
        );
        assert_eq!(state.current_turn(), Player::Computer);
    }

    #[test]
    fn test_turn_kept_after_completing_box() {
        let mut state = GameState::new(2, Player::Human).unwrap();
        // Alternate three non-completing moves around (0, 0)
        for side in [Side::Top, Side::Left, Side::Bottom] {
            let sel = stage(&state, 0, 0, side);
            state.commit(&sel);
        }
        let mover = state.current_turn();
        let sel = stage(&state, 0, 0, Side::Right);
        let commit = state.commit(&sel);

        assert!(matches!(commit, Commit::Applied { completed: 1, turn_passed: false, .. }));
        assert_eq!(state.current_turn(), mover);
        assert_eq!(state.score(mover), 1);
        assert_eq!(state.board().cell(0, 0).unwrap().owner(), Some(mover));
    }

    #[test]
    fn test_out_of_turn_commit_ignored() {
        let mut state = GameState::new(2, Player::Human).unwrap();
        let sel = PendingSelection::new(state.board(), Player::Computer, 0, 0, Side::Top).unwrap();
        assert_eq!(state.commit(&sel), Commit::Ignored);
        assert!(!state.board().is_claimed(0, 0, Side::Top));
        assert_eq!(state.current_turn(), Player::Human);
    }

    #[test]
    fn test_reclaim_does_not_flip_turn() {
        let mut state = GameState::new(2, Player::Human).unwrap();
        let sel = stage(&state, 0, 0, Side::Right);
        state.commit(&sel);
        let again =
            PendingSelection::new(state.board(), Player::Computer, 0, 1, Side::Left).unwrap();
        assert_eq!(state.commit(&again), Commit::Ignored);
        assert_eq!(state.current_turn(), Player::Computer);
    }

    #[test]
    fn test_single_cell_game_ends_after_four_claims() {
        let mut state = GameState::new(1, Player::Human).unwrap();
        for (i, side) in Side::ALL.into_iter().enumerate() {
            assert_eq!(state.phase(), Phase::InProgress, "ended early at move {i}");
            let sel = stage(&state, 0, 0, side);
            state.commit(&sel);
        }
        assert_eq!(state.phase(), Phase::ShowingResult);
        assert_eq!(state.human_score() + state.computer_score(), 1);
        // Human, Computer, Human, Computer: the fourth move is the computer's
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Computer)));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_commit_ignored_after_game_over() {
        let mut state = GameState::new(1, Player::Human).unwrap();
        for side in Side::ALL {
            let sel = stage(&state, 0, 0, side);
            state.commit(&sel);
        }
        let turn = state.current_turn();
        let sel = stage(&state, 0, 0, Side::Top);
        assert_eq!(state.commit(&sel), Commit::Ignored);
        assert_eq!(state.current_turn(), turn);
    }
}
