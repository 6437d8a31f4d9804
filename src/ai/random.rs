use crate::game::{Board, CellSide};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from free edges.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Option<CellSide> {
        let moves = board.free_edges();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, PendingSelection, Player, Side};

    #[test]
    fn test_random_agent_selects_free_edge() {
        let mut agent = RandomAgent::with_seed(7);
        let mut board = Board::new(3).unwrap();
        board.claim_edge(0, 0, Side::Top, Player::Human);
        board.claim_edge(1, 1, Side::Left, Player::Human);

        for _ in 0..100 {
            let m = agent.select_move(&board).unwrap();
            assert!(!board.is_claimed(m.row, m.col, m.side), "{m:?} is taken");
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent = RandomAgent::with_seed(11);
        let mut state = GameState::new(3, Player::Human).unwrap();

        while state.is_in_progress() {
            let m = agent.select_move(state.board()).unwrap();
            let sel =
                PendingSelection::new(state.board(), state.current_turn(), m.row, m.col, m.side)
                    .unwrap();
            state.commit(&sel);
        }

        assert!(state.board().is_game_over());
        assert_eq!(state.human_score() + state.computer_score(), 9);
        assert!(agent.select_move(state.board()).is_none());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
