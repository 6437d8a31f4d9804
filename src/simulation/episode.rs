use std::num::NonZeroUsize;

use tracing::warn;

use crate::ai::Agent;
use crate::game::{Commit, GameOutcome, GameState, PendingSelection, Player};
use crate::simulation::metrics::MatchResult;

/// Play one complete game without ticks. `human` moves for [`Player::Human`],
/// `computer` for [`Player::Computer`]; `first` opens.
pub fn play_match(
    human: &mut dyn Agent,
    computer: &mut dyn Agent,
    dimension: NonZeroUsize,
    first: Player,
) -> MatchResult {
    let mut state = GameState::sized(dimension, first);
    let mut moves = 0;

    while state.is_in_progress() {
        let mover = state.current_turn();
        let agent: &mut dyn Agent = match mover {
            Player::Human => &mut *human,
            Player::Computer => &mut *computer,
        };
        let Some(choice) = agent.select_move(state.board()) else {
            break;
        };
        let Some(selection) =
            PendingSelection::new(state.board(), mover, choice.row, choice.col, choice.side)
        else {
            break;
        };
        match state.commit(&selection) {
            Commit::Applied { .. } => moves += 1,
            Commit::Ignored => {
                warn!(agent = agent.name(), ?choice, "agent chose a taken edge");
                break;
            }
        }
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(p)) => Some(p),
        _ => None,
    };

    MatchResult {
        winner,
        human_score: state.human_score(),
        computer_score: state.computer_score(),
        moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HeuristicAgent, RandomAgent};

    fn dim(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_match_claims_every_edge() {
        let mut human = RandomAgent::with_seed(1);
        let mut computer = HeuristicAgent::with_seed(2);
        let result = play_match(&mut human, &mut computer, dim(3), Player::Human);

        assert_eq!(result.moves, 24);
        assert_eq!(result.human_score + result.computer_score, 9);
        // 9 boxes cannot split evenly
        assert!(result.winner.is_some());
    }

    #[test]
    fn test_single_cell_match() {
        let mut human = RandomAgent::with_seed(5);
        let mut computer = RandomAgent::with_seed(6);
        let result = play_match(&mut human, &mut computer, dim(1), Player::Computer);

        assert_eq!(result.moves, 4);
        // Strict alternation: the fourth edge is the human's
        assert_eq!(result.winner, Some(Player::Human));
    }

    #[test]
    fn test_heuristic_beats_random_baseline() {
        let mut human = RandomAgent::with_seed(17);
        let mut computer = HeuristicAgent::with_seed(23);
        let mut wins = 0;
        for game in 0..100 {
            let first = if game % 2 == 0 { Player::Human } else { Player::Computer };
            let result = play_match(&mut human, &mut computer, dim(3), first);
            if result.winner == Some(Player::Computer) {
                wins += 1;
            }
        }
        assert!(wins > 60, "heuristic won only {wins}/100");
    }
}
