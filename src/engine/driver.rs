use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::EngineConfig;
use super::snapshot::Snapshot;
use crate::ai::{Agent, HeuristicAgent};
use crate::error::ConfigError;
use crate::game::{Commit, GameOutcome, GameState, PendingSelection, Phase, Player};

/// Owns one game at a time and advances it one tick at a time.
///
/// Input handlers and `tick` are expected to be called from the same loop;
/// delays are counted in ticks so the engine is deterministic under a seed.
pub struct Engine {
    config: EngineConfig,
    dimension: NonZeroUsize,
    state: GameState,
    pending: Option<PendingSelection>,
    think_ticks_left: Option<u32>,
    result_ticks_left: u32,
    agent: Box<dyn Agent>,
    rng: StdRng,
    ticks: u64,
}

impl Engine {
    /// Engine with the heuristic computer and OS-seeded randomness.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::build(config, Box::new(HeuristicAgent::new()), StdRng::from_os_rng())
    }

    /// Fully reproducible engine: starting turns and computer moves derive
    /// from `seed`.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        let agent = Box::new(HeuristicAgent::with_seed(seed.wrapping_add(1)));
        Self::build(config, agent, StdRng::seed_from_u64(seed))
    }

    /// Engine with a custom computer opponent.
    pub fn with_agent(
        config: EngineConfig,
        agent: Box<dyn Agent>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::build(config, agent, StdRng::seed_from_u64(seed))
    }

    fn build(
        config: EngineConfig,
        agent: Box<dyn Agent>,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let dimension = NonZeroUsize::new(config.dimension)
            .ok_or_else(|| ConfigError::Validation("game.dimension must be >= 1".into()))?;
        let first = random_player(&mut rng);
        info!(
            dimension = dimension.get(),
            first = first.name(),
            agent = agent.name(),
            "engine started"
        );

        Ok(Engine {
            config,
            dimension,
            state: GameState::sized(dimension, first),
            pending: None,
            think_ticks_left: None,
            result_ticks_left: 0,
            agent,
            rng,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The staged edge, if any
    pub fn pending(&self) -> Option<&PendingSelection> {
        self.pending.as_ref()
    }

    /// Ticks processed since the engine was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Discard the current game, including any staged edge and running
    /// countdown, and start over with a random first player.
    pub fn new_game(&mut self) {
        let first = random_player(&mut self.rng);
        self.state = GameState::sized(self.dimension, first);
        self.pending = None;
        self.think_ticks_left = None;
        self.result_ticks_left = 0;
        info!(dimension = self.dimension.get(), first = first.name(), "new game");
    }

    /// Change the board size. Starts a new game.
    pub fn set_dimension(&mut self, dimension: usize) -> Result<(), ConfigError> {
        let checked = NonZeroUsize::new(dimension)
            .ok_or_else(|| ConfigError::Validation("game.dimension must be >= 1".into()))?;
        info!(from = self.dimension.get(), to = dimension, "dimension changed");
        self.config.dimension = dimension;
        self.dimension = checked;
        self.new_game();
        Ok(())
    }

    /// Stage the free edge nearest to the pointer for the human. `(x, y)` is in
    /// board units: cell `(r, c)` covers `[c, c + 1) × [r, r + 1)`.
    ///
    /// Does nothing unless it is the human's turn in a running game. Pointing
    /// off the board or at a claimed side clears the staged edge.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !self.human_to_move() {
            return;
        }

        let board = self.state.board();
        let staged = board.cell_at(x, y).and_then(|(row, col)| {
            let side = board.nearest_free_side(row, col, x, y)?;
            PendingSelection::new(board, Player::Human, row, col, side)
        });

        if staged != self.pending {
            if let Some(sel) = &staged {
                let at = sel.primary();
                debug!(row = at.row, col = at.col, side = ?at.side, "human staged edge");
            }
            self.pending = staged;
        }
    }

    /// Claim the human's staged edge.
    pub fn on_confirm(&mut self) -> Commit {
        if !self.human_to_move() {
            return Commit::Ignored;
        }
        self.commit_pending()
    }

    /// Advance the game by one tick: count down the result display, or let
    /// the computer stage and later commit its move.
    pub fn tick(&mut self) {
        self.ticks += 1;

        match self.state.phase() {
            Phase::ShowingResult => {
                self.result_ticks_left = self.result_ticks_left.saturating_sub(1);
                if self.result_ticks_left == 0 {
                    self.new_game();
                }
            }
            Phase::InProgress if self.state.current_turn() == Player::Computer => {
                self.advance_computer();
            }
            Phase::InProgress => {}
        }
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: self.state.board(),
            current_turn: self.state.current_turn(),
            human_score: self.state.human_score(),
            computer_score: self.state.computer_score(),
            phase: self.state.phase(),
            result_ticks_remaining: self.result_ticks_left,
            outcome: self.state.outcome(),
            highlighted: self
                .pending
                .map(|sel| sel.cell_sides().collect())
                .unwrap_or_default(),
            highlight_owner: self.pending.map(|sel| sel.owner()),
        }
    }

    fn human_to_move(&self) -> bool {
        self.state.is_in_progress() && self.state.current_turn() == Player::Human
    }

    fn advance_computer(&mut self) {
        match self.think_ticks_left {
            Some(left) if left > 1 => self.think_ticks_left = Some(left - 1),
            Some(_) => {
                self.think_ticks_left = None;
                self.commit_pending();
            }
            None => {
                let board = self.state.board();
                let Some(choice) = self.agent.select_move(board) else {
                    return;
                };
                self.pending = PendingSelection::new(
                    board,
                    Player::Computer,
                    choice.row,
                    choice.col,
                    choice.side,
                );

                let delay = self.config.think_ticks();
                if delay == 0 {
                    self.commit_pending();
                } else {
                    self.think_ticks_left = Some(delay);
                }
            }
        }
    }

    /// The single commit path shared by both players.
    fn commit_pending(&mut self) -> Commit {
        let Some(selection) = self.pending.take() else {
            return Commit::Ignored;
        };

        let commit = self.state.commit(&selection);
        if let Commit::Applied { game_over: true, .. } = commit {
            self.result_ticks_left = self.config.result_ticks();
            match self.state.outcome() {
                Some(GameOutcome::Winner(player)) => info!(
                    winner = player.name(),
                    human = self.state.human_score(),
                    computer = self.state.computer_score(),
                    "game over"
                ),
                _ => info!(
                    human = self.state.human_score(),
                    computer = self.state.computer_score(),
                    "game over, draw"
                ),
            }
        }
        commit
    }
}

fn random_player(rng: &mut StdRng) -> Player {
    if rng.random_bool(0.5) {
        Player::Human
    } else {
        Player::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CellSide, Side};

    fn config(dimension: usize) -> EngineConfig {
        EngineConfig {
            dimension,
            ..EngineConfig::default()
        }
    }

    /// Seeded engine whose first game starts with `first`.
    fn engine_starting_with(dimension: usize, first: Player) -> Engine {
        (0..)
            .map(|seed| Engine::with_seed(config(dimension), seed).unwrap())
            .find(|e| e.state().current_turn() == first)
            .unwrap()
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Engine::with_seed(config(0), 1).is_err());
    }

    #[test]
    fn test_pointer_stages_edge_and_mirror() {
        let mut engine = engine_starting_with(3, Player::Human);
        engine.on_pointer_move(1.05, 1.5);

        let snap = engine.snapshot();
        assert_eq!(
            snap.highlighted,
            vec![CellSide::new(1, 1, Side::Left), CellSide::new(1, 0, Side::Right)]
        );
        assert_eq!(snap.highlight_owner, Some(Player::Human));
    }

    #[test]
    fn test_pointer_off_board_clears_staging() {
        let mut engine = engine_starting_with(3, Player::Human);
        engine.on_pointer_move(0.5, 0.1);
        assert!(engine.pending().is_some());
        engine.on_pointer_move(-1.0, 0.5);
        assert!(engine.pending().is_none());
        assert_eq!(engine.on_confirm(), Commit::Ignored);
    }

    #[test]
    fn test_confirm_claims_and_passes_turn() {
        let mut engine = engine_starting_with(2, Player::Human);
        engine.on_pointer_move(0.5, 0.05);
        let commit = engine.on_confirm();

        assert!(matches!(commit, Commit::Applied { completed: 0, .. }));
        assert!(engine.state().board().is_claimed(0, 0, Side::Top));
        assert_eq!(engine.state().current_turn(), Player::Computer);
        assert!(engine.pending().is_none());
    }

    #[test]
    fn test_human_input_ignored_on_computer_turn() {
        let mut engine = engine_starting_with(2, Player::Computer);
        engine.on_pointer_move(0.5, 0.05);
        assert!(engine.pending().is_none());
        assert_eq!(engine.on_confirm(), Commit::Ignored);
    }

    #[test]
    fn test_computer_stages_then_commits_after_delay() {
        let mut engine = engine_starting_with(2, Player::Computer);
        let think = engine.config().think_ticks();

        engine.tick();
        let staged = *engine.pending().expect("computer staged a move");
        assert_eq!(staged.owner(), Player::Computer);
        assert_eq!(engine.state().board().free_edges().len(), 12);

        for _ in 1..think {
            engine.tick();
            assert_eq!(engine.pending(), Some(&staged));
        }
        engine.tick();

        let at = staged.primary();
        assert!(engine.state().board().is_claimed(at.row, at.col, at.side));
        assert_eq!(engine.state().current_turn(), Player::Human);
        assert!(engine.pending().is_none());
    }

    #[test]
    fn test_zero_think_time_commits_same_tick() {
        let cfg = EngineConfig {
            computer_delay_ms: 0,
            ..config(2)
        };
        let mut engine = (0..)
            .map(|seed| Engine::with_seed(cfg.clone(), seed).unwrap())
            .find(|e| e.state().current_turn() == Player::Computer)
            .unwrap();
        engine.tick();
        assert_eq!(engine.state().board().free_edges().len(), 11);
    }

    #[test]
    fn test_set_dimension_resets_everything() {
        let mut engine = engine_starting_with(3, Player::Human);
        engine.on_pointer_move(0.5, 0.05);
        engine.on_confirm();
        engine.tick();

        engine.set_dimension(4).unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.board.dimension(), 4);
        assert_eq!((snap.human_score, snap.computer_score), (0, 0));
        assert!(snap.board.edges().iter().all(|e| !e.is_claimed()));
        assert!(snap.highlighted.is_empty());
        assert_eq!(snap.phase, Phase::InProgress);
        assert_eq!(engine.config().dimension, 4);
    }

    #[test]
    fn test_set_dimension_rejects_zero() {
        let mut engine = engine_starting_with(3, Player::Human);
        assert!(engine.set_dimension(0).is_err());
        assert_eq!(engine.state().board().dimension(), 3);
    }
}
