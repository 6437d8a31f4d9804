use std::collections::VecDeque;

use crate::game::Player;

/// Result of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Option<Player>,
    pub human_score: usize,
    pub computer_score: usize,
    pub moves: usize,
}

/// Match statistics with rolling window computations.
pub struct MatchMetrics {
    results: VecDeque<MatchResult>,
    capacity: usize,
    total_matches: usize, // lifetime count, never capped
}

impl MatchMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchMetrics {
            results: VecDeque::with_capacity(capacity),
            capacity,
            total_matches: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    pub fn record(&mut self, result: MatchResult) {
        self.total_matches += 1;
        self.results.push_back(result);
        if self.results.len() > self.capacity {
            self.results.pop_front();
        }
    }

    fn recent(&self, last_n: usize) -> impl Iterator<Item = &MatchResult> {
        self.results.iter().rev().take(last_n)
    }

    fn window(&self, last_n: usize) -> usize {
        self.results.len().min(last_n)
    }

    /// Win rate for `player` in the last N matches.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let wins = self
            .recent(n)
            .filter(|r| r.winner == Some(player))
            .count();
        wins as f32 / n as f32
    }

    /// Draw rate in the last N matches.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let draws = self.recent(n).filter(|r| r.winner.is_none()).count();
        draws as f32 / n as f32
    }

    /// Average of computer score minus human score over the last N matches.
    pub fn average_margin(&self, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: i64 = self
            .recent(n)
            .map(|r| r.computer_score as i64 - r.human_score as i64)
            .sum();
        total as f32 / n as f32
    }

    /// Average number of edges claimed per match over the last N matches.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.window(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self.recent(n).map(|r| r.moves).sum();
        total as f32 / n as f32
    }

    pub fn total_matches(&self) -> usize {
        self.total_matches
    }
}

impl Default for MatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
