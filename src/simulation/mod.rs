//! Headless matches between agents, used to measure the computer opponent.

pub mod episode;
pub mod metrics;

pub use episode::play_match;
pub use metrics::{MatchMetrics, MatchResult};
