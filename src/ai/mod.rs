mod agent;
mod heuristic;
mod random;

pub use agent::Agent;
pub use heuristic::{bucket_candidates, Candidate, HeuristicAgent};
pub use random::RandomAgent;
