use serde::{Deserialize, Serialize};

use super::{Board, Player};
use crate::error::SnapshotError;

/// Serializable record of a board: who owns each edge (arena order) and each
/// box (row-major).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub dimension: usize,
    pub edges: Vec<Option<Player>>,
    pub owners: Vec<Option<Player>>,
}

impl BoardSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse and validate in one step
    pub fn restore(json: &str) -> Result<Board, SnapshotError> {
        Board::from_snapshot(&Self::from_json(json)?)
    }
}
