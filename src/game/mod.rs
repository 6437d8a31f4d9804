//! Core Dots and Boxes logic: an edge arena shared by the cells of an N×N
//! board, player types, staged selections, and the turn/score state machine.

mod board;
mod cell;
mod edge;
mod player;
mod selection;
mod snapshot;
mod state;

pub use board::{Board, Claim};
pub use cell::Cell;
pub use edge::{Edge, EdgeId, Side};
pub use player::Player;
pub use selection::{CellSide, PendingSelection};
pub use snapshot::BoardSnapshot;
pub use state::{Commit, GameOutcome, GameState, Phase};
