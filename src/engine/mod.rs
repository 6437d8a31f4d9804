//! Tick-driven game driver: owns the current game, the staged edge, the
//! computer's think countdown and the result-display countdown.

mod config;
mod driver;
mod snapshot;

pub use config::EngineConfig;
pub use driver::Engine;
pub use snapshot::Snapshot;
