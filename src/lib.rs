//! # Dots and Boxes
//!
//! Dots and Boxes against a heuristic computer opponent, played in the
//! terminal with Ratatui. The game logic is independent of the front end and
//! is driven one tick at a time, so it can also be simulated headless.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: edges, cells, board, turn and score state machine
//! - [`ai`] — Agent trait, the bucketed heuristic opponent, a random baseline
//! - [`engine`] — Tick-driven controller: pointer staging, computer delay, result countdown
//! - [`simulation`] — Headless agent-vs-agent matches and aggregate metrics
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod simulation;
pub mod ui;
