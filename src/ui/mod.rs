//! Terminal UI: the board, scores, and pointer/keyboard input driving an
//! [`Engine`](crate::engine::Engine) at its configured frame rate.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
