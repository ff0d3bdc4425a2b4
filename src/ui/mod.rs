//! Desktop board
//!
//! A native egui/eframe window: click to place, hover to see whether a
//! point is legal, play hotseat or against the built-in solver.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::RenjuApp;
pub use game_state::{GameMode, Session};
