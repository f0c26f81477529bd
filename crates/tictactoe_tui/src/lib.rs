//! Terminal board for two-player tic-tac-toe.
//!
//! A thin presentation shell over [`tictactoe_engine`]: it renders the
//! engine's state and forwards key presses to it. Everything shown on screen
//! is derived by the [`view`] functions from the engine's read accessors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod theme;
mod ui;
pub mod view;

pub use app::{App, Transition};
pub use cli::Cli;
pub use input::{digit_index, move_cursor};
pub use theme::{Theme, ThemeError};
pub use ui::draw;
pub use view::CellHighlight;
