//! Terminal front end for two-player tic-tac-toe.
//!
//! - **Session**: turn order and cell activation on top of the board engine
//! - **View**: what the screen shows, built from the session
//! - **UI**: ratatui drawing of a view
//! - **Input**: key bindings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod session;
pub mod ui;
pub mod view;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, Glyphs, PlayerChoice, TuiConfig};
pub use input::{Command, command_for};
pub use session::{GameSession, MoveResult};
pub use view::{BoardView, end_message, turn_message};
