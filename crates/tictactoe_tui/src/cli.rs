//! Command-line interface.

use crate::config::PlayerChoice;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Mark that opens each game (overrides the config file)
    #[arg(long, value_enum)]
    pub first: Option<PlayerChoice>,
}
