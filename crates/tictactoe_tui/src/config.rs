//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Cell, Mark};
use tracing::{debug, info, instrument};

/// Which mark opens each game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerChoice {
    /// Cross moves first.
    #[default]
    X,
    /// Nought moves first.
    O,
}

impl From<PlayerChoice> for Mark {
    fn from(choice: PlayerChoice) -> Self {
        match choice {
            PlayerChoice::X => Mark::Cross,
            PlayerChoice::O => Mark::Nought,
        }
    }
}

/// Text drawn for each kind of cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Glyph for a cross.
    cross: String,
    /// Glyph for a nought.
    nought: String,
    /// Glyph for an empty cell.
    empty: String,
}

impl Glyphs {
    /// Glyph for `cell`.
    pub fn for_cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Cross => &self.cross,
            Cell::Nought => &self.nought,
            Cell::Empty => &self.empty,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            cross: "X".to_string(),
            nought: "O".to_string(),
            empty: " ".to_string(),
        }
    }
}

/// Settings for the terminal front end.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Mark that opens every game.
    first_player: PlayerChoice,
    /// Cell glyphs.
    glyphs: Glyphs,
    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            first_player: PlayerChoice::default(),
            glyphs: Glyphs::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the opening mark.
    pub fn with_first_player(mut self, first_player: PlayerChoice) -> Self {
        self.first_player = first_player;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
