//! Application configuration
//!
//! The only inputs are the command line arguments; there is no config file.

use std::path::{Path, PathBuf};

/// Directory, relative to the crate root, holding the Veekun CSV dump.
pub const VEEKUN_DIR: &str = "veekun";
/// File name of the moves table inside [`VEEKUN_DIR`].
pub const MOVES_FILE: &str = "moves.csv";

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Moves table to read
    pub input: PathBuf,
}

impl AppConfig {
    /// Create a configuration, falling back to the bundled moves table when
    /// no input is given.
    pub fn new(verbose: u8, input: Option<PathBuf>) -> Self {
        Self {
            verbose,
            input: input.unwrap_or_else(Self::default_input_path),
        }
    }

    /// Set the input path
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// `veekun/moves.csv` next to the crate's own sources.
    pub fn default_input_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(VEEKUN_DIR)
            .join(MOVES_FILE)
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(0, None)
    }
}
