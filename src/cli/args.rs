//! CLI argument structures

use crate::app::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// List move effects that belong to exactly one move
#[derive(Parser, Debug)]
#[command(name = "unique-move-effects")]
#[command(about = "List Veekun move effects that belong to exactly one move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Moves table to read (defaults to veekun/moves.csv next to the sources)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig::new(self.verbose, self.input)
    }
}
