//! # unique-move-effects
//!
//! Finds the move effects in the Veekun `moves.csv` table that are used by a
//! single move, so they can be told apart from the generic effects shared by
//! many moves.
//!
//! ## Usage
//!
//! ```bash
//! unique-move-effects [-v] [path/to/moves.csv]
//! ```
//!
//! ## Modules
//!
//! - `moves` - Typed rows read from the moves table
//! - `effects` - Grouping of move identifiers by effect id
//! - `report` - Gap-separated text listing of unique effects
//! - `app` - Configuration, logging and fatal error handling
//! - `cli` - Command-line argument definitions
pub mod app;
pub mod cli;
pub mod effects;
pub mod error;
pub mod moves;
pub mod report;

pub use effects::EffectIndex;
pub use error::{Error, Result};
pub use moves::{MoveReader, MoveRow};

use anyhow::Context;
use app::AppConfig;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Read the moves table at `path` and group it by effect.
pub fn unique_move_effects(path: impl AsRef<Path>) -> Result<EffectIndex> {
    let rows = MoveReader::from_path(path)?;
    EffectIndex::from_rows(rows)
}

/// Build the index for `config.input` and write the report to `out`.
///
/// Nothing is written unless the whole table was read successfully.
pub fn run<W: Write + ?Sized>(config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    let index = unique_move_effects(&config.input)
        .with_context(|| format!("Failed to load moves from {}", config.input.display()))?;

    debug!("Writing {} unique effects", index.unique_count());
    report::write_report(index.unique_effects(), out).context("Failed to write report")?;
    out.flush().context("Failed to write report")?;
    Ok(())
}
