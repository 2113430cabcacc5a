//! Common test utilities and helpers

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header of the real Veekun moves table.
pub const MOVES_HEADER: &str = "id,identifier,generation_id,type_id,power,pp,accuracy,priority,target_id,damage_class_id,effect_id,effect_chance,contest_type_id,contest_effect_id,super_contest_effect_id";

/// A moves table written to a temporary directory.
pub struct MovesFixture {
    temp_dir: TempDir,
    path: PathBuf,
}

impl MovesFixture {
    /// Write `contents` verbatim as `moves.csv`.
    pub fn from_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("moves.csv");
        fs::write(&path, contents).expect("write moves.csv");
        Self { temp_dir, path }
    }

    /// Write a minimal two-column table from `(identifier, effect_id)` pairs.
    pub fn from_rows(rows: &[(&str, &str)]) -> Self {
        let mut contents = String::from("identifier,effect_id\n");
        for (identifier, effect_id) in rows {
            contents.push_str(&format!("{identifier},{effect_id}\n"));
        }
        Self::from_contents(&contents)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// A path in the same directory that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.temp_dir.path().join("missing.csv")
    }
}
