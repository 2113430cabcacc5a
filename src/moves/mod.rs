//! Move records read from the Veekun `moves.csv` table.
//!
//! Only the two columns the effect report needs are kept. Everything else in
//! the table (power, accuracy, contest data and so on) is ignored.

mod reader;

pub use reader::MoveReader;

/// Header name of the move identifier column.
pub const IDENTIFIER_COLUMN: &str = "identifier";
/// Header name of the effect id column.
pub const EFFECT_ID_COLUMN: &str = "effect_id";

/// One row of the moves table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    /// Kebab-case move name, e.g. `karate-chop`.
    pub identifier: String,
    /// Shared by every move with the same battle effect.
    pub effect_id: i64,
}

impl MoveRow {
    pub fn new(identifier: impl Into<String>, effect_id: i64) -> Self {
        Self {
            identifier: identifier.into(),
            effect_id,
        }
    }
}
