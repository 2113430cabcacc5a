use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column in header: {column}")]
    MissingColumn { column: &'static str },

    #[error("Record on line {} has no {column} field", line_str(*line))]
    MissingField {
        line: Option<u64>,
        column: &'static str,
    },

    #[error("Invalid effect_id {value:?} on line {}: {source}", line_str(*line))]
    InvalidEffectId {
        line: Option<u64>,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl Error {
    /// The input could not be opened for reading.
    pub fn is_resource_error(&self) -> bool {
        matches!(self, Error::Open { .. })
    }

    /// The input was opened but its contents could not be interpreted.
    pub fn is_format_error(&self) -> bool {
        !self.is_resource_error()
    }

    /// Line number on which the error occurred, if it is known.
    pub fn line(&self) -> Option<u64> {
        match self {
            Error::MissingField { line, .. } | Error::InvalidEffectId { line, .. } => *line,
            Error::Csv(e) => e.position().map(csv::Position::line),
            _ => None,
        }
    }
}

fn line_str(line: Option<u64>) -> String {
    line.map_or_else(|| "?".to_string(), |n| n.to_string())
}

pub type Result<T> = std::result::Result<T, Error>;
