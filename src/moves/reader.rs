use super::{MoveRow, EFFECT_ID_COLUMN, IDENTIFIER_COLUMN};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Positions of the required columns, resolved once from the header.
#[derive(Debug, Clone, Copy)]
struct Columns {
    identifier: usize,
    effect_id: usize,
}

impl Columns {
    /// Returns `None` for an input with no header line at all.
    fn locate(headers: &csv::StringRecord) -> Result<Option<Self>> {
        if headers.is_empty() {
            return Ok(None);
        }

        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(Error::MissingColumn { column })
        };

        Ok(Some(Self {
            identifier: find(IDENTIFIER_COLUMN)?,
            effect_id: find(EFFECT_ID_COLUMN)?,
        }))
    }
}

/// Streams [`MoveRow`]s out of a moves table.
///
/// The header is validated when the reader is created, so a table without
/// `identifier` or `effect_id` columns fails before any row is read. Rows are
/// yielded in file order; the underlying source is closed when the reader is
/// dropped.
pub struct MoveReader<R> {
    reader: csv::Reader<R>,
    columns: Option<Columns>,
    record: csv::StringRecord,
}

impl MoveReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening moves table at {}", path.display());

        let reader = builder().from_path(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(reader)
    }
}

impl<R: Read> MoveReader<R> {
    pub fn from_reader(rdr: R) -> Result<Self> {
        Self::from_csv(builder().from_reader(rdr))
    }

    fn from_csv(mut reader: csv::Reader<R>) -> Result<Self> {
        let columns = Columns::locate(reader.headers()?)?;
        trace!("Resolved move table columns: {:?}", columns);

        Ok(Self {
            reader,
            columns,
            record: csv::StringRecord::new(),
        })
    }

    fn parse_record(&self, columns: Columns) -> Result<MoveRow> {
        let line = self.record.position().map(csv::Position::line);
        let field = |index: usize, column: &'static str| {
            self.record
                .get(index)
                .ok_or(Error::MissingField { line, column })
        };

        let identifier = field(columns.identifier, IDENTIFIER_COLUMN)?;
        let raw_effect_id = field(columns.effect_id, EFFECT_ID_COLUMN)?;
        let effect_id = raw_effect_id
            .trim()
            .parse::<i64>()
            .map_err(|source| Error::InvalidEffectId {
                line,
                value: raw_effect_id.to_string(),
                source,
            })?;

        Ok(MoveRow::new(identifier, effect_id))
    }
}

impl<R: Read> Iterator for MoveReader<R> {
    type Item = Result<MoveRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns?;

        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.parse_record(columns)),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

// Ragged rows are reported per field, with a line number, rather than as a
// length mismatch for the whole record.
fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true);
    builder
}
