use sheetsort_core::CoordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Title not present in the header index. `known` lists every
    /// registered title with its signed index.
    #[error("unknown column header: {title} ({known})")]
    UnknownHeader { title: String, known: String },

    /// The header resolved, but this particular row has fewer cells.
    #[error(
        "column {column} out of range for header {title:?}: row has {cells} cell(s) [{row}]"
    )]
    ColumnOutOfRange {
        title: String,
        column: usize,
        cells: usize,
        /// Row contents joined with `|`.
        row: String,
    },

    #[error("row {row} out of range ({rows} row(s))")]
    RowOutOfRange { row: usize, rows: usize },

    #[error(transparent)]
    Coord(#[from] CoordError),

    /// Sort profile failed to parse or validate.
    #[error("sort profile: {0}")]
    Profile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
