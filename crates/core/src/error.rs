use thiserror::Error;

/// Errors from parsing cell coordinates and ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    /// Not a single-cell reference such as `B12` or `$B$12`.
    #[error("invalid cell coordinate {0:?}")]
    InvalidCoordinate(String),
    /// Not a cell or range reference such as `C5:G20`.
    #[error("invalid range {0:?}")]
    InvalidRange(String),
}
