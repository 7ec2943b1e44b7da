use thiserror::Error;

// Unified error type for measura

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    #[error("inconsistent unit: {0}")]
    InconsistentUnit(String),
    #[error("unit `{id}` registered twice for kind {kind}")]
    DuplicateUnit { kind: &'static str, id: &'static str },
    #[error("kind {0} has no base SI standard unit")]
    MissingStandardUnit(&'static str),
    #[error("unknown unit `{id}` for kind {kind}")]
    UnknownUnit { kind: &'static str, id: String },
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, UnitError>;

/// Bounds check for a flat index.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(UnitError::IndexOutOfRange(format!(
            "index {index} outside valid range 0..{len}"
        )));
    }
    Ok(())
}

/// Bounds check for a (row, column) pair.
pub(crate) fn check_cell(row: usize, col: usize, rows: usize, cols: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(UnitError::IndexOutOfRange(format!(
            "cell ({row}, {col}) outside valid range 0..{rows}, 0..{cols}"
        )));
    }
    Ok(())
}
