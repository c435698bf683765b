//! Error definitions for compositional transforms
use thiserror::Error;
pub type Result<T> = std::result::Result<T, CodaError>;

#[derive(Error, Debug, Clone)]
pub enum CodaError {
    #[error("column {0} not found in the composition")]
    UnknownColumn(String),
    #[error("composition contains a non-positive or non-finite value at row {row}, column {column}")]
    NonPositiveComposition { row: usize, column: String },
    #[error("band stack contains a non-positive or non-finite value at band {band}, pixel ({row}, {col})")]
    NonPositiveSample { band: usize, row: usize, col: usize },
    #[error("no parts selected")]
    EmptySelection,
    #[error("scale has {actual} entries, coordinates have {expected} rows")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("scale must be positive and finite, got {value} at row {row}")]
    NonPositiveScale { row: usize, value: String },
    #[error(transparent)]
    Toolkit(eis_toolkit::Error),
}

impl From<eis_toolkit::Error> for CodaError {
    fn from(err: eis_toolkit::Error) -> Self {
        match err {
            eis_toolkit::Error::UnknownColumn(name) => CodaError::UnknownColumn(name),
            other => CodaError::Toolkit(other),
        }
    }
}
