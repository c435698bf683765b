//! Error types in the EIS toolkit
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("column {0} not found in table")]
    UnknownColumn(String),
    #[error("column {0} appears more than once")]
    DuplicateColumn(String),
    #[error("expected {expected} column names, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },
}
