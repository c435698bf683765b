//! Error definitions for nodata handling
use thiserror::Error;
pub type Result<T> = std::result::Result<T, NodataError>;

#[derive(Error, Debug, Clone)]
pub enum NodataError {
    #[error("invalid band index {band} in nodata mapping, raster has {num_bands} bands")]
    InvalidBandIndex { band: usize, num_bands: usize },
    #[error("column {0} not found in table")]
    UnknownColumn(String),
    #[error("at least one nodata value is required")]
    EmptyNodata,
    #[error(transparent)]
    Toolkit(eis_toolkit::Error),
}

impl From<eis_toolkit::Error> for NodataError {
    fn from(err: eis_toolkit::Error) -> Self {
        match err {
            eis_toolkit::Error::UnknownColumn(name) => NodataError::UnknownColumn(name),
            other => NodataError::Toolkit(other),
        }
    }
}

/// Failure of a guarded band transform: either the nodata policy does not fit the raster or
/// the wrapped transform itself failed
#[derive(Error, Debug, Clone)]
pub enum GuardError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Nodata(#[from] NodataError),
    #[error("guarded transform failed: {0}")]
    Transform(#[source] E),
}
