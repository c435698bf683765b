//! Provide traits for the different preprocessing steps
//!

/// Transformation of records
///
/// A transformer maps its input to a new output without touching the input's backing storage.
/// Transformations that can fail on invalid input return a `Result` as their output type.
pub trait Transformer<R, T> {
    fn transform(&self, x: R) -> T;
}
