//! Sets of raw values standing for missing data
use std::convert::TryFrom;

use eis_toolkit::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{NodataError, Result};

/// Nodata value written by the raster helpers when no other value is configured
pub const DEFAULT_NODATA: f64 = -9999.;

/// A non-empty set of nodata markers
///
/// The first value is the canonical one: it is written back wherever missing data has to be
/// represented by a single value again.
///
/// With the `serde` feature the set is stored as a plain list and an empty list is rejected
/// on deserialization.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "Vec<F>",
        into = "Vec<F>",
        bound(
            serialize = "F: Float + Serialize",
            deserialize = "F: Float + Deserialize<'de>"
        )
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct NodataValues<F> {
    values: Vec<F>,
}

impl<F: Float> NodataValues<F> {
    /// A single nodata marker
    pub fn single(value: F) -> Self {
        NodataValues {
            values: vec![value],
        }
    }

    /// Several nodata markers, the first one is canonical
    pub fn new<I: IntoIterator<Item = F>>(values: I) -> Result<Self> {
        let values: Vec<F> = values.into_iter().collect();
        if values.is_empty() {
            return Err(NodataError::EmptyNodata);
        }
        Ok(NodataValues { values })
    }

    /// The representative written back for missing data
    pub fn canonical(&self) -> F {
        self.values[0]
    }

    pub fn as_slice(&self) -> &[F] {
        &self.values
    }

    /// True if `value` is one of the markers. A NaN marker matches NaN.
    pub fn contains(&self, value: F) -> bool {
        matches_any(value, &self.values)
    }
}

impl<F: Float> From<F> for NodataValues<F> {
    fn from(value: F) -> Self {
        NodataValues::single(value)
    }
}

impl<F: Float> TryFrom<Vec<F>> for NodataValues<F> {
    type Error = NodataError;

    fn try_from(values: Vec<F>) -> Result<Self> {
        NodataValues::new(values)
    }
}

impl<F> From<NodataValues<F>> for Vec<F> {
    fn from(values: NodataValues<F>) -> Self {
        values.values
    }
}

impl<F> AsRef<[F]> for NodataValues<F> {
    fn as_ref(&self) -> &[F] {
        &self.values
    }
}

pub(crate) fn matches_any<F: Float>(value: F, values: &[F]) -> bool {
    values
        .iter()
        .any(|&v| v == value || (v.is_nan() && value.is_nan()))
}
