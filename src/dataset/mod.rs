//! Datasets
//!
//! This module implements the table and raster containers consumed by the toolkit and the
//! floating point bound shared by every transformation.
use ndarray::{Array2, Array3, ScalarOperand};

use num_traits::{FromPrimitive, NumAssignOps, NumCast, Signed};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;

mod impl_table;
mod raster;

pub use raster::{MetaValue, RasterMeta};

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Every table cell and raster sample is
/// stored as a `Float`.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Table
///
/// Two-dimensional records with named columns. Each row is one sample, each column one
/// variable (for compositional data: one part). Column names are unique; their order matches
/// the column order of the records and carries no further meaning.
///
/// Tables are immutable once built: every operation returning a table allocates a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<F: Float> {
    records: Array2<F>,
    columns: Vec<String>,
}

/// A multiband raster stack with dimensionality (bands, rows, cols)
///
/// Bands are addressed 1-based in every public API, following the raster driver convention.
pub type RasterArray<F> = Array3<F>;
