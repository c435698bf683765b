//! Centered log-ratio transform
//!
//! For a composition `x` with `D` parts the transform maps every part to
//!
//! ```text
//! clr(x)_i = ln(x_i / g(x)),    g(x) = exp(mean(ln x))
//! ```
//!
//! Closing the parts to a unit sum first does not change the result, so the coordinates are
//! computed as `ln x_i - mean(ln x)` without forming the sum, which keeps them finite for every
//! finite positive part. When a subset of columns is selected only the selected parts enter the
//! mean, so the coordinates of a subcomposition never depend on the parts that were left out.
use eis_toolkit::param_guard::TransformGuard;
use eis_toolkit::traits::Transformer;
use eis_toolkit::{Float, ParamGuard, RasterArray, Table};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, Ix1, Ix2, Ix3, Zip};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{CodaError, Result};
use crate::validation::{is_valid_part, validate, validate_columns};

/// Row-wise closure: divides every row by its own sum
pub fn closure<F: Float, D: Data<Elem = F>>(records: &ArrayBase<D, Ix2>) -> Array2<F> {
    let mut closed = records.to_owned();
    for mut row in closed.rows_mut() {
        let total = row.sum();
        row.mapv_inplace(|v| v / total);
    }
    closed
}

/// Geometric mean `exp(mean(ln x))` of a row of positive parts
///
/// Returns NaN for an empty row.
pub fn geometric_mean<F: Float>(row: ArrayView1<F>) -> F {
    mean_log(row.iter().copied(), row.len()).exp()
}

/// `mean(ln x)`, NaN for no parts
fn mean_log<F: Float, I: Iterator<Item = F>>(parts: I, len: usize) -> F {
    if len == 0 {
        return F::nan();
    }
    parts.map(F::ln).sum::<F>() / F::cast(len)
}

/// Centered log-ratio transform of an unlabeled matrix of compositions, one per row
///
/// All cells must be strictly positive and finite.
pub fn clr_array<F: Float, D: Data<Elem = F>>(records: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
    if records.ncols() == 0 {
        return Err(CodaError::EmptySelection);
    }
    let table = Table::from_records(records.to_owned());
    validate(&table)?;

    Ok(centered_log_ratio(table.records()))
}

/// Centered log-ratio transform of every column of `table`
///
/// ### Example
///
/// ```rust
/// use eis_coda::clr::clr;
/// use eis_toolkit::Table;
/// use ndarray::array;
///
/// let table = Table::new(array![[5f64, 5., 5., 5.]], vec!["a", "b", "c", "d"]).unwrap();
/// let coords = clr(&table).unwrap();
/// assert!(coords.records().iter().all(|v| v.abs() < 1e-12));
/// ```
pub fn clr<F: Float>(table: &Table<F>) -> Result<Table<F>> {
    if table.ncols() == 0 {
        return Err(CodaError::EmptySelection);
    }
    validate(table)?;

    log::debug!(
        "clr on {} samples with {} parts",
        table.nrows(),
        table.ncols()
    );
    Ok(table.with_records(centered_log_ratio(table.records()))?)
}

/// Centered log-ratio transform of the subcomposition formed by `columns`
///
/// The output holds the selected columns, in the order given.
pub fn clr_columns<F: Float, S: AsRef<str>>(table: &Table<F>, columns: &[S]) -> Result<Table<F>> {
    validate_columns(table, columns)?;
    let subcomposition = table.select(columns)?;

    if subcomposition.ncols() == 1 {
        log::warn!(
            "subcomposition of the single part {} maps every sample to zero",
            subcomposition.columns()[0]
        );
    }
    log::debug!(
        "clr on {} samples of subcomposition {:?}",
        subcomposition.nrows(),
        subcomposition.columns()
    );
    Ok(subcomposition.with_records(centered_log_ratio(subcomposition.records()))?)
}

/// Pixel-wise centered log-ratio transform across the bands of a raster stack
///
/// Every pixel is a composition whose parts are the band values. A pixel holding NaN in any
/// band is treated as missing: all of its output bands are NaN. Every other sample must be
/// strictly positive and finite.
pub fn clr_bands<F: Float, D: Data<Elem = F>>(raster: &ArrayBase<D, Ix3>) -> Result<RasterArray<F>> {
    if raster.len_of(Axis(0)) == 0 {
        return Err(CodaError::EmptySelection);
    }

    for ((band, row, col), &value) in raster.indexed_iter() {
        if !value.is_nan() && !is_valid_part(value) {
            return Err(CodaError::NonPositiveSample {
                band: band + 1,
                row,
                col,
            });
        }
    }

    let mut coords = RasterArray::from_elem(raster.raw_dim(), F::nan());
    Zip::from(coords.lanes_mut(Axis(0)))
        .and(raster.lanes(Axis(0)))
        .for_each(|mut out, parts| {
            if parts.iter().all(|v| !v.is_nan()) {
                out.assign(&parts);
                center_logs(out);
            }
        });

    Ok(coords)
}

/// `ln(x_i / g)` of every row
fn centered_log_ratio<F: Float, D: Data<Elem = F>>(records: &ArrayBase<D, Ix2>) -> Array2<F> {
    let mut coords = records.to_owned();
    coords.rows_mut().into_iter().for_each(center_logs);
    coords
}

/// Replaces every part by `ln(x_i / g)`, with `ln(g)` taken as the mean of the logs
fn center_logs<F: Float>(mut parts: ArrayViewMut1<F>) {
    let log_g = mean_log(parts.iter().copied(), parts.len());
    parts.mapv_inplace(|v| v.ln() - log_g);
}

/// Inverse centered log-ratio transform
///
/// Exponentiates the coordinates, closes each row and multiplies it by the matching entry of
/// `scale`. Closure discards the absolute magnitude of a composition, so the forward transform
/// cannot be undone without it: passing the row sums of the original (sub)composition recovers
/// it exactly, up to floating point error.
pub fn inverse_clr<F: Float, D: Data<Elem = F>>(
    coords: &Table<F>,
    scale: &ArrayBase<D, Ix1>,
) -> Result<Table<F>> {
    if scale.len() != coords.nrows() {
        return Err(CodaError::ShapeMismatch {
            expected: coords.nrows(),
            actual: scale.len(),
        });
    }
    if let Some((row, value)) = scale.iter().enumerate().find(|&(_, &s)| !is_valid_part(s)) {
        return Err(CodaError::NonPositiveScale {
            row,
            value: value.to_string(),
        });
    }

    // s * exp(c_i) / sum(exp(c)) evaluated in log space, so tiny parts of a wide row do not
    // underflow before the scale is applied
    let mut parts = coords.records().to_owned();
    Zip::from(parts.rows_mut())
        .and(scale)
        .for_each(|mut row, &s| {
            let max = row.fold(F::neg_infinity(), |acc, &v| acc.max(v));
            let log_total = max + row.iter().map(|&v| (v - max).exp()).sum::<F>().ln();
            let offset = s.ln() - log_total;
            row.mapv_inplace(|v| (v + offset).exp());
        });

    Ok(coords.with_records(parts)?)
}

/// Inverse centered log-ratio transform onto the unit simplex, every row sums to one
pub fn inverse_clr_closed<F: Float>(coords: &Table<F>) -> Result<Table<F>> {
    inverse_clr(coords, &Array1::ones(coords.nrows()))
}

/// Checked parameters of the [centered log-ratio transform](struct.Clr.html)
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClrValidParams {
    columns: Option<Vec<String>>,
}

impl ClrValidParams {
    /// Selected subcomposition, `None` for every column
    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }
}

/// Helper struct for building a set of [CLR parameters](struct.ClrValidParams.html)
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClrParams(ClrValidParams);

impl ClrParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the transform to a subcomposition
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

impl ParamGuard for ClrParams {
    type Checked = ClrValidParams;
    type Error = CodaError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if let Some(columns) = &self.0.columns {
            if columns.is_empty() {
                return Err(CodaError::EmptySelection);
            }
            for (i, name) in columns.iter().enumerate() {
                if columns[..i].contains(name) {
                    return Err(eis_toolkit::Error::DuplicateColumn(name.clone()).into());
                }
            }
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl TransformGuard for ClrParams {}

impl<'a, F: Float> Transformer<&'a Table<F>, Result<Table<F>>> for ClrValidParams {
    /// Transforms the table, or the configured subcomposition of it, to CLR coordinates
    fn transform(&self, table: &'a Table<F>) -> Result<Table<F>> {
        match &self.columns {
            Some(columns) => clr_columns(table, columns),
            None => clr(table),
        }
    }
}

/// Centered log-ratio transform
///
/// ### Example
///
/// ```rust
/// use eis_coda::Clr;
/// use eis_toolkit::traits::Transformer;
/// use eis_toolkit::Table;
/// use ndarray::array;
///
/// let table = Table::new(array![[1f64, 1., 1., 2.]], vec!["a", "b", "c", "d"]).unwrap();
/// let coords = Clr::params().columns(vec!["a", "b", "c"]).transform(&table).unwrap();
/// assert_eq!(coords.ncols(), 3);
/// assert!(coords.records().iter().all(|v| v.abs() < 1e-12));
/// ```
pub struct Clr;

impl Clr {
    pub fn params() -> ClrParams {
        ClrParams::new()
    }
}
