//! Composition checks run before any log-ratio arithmetic
use eis_toolkit::{Float, Table};
use ndarray::{ArrayBase, Axis, Data, Ix2};

use crate::error::{CodaError, Result};

/// Checks that every cell of the table is a strictly positive, finite number
///
/// ### Example
///
/// ```rust
/// use eis_coda::validation::validate;
/// use eis_toolkit::Table;
/// use ndarray::array;
///
/// let table = Table::new(array![[1., 2.], [0., 3.]], vec!["a", "b"]).unwrap();
/// assert!(validate(&table).is_err());
/// ```
pub fn validate<F: Float>(table: &Table<F>) -> Result<()> {
    let indices: Vec<usize> = (0..table.ncols()).collect();
    check_positive(table.records(), &indices, table.columns())
}

/// Checks that all `columns` exist and that their cells are strictly positive and finite
///
/// Columns not named are ignored, they may hold any value.
pub fn validate_columns<F: Float, S: AsRef<str>>(table: &Table<F>, columns: &[S]) -> Result<()> {
    if columns.is_empty() {
        return Err(CodaError::EmptySelection);
    }
    let indices = table.column_indices(columns)?;
    check_positive(table.records(), &indices, table.columns())
}

/// Returns true if `value` may appear in a composition
pub(crate) fn is_valid_part<F: Float>(value: F) -> bool {
    value.is_finite() && value > F::zero()
}

fn check_positive<F: Float, D: Data<Elem = F>>(
    records: &ArrayBase<D, Ix2>,
    indices: &[usize],
    names: &[String],
) -> Result<()> {
    for (row, sample) in records.axis_iter(Axis(0)).enumerate() {
        if let Some(&col) = indices.iter().find(|&&col| !is_valid_part(sample[col])) {
            return Err(CodaError::NonPositiveComposition {
                row,
                column: names[col].clone(),
            });
        }
    }

    Ok(())
}
