//! Nodata substitution in tables
use eis_toolkit::{Float, Table};

use crate::error::Result;
use crate::values::matches_any;

/// Replaces every cell equal to one of `old_nodata` with `new_nodata`, in all columns
///
/// Infinite cells are left alone. A NaN in `old_nodata` matches NaN cells.
///
/// ### Example
///
/// ```rust
/// use eis_nodata::table::replace_nodata_table;
/// use eis_toolkit::Table;
/// use ndarray::array;
///
/// let table = Table::new(array![[1., -999.], [-999., 4.]], vec!["Cu", "Zn"]).unwrap();
/// let replaced = replace_nodata_table(&table, &[-999.], f64::NAN);
/// assert!(replaced.records()[[0, 1]].is_nan());
/// assert_eq!(replaced.columns(), table.columns());
/// ```
pub fn replace_nodata_table<F: Float>(table: &Table<F>, old_nodata: &[F], new_nodata: F) -> Table<F> {
    table.mapv(|x| if matches_any(x, old_nodata) { new_nodata } else { x })
}

/// Replaces every cell equal to one of `old_nodata` with `new_nodata`, in the named columns
///
/// Fails with `UnknownColumn` if a name is not a column of `table`.
pub fn replace_nodata_columns<F: Float, S: AsRef<str>>(
    table: &Table<F>,
    old_nodata: &[F],
    new_nodata: F,
    columns: &[S],
) -> Result<Table<F>> {
    let indices = table.column_indices(columns)?;

    let mut records = table.records().to_owned();
    for index in indices {
        records
            .column_mut(index)
            .mapv_inplace(|x| if matches_any(x, old_nodata) { new_nodata } else { x });
    }

    Ok(table.with_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NodataError;
    use ndarray::array;

    fn table() -> Table<f64> {
        Table::new(
            array![[1., -1., 0.], [-1., 2., f64::INFINITY], [0., 0., 3.]],
            vec!["a", "b", "c"],
        )
        .unwrap()
    }

    #[test]
    fn all_columns() {
        let out = replace_nodata_table(&table(), &[-1., 0.], 99.);
        assert_eq!(
            *out.records(),
            array![[1., 99., 99.], [99., 2., f64::INFINITY], [99., 99., 3.]]
        );
    }

    #[test]
    fn selected_columns_only() {
        let out = replace_nodata_columns(&table(), &[0.], -9999., &["a", "c"]).unwrap();
        assert_eq!(
            *out.records(),
            array![[1., -1., -9999.], [-1., 2., f64::INFINITY], [-9999., 0., 3.]]
        );
    }

    #[test]
    fn nan_to_value() {
        let table = Table::new(array![[f32::NAN, 1.]], vec!["x", "y"]).unwrap();
        let out = replace_nodata_columns(&table, &[f32::NAN], -1., &["x"]).unwrap();
        assert_eq!(*out.records(), array![[-1f32, 1.]]);
    }

    #[test]
    fn unknown_column() {
        let res = replace_nodata_columns(&table(), &[0.], 1., &["a", "d"]);
        assert!(matches!(res, Err(NodataError::UnknownColumn(name)) if name == "d"));
    }
}
