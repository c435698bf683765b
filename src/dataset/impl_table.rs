use ndarray::{Array2, ArrayView1, Axis};
use std::collections::HashSet;

use super::{Float, Table};
use crate::error::{Error, Result};

impl<F: Float> Table<F> {
    /// Creates a table from records and column names
    ///
    /// Fails if the number of names differs from the number of record columns or if a name is
    /// repeated.
    pub fn new<I, S>(records: Array2<F>, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.len() != records.ncols() {
            return Err(Error::ColumnCountMismatch {
                expected: records.ncols(),
                actual: columns.len(),
            });
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateColumn(name.clone()));
            }
        }

        Ok(Table { records, columns })
    }

    /// Creates a table whose columns are named after their position
    pub fn from_records(records: Array2<F>) -> Self {
        let columns = (0..records.ncols()).map(|i| i.to_string()).collect();
        Table { records, columns }
    }

    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn nrows(&self) -> usize {
        self.records.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.records.ncols()
    }

    pub fn into_records(self) -> Array2<F> {
        self.records
    }

    /// Position of a column, if present
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns true if every given name is a column of this table
    pub fn has_columns<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names
            .iter()
            .all(|name| self.column_index(name.as_ref()).is_some())
    }

    /// Resolves column names to positions, in the order given
    pub fn column_indices<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        let mut seen = HashSet::with_capacity(names.len());
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                if !seen.insert(name) {
                    return Err(Error::DuplicateColumn(name.to_string()));
                }
                self.column_index(name)
                    .ok_or_else(|| Error::UnknownColumn(name.to_string()))
            })
            .collect()
    }

    /// A view on the values of a single column
    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, F>> {
        let index = self
            .column_index(name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))?;
        Ok(self.records.column(index))
    }

    /// Copies the given columns, in the order given, into a new table
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table<F>> {
        let indices = self.column_indices(names)?;
        let records = self.records.select(Axis(1), &indices);
        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();

        Ok(Table { records, columns })
    }

    /// Applies `f` to every cell, keeping the column names
    pub fn mapv<G: Fn(F) -> F>(&self, f: G) -> Table<F> {
        Table {
            records: self.records.mapv(f),
            columns: self.columns.clone(),
        }
    }

    /// Creates a table with the same column names and new records
    pub fn with_records(&self, records: Array2<F>) -> Result<Table<F>> {
        Table::new(records, self.columns.iter().cloned())
    }
}

impl<F: Float> From<Array2<F>> for Table<F> {
    fn from(records: Array2<F>) -> Self {
        Table::from_records(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn table() -> Table<f64> {
        Table::new(
            array![[1., 2., 3.], [4., 5., 6.]],
            vec!["a", "b", "c"],
        )
        .unwrap()
    }

    #[test]
    fn column_count_must_match() {
        let res = Table::new(array![[1., 2.]], vec!["a"]);
        assert!(matches!(
            res,
            Err(Error::ColumnCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn duplicate_names_rejected() {
        let res = Table::new(array![[1., 2.]], vec!["a", "a"]);
        assert!(matches!(res, Err(Error::DuplicateColumn(name)) if name == "a"));
    }

    #[test]
    fn select_keeps_requested_order() {
        let selected = table().select(&["c", "a"]).unwrap();
        assert_eq!(selected.columns(), &["c".to_string(), "a".to_string()]);
        assert_abs_diff_eq!(*selected.records(), array![[3., 1.], [6., 4.]]);
    }

    #[test]
    fn select_unknown_column() {
        let res = table().select(&["a", "e"]);
        assert!(matches!(res, Err(Error::UnknownColumn(name)) if name == "e"));
    }

    #[test]
    fn positional_names() {
        let table = Table::from(array![[1f32, 2.]]);
        assert_eq!(table.columns(), &["0".to_string(), "1".to_string()]);
        assert!(table.has_columns(&["1"]));
        assert!(!table.has_columns(&["2"]));
    }

    #[test]
    fn mapv_keeps_names() {
        let doubled = table().mapv(|v| v * 2.);
        assert_eq!(doubled.columns(), table().columns());
        assert_abs_diff_eq!(doubled.records()[[1, 2]], 12.);
    }

    #[test]
    fn column_view() {
        let table = table();
        assert_abs_diff_eq!(table.column("b").unwrap(), array![2., 5.]);
        assert!(table.column("z").is_err());
    }
}
