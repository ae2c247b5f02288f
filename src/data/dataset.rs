use crate::error::TreeError;
use indexmap::IndexMap;
use nalgebra::{DMatrix, DVector};
use std::fmt::{self, Debug, Formatter};

/// A rectangular table of categorical records.
///
/// Every record has the same number of columns. The last column holds the
/// class label, all preceding columns are predictor attributes.
#[derive(Clone, PartialEq)]
pub struct Dataset {
    records: DMatrix<String>,
}

impl Debug for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    records: [\n")?;

        for i in 0..self.records.nrows() {
            write!(f, "        [")?;
            for j in 0..self.records.ncols() {
                write!(f, "{:?}, ", self.records[(i, j)])?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ]\n}}")
    }
}

impl Dataset {
    /// Builds a dataset from rows of values, the last value of each row being its class.
    ///
    /// # Arguments
    ///
    /// * `rows` - The records, in the order they should be kept.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidDataset` if there are no rows, if the rows have
    /// fewer than two columns or if they are not all the same length.
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let ncols = match rows.first() {
            Some(first) => first.len(),
            None => return Err(TreeError::InvalidDataset("the dataset has no rows".into())),
        };
        if ncols < 2 {
            return Err(TreeError::InvalidDataset(format!(
                "records need a class and at least one attribute, found {} column(s)",
                ncols
            )));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != ncols) {
            return Err(TreeError::InvalidDataset(format!(
                "row {} has {} columns, expected {}",
                index,
                row.len(),
                ncols
            )));
        }

        let records = DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j].clone());
        Ok(Self { records })
    }

    pub fn records(&self) -> &DMatrix<String> {
        &self.records
    }

    pub fn nrows(&self) -> usize {
        self.records.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.records.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.records.nrows() == 0
    }

    /// Number of predictor attributes (every column except the class).
    pub fn n_attributes(&self) -> usize {
        self.records.ncols() - 1
    }

    /// Column index of the class attribute.
    pub fn class_index(&self) -> usize {
        self.records.ncols() - 1
    }

    pub fn value(&self, row: usize, column: usize) -> &str {
        &self.records[(row, column)]
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.nrows()).map(move |row| self.records[(row, column)].as_str())
    }

    pub fn class_column(&self) -> impl Iterator<Item = &str> + '_ {
        self.column(self.class_index())
    }

    /// The predictor columns as an owned matrix, suitable for prediction.
    pub fn features(&self) -> DMatrix<String> {
        DMatrix::from_fn(self.nrows(), self.n_attributes(), |i, j| {
            self.records[(i, j)].clone()
        })
    }

    /// The class column as an owned vector.
    pub fn labels(&self) -> DVector<String> {
        DVector::from_iterator(self.nrows(), self.class_column().map(str::to_owned))
    }

    /// Groups the rows by the value they hold in `attribute_index`.
    ///
    /// Keys appear in the order their value is first met, and each group keeps
    /// the relative order of its rows. Every row lands in exactly one group and
    /// no group is empty.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidParameter` if `attribute_index` is not a column
    /// of this dataset.
    pub fn partition(
        &self,
        attribute_index: usize,
    ) -> Result<IndexMap<String, Dataset>, TreeError> {
        if attribute_index >= self.ncols() {
            return Err(TreeError::InvalidParameter(format!(
                "column {} is out of range for a dataset with {} columns",
                attribute_index,
                self.ncols()
            )));
        }

        let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (row, value) in self.column(attribute_index).enumerate() {
            groups.entry(value).or_default().push(row);
        }

        Ok(groups
            .into_iter()
            .map(|(value, rows)| (value.to_owned(), self.select_rows(&rows)))
            .collect())
    }

    /// The given rows, in the given order.
    pub(crate) fn select_rows(&self, rows: &[usize]) -> Dataset {
        let records = DMatrix::from_fn(rows.len(), self.ncols(), |i, j| {
            self.records[(rows[i], j)].clone()
        });
        Dataset { records }
    }
}
