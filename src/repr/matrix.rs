use std::ops::Index;

use super::*;

/// Dense `vertices × edges` incidence matrix.
///
/// Column `j` encodes one directed edge: `+w` at the row of its source, `-w` at the row of its
/// destination and zero everywhere else. A self-loop cannot hold both signs in a single cell and
/// is encoded as a lone `+w` at the row of its vertex.
///
/// Entries are stored column-major. The matrix is never resized in place: growing it in either
/// dimension allocates a new matrix and copies the old entries forward (see [`Self::resized`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidenceMatrix {
    rows: usize,
    columns: usize,
    entries: Vec<Weight>,
}

impl IncidenceMatrix {
    /// Creates an all-zero matrix of the given dimensions
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            entries: vec![0; rows * columns],
        }
    }

    /// Number of rows (vertices)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (edges)
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the entry at `(row, column)`.
    /// ** Panics if `row >= rows || column >= columns` **
    pub fn get(&self, row: usize, column: usize) -> Weight {
        assert!(row < self.rows && column < self.columns);
        self.entries[column * self.rows + row]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, value: Weight) {
        assert!(row < self.rows && column < self.columns);
        self.entries[column * self.rows + row] = value;
    }

    /// Returns the entries of a single column, indexed by row.
    /// ** Panics if `column >= columns` **
    pub fn column(&self, column: usize) -> &[Weight] {
        assert!(column < self.columns);
        &self.entries[column * self.rows..(column + 1) * self.rows]
    }

    /// Returns an iterator over the entries of a single row, indexed by column.
    /// ** Panics if `row >= rows` **
    pub fn row(&self, row: usize) -> impl Iterator<Item = Weight> + '_ {
        assert!(row < self.rows);
        (0..self.columns).map(move |column| self.entries[column * self.rows + row])
    }

    /// Allocates a matrix with the new dimensions and copies all entries that still fit.
    /// New rows and columns are zero.
    pub fn resized(&self, rows: usize, columns: usize) -> Self {
        let mut matrix = Self::new(rows, columns);
        let keep_rows = self.rows.min(rows);
        for column in 0..self.columns.min(columns) {
            let old = &self.column(column)[..keep_rows];
            matrix.entries[column * rows..column * rows + keep_rows].copy_from_slice(old);
        }
        matrix
    }

    /// Returns the first row holding a negative entry in `column`
    pub fn negative_row(&self, column: usize) -> Option<usize> {
        self.column(column).iter().position(|&w| w < 0)
    }

    /// Returns the first row holding a positive entry in `column`
    pub fn positive_row(&self, column: usize) -> Option<usize> {
        self.column(column).iter().position(|&w| w > 0)
    }

    /// Decodes a column into `(source row, destination row, weight)`.
    ///
    /// A column with a positive and a negative entry decodes to the edge between the first
    /// such rows; a column with only a positive entry decodes to a self-loop. Columns without
    /// a positive entry are not edges and yield `None`.
    pub fn decode_column(&self, column: usize) -> Option<(usize, usize, Weight)> {
        let source = self.positive_row(column)?;
        let destination = self.negative_row(column).unwrap_or(source);
        Some((source, destination, self.get(source, column)))
    }

    /// Returns *true* if `column` is a valid edge encoding: exactly one positive and one
    /// negative entry of equal magnitude, or a lone positive entry (self-loop)
    pub fn is_well_formed_column(&self, column: usize) -> bool {
        let mut positive = None;
        let mut negative = None;
        for &w in self.column(column) {
            if w > 0 {
                if positive.replace(w).is_some() {
                    return false;
                }
            } else if w < 0 && negative.replace(w).is_some() {
                return false;
            }
        }

        match (positive, negative) {
            (Some(p), Some(n)) => p == -n,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

impl Index<(usize, usize)> for IncidenceMatrix {
    type Output = Weight;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && column < self.columns);
        &self.entries[column * self.rows + row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero() {
        let matrix = IncidenceMatrix::new(3, 4);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.columns(), 4);
        for row in 0..3 {
            assert!(matrix.row(row).all(|w| w == 0));
        }
    }

    #[test]
    fn resize_copies_forward() {
        let mut matrix = IncidenceMatrix::new(2, 1);
        matrix.set(0, 0, 5);
        matrix.set(1, 0, -5);

        let grown = matrix.resized(3, 2);
        assert_eq!(grown.rows(), 3);
        assert_eq!(grown.columns(), 2);
        assert_eq!(grown.column(0), &[5, -5, 0]);
        assert_eq!(grown.column(1), &[0, 0, 0]);
        assert_eq!(grown[(1, 0)], -5);

        let shrunk = grown.resized(1, 1);
        assert_eq!(shrunk.column(0), &[5]);
    }

    #[test]
    fn decode_columns() {
        let mut matrix = IncidenceMatrix::new(3, 3);
        matrix.set(2, 0, 4);
        matrix.set(0, 0, -4);
        matrix.set(1, 1, 2);
        matrix.set(2, 2, -1);

        assert_eq!(matrix.decode_column(0), Some((2, 0, 4)));
        assert_eq!(matrix.decode_column(1), Some((1, 1, 2)));
        assert_eq!(matrix.decode_column(2), None);

        assert!(matrix.is_well_formed_column(0));
        assert!(matrix.is_well_formed_column(1));
        assert!(!matrix.is_well_formed_column(2));
    }

    #[test]
    fn unbalanced_column_is_malformed() {
        let mut matrix = IncidenceMatrix::new(3, 1);
        matrix.set(0, 0, 3);
        matrix.set(1, 0, -2);
        assert!(!matrix.is_well_formed_column(0));

        matrix.set(2, 0, -3);
        assert!(!matrix.is_well_formed_column(0));
    }

    #[test]
    fn row_iteration() {
        let mut matrix = IncidenceMatrix::new(2, 3);
        matrix.set(0, 0, 1);
        matrix.set(0, 2, 7);
        matrix.set(1, 1, -3);
        assert_eq!(matrix.row(0).collect::<Vec<_>>(), vec![1, 0, 7]);
        assert_eq!(matrix.row(1).collect::<Vec<_>>(), vec![0, -3, 0]);
    }
}
