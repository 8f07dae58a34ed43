//! Dense row-major 2D grid backing the score and traceback tables.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{Error, Result};

/// `(row, col)` position in a [`Matrix`].
pub type Cell = (usize, usize);

/// A fixed-size `rows × cols` grid.
///
/// The shape is fixed at construction. Indexing outside the grid panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix<T> {
    /// Create a matrix with every cell set to `initial`.
    ///
    /// Fails with [`Error::InvalidDimension`] if either dimension is negative.
    pub fn new(rows: i64, cols: i64, initial: T) -> Result<Self> {
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) => Ok(Self::filled(r, c, initial)),
            _ => Err(Error::InvalidDimension { rows, cols }),
        }
    }

    /// Infallible constructor for callers that already hold sizes.
    pub fn filled(rows: usize, cols: usize, initial: T) -> Self {
        Self {
            data: vec![initial; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn offset(&self, (row, col): Cell) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols,
        );
        row * self.cols + col
    }

    pub fn get(&self, cell: Cell) -> &T {
        &self.data[self.offset(cell)]
    }

    pub fn set(&mut self, cell: Cell, value: T) {
        let at = self.offset(cell);
        self.data[at] = value;
    }

    /// All cell positions in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<T> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// `(cell, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.cells().zip(self.data.iter())
    }

    /// Cell values in row-major order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Index<Cell> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, cell: Cell) -> &T {
        self.get(cell)
    }
}

impl<T> IndexMut<Cell> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        let at = self.offset(cell);
        &mut self.data[at]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols {
                write!(f, "{:>3}", self[(row, col)])?;
            }
        }
        Ok(())
    }
}
