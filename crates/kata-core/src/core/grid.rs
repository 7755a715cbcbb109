use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Grid is not square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("A {size}x{size} grid does not fit the cell value range")]
    SizeOverflow { size: usize },
}

/// A square two-dimensional container stored in row-major order.
///
/// A `Grid` always holds exactly `size * size` cells. Nested rows can only be
/// turned into a grid through [`Grid::from_rows`] (or deserialization), which
/// rejects ragged and rectangular input, so every algorithm in this crate can
/// rely on squareness without re-checking it.
///
/// Cells are addressed as `(row, col)` with both coordinates in `0..size`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a `size`×`size` grid with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn new(size: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Creates a grid by calling `f(row, col)` for every cell in row-major order.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    /// Builds a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotSquare`] for the first row whose length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.offset(row, col).map(|i| &mut self.cells[i])
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.size).then(|| &self.cells[row * self.size..(row + 1) * self.size])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        let size = self.size;
        let mut cells = self.cells.into_iter();
        (0..size)
            .map(|_| cells.by_ref().take(size).collect())
            .collect()
    }

    /// Exchanges the values of two cells.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate lies outside the grid.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let a = self.checked_offset(a);
        let b = self.checked_offset(b);
        self.cells.swap(a, b);
    }

    /// Number of concentric rings, counting a lone centre cell as its own ring.
    pub fn ring_count(&self) -> usize {
        self.size.div_ceil(2)
    }

    /// Returns the ring a cell belongs to: its distance from the nearest border.
    pub fn ring_of(&self, row: usize, col: usize) -> Option<usize> {
        self.offset(row, col)?;
        let last = self.size - 1;
        Some(row.min(col).min(last - row).min(last - col))
    }

    /// Collects the values lying on `ring`, in row-major order.
    pub fn ring_values(&self, ring: usize) -> Vec<&T> {
        (0..self.size)
            .cartesian_product(0..self.size)
            .filter(|&(row, col)| self.ring_of(row, col) == Some(ring))
            .map(|cell| &self[cell])
            .collect()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    fn checked_offset(&self, (row, col): (usize, usize)) -> usize {
        match self.offset(row, col) {
            Some(offset) => offset,
            None => panic!(
                "cell ({row}, {col}) is out of bounds for a {0}x{0} grid",
                self.size
            ),
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, cell: (usize, usize)) -> &T {
        &self.cells[self.checked_offset(cell)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, cell: (usize, usize)) -> &mut T {
        let offset = self.checked_offset(cell);
        &mut self.cells[offset]
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl<T> From<Grid<T>> for Vec<Vec<T>> {
    fn from(grid: Grid<T>) -> Self {
        grid.into_rows()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Renders one line per row with right-aligned, space-separated columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0);

        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line = row.iter().map(|value| format!("{value:>width$}")).join(" ");
            f.write_str(&line)?;
        }
        Ok(())
    }
}
