//! Dense square matrix with row-major flat storage.

use serde::{Serialize, Serializer};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    len: usize,
    cells: Vec<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            len: 0,
            cells: Vec::new(),
        }
    }
}

impl<T: Copy> Matrix<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filled(len: usize, value: T) -> Self {
        Self {
            len,
            cells: vec![value; len * len],
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.len && col < self.len {
            Some(self.cells[row * self.len + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.len;
        &self.cells[start..start + self.len]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `chunks(0)` panics; an empty matrix has no cells so any non-zero chunk size works.
        self.cells.chunks(self.len.max(1))
    }

    /// Appends one trailing row and one trailing column, every new cell set to `fill`.
    pub fn push(&mut self, fill: T) {
        let n = self.len;
        let mut cells = Vec::with_capacity((n + 1) * (n + 1));
        for row in self.cells.chunks(n.max(1)) {
            cells.extend_from_slice(row);
            cells.push(fill);
        }
        cells.resize((n + 1) * (n + 1), fill);
        self.cells = cells;
        self.len = n + 1;
    }

    /// Removes row `idx` and column `idx`; later rows/columns shift down by one.
    pub fn remove(&mut self, idx: usize) {
        debug_assert!(idx < self.len, "matrix remove out of range");
        if idx >= self.len {
            return;
        }
        let n = self.len;
        let mut k = 0usize;
        self.cells.retain(|_| {
            let (row, col) = (k / n, k % n);
            k += 1;
            row != idx && col != idx
        });
        self.len = n - 1;
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.len && col < self.len);
        &self.cells[row * self.len + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.len && col < self.len);
        &mut self.cells[row * self.len + col]
    }
}

impl<T: Copy + Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
