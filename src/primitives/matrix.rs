//! Owned row-major matrix storage.
//!
//! ## Purpose
//!
//! This module provides `Matrix`, the owned counterpart of the flat
//! `rows x columns` buffer convention. Factorizations copy a borrowed buffer into a
//! `Matrix` (or take a moved one) and return their factors as `Matrix` values.
//!
//! ## Design notes
//!
//! * **Row-major**: Element `(r, c)` lives at `data[r * columns + c]`.
//! * **Checked construction**: The shape is validated once, when the matrix is
//!   built; accessors rely on slice indexing afterwards.
//! * **Ownership**: `from_row_major` takes a `Vec` without copying it,
//!   `from_slice` copies a borrowed buffer.
//!
//! ## Invariants
//!
//! * `data.len() == rows * columns` at all times.
//! * `rows > 0` and `columns > 0` for matrices built through the checked constructors.
//!
//! ## Non-goals
//!
//! * This module does not implement arithmetic (see `math::products`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FactorError;

// ============================================================================
// Matrix
// ============================================================================

/// A dense matrix stored as a flat row-major buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Create a `rows x columns` matrix filled with zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![T::zero(); rows * columns],
        }
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Wrap an owned row-major buffer without copying it.
    pub fn from_row_major(data: Vec<T>, rows: usize, columns: usize) -> Result<Self, FactorError> {
        check_shape(data.len(), rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Copy a borrowed row-major buffer into a new matrix.
    pub fn from_slice(buffer: &[T], rows: usize, columns: usize) -> Result<Self, FactorError> {
        check_shape(buffer.len(), rows, columns)?;
        Ok(Self {
            rows,
            columns,
            data: buffer.to_vec(),
        })
    }

    /// Build a matrix from nested rows. Rows must all have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, FactorError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for r in rows {
            let r = r.as_ref();
            if r.len() != n_cols {
                return Err(FactorError::DimensionMismatch {
                    expected: n_cols,
                    got: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Self::from_row_major(data, n_rows, n_cols)
    }

    /// Read element `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.columns);
        self.data[row * self.columns + col]
    }

    /// Overwrite element `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.columns);
        self.data[row * self.columns + col] = value;
    }

    /// Lazily iterate over column `col`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        debug_assert!(col < self.columns);
        self.data[col..].iter().step_by(self.columns).copied()
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Borrow row `row` as a contiguous slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    /// Mutably borrow row `row`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[row * self.columns..(row + 1) * self.columns]
    }

    /// Swap rows `a` and `b` in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let c = self.columns;
        let (head, tail) = self.data.split_at_mut(hi * c);
        head[lo * c..(lo + 1) * c].swap_with_slice(&mut tail[..c]);
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying row-major buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.columns);
        &self.data[row * self.columns + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.columns);
        &mut self.data[row * self.columns + col]
    }
}

fn check_shape(len: usize, rows: usize, columns: usize) -> Result<(), FactorError> {
    if rows == 0 || columns == 0 {
        return Err(FactorError::EmptyInput);
    }
    let expected = rows
        .checked_mul(columns)
        .ok_or(FactorError::DimensionMismatch {
            expected: usize::MAX,
            got: len,
        })?;
    if len != expected {
        return Err(FactorError::DimensionMismatch { expected, got: len });
    }
    Ok(())
}
