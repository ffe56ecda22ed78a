//! Flat-buffer addressing and vector helpers.
//!
//! ## Purpose
//!
//! This module implements the raw buffer convention shared by every
//! factorization: a `rows x columns` matrix stored row-major in a slice, with
//! the column count passed explicitly.
//!
//! ## Design notes
//!
//! * **Allocation-free**: Rows and columns are produced as lazy iterators; row
//!   swaps use `split_at_mut` and `swap_with_slice`.
//! * **Caller-checked bounds**: Indices are only checked by `debug_assert!` and by
//!   the slice indexing itself.
//!
//! ## Key concepts
//!
//! * `element(buffer, row, col, columns) = buffer[row * columns + col]`.
//! * `norm` is scaled (the `dnrm2` recurrence) and stays finite for any finite
//!   input, including entries near the limits of the floating-point range.
//!
//! ## Non-goals
//!
//! * No decomposition-specific logic lives here.

// External dependencies
use num_traits::Float;

// ============================================================================
// Addressing
// ============================================================================

/// Read element `(row, col)` of a row-major buffer with `columns` columns.
#[inline(always)]
pub fn element<T: Copy>(buffer: &[T], row: usize, col: usize, columns: usize) -> T {
    debug_assert!(col < columns);
    buffer[row * columns + col]
}

/// Lazily iterate over row `row` of a row-major buffer.
#[inline]
pub fn row<T: Copy>(buffer: &[T], row: usize, columns: usize) -> impl Iterator<Item = T> + '_ {
    buffer[row * columns..(row + 1) * columns].iter().copied()
}

/// Lazily iterate over column `col` of a row-major buffer.
#[inline]
pub fn column<T: Copy>(buffer: &[T], col: usize, columns: usize) -> impl Iterator<Item = T> + '_ {
    debug_assert!(col < columns);
    buffer[col..].iter().step_by(columns).copied()
}

/// Swap rows `a` and `b` of a row-major buffer in place.
pub fn swap_rows<T>(buffer: &mut [T], a: usize, b: usize, columns: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = buffer.split_at_mut(hi * columns);
    head[lo * columns..(lo + 1) * columns].swap_with_slice(&mut tail[..columns]);
}

// ============================================================================
// Vector Operations
// ============================================================================

/// Dot product of two equal-length sequences.
///
/// Extra elements of the longer sequence are ignored; equal lengths are the
/// caller's responsibility.
#[inline]
pub fn dot<T, A, B>(a: A, b: B) -> T
where
    T: Float,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    a.into_iter()
        .zip(b)
        .fold(T::zero(), |acc, (x, y)| acc + x * y)
}

/// Euclidean norm of a sequence.
///
/// Accumulates `scale² · ssq` with `scale` the largest magnitude seen so far, so
/// no intermediate square overflows or underflows for finite input.
pub fn norm<T: Float, A: IntoIterator<Item = T>>(a: A) -> T {
    let mut scale = T::zero();
    let mut ssq = T::one();
    for x in a {
        if x == T::zero() {
            continue;
        }
        let ax = x.abs();
        if scale < ax {
            let ratio = scale / ax;
            ssq = T::one() + ssq * ratio * ratio;
            scale = ax;
        } else {
            let ratio = ax / scale;
            ssq = ssq + ratio * ratio;
        }
    }
    scale * ssq.sqrt()
}
