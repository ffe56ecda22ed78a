//! Scratch buffers reused across factorization steps.
//!
//! ## Purpose
//!
//! Householder QR needs a reflector vector and a row of projections at every
//! step. This module provides `Slot`, a reusable vector, and `HouseholderBuffer`,
//! which holds both scratch vectors so they are allocated once per
//! factorization rather than once per column.
//!
//! ## Design notes
//!
//! * **Sized up front**: `HouseholderBuffer::new` reserves the largest reflector
//!   and projection row the factorization will need; later steps only shrink
//!   the logical length.
//! * **Explicit Ownership**: Each factorization call owns its buffer; nothing is
//!   cached between calls.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared (`clear`), never deallocated, between steps.
//!
//! ## Non-goals
//!
//! * Thread-local caching or sharing buffers between concurrent calls.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Float;

// ============================================================================
// Slot - Reusable Vector
// ============================================================================

/// A reusable vector whose capacity survives `clear` and `reset`.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create an empty slot with room for `capacity` elements.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Drop the contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Clone> Slot<T> {
    /// Clear the slot and refill it with `len` copies of `value`.
    #[inline]
    pub fn reset(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Householder Buffer
// ============================================================================

/// Scratch space for one Householder QR factorization.
#[derive(Debug, Clone)]
pub struct HouseholderBuffer<T> {
    /// Reflector vector `v`, indexed from the current pivot row; `v[0] == 1`.
    pub reflector: Slot<T>,
    /// Per-column projections `vᵗ·R[:, j]`.
    pub projections: Slot<T>,
}

impl<T: Float> HouseholderBuffer<T> {
    /// Create a buffer sized for a `rows x columns` factorization.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            reflector: Slot::new(rows),
            projections: Slot::new(columns.max(rows)),
        }
    }

    /// Clear both vectors before the next reflector is formed.
    pub fn clear(&mut self) {
        self.reflector.clear();
        self.projections.clear();
    }
}
