//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the four factorizations. None of them depends on
//! another; they share only the degeneracy policy and the lower layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Degeneracy threshold shared by the factorizations.
pub mod pivot;

/// Cholesky factorization (`L·Lᵗ`).
pub mod cholesky;

/// LDLᵗ factorization (`L·D·Lᵗ`).
pub mod ldlt;

/// LU factorization with partial pivoting (`P·A = L·U`).
pub mod lu;

/// Householder QR factorization (`A = Q·R`).
pub mod qr;
