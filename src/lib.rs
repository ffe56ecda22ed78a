//! # linalg-basics — Dense Matrix Factorizations for Rust
//!
//! Small, dependable dense linear-algebra kernels: Cholesky, LDLᵗ, LU with
//! partial pivoting, and Householder QR over real matrices stored as flat
//! row-major buffers.
//!
//! ## What's included
//!
//! | Factorization | Input                          | Result                                   | Fails when                         |
//! |---------------|--------------------------------|------------------------------------------|------------------------------------|
//! | Cholesky      | symmetric positive definite    | `L·Lᵗ = A`                               | a diagonal term is not positive    |
//! | LDLᵗ          | symmetric                      | `L·diag(D)·Lᵗ = A`, `L` unit lower       | a pivot `D[j]` is (near) zero      |
//! | LU            | any `rows x columns`           | `P·A = L·U`                              | never (degenerate steps recorded)  |
//! | QR            | any `rows x columns`           | `A = Q·R`, `Q` orthogonal                | never (rank deficiency recorded)   |
//!
//! Every factorization also rejects empty shapes, buffers of the wrong length,
//! and non-finite entries before doing any arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use linalg_basics::prelude::*;
//!
//! // Row-major 3x3 symmetric positive-definite matrix
//! let a = [
//!     4.0, 12.0, -16.0,
//!     12.0, 37.0, -43.0,
//!     -16.0, -43.0, 98.0,
//! ];
//!
//! let chol = create_cholesky(&a, 3)?;
//!
//! // L = [[2, 0, 0], [6, 1, 0], [-8, 5, 3]]
//! assert_eq!(chol.l().row(2), &[-8.0, 5.0, 3.0]);
//!
//! // L·Lᵗ reproduces A
//! let rebuilt = chol.reconstruct();
//! assert!(rebuilt.max_abs_diff(&Matrix::from_slice(&a, 3, 3)?).unwrap() < 1e-12);
//! # Result::<(), FactorError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Each entry point returns `Result<Decomposition, FactorError>`:
//!
//! - **`Ok(..)`**: An owned, immutable decomposition object.
//! - **`Err(FactorError)`**: A shape problem, a non-finite input, a non-symmetric
//!   input, or a numerical breakdown carrying the failing step and pivot value.
//!
//! ```rust
//! use linalg_basics::prelude::*;
//!
//! // Symmetric but with a zero leading pivot
//! let a = [0.0, 1.0, 1.0, 0.0];
//!
//! match create_ldlt(&a, 2) {
//!     Ok(_) => unreachable!(),
//!     Err(FactorError::SingularPivot { step, .. }) => assert_eq!(step, 0),
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! ```
//!
//! LU and QR do not fail on rank-deficient input. They zero the degenerate
//! column, record it, and reduce the next column against the same pivot row, so
//! `rank()` is the number of pivots found:
//!
//! ```rust
//! use linalg_basics::prelude::*;
//!
//! let lu = create_lu(&[1.0, 1.0, 1.0, 1.0], 2, 2)?;
//!
//! assert!(lu.is_singular());
//! assert_eq!(lu.rank(), 1);
//! assert_eq!(lu.degenerate_pivots()[0].step, 1);
//! assert!(lu.check_nonsingular().is_err());
//! # Result::<(), FactorError>::Ok(())
//! ```
//!
//! ## Builder
//!
//! The `create_*` functions use the default configuration. To change it, use
//! the fluent builder:
//!
//! ```rust
//! use linalg_basics::prelude::*;
//!
//! let factorizer = Factorize::new()
//!     .tolerance(0.0)                       // Only exact zeros are degenerate
//!     .symmetry_check(SymmetryCheck::Exact) // Bitwise symmetry
//!     .build()?;
//!
//! let a = [2.0, -1.0, 0.0, -1.0, 2.0, -1.0];
//! let qr = factorizer.qr(&a, 2, 3)?;
//! assert_eq!(qr.q().rows(), 2);
//! assert_eq!(qr.r().columns(), 3);
//! # Result::<(), FactorError>::Ok(())
//! ```
//!
//! | Parameter          | Default    | Range/Options               | Description                                  |
//! |--------------------|------------|-----------------------------|----------------------------------------------|
//! | **tolerance**      | `1e-12`    | `[0, ∞)`                    | Relative pivot threshold (`× max abs(a_ij)`)  |
//! | **symmetry_check** | `Tolerant` | `Exact`, `Tolerant`, `Skip` | Symmetry check for Cholesky and LDLᵗ         |
//!
//! ## Ownership
//!
//! Borrowed buffers are never mutated: the factorization copies them into a
//! working [`Matrix`](prelude::Matrix). Callers who already own a `Matrix`
//! can move it into `Factorizer::lu_matrix` or `Factorizer::qr_matrix`, which
//! eliminate directly in its storage.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: rejected
//! inputs and degenerate pivots at `debug`, per-call summaries at `trace`.
//! Nothing is printed unless the application installs a logger.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency;
//! `num-traits/libm` then supplies the square root.
//!
//! ```toml
//! [dependencies]
//! linalg-basics = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures.
//
// Contains the `FactorError` type, the owned row-major `Matrix`,
// and reusable scratch buffers.
mod primitives;

// Layer 2: Math - pure arithmetic helpers.
//
// Contains flat-buffer addressing, dot products, row swaps,
// and matrix products and norms.
mod math;

// Layer 3: Algorithms - the factorizations.
//
// Contains Cholesky, LDLT, LU (partial pivoting) and Householder QR,
// plus the shared degeneracy policy.
mod algorithms;

// Layer 4: Engine - validation and execution.
//
// Contains input validation and the factorization pipeline.
mod engine;

// High-level fluent API.
//
// Provides the `create_*` entry points and the `FactorizationBuilder`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use linalg_basics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CholeskyDecomposition, DEFAULT_TOLERANCE, DegeneratePivot, FactorError,
        FactorizationBuilder as Factorize, Factorizer, LdltDecomposition, LuDecomposition, Matrix,
        QrDecomposition, SymmetryCheck, column, create_cholesky, create_ldlt, create_lu,
        create_qr, dot, element, norm, row, swap_rows,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal factorization algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
