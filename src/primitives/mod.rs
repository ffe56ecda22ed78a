//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every factorization shares:
//! - The `FactorError` sum type
//! - The owned row-major `Matrix`
//! - Reusable scratch buffers
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Owned row-major matrix storage.
pub mod matrix;

/// Reusable scratch buffers.
pub mod buffer;
