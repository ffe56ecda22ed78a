//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the arithmetic building blocks used by the factorizations:
//! - Flat-buffer addressing, row/column iteration, row swaps, dot products
//! - Matrix products, transposes and norms used to rebuild inputs from factors
//!
//! These carry no decomposition-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Flat-buffer addressing and vector helpers.
pub mod vector;

/// Matrix products, transposes and norms.
pub mod products;
