//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and drives a single factorization call from a
//! borrowed or owned buffer to a finished decomposition.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// Factorization pipeline.
pub mod executor;
