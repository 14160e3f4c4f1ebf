//! Scalar type alias for model data.
//!
//! Solver input files carry full-precision decimal text, so the model
//! stores `f64` throughout. The alias keeps call sites uniform should a
//! fixed-precision mode ever be needed.

/// The floating-point type used throughout the model and export crates.
pub type Real = f64;
