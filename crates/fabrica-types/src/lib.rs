//! # fabrica-types
//!
//! Shared types, identifiers, and error types for the Fabrica
//! finite-element export toolkit.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Fabrica crates share.

pub mod error;
pub mod ids;
pub mod scalar;
pub mod time;

pub use error::{FabricaError, FabricaResult};
pub use ids::{ContactId, CurveId, ElementId, MaterialId, NodeId};
pub use scalar::Real;
pub use time::Time;
