//! # fabrica-model
//!
//! The finite-element domain model: nodes, elements, materials, load
//! curves, contact interfaces, and time-switched boundary conditions,
//! held in per-kind arenas inside a [`Problem`].
//!
//! ## Design
//!
//! Entities reference each other through typed arena indices
//! (`NodeId`, `ElementId`, …) rather than shared pointers, so identity
//! is index identity and traversals dedup with plain ordered sets.
//! The model knows nothing about any solver file format — schema names
//! and parameter spellings belong to the export layer.

pub mod constraint;
pub mod contact;
pub mod geometry;
pub mod loadcurve;
pub mod material;
pub mod problem;
pub mod switch;

pub use constraint::{Constraint, Dof, DofState};
pub use contact::{Contact, ContactBinding, SurfacePair};
pub use geometry::{Element, ElementKind, Node};
pub use loadcurve::{Extrapolation, Interpolation, LoadCurve};
pub use material::{FiberSampler, Material, Orientation};
pub use problem::Problem;
pub use switch::Switch;
