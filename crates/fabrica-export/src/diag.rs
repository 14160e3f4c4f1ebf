//! Structured export diagnostics.
//!
//! Dropped or unrepresentable constructs are never silent: each one is
//! recorded as a [`Warning`] returned alongside the document, so
//! callers (and tests) can assert on exactly what was omitted. Every
//! warning is also logged through `tracing`.

use serde::Serialize;
use thiserror::Error;

/// A non-fatal export finding. Indices are arena indices into the
/// source problem.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum Warning {
    /// A rigid material has neither center of mass nor density; the
    /// material record is emitted without either field.
    #[error("rigid material {material} has neither center of mass nor density")]
    RigidBodyUnderspecified {
        /// Arena index of the rigid material.
        material: usize,
    },

    /// An orthotropic material carries an axis kind the schema cannot
    /// express; its `mat_axis` parameter is omitted.
    #[error("orthotropic material {material} has an axis kind the schema cannot express")]
    UnsupportedOrthotropicAxis {
        /// Arena index of the orthotropic material.
        material: usize,
    },

    /// A spring lacks a linear isotropic material; the spring record
    /// is emitted without a stiffness value.
    #[error("spring element {element} has no linear isotropic material; stiffness omitted")]
    NonlinearSpring {
        /// Arena index of the spring element.
        element: usize,
    },

    /// A contact surface lists an element kind that has no schema tag;
    /// the surface record for it is skipped.
    #[error("contact surface element {element} has no schema representation")]
    UnsupportedSurfaceElement {
        /// Arena index of the offending element.
        element: usize,
    },
}

/// Collects warnings over one export call.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one warning and logs it.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// The warnings recorded so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consumes the collector, yielding the warning list.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
