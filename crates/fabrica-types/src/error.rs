//! Error types for the Fabrica toolkit.
//!
//! All crates return `FabricaResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Fabrica toolkit.
#[derive(Debug, Error)]
pub enum FabricaError {
    /// Element construction data is malformed (wrong node arity, etc.).
    #[error("Invalid element: {0}")]
    InvalidElement(String),

    /// Material definition is inconsistent.
    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    /// Load curve is malformed (empty, out-of-range reference).
    #[error("Invalid load curve: {0}")]
    InvalidCurve(String),

    /// The problem graph is inconsistent (index out of arena bounds, etc.).
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    /// A cross-reference did not resolve through the identity table.
    ///
    /// The exporter establishes its top-level entity rule before any id
    /// is assigned, so hitting this indicates a bug rather than bad input.
    #[error("Unresolved {kind} reference (arena index {index})")]
    UnresolvedReference {
        /// Entity kind ("node", "element", "material", "load curve").
        kind: &'static str,
        /// Arena index of the entity that was never assigned an output id.
        index: usize,
    },

    /// XML serialization failure.
    #[error("XML error: {0}")]
    Xml(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, FabricaError>`.
pub type FabricaResult<T> = Result<T, FabricaError>;
