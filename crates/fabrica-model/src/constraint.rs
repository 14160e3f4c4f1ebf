//! Per-DOF boundary constraints.
//!
//! Every constrainable entity carries one [`Constraint`] per degree of
//! freedom: three translational DOFs for nodes, six (translation +
//! rotation) for rigid bodies. A constraint is either a constant
//! [`DofState`] or a [`Switch`] over states for time-varying boundary
//! conditions.

use fabrica_types::{CurveId, Real};

use crate::switch::Switch;

/// A degree of freedom. Nodes use the translational three; rigid
/// bodies use all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dof {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
}

impl Dof {
    /// The translational DOFs, in emission order.
    pub const TRANSLATIONAL: [Dof; 3] = [Dof::X, Dof::Y, Dof::Z];

    /// All six DOFs, in emission order.
    pub const ALL: [Dof; 6] = [Dof::X, Dof::Y, Dof::Z, Dof::Rx, Dof::Ry, Dof::Rz];

    /// True for x/y/z, false for the rotational DOFs.
    pub fn is_translational(self) -> bool {
        matches!(self, Dof::X | Dof::Y | Dof::Z)
    }

    /// Index of this DOF within a six-slot constraint array.
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Dof::X => 0,
            Dof::Y => 1,
            Dof::Z => 2,
            Dof::Rx => 3,
            Dof::Ry => 4,
            Dof::Rz => 5,
        }
    }
}

/// The state of one degree of freedom at one instant.
#[derive(Debug, Clone, PartialEq)]
pub enum DofState {
    /// Unconstrained.
    Free,
    /// Held at zero.
    Fixed,
    /// Displacement prescribed by a load curve scaled by `multiplier`.
    Displacement {
        /// Curve giving displacement over time.
        curve: CurveId,
        /// Scale factor applied to the curve value.
        multiplier: Real,
    },
    /// Force applied according to a load curve scaled by `multiplier`.
    Force {
        /// Curve giving force over time.
        curve: CurveId,
        /// Scale factor applied to the curve value.
        multiplier: Real,
    },
}

/// A boundary constraint on one DOF: constant, or switched over time.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// The same state for the whole analysis.
    Constant(DofState),
    /// A time-keyed selection among states.
    Switched(Switch<DofState>),
}

impl Constraint {
    /// An unconstrained DOF.
    pub fn free() -> Self {
        Constraint::Constant(DofState::Free)
    }

    /// A DOF held at zero.
    pub fn fixed() -> Self {
        Constraint::Constant(DofState::Fixed)
    }

    /// A prescribed-displacement DOF.
    pub fn displacement(curve: CurveId, multiplier: Real) -> Self {
        Constraint::Constant(DofState::Displacement { curve, multiplier })
    }

    /// A prescribed-force DOF.
    pub fn force(curve: CurveId, multiplier: Real) -> Self {
        Constraint::Constant(DofState::Force { curve, multiplier })
    }

    /// True if this constraint changes over time.
    pub fn is_switched(&self) -> bool {
        matches!(self, Constraint::Switched(_))
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint::free()
    }
}
