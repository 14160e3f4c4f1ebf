//! Material models and fiber orientations.
//!
//! Materials form a possibly shared, acyclic reference graph: a
//! transversely-isotropic material wraps a *base* material by id, and
//! oriented materials carry an [`Orientation`]. The enum is closed on
//! purpose — adding a variant forces every translator match to handle
//! it.

use std::fmt;
use std::sync::Arc;

use fabrica_types::{ElementId, MaterialId, Real};
use glam::DVec3;

use crate::constraint::Constraint;
use crate::problem::Problem;

/// Strategy for computing material axes at a specific element.
///
/// Implementations receive the owning problem so they can read node
/// positions and connectivity. The first returned axis is the fiber
/// direction used for per-element fiber data.
pub trait FiberSampler: Send + Sync {
    /// Material axes at one element, fiber direction first.
    fn axes_at(&self, problem: &Problem, element: ElementId) -> [DVec3; 3];
}

/// How a material's preferred axes are defined.
#[derive(Clone)]
pub enum Orientation {
    /// Fixed axes from two vectors.
    Vector {
        /// Primary axis.
        a: DVec3,
        /// Secondary axis (need not be orthogonal to `a`).
        d: DVec3,
    },
    /// Radial axes about an origin.
    Spherical {
        /// Center of the spherical field.
        origin: DVec3,
        /// Secondary reference vector.
        vector: DVec3,
    },
    /// Axes from element edges, as 0-based local node slots.
    Nodal {
        /// Endpoints of the primary edge.
        edge1: (usize, usize),
        /// Endpoints of the secondary edge.
        edge2: (usize, usize),
    },
    /// Arbitrary per-element axes from a user strategy.
    User(Arc<dyn FiberSampler>),
}

impl Orientation {
    /// Resolves the material axes at one element, fiber direction
    /// first.
    pub fn axes_at(&self, problem: &Problem, element: ElementId) -> [DVec3; 3] {
        match self {
            Orientation::Vector { a, d } => [*a, *d, a.cross(*d)],
            Orientation::Spherical { origin, vector } => {
                let radial = (problem.element_centroid(element) - *origin).normalize_or_zero();
                [radial, *vector, radial.cross(*vector)]
            }
            Orientation::Nodal { edge1, edge2 } => {
                let nodes = problem.element(element).nodes();
                let pos = |slot: usize| problem.node(nodes[slot]).position;
                let e1 = (pos(edge1.1) - pos(edge1.0)).normalize_or_zero();
                let e2 = (pos(edge2.1) - pos(edge2.0)).normalize_or_zero();
                [e1, e2, e1.cross(e2)]
            }
            Orientation::User(sampler) => sampler.axes_at(problem, element),
        }
    }
}

impl fmt::Debug for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vector { a, d } => {
                f.debug_struct("Vector").field("a", a).field("d", d).finish()
            }
            Orientation::Spherical { origin, vector } => f
                .debug_struct("Spherical")
                .field("origin", origin)
                .field("vector", vector)
                .finish(),
            Orientation::Nodal { edge1, edge2 } => f
                .debug_struct("Nodal")
                .field("edge1", edge1)
                .field("edge2", edge2)
                .finish(),
            Orientation::User(_) => f.write_str("User(..)"),
        }
    }
}

/// A material model.
///
/// Parameter fields follow the usual finite-element spellings (`e` for
/// Young's modulus, `v` for Poisson's ratio); the export layer owns the
/// exact parameter names of the target schema.
#[derive(Debug, Clone)]
pub enum Material {
    /// Linear isotropic elasticity.
    LinearIsotropic {
        /// Young's modulus.
        e: Real,
        /// Poisson's ratio.
        v: Real,
    },
    /// Neo-Hookean hyperelasticity.
    NeoHookean {
        /// Young's modulus.
        e: Real,
        /// Poisson's ratio.
        v: Real,
    },
    /// Holmes-Mow hyperelasticity.
    HolmesMow {
        /// Young's modulus.
        e: Real,
        /// Poisson's ratio.
        v: Real,
        /// Exponential stiffening coefficient.
        beta: Real,
    },
    /// Mooney-Rivlin hyperelasticity.
    MooneyRivlin {
        /// First distortional coefficient.
        c1: Real,
        /// Second distortional coefficient.
        c2: Real,
        /// Bulk modulus.
        k: Real,
    },
    /// Veronda-Westmann hyperelasticity.
    VerondaWestmann {
        /// First distortional coefficient.
        c1: Real,
        /// Second distortional coefficient.
        c2: Real,
        /// Bulk modulus.
        k: Real,
    },
    /// Arruda-Boyce chain-network hyperelasticity.
    ArrudaBoyce {
        /// Initial shear modulus.
        mu: Real,
        /// Number of chain links.
        n: Real,
        /// Bulk modulus.
        k: Real,
    },
    /// Ogden hyperelasticity with variable-length coefficient pairs.
    Ogden {
        /// Coefficients `c1..`; only the first six are exported.
        ci: Vec<Real>,
        /// Exponents `m1..`; only the first six are exported.
        mi: Vec<Real>,
        /// Bulk modulus.
        k: Real,
    },
    /// Rigid body. Requires at least one of center of mass or density
    /// for the export to be meaningful.
    Rigid {
        /// Explicit center of mass, if known.
        center_of_mass: Option<DVec3>,
        /// Mass density, if the center of mass is to be computed.
        density: Option<Real>,
        /// One constraint per DOF (x, y, z, Rx, Ry, Rz).
        constraints: [Constraint; 6],
    },
    /// Transversely-isotropic wrapper around a base material.
    TransIso {
        /// Fiber modulus coefficient.
        c3: Real,
        /// Fiber exponential coefficient.
        c4: Real,
        /// Fiber modulus at large stretch.
        c5: Real,
        /// Stretch at which fibers straighten.
        lam_max: Real,
        /// Fiber direction definition.
        axis: Orientation,
        /// Base (ground-matrix) material.
        base: MaterialId,
    },
    /// Linear orthotropic elasticity.
    LinearOrthotropic {
        /// Young's modulus along axis 1.
        e1: Real,
        /// Young's modulus along axis 2.
        e2: Real,
        /// Young's modulus along axis 3.
        e3: Real,
        /// Shear modulus in the 1-2 plane.
        g12: Real,
        /// Shear modulus in the 2-3 plane.
        g23: Real,
        /// Shear modulus in the 3-1 plane.
        g31: Real,
        /// Poisson's ratio 1-2.
        v12: Real,
        /// Poisson's ratio 2-3.
        v23: Real,
        /// Poisson's ratio 3-1.
        v31: Real,
        /// Material axis definition.
        axis: Orientation,
    },
    /// Fung orthotropic hyperelasticity.
    FungOrthotropic {
        /// Young's modulus along axis 1.
        e1: Real,
        /// Young's modulus along axis 2.
        e2: Real,
        /// Young's modulus along axis 3.
        e3: Real,
        /// Shear modulus in the 1-2 plane.
        g12: Real,
        /// Shear modulus in the 2-3 plane.
        g23: Real,
        /// Shear modulus in the 3-1 plane.
        g31: Real,
        /// Poisson's ratio 1-2.
        v12: Real,
        /// Poisson's ratio 2-3.
        v23: Real,
        /// Poisson's ratio 3-1.
        v31: Real,
        /// Exponential coefficient.
        c: Real,
        /// Bulk modulus.
        k: Real,
        /// Material axis definition.
        axis: Orientation,
    },
}

impl Material {
    /// An unconstrained rigid body.
    pub fn rigid(center_of_mass: Option<DVec3>, density: Option<Real>) -> Self {
        Material::Rigid {
            center_of_mass,
            density,
            constraints: Default::default(),
        }
    }

    /// The wrapped base material, for trans-iso wrappers.
    pub fn base(&self) -> Option<MaterialId> {
        match self {
            Material::TransIso { base, .. } => Some(*base),
            _ => None,
        }
    }

    /// The orientation carried by this material, if any.
    pub fn orientation(&self) -> Option<&Orientation> {
        match self {
            Material::TransIso { axis, .. }
            | Material::LinearOrthotropic { axis, .. }
            | Material::FungOrthotropic { axis, .. } => Some(axis),
            _ => None,
        }
    }

    /// True for rigid bodies.
    pub fn is_rigid(&self) -> bool {
        matches!(self, Material::Rigid { .. })
    }

    /// The per-DOF constraints of a rigid body.
    pub fn rigid_constraints(&self) -> Option<&[Constraint; 6]> {
        match self {
            Material::Rigid { constraints, .. } => Some(constraints),
            _ => None,
        }
    }

    /// Mutable access to a rigid body's per-DOF constraints.
    pub fn rigid_constraints_mut(&mut self) -> Option<&mut [Constraint; 6]> {
        match self {
            Material::Rigid { constraints, .. } => Some(constraints),
            _ => None,
        }
    }
}
