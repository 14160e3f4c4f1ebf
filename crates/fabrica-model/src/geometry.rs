//! Nodes and elements.
//!
//! An element is an ordered, fixed-arity list of node references plus
//! an optional material. Node order defines connectivity and is
//! preserved verbatim by every consumer. Elements own no nodes — the
//! [`Problem`](crate::Problem) arena does.

use fabrica_types::{FabricaError, FabricaResult, MaterialId, NodeId, Real};
use glam::DVec3;

use crate::constraint::{Constraint, Dof};

/// A point in three-dimensional space, constrainable on x/y/z.
#[derive(Debug, Clone)]
pub struct Node {
    /// Position, mutable in place.
    pub position: DVec3,
    /// One constraint per translational DOF, indexed by [`Dof::slot`].
    pub constraints: [Constraint; 3],
}

impl Node {
    /// Creates an unconstrained node at `position`.
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            constraints: Default::default(),
        }
    }

    /// Creates an unconstrained node from coordinates.
    pub fn at(x: Real, y: Real, z: Real) -> Self {
        Self::new(DVec3::new(x, y, z))
    }

    /// Sets the constraint on one translational DOF.
    ///
    /// # Panics
    /// Panics if `dof` is rotational; nodes have no rotational DOFs.
    pub fn set_constraint(&mut self, dof: Dof, constraint: Constraint) {
        assert!(
            dof.is_translational(),
            "nodes carry translational DOFs only"
        );
        self.constraints[dof.slot()] = constraint;
    }

    /// Returns the constraint on one translational DOF.
    pub fn constraint(&self, dof: Dof) -> &Constraint {
        assert!(
            dof.is_translational(),
            "nodes carry translational DOFs only"
        );
        &self.constraints[dof.slot()]
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> Real {
        self.position.distance(other.position)
    }
}

/// Element taxonomy. The arity of each kind is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind {
    /// 4-node linear tetrahedron.
    Tet4,
    /// 6-node linear pentahedron (triangular prism).
    Penta6,
    /// 8-node linear hexahedron (brick).
    Hex8,
    /// 3-node triangular shell with uniform thickness.
    Shell3 {
        /// Shell thickness, applied at every node.
        thickness: Real,
    },
    /// 4-node quadrilateral shell with uniform thickness.
    Shell4 {
        /// Shell thickness, applied at every node.
        thickness: Real,
    },
    /// 3-node triangular surface facet.
    Surface3,
    /// 4-node quadrilateral surface facet.
    Surface4,
    /// 2-node spring.
    Spring {
        /// If true the spring carries tension only.
        tension_only: bool,
    },
}

impl ElementKind {
    /// Number of nodes this kind requires.
    pub fn node_count(&self) -> usize {
        match self {
            ElementKind::Tet4 => 4,
            ElementKind::Penta6 => 6,
            ElementKind::Hex8 => 8,
            ElementKind::Shell3 { .. } => 3,
            ElementKind::Shell4 { .. } => 4,
            ElementKind::Surface3 => 3,
            ElementKind::Surface4 => 4,
            ElementKind::Spring { .. } => 2,
        }
    }

    /// True for 3D solid elements.
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            ElementKind::Tet4 | ElementKind::Penta6 | ElementKind::Hex8
        )
    }

    /// True for shell elements.
    pub fn is_shell(&self) -> bool {
        matches!(self, ElementKind::Shell3 { .. } | ElementKind::Shell4 { .. })
    }

    /// True for surface facets.
    pub fn is_surface(&self) -> bool {
        matches!(self, ElementKind::Surface3 | ElementKind::Surface4)
    }

    /// True for springs.
    pub fn is_spring(&self) -> bool {
        matches!(self, ElementKind::Spring { .. })
    }

    /// Shell thickness, if this kind is a shell.
    pub fn shell_thickness(&self) -> Option<Real> {
        match self {
            ElementKind::Shell3 { thickness } | ElementKind::Shell4 { thickness } => {
                Some(*thickness)
            }
            _ => None,
        }
    }
}

/// An element: a kind, an ordered node list, and an optional material.
#[derive(Debug, Clone)]
pub struct Element {
    /// Element kind (fixes the node arity).
    pub kind: ElementKind,
    nodes: Vec<NodeId>,
    /// Material reference; `None` exports as the reserved material id 0.
    pub material: Option<MaterialId>,
}

impl Element {
    /// Creates an element, checking the node list against the kind's
    /// arity.
    ///
    /// # Errors
    /// Returns [`FabricaError::InvalidElement`] when the node count
    /// does not match the kind.
    pub fn new(
        kind: ElementKind,
        nodes: Vec<NodeId>,
        material: Option<MaterialId>,
    ) -> FabricaResult<Self> {
        if nodes.len() != kind.node_count() {
            return Err(FabricaError::InvalidElement(format!(
                "{:?} requires {} nodes, got {}",
                kind,
                kind.node_count(),
                nodes.len()
            )));
        }
        Ok(Self {
            kind,
            nodes,
            material,
        })
    }

    /// The ordered node references (connectivity).
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}
