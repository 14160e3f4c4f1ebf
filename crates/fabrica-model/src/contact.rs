//! Contact interfaces.
//!
//! Sliding and tied contacts pair a master surface against a slave
//! surface, each an ordered list of surface elements, plus free-form
//! solver options. A rigid interface welds a node set to a rigid-body
//! material. Contacts may be registered on the problem directly or
//! wrapped in a [`Switch`] for time-varying activation.

use std::collections::BTreeMap;

use fabrica_types::{ContactId, ElementId, MaterialId, NodeId, Real};

use crate::switch::Switch;

/// The two element surfaces of a sliding or tied interface, plus
/// free-form solver options emitted verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfacePair {
    /// Master surface, in emission order.
    pub master: Vec<ElementId>,
    /// Slave surface, in emission order.
    pub slave: Vec<ElementId>,
    /// Solver options, emitted as child records in key order.
    pub options: BTreeMap<String, String>,
}

/// A contact interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Contact {
    /// Sliding contact. The flag combination selects the schema
    /// sub-type at export time.
    Sliding {
        /// Master/slave surfaces and options.
        surfaces: SurfacePair,
        /// Biphasic (fluid-pressure-coupled) formulation.
        biphasic: bool,
        /// Solute-coupled formulation (implies biphasic transport).
        solute: bool,
        /// Coulomb friction coefficient; zero means frictionless.
        friction_coefficient: Real,
    },
    /// Tied contact: the surfaces move together.
    Tied {
        /// Master/slave surfaces and options.
        surfaces: SurfacePair,
    },
    /// Nodes welded to a rigid body.
    RigidInterface {
        /// The rigid-body material.
        body: MaterialId,
        /// Constrained nodes, in emission order.
        nodes: Vec<NodeId>,
    },
}

impl Contact {
    /// The surface pair of a sliding or tied contact.
    pub fn surfaces(&self) -> Option<&SurfacePair> {
        match self {
            Contact::Sliding { surfaces, .. } | Contact::Tied { surfaces } => Some(surfaces),
            Contact::RigidInterface { .. } => None,
        }
    }
}

/// How a contact participates in the analysis: always active, or
/// selected over time by a switch.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactBinding {
    /// Active for the whole analysis.
    Constant(ContactId),
    /// Time-keyed selection among contacts.
    Switched(Switch<ContactId>),
}
