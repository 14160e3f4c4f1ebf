//! Graph resolver: reachability over the problem's entity graph.
//!
//! Starting from the named element sets and the contact bindings, the
//! resolver follows every ownership/reference edge — element→nodes,
//! element→material, trans-iso→base, contact→surfaces/rigid body,
//! constraint→curve, switch→keyed values — and collects the distinct
//! entities of each kind. Sets are ordered by arena index, so every
//! downstream id assignment is deterministic. Visited-set traversal
//! terminates even if a reference cycle is constructed.

use std::collections::BTreeSet;

use fabrica_model::{Constraint, Contact, ContactBinding, DofState, Problem};
use fabrica_types::{ContactId, CurveId, ElementId, MaterialId, NodeId};

/// The distinct entities of each kind reachable from a problem's
/// roots, ordered by arena index.
#[derive(Debug, Default)]
pub struct Reachable {
    /// Reachable nodes.
    pub nodes: BTreeSet<NodeId>,
    /// Reachable elements (all kinds, including surfaces and springs).
    pub elements: BTreeSet<ElementId>,
    /// Reachable materials (including trans-iso bases).
    pub materials: BTreeSet<MaterialId>,
    /// Reachable load curves.
    pub curves: BTreeSet<CurveId>,
    /// Reachable contacts (including switch-referenced ones).
    pub contacts: BTreeSet<ContactId>,
}

/// Computes the reachable entity sets for `problem`.
pub fn resolve(problem: &Problem) -> Reachable {
    let mut resolver = Resolver {
        problem,
        reachable: Reachable::default(),
    };

    for set in problem.sets.values() {
        for &element in set {
            resolver.visit_element(element);
        }
    }

    for binding in &problem.contact_bindings {
        match binding {
            ContactBinding::Constant(contact) => resolver.visit_contact(*contact),
            ContactBinding::Switched(switch) => {
                for &contact in switch.values() {
                    resolver.visit_contact(contact);
                }
            }
        }
    }

    resolver.reachable
}

struct Resolver<'a> {
    problem: &'a Problem,
    reachable: Reachable,
}

impl<'a> Resolver<'a> {
    fn visit_element(&mut self, id: ElementId) {
        if !self.reachable.elements.insert(id) {
            return;
        }
        let element = self.problem.element(id);
        for &node in element.nodes() {
            self.visit_node(node);
        }
        if let Some(material) = element.material {
            self.visit_material(material);
        }
    }

    fn visit_node(&mut self, id: NodeId) {
        if !self.reachable.nodes.insert(id) {
            return;
        }
        let node = self.problem.node(id);
        for constraint in &node.constraints {
            self.visit_constraint(constraint);
        }
    }

    fn visit_material(&mut self, id: MaterialId) {
        if !self.reachable.materials.insert(id) {
            return;
        }
        let material = self.problem.material(id);
        if let Some(base) = material.base() {
            self.visit_material(base);
        }
        if let Some(constraints) = material.rigid_constraints() {
            for constraint in constraints {
                self.visit_constraint(constraint);
            }
        }
    }

    fn visit_contact(&mut self, id: ContactId) {
        if !self.reachable.contacts.insert(id) {
            return;
        }
        match self.problem.contact(id) {
            Contact::Sliding { surfaces, .. } | Contact::Tied { surfaces } => {
                for &element in surfaces.master.iter().chain(&surfaces.slave) {
                    self.visit_element(element);
                }
            }
            Contact::RigidInterface { body, nodes } => {
                self.visit_material(*body);
                for &node in nodes {
                    self.visit_node(node);
                }
            }
        }
    }

    fn visit_constraint(&mut self, constraint: &'a Constraint) {
        match constraint {
            Constraint::Constant(state) => self.visit_state(state),
            Constraint::Switched(switch) => {
                for state in switch.values() {
                    self.visit_state(state);
                }
            }
        }
    }

    fn visit_state(&mut self, state: &DofState) {
        if let DofState::Displacement { curve, .. } | DofState::Force { curve, .. } = state {
            self.reachable.curves.insert(*curve);
        }
    }
}
