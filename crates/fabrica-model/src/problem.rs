//! The problem container: per-kind entity arenas plus traversal roots.

use std::collections::BTreeMap;

use fabrica_types::{
    ContactId, CurveId, ElementId, FabricaError, FabricaResult, MaterialId, NodeId,
};
use glam::DVec3;

use crate::constraint::{Constraint, DofState};
use crate::contact::{Contact, ContactBinding};
use crate::geometry::{Element, Node};
use crate::loadcurve::LoadCurve;
use crate::material::Material;

/// A complete finite-element problem.
///
/// All entities live in per-kind arenas and reference each other by
/// typed index. Named element sets are the traversal roots for export;
/// an element not reachable through any set (or through a contact) is
/// not part of the exported model.
#[derive(Debug, Default)]
pub struct Problem {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    materials: Vec<Material>,
    curves: Vec<LoadCurve>,
    contacts: Vec<Contact>,

    /// Named element sets; tags may overlap.
    pub sets: BTreeMap<String, Vec<ElementId>>,
    /// Contact interfaces registered on the problem, constant or
    /// switched.
    pub contact_bindings: Vec<ContactBinding>,
}

impl Problem {
    /// Creates an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Arena insertion ─────────────────────────────────────────

    /// Adds a node, returning its id.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() as u32 - 1)
    }

    /// Adds an element, returning its id. The element is not placed in
    /// any set; see [`Problem::assign_to_set`].
    pub fn add_element(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() as u32 - 1)
    }

    /// Adds an element directly into a named set.
    pub fn add_element_to(&mut self, set: &str, element: Element) -> ElementId {
        let id = self.add_element(element);
        self.assign_to_set(set, id);
        id
    }

    /// Places an existing element into a named set.
    pub fn assign_to_set(&mut self, set: &str, element: ElementId) {
        self.sets.entry(set.to_string()).or_default().push(element);
    }

    /// Adds a material, returning its id.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() as u32 - 1)
    }

    /// Adds a load curve, returning its id.
    pub fn add_curve(&mut self, curve: LoadCurve) -> CurveId {
        self.curves.push(curve);
        CurveId(self.curves.len() as u32 - 1)
    }

    /// Adds a contact to the arena, returning its id. The contact is
    /// not active until bound; see [`Problem::bind_contact`].
    pub fn add_contact(&mut self, contact: Contact) -> ContactId {
        self.contacts.push(contact);
        ContactId(self.contacts.len() as u32 - 1)
    }

    /// Registers a contact binding (constant or switched).
    pub fn bind_contact(&mut self, binding: ContactBinding) {
        self.contact_bindings.push(binding);
    }

    // ─── Arena access ────────────────────────────────────────────

    /// Returns a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutable access to a node (positions are mutable in place).
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Returns an element by id.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    /// Returns a material by id.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.index()]
    }

    /// Mutable access to a material (rigid-body constraints).
    pub fn material_mut(&mut self, id: MaterialId) -> &mut Material {
        &mut self.materials[id.index()]
    }

    /// Returns a load curve by id.
    pub fn curve(&self, id: CurveId) -> &LoadCurve {
        &self.curves[id.index()]
    }

    /// Returns a contact by id.
    pub fn contact(&self, id: ContactId) -> &Contact {
        &self.contacts[id.index()]
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements in the arena.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of materials in the arena.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Number of load curves in the arena.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Number of contacts in the arena.
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Iterates material ids in arena order.
    pub fn material_ids(&self) -> impl Iterator<Item = MaterialId> {
        (0..self.materials.len() as u32).map(MaterialId)
    }

    // ─── Derived geometry ────────────────────────────────────────

    /// Average position of an element's nodes.
    pub fn element_centroid(&self, id: ElementId) -> DVec3 {
        let nodes = self.element(id).nodes();
        let sum: DVec3 = nodes.iter().map(|&n| self.node(n).position).sum();
        sum / nodes.len() as f64
    }

    // ─── Validation ──────────────────────────────────────────────

    /// Checks cross-arena consistency: every reference lands inside
    /// its arena, load curves referenced by constraints are non-empty,
    /// and rigid interfaces point at rigid materials.
    ///
    /// # Errors
    /// Returns the first inconsistency found as
    /// [`FabricaError::InvalidProblem`] or a more specific variant.
    pub fn validate(&self) -> FabricaResult<()> {
        for (i, element) in self.elements.iter().enumerate() {
            for &node in element.nodes() {
                if node.index() >= self.nodes.len() {
                    return Err(FabricaError::InvalidProblem(format!(
                        "element {} references missing node {}",
                        i,
                        node.index()
                    )));
                }
            }
            if let Some(m) = element.material {
                self.check_material(m, &format!("element {i}"))?;
            }
        }

        for (name, set) in &self.sets {
            for &element in set {
                if element.index() >= self.elements.len() {
                    return Err(FabricaError::InvalidProblem(format!(
                        "set '{}' references missing element {}",
                        name,
                        element.index()
                    )));
                }
            }
        }

        for (i, material) in self.materials.iter().enumerate() {
            if let Some(base) = material.base() {
                self.check_material(base, &format!("material {i}"))?;
                if base.index() == i {
                    return Err(FabricaError::InvalidMaterial(format!(
                        "material {i} wraps itself as its own base"
                    )));
                }
            }
            if let Some(constraints) = material.rigid_constraints() {
                for constraint in constraints {
                    self.check_constraint_curves(constraint, &format!("material {i}"))?;
                }
            }
        }

        for (i, node) in self.nodes.iter().enumerate() {
            for constraint in &node.constraints {
                self.check_constraint_curves(constraint, &format!("node {i}"))?;
            }
        }

        for (i, contact) in self.contacts.iter().enumerate() {
            match contact {
                Contact::Sliding { surfaces, .. } | Contact::Tied { surfaces } => {
                    for &element in surfaces.master.iter().chain(&surfaces.slave) {
                        if element.index() >= self.elements.len() {
                            return Err(FabricaError::InvalidProblem(format!(
                                "contact {} references missing element {}",
                                i,
                                element.index()
                            )));
                        }
                    }
                }
                Contact::RigidInterface { body, nodes } => {
                    self.check_material(*body, &format!("contact {i}"))?;
                    if !self.material(*body).is_rigid() {
                        return Err(FabricaError::InvalidProblem(format!(
                            "contact {} rigid interface targets a non-rigid material",
                            i
                        )));
                    }
                    for &node in nodes {
                        if node.index() >= self.nodes.len() {
                            return Err(FabricaError::InvalidProblem(format!(
                                "contact {} references missing node {}",
                                i,
                                node.index()
                            )));
                        }
                    }
                }
            }
        }

        for binding in &self.contact_bindings {
            let ids: Vec<ContactId> = match binding {
                ContactBinding::Constant(id) => vec![*id],
                ContactBinding::Switched(sw) => sw.values().copied().collect(),
            };
            for id in ids {
                if id.index() >= self.contacts.len() {
                    return Err(FabricaError::InvalidProblem(format!(
                        "contact binding references missing contact {}",
                        id.index()
                    )));
                }
            }
        }

        Ok(())
    }

    fn check_material(&self, id: MaterialId, owner: &str) -> FabricaResult<()> {
        if id.index() >= self.materials.len() {
            return Err(FabricaError::InvalidProblem(format!(
                "{} references missing material {}",
                owner,
                id.index()
            )));
        }
        Ok(())
    }

    fn check_constraint_curves(&self, constraint: &Constraint, owner: &str) -> FabricaResult<()> {
        let states: Vec<&DofState> = match constraint {
            Constraint::Constant(state) => vec![state],
            Constraint::Switched(sw) => sw.values().collect(),
        };
        for state in states {
            if let DofState::Displacement { curve, .. } | DofState::Force { curve, .. } = state {
                if curve.index() >= self.curves.len() {
                    return Err(FabricaError::InvalidProblem(format!(
                        "{} references missing load curve {}",
                        owner,
                        curve.index()
                    )));
                }
                if self.curve(*curve).is_empty() {
                    return Err(FabricaError::InvalidCurve(format!(
                        "{} references an empty load curve",
                        owner
                    )));
                }
            }
        }
        Ok(())
    }
}
