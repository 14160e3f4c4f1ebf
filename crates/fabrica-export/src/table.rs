//! Identity table: arena index → sequential output identifier.
//!
//! Output ids are 1-based and contiguous per entity kind, assigned in
//! the resolver's ascending arena order. Material id `0` is reserved
//! for "no material". The top-level material rule is applied here,
//! before any id exists, so no translator can ever look up a material
//! that was silently excluded:
//!
//! * a reachable material is **top-level** iff it is directly
//!   referenced by at least one non-spring element, or it is the rigid
//!   body of a rigid-interface contact;
//! * trans-iso base materials and spring-only materials are excluded
//!   unless independently referenced as above.
//!
//! Only solid and shell elements appear in the element list; surfaces
//! and springs are emitted elsewhere and carry no element id.

use std::collections::{BTreeSet, HashMap};

use fabrica_model::{Contact, Problem};
use fabrica_types::{CurveId, ElementId, FabricaError, FabricaResult, MaterialId, NodeId};

use crate::resolve::Reachable;

/// Assigned output identifiers for one export call.
#[derive(Debug)]
pub struct IdTable {
    nodes: Vec<NodeId>,
    node_ids: HashMap<NodeId, u32>,
    elements: Vec<ElementId>,
    element_ids: HashMap<ElementId, u32>,
    materials: Vec<MaterialId>,
    material_ids: HashMap<MaterialId, u32>,
    curves: Vec<CurveId>,
    curve_ids: HashMap<CurveId, u32>,
}

impl IdTable {
    /// Assigns sequential ids for everything in `reachable`.
    pub fn assign(problem: &Problem, reachable: &Reachable) -> Self {
        let nodes: Vec<NodeId> = reachable.nodes.iter().copied().collect();
        let node_ids = number(&nodes);

        let elements: Vec<ElementId> = reachable
            .elements
            .iter()
            .copied()
            .filter(|&e| {
                let kind = &problem.element(e).kind;
                kind.is_solid() || kind.is_shell()
            })
            .collect();
        let element_ids = number(&elements);

        // Top-level rule: collect direct references first, then keep
        // reachable materials that appear in that set.
        let mut directly_referenced: BTreeSet<MaterialId> = BTreeSet::new();
        for &element in &reachable.elements {
            let element = problem.element(element);
            if element.kind.is_spring() {
                continue;
            }
            if let Some(material) = element.material {
                directly_referenced.insert(material);
            }
        }
        for &contact in &reachable.contacts {
            if let Contact::RigidInterface { body, .. } = problem.contact(contact) {
                directly_referenced.insert(*body);
            }
        }
        let materials: Vec<MaterialId> = reachable
            .materials
            .iter()
            .copied()
            .filter(|m| directly_referenced.contains(m))
            .collect();
        let material_ids = number(&materials);

        let curves: Vec<CurveId> = reachable.curves.iter().copied().collect();
        let curve_ids = number(&curves);

        Self {
            nodes,
            node_ids,
            elements,
            element_ids,
            materials,
            material_ids,
            curves,
            curve_ids,
        }
    }

    /// Output id for a node.
    pub fn node_id(&self, id: NodeId) -> Option<u32> {
        self.node_ids.get(&id).copied()
    }

    /// Output id for a listed (solid or shell) element.
    pub fn element_id(&self, id: ElementId) -> Option<u32> {
        self.element_ids.get(&id).copied()
    }

    /// Output id for a top-level material.
    pub fn material_id(&self, id: MaterialId) -> Option<u32> {
        self.material_ids.get(&id).copied()
    }

    /// Output id for an optional material reference; `None` maps to
    /// the reserved id 0.
    pub fn material_ref(&self, id: Option<MaterialId>) -> Option<u32> {
        match id {
            None => Some(0),
            Some(id) => self.material_id(id),
        }
    }

    /// Output id for a load curve.
    pub fn curve_id(&self, id: CurveId) -> Option<u32> {
        self.curve_ids.get(&id).copied()
    }

    /// Nodes in emission (id) order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Listed elements in emission (id) order.
    pub fn listed_elements(&self) -> &[ElementId] {
        &self.elements
    }

    /// Top-level materials in emission (id) order.
    pub fn top_materials(&self) -> &[MaterialId] {
        &self.materials
    }

    /// Load curves in emission (id) order.
    pub fn curves(&self) -> &[CurveId] {
        &self.curves
    }

    // Fallible lookups for translators: a miss is a cross-reference
    // failure, surfaced as an error rather than a fabricated id.

    /// Like [`IdTable::node_id`], but a miss is an error.
    pub fn require_node(&self, id: NodeId) -> FabricaResult<u32> {
        self.node_id(id).ok_or(FabricaError::UnresolvedReference {
            kind: "node",
            index: id.index(),
        })
    }

    /// Like [`IdTable::element_id`], but a miss is an error.
    pub fn require_element(&self, id: ElementId) -> FabricaResult<u32> {
        self.element_id(id)
            .ok_or(FabricaError::UnresolvedReference {
                kind: "element",
                index: id.index(),
            })
    }

    /// Like [`IdTable::material_id`], but a miss is an error.
    pub fn require_material(&self, id: MaterialId) -> FabricaResult<u32> {
        self.material_id(id)
            .ok_or(FabricaError::UnresolvedReference {
                kind: "material",
                index: id.index(),
            })
    }

    /// Like [`IdTable::material_ref`], but a miss is an error.
    pub fn require_material_ref(&self, id: Option<MaterialId>) -> FabricaResult<u32> {
        match id {
            None => Ok(0),
            Some(id) => self.require_material(id),
        }
    }

    /// Like [`IdTable::curve_id`], but a miss is an error.
    pub fn require_curve(&self, id: CurveId) -> FabricaResult<u32> {
        self.curve_id(id).ok_or(FabricaError::UnresolvedReference {
            kind: "load curve",
            index: id.index(),
        })
    }
}

fn number<K: std::hash::Hash + Eq + Copy>(ordered: &[K]) -> HashMap<K, u32> {
    ordered
        .iter()
        .enumerate()
        .map(|(i, &k)| (k, i as u32 + 1))
        .collect()
}
