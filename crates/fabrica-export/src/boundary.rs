//! Node boundary-condition translator.
//!
//! Classifies each node DOF into fix/prescribe/force records. The same
//! per-state emission is used by the global `Boundary` section and by
//! every timeline step; the only difference is which constraints feed
//! it (constant ones globally, switch-resolved ones per step).

use fabrica_model::{Constraint, Dof, DofState, ElementKind, Material, Problem};
use fabrica_types::{FabricaResult, NodeId};

use crate::diag::{Diagnostics, Warning};
use crate::names;
use crate::resolve::Reachable;
use crate::table::IdTable;
use crate::xml::{comma_join, XmlElement};

/// The three per-DOF record sections of a boundary fragment.
pub(crate) struct BoundarySections {
    prescribe: XmlElement,
    fix: XmlElement,
    force: XmlElement,
}

impl BoundarySections {
    pub(crate) fn new() -> Self {
        Self {
            prescribe: XmlElement::new("prescribe"),
            fix: XmlElement::new("fix"),
            force: XmlElement::new("force"),
        }
    }

    /// Emits one node-DOF state into the matching section. `Free`
    /// emits nothing.
    pub(crate) fn emit_state(
        &mut self,
        node_output_id: u32,
        dof: Dof,
        state: &DofState,
        table: &IdTable,
    ) -> FabricaResult<()> {
        match state {
            DofState::Free => {}
            DofState::Fixed => {
                self.fix.push(
                    XmlElement::new("node")
                        .with_attr("id", node_output_id.to_string())
                        .with_attr("bc", names::dof_code(dof)),
                );
            }
            DofState::Displacement { curve, multiplier } => {
                self.prescribe.push(
                    XmlElement::new("node")
                        .with_attr("id", node_output_id.to_string())
                        .with_attr("bc", names::dof_code(dof))
                        .with_attr("lc", table.require_curve(*curve)?.to_string())
                        .with_text(multiplier.to_string()),
                );
            }
            DofState::Force { curve, multiplier } => {
                self.force.push(
                    XmlElement::new("node")
                        .with_attr("id", node_output_id.to_string())
                        .with_attr("bc", names::dof_code(dof))
                        .with_attr("lc", table.require_curve(*curve)?.to_string())
                        .with_text(multiplier.to_string()),
                );
            }
        }
        Ok(())
    }

    /// Moves the non-empty sections into a boundary fragment.
    pub(crate) fn push_into(self, boundary: &mut XmlElement) {
        boundary.push_if_nonempty(self.prescribe);
        boundary.push_if_nonempty(self.fix);
        boundary.push_if_nonempty(self.force);
    }
}

/// Emits every constant node constraint; returns the nodes that carry
/// a switched constraint on any DOF (they belong to the timeline, not
/// the global section).
pub(crate) fn global_node_sections(
    problem: &Problem,
    table: &IdTable,
) -> FabricaResult<(BoundarySections, Vec<NodeId>)> {
    let mut sections = BoundarySections::new();
    let mut switched = Vec::new();
    for &id in table.nodes() {
        let output_id = table.require_node(id)?;
        let node = problem.node(id);
        let mut any_switched = false;
        for dof in Dof::TRANSLATIONAL {
            match node.constraint(dof) {
                Constraint::Constant(state) => {
                    sections.emit_state(output_id, dof, state, table)?;
                }
                Constraint::Switched(_) => any_switched = true,
            }
        }
        if any_switched {
            switched.push(id);
        }
    }
    Ok((sections, switched))
}

/// Emits one `spring` record per reachable spring element. Stiffness
/// comes from a linear isotropic material; anything else is warned and
/// the stiffness line omitted.
pub(crate) fn spring_records(
    problem: &Problem,
    reachable: &Reachable,
    table: &IdTable,
    diag: &mut Diagnostics,
) -> FabricaResult<Vec<XmlElement>> {
    let mut records = Vec::new();
    for &id in &reachable.elements {
        let element = problem.element(id);
        let ElementKind::Spring { tension_only } = element.kind else {
            continue;
        };

        let spring_type = if tension_only {
            "tension-only linear"
        } else {
            "linear"
        };
        let mut node_ids = Vec::with_capacity(2);
        for &node in element.nodes() {
            node_ids.push(table.require_node(node)?);
        }
        let mut record = XmlElement::new("spring")
            .with_attr("type", spring_type)
            .with_child(XmlElement::new("node").with_text(comma_join(node_ids)));

        match element.material.map(|m| problem.material(m)) {
            Some(Material::LinearIsotropic { e, .. }) => {
                record.push(XmlElement::new("E").with_text(e.to_string()));
            }
            _ => diag.warn(Warning::NonlinearSpring {
                element: id.index(),
            }),
        }
        records.push(record);
    }
    Ok(records)
}
