//! Timeline partitioner.
//!
//! Discrete-event reconstruction of the switched boundary state: the
//! union of every switch's time keys, sorted and deduplicated, becomes
//! the step sequence. At each instant every switched entity is
//! re-resolved (right-continuous step semantics) and emitted with the
//! same per-variant rules as the global sections. A step with nothing
//! to say is dropped.

use std::collections::BTreeSet;

use fabrica_model::{Constraint, ContactBinding, Dof, Problem};
use fabrica_types::{ContactId, FabricaResult, MaterialId, NodeId, Time};

use crate::boundary::BoundarySections;
use crate::contact::contact_element;
use crate::diag::Diagnostics;
use crate::rigid::rigid_dof_record;
use crate::table::IdTable;
use crate::xml::XmlElement;

/// Contacts that appear among any switch's keyed values. These never
/// belong to the global section, even if also bound directly.
pub(crate) fn switch_referenced_contacts(problem: &Problem) -> BTreeSet<ContactId> {
    let mut referenced = BTreeSet::new();
    for binding in &problem.contact_bindings {
        if let ContactBinding::Switched(switch) = binding {
            referenced.extend(switch.values().copied());
        }
    }
    referenced
}

/// Builds the ordered step fragments for every switch transition
/// instant.
pub(crate) fn step_fragments(
    problem: &Problem,
    table: &IdTable,
    switched_nodes: &[NodeId],
    switched_rigids: &[MaterialId],
    diag: &mut Diagnostics,
) -> FabricaResult<Vec<XmlElement>> {
    let mut steps = Vec::new();
    for time in transition_times(problem, switched_nodes, switched_rigids) {
        let mut step = XmlElement::new("Step");

        let mut boundary = XmlElement::new("Boundary");
        let mut sections = BoundarySections::new();
        for &id in switched_nodes {
            let output_id = table.require_node(id)?;
            let node = problem.node(id);
            for dof in Dof::TRANSLATIONAL {
                let Constraint::Switched(switch) = node.constraint(dof) else {
                    continue;
                };
                if let Some(state) = switch.active_at(time) {
                    sections.emit_state(output_id, dof, state, table)?;
                }
            }
        }
        sections.push_into(&mut boundary);

        for binding in &problem.contact_bindings {
            let ContactBinding::Switched(switch) = binding else {
                continue;
            };
            if let Some(&contact) = switch.active_at(time) {
                boundary.push(contact_element(problem, contact, table, diag)?);
            }
        }
        step.push_if_nonempty(boundary);

        let mut constraints = XmlElement::new("Constraints");
        for &id in switched_rigids {
            let Some(dofs) = problem.material(id).rigid_constraints() else {
                continue;
            };
            let mut body = XmlElement::new("rigid_body")
                .with_attr("mat", table.require_material(id)?.to_string());
            for dof in Dof::ALL {
                let Constraint::Switched(switch) = &dofs[dof.slot()] else {
                    continue;
                };
                if let Some(state) = switch.active_at(time) {
                    if let Some(record) = rigid_dof_record(dof, state, table)? {
                        body.push(record);
                    }
                }
            }
            constraints.push_if_nonempty(body);
        }
        step.push_if_nonempty(constraints);

        if step.has_children() {
            steps.push(step);
        }
    }
    Ok(steps)
}

/// Union of every switch's keys across node constraints, rigid-body
/// constraints, and contact bindings, ascending and deduplicated.
fn transition_times(
    problem: &Problem,
    switched_nodes: &[NodeId],
    switched_rigids: &[MaterialId],
) -> BTreeSet<Time> {
    let mut times = BTreeSet::new();
    for &id in switched_nodes {
        for constraint in &problem.node(id).constraints {
            if let Constraint::Switched(switch) = constraint {
                times.extend(switch.times());
            }
        }
    }
    for &id in switched_rigids {
        if let Some(dofs) = problem.material(id).rigid_constraints() {
            for constraint in dofs {
                if let Constraint::Switched(switch) = constraint {
                    times.extend(switch.times());
                }
            }
        }
    }
    for binding in &problem.contact_bindings {
        if let ContactBinding::Switched(switch) = binding {
            times.extend(switch.times());
        }
    }
    times
}
