//! Rigid-body constraint translator.
//!
//! Each top-level rigid material gets a `rigid_body` fragment with one
//! record per non-free DOF. Switched DOFs are excluded here and
//! resolved per step by the timeline partitioner, through the same
//! per-state record builder.

use fabrica_model::{Constraint, Dof, DofState, Problem};
use fabrica_types::{FabricaResult, MaterialId};

use crate::names;
use crate::table::IdTable;
use crate::xml::XmlElement;

/// Builds one rigid-body DOF record, or `None` for a free DOF.
pub(crate) fn rigid_dof_record(
    dof: Dof,
    state: &DofState,
    table: &IdTable,
) -> FabricaResult<Option<XmlElement>> {
    let tag = names::rigid_dof_tag(dof);
    let record = match state {
        DofState::Free => return Ok(None),
        DofState::Fixed => XmlElement::new(tag).with_attr("type", "fixed"),
        DofState::Displacement { curve, multiplier } => XmlElement::new(tag)
            .with_attr("type", "prescribed")
            .with_attr("lc", table.require_curve(*curve)?.to_string())
            .with_text(multiplier.to_string()),
        DofState::Force { curve, multiplier } => XmlElement::new(tag)
            .with_attr("type", "force")
            .with_attr("lc", table.require_curve(*curve)?.to_string())
            .with_text(multiplier.to_string()),
    };
    Ok(Some(record))
}

/// Emits the constant rigid-body constraints for every top-level rigid
/// material; returns the materials that carry a switched constraint on
/// any DOF.
pub(crate) fn global_rigid_records(
    problem: &Problem,
    table: &IdTable,
) -> FabricaResult<(Vec<XmlElement>, Vec<MaterialId>)> {
    let mut records = Vec::new();
    let mut switched = Vec::new();
    for &id in table.top_materials() {
        let Some(constraints) = problem.material(id).rigid_constraints() else {
            continue;
        };
        let mut body =
            XmlElement::new("rigid_body").with_attr("mat", table.require_material(id)?.to_string());
        let mut any_switched = false;
        for dof in Dof::ALL {
            match &constraints[dof.slot()] {
                Constraint::Constant(state) => {
                    if let Some(record) = rigid_dof_record(dof, state, table)? {
                        body.push(record);
                    }
                }
                Constraint::Switched(_) => any_switched = true,
            }
        }
        if body.has_children() {
            records.push(body);
        }
        if any_switched {
            switched.push(id);
        }
    }
    Ok((records, switched))
}
