//! Contact interface translator.
//!
//! A rigid interface becomes one record per constrained node, pointing
//! at the rigid body's material id. A surface-pair contact emits its
//! free-form options followed by the master and slave surfaces, each
//! an ordered list of surface-element records with per-surface
//! sequential ids.

use fabrica_model::{Contact, Problem};
use fabrica_types::{ContactId, ElementId, FabricaResult};

use crate::diag::{Diagnostics, Warning};
use crate::names;
use crate::table::IdTable;
use crate::xml::{comma_join, XmlElement};

/// Translates one contact into a `contact` element.
pub(crate) fn contact_element(
    problem: &Problem,
    id: ContactId,
    table: &IdTable,
    diag: &mut Diagnostics,
) -> FabricaResult<XmlElement> {
    let contact = problem.contact(id);
    let mut el = XmlElement::new("contact").with_attr("type", names::contact_type(contact));

    match contact {
        Contact::RigidInterface { body, nodes } => {
            let material_id = table.require_material(*body)?;
            for &node in nodes {
                el.push(
                    XmlElement::new("node")
                        .with_attr("id", table.require_node(node)?.to_string())
                        .with_attr("rb", material_id.to_string()),
                );
            }
        }
        Contact::Sliding { surfaces, .. } | Contact::Tied { surfaces } => {
            for (key, value) in &surfaces.options {
                el.push(XmlElement::new(key.clone()).with_text(value.clone()));
            }
            el.push(surface_element(
                problem,
                "master",
                &surfaces.master,
                table,
                diag,
            )?);
            el.push(surface_element(
                problem,
                "slave",
                &surfaces.slave,
                table,
                diag,
            )?);
        }
    }
    Ok(el)
}

/// Builds one contact surface: ordered element records with ids
/// sequential within this surface.
fn surface_element(
    problem: &Problem,
    surface_type: &str,
    elements: &[ElementId],
    table: &IdTable,
    diag: &mut Diagnostics,
) -> FabricaResult<XmlElement> {
    let mut surface = XmlElement::new("surface").with_attr("type", surface_type);
    let mut next_id = 1u32;
    for &id in elements {
        let element = problem.element(id);
        let Some(tag) = names::element_tag(&element.kind) else {
            diag.warn(Warning::UnsupportedSurfaceElement {
                element: id.index(),
            });
            continue;
        };
        let mut node_ids = Vec::with_capacity(element.nodes().len());
        for &node in element.nodes() {
            node_ids.push(table.require_node(node)?);
        }
        surface.push(
            XmlElement::new(tag)
                .with_attr("id", next_id.to_string())
                .with_text(comma_join(node_ids)),
        );
        next_id += 1;
    }
    Ok(surface)
}
