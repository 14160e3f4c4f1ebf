//! Document assembler.
//!
//! Composes the translated fragments into the full document tree in
//! fixed section order — materials, geometry, load curves, global
//! boundary, global rigid-body constraints, steps — pruning every
//! section that ends up with no children.

use std::collections::BTreeSet;
use std::io::Write;

use fabrica_model::{ContactBinding, Problem};
use fabrica_types::{FabricaResult, MaterialId};

use crate::boundary::{global_node_sections, spring_records};
use crate::contact::contact_element;
use crate::curves::load_data_section;
use crate::diag::{Diagnostics, Warning};
use crate::material::{join3, translate_material};
use crate::names;
use crate::resolve::resolve;
use crate::rigid::global_rigid_records;
use crate::table::IdTable;
use crate::timeline::{step_fragments, switch_referenced_contacts};
use crate::xml::{comma_join, XmlElement};

/// The result of one export call: the assembled document tree plus
/// every warning raised while translating.
#[derive(Debug)]
pub struct FebExport {
    /// The document root (`febio_spec`).
    pub document: XmlElement,
    /// Structured warnings, in emission order.
    pub warnings: Vec<Warning>,
}

/// Translates a problem into the document tree.
///
/// The problem is validated first; translation itself only fails on a
/// cross-reference that escaped the identity table's top-level rule,
/// which would be a bug, not bad input.
///
/// # Errors
/// Returns validation errors from [`Problem::validate`] and
/// [`FabricaError::UnresolvedReference`](fabrica_types::FabricaError)
/// lookup failures.
pub fn build_document(problem: &Problem) -> FabricaResult<FebExport> {
    problem.validate()?;

    let reachable = resolve(problem);
    let table = IdTable::assign(problem, &reachable);
    let mut diag = Diagnostics::new();

    let mut root = XmlElement::new("febio_spec").with_attr("version", "1.1");

    let (materials, user_fiber) = material_section(problem, &table, &mut diag)?;
    root.push_if_nonempty(materials);
    root.push_if_nonempty(geometry_section(problem, &table, &user_fiber)?);
    root.push_if_nonempty(load_data_section(problem, &table)?);

    // Global boundary: node records, contacts, springs.
    let (sections, switched_nodes) = global_node_sections(problem, &table)?;
    let mut boundary = XmlElement::new("Boundary");
    sections.push_into(&mut boundary);
    let switch_owned = switch_referenced_contacts(problem);
    for binding in &problem.contact_bindings {
        let ContactBinding::Constant(id) = binding else {
            continue;
        };
        if switch_owned.contains(id) {
            continue;
        }
        boundary.push(contact_element(problem, *id, &table, &mut diag)?);
    }
    for spring in spring_records(problem, &reachable, &table, &mut diag)? {
        boundary.push(spring);
    }
    root.push_if_nonempty(boundary);

    // Global rigid-body constraints.
    let (rigid_records, switched_rigids) = global_rigid_records(problem, &table)?;
    let mut constraints = XmlElement::new("Constraints");
    for record in rigid_records {
        constraints.push(record);
    }
    root.push_if_nonempty(constraints);

    // Timeline steps.
    for step in step_fragments(problem, &table, &switched_nodes, &switched_rigids, &mut diag)? {
        root.push(step);
    }

    tracing::info!(
        nodes = table.nodes().len(),
        elements = table.listed_elements().len(),
        materials = table.top_materials().len(),
        curves = table.curves().len(),
        warnings = diag.warnings().len(),
        "translated problem graph"
    );

    Ok(FebExport {
        document: root,
        warnings: diag.into_warnings(),
    })
}

/// Translates and writes a problem to `writer` as a `.feb` document.
///
/// # Errors
/// Everything [`build_document`] returns, plus serialization and I/O
/// failures.
pub fn write_feb<W: Write>(problem: &Problem, writer: W) -> FabricaResult<Vec<Warning>> {
    let export = build_document(problem)?;
    export.document.write_document(writer)?;
    Ok(export.warnings)
}

/// Translates a problem into document text.
///
/// # Errors
/// Same failure modes as [`write_feb`].
pub fn feb_to_string(problem: &Problem) -> FabricaResult<(String, Vec<Warning>)> {
    let export = build_document(problem)?;
    Ok((export.document.to_document_string()?, export.warnings))
}

fn material_section(
    problem: &Problem,
    table: &IdTable,
    diag: &mut Diagnostics,
) -> FabricaResult<(XmlElement, BTreeSet<MaterialId>)> {
    let mut section = XmlElement::new("Material");
    let mut user_fiber = BTreeSet::new();
    for &id in table.top_materials() {
        let card = translate_material(problem, id, diag);
        if card.requires_element_fiber {
            user_fiber.insert(id);
        }
        let mut el = XmlElement::new("material")
            .with_attr("id", table.require_material(id)?.to_string())
            .with_attr("type", card.type_name);
        for param in &card.params {
            el.push(param.to_xml());
        }
        section.push(el);
    }
    Ok((section, user_fiber))
}

fn geometry_section(
    problem: &Problem,
    table: &IdTable,
    user_fiber: &BTreeSet<MaterialId>,
) -> FabricaResult<XmlElement> {
    let mut geometry = XmlElement::new("Geometry");

    let mut nodes = XmlElement::new("Nodes");
    for &id in table.nodes() {
        nodes.push(
            XmlElement::new("node")
                .with_attr("id", table.require_node(id)?.to_string())
                .with_text(join3(problem.node(id).position)),
        );
    }
    geometry.push_if_nonempty(nodes);

    let mut elements = XmlElement::new("Elements");
    for &id in table.listed_elements() {
        let element = problem.element(id);
        let Some(tag) = names::element_tag(&element.kind) else {
            continue;
        };
        let mut node_ids = Vec::with_capacity(element.nodes().len());
        for &node in element.nodes() {
            node_ids.push(table.require_node(node)?);
        }
        elements.push(
            XmlElement::new(tag)
                .with_attr("id", table.require_element(id)?.to_string())
                .with_attr("mat", table.require_material_ref(element.material)?.to_string())
                .with_text(comma_join(node_ids)),
        );
    }
    geometry.push_if_nonempty(elements);

    // Per-element auxiliary data: user fiber directions, shell
    // thickness.
    let mut element_data = XmlElement::new("ElementData");
    for &id in table.listed_elements() {
        let element = problem.element(id);
        let needs_fiber = element
            .material
            .is_some_and(|m| user_fiber.contains(&m));
        let thickness = element.kind.shell_thickness();
        if !needs_fiber && thickness.is_none() {
            continue;
        }

        let mut row =
            XmlElement::new("element").with_attr("id", table.require_element(id)?.to_string());
        if needs_fiber {
            if let Some(axis) = element
                .material
                .and_then(|m| problem.material(m).orientation())
            {
                let direction = axis.axes_at(problem, id)[0];
                row.push(XmlElement::new("fiber").with_text(join3(direction)));
            }
        }
        if let Some(thickness) = thickness {
            let per_node = vec![thickness; element.nodes().len()];
            row.push(XmlElement::new("thickness").with_text(comma_join(per_node)));
        }
        element_data.push(row);
    }
    geometry.push_if_nonempty(element_data);

    Ok(geometry)
}
