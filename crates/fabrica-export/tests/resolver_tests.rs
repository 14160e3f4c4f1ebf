//! Integration tests for the graph resolver and identity table.

use fabrica_export::{resolve, IdTable};
use fabrica_model::{
    Constraint, Contact, ContactBinding, Dof, DofState, Element, ElementKind, LoadCurve, Material,
    Node, Problem, SurfacePair, Switch,
};
use fabrica_types::NodeId;
use glam::DVec3;

fn tet(problem: &mut Problem, material: Option<fabrica_types::MaterialId>) -> Vec<NodeId> {
    let nodes = vec![
        problem.add_node(Node::at(0.0, 0.0, 0.0)),
        problem.add_node(Node::at(1.0, 0.0, 0.0)),
        problem.add_node(Node::at(0.0, 1.0, 0.0)),
        problem.add_node(Node::at(0.0, 0.0, 1.0)),
    ];
    let element = Element::new(ElementKind::Tet4, nodes.clone(), material).unwrap();
    problem.add_element_to("", element);
    nodes
}

#[test]
fn reachability_follows_material_and_base_edges() {
    let mut p = Problem::new();
    let base = p.add_material(Material::VerondaWestmann {
        c1: 1.0,
        c2: 2.0,
        k: 3.0,
    });
    let trans = p.add_material(Material::TransIso {
        c3: 4.0,
        c4: 5.0,
        c5: 6.0,
        lam_max: 7.0,
        axis: fabrica_model::Orientation::Vector {
            a: DVec3::X,
            d: DVec3::Y,
        },
        base,
    });
    tet(&mut p, Some(trans));

    let reachable = resolve(&p);
    assert_eq!(reachable.nodes.len(), 4);
    assert_eq!(reachable.elements.len(), 1);
    // Both the wrapper and its base are reachable.
    assert!(reachable.materials.contains(&trans));
    assert!(reachable.materials.contains(&base));
}

#[test]
fn curves_inside_switch_values_are_reachable() {
    let mut p = Problem::new();
    let m = p.add_material(Material::NeoHookean { e: 1.0, v: 0.3 });
    let curve = p.add_curve(LoadCurve::ramp());
    let nodes = tet(&mut p, Some(m));
    p.node_mut(nodes[0]).set_constraint(
        Dof::X,
        Constraint::Switched(Switch::from_points([(
            1.0,
            DofState::Displacement {
                curve,
                multiplier: 1.0,
            },
        )])),
    );

    let reachable = resolve(&p);
    assert!(reachable.curves.contains(&curve));
}

#[test]
fn contacts_pull_in_surfaces_and_rigid_bodies() {
    let mut p = Problem::new();
    let rigid = p.add_material(Material::rigid(None, Some(1.0)));
    let loose = p.add_node(Node::at(5.0, 5.0, 5.0));
    let contact = p.add_contact(Contact::RigidInterface {
        body: rigid,
        nodes: vec![loose],
    });
    p.bind_contact(ContactBinding::Constant(contact));

    let reachable = resolve(&p);
    assert!(reachable.materials.contains(&rigid));
    assert!(reachable.nodes.contains(&loose));
    assert!(reachable.contacts.contains(&contact));
}

#[test]
fn switch_referenced_contacts_are_reachable() {
    let mut p = Problem::new();
    let nodes = vec![
        p.add_node(Node::at(0.0, 0.0, 0.0)),
        p.add_node(Node::at(1.0, 0.0, 0.0)),
        p.add_node(Node::at(1.0, 1.0, 0.0)),
    ];
    let facet = p.add_element(Element::new(ElementKind::Surface3, nodes, None).unwrap());
    let contact = p.add_contact(Contact::Tied {
        surfaces: SurfacePair {
            master: vec![facet],
            slave: vec![],
            options: Default::default(),
        },
    });
    p.bind_contact(ContactBinding::Switched(Switch::from_points([(
        1.0, contact,
    )])));

    let reachable = resolve(&p);
    assert!(reachable.contacts.contains(&contact));
    assert!(reachable.elements.contains(&facet));
    assert_eq!(reachable.nodes.len(), 3);
}

#[test]
fn ids_are_contiguous_from_one() {
    let mut p = Problem::new();
    let m1 = p.add_material(Material::NeoHookean { e: 1.0, v: 0.3 });
    let m2 = p.add_material(Material::MooneyRivlin {
        c1: 1.0,
        c2: 2.0,
        k: 3.0,
    });
    tet(&mut p, Some(m1));
    tet(&mut p, Some(m2));

    let reachable = resolve(&p);
    let table = IdTable::assign(&p, &reachable);

    let node_ids: Vec<u32> = table
        .nodes()
        .iter()
        .map(|&n| table.node_id(n).unwrap())
        .collect();
    assert_eq!(node_ids, (1..=8).collect::<Vec<u32>>());

    let element_ids: Vec<u32> = table
        .listed_elements()
        .iter()
        .map(|&e| table.element_id(e).unwrap())
        .collect();
    assert_eq!(element_ids, vec![1, 2]);

    let material_ids: Vec<u32> = table
        .top_materials()
        .iter()
        .map(|&m| table.material_id(m).unwrap())
        .collect();
    assert_eq!(material_ids, vec![1, 2]);
}

#[test]
fn missing_material_maps_to_reserved_zero() {
    let mut p = Problem::new();
    tet(&mut p, None);
    let reachable = resolve(&p);
    let table = IdTable::assign(&p, &reachable);
    assert_eq!(table.material_ref(None).unwrap(), 0);
}

#[test]
fn trans_iso_base_gets_no_id_unless_used_directly() {
    let mut p = Problem::new();
    let base = p.add_material(Material::VerondaWestmann {
        c1: 1.0,
        c2: 2.0,
        k: 3.0,
    });
    let trans = p.add_material(Material::TransIso {
        c3: 4.0,
        c4: 5.0,
        c5: 6.0,
        lam_max: 7.0,
        axis: fabrica_model::Orientation::Vector {
            a: DVec3::X,
            d: DVec3::Y,
        },
        base,
    });
    tet(&mut p, Some(trans));

    let reachable = resolve(&p);
    let table = IdTable::assign(&p, &reachable);
    assert!(table.material_id(base).is_none());
    assert_eq!(table.material_id(trans), Some(1));

    // Add a direct use of the base: it becomes top-level.
    tet(&mut p, Some(base));
    let reachable = resolve(&p);
    let table = IdTable::assign(&p, &reachable);
    assert_eq!(table.material_id(base), Some(1));
    assert_eq!(table.material_id(trans), Some(2));
}

#[test]
fn unreachable_arena_entries_are_ignored() {
    let mut p = Problem::new();
    p.add_node(Node::at(9.0, 9.0, 9.0));
    p.add_material(Material::NeoHookean { e: 1.0, v: 0.3 });
    p.add_curve(LoadCurve::ramp());
    let m = p.add_material(Material::MooneyRivlin {
        c1: 1.0,
        c2: 2.0,
        k: 3.0,
    });
    tet(&mut p, Some(m));

    let reachable = resolve(&p);
    assert_eq!(reachable.nodes.len(), 4);
    assert_eq!(reachable.materials.len(), 1);
    assert!(reachable.curves.is_empty());
}
