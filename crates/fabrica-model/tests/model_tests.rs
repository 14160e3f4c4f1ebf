//! Integration tests for fabrica-model.

use fabrica_model::{
    Constraint, Contact, ContactBinding, Dof, Element, ElementKind, LoadCurve, Material, Node,
    Problem, SurfacePair, Switch,
};
use fabrica_types::{ContactId, MaterialId, NodeId, Time};

fn unit_tet(problem: &mut Problem, material: Option<MaterialId>) -> fabrica_types::ElementId {
    let nodes = vec![
        problem.add_node(Node::at(0.0, 0.0, 0.0)),
        problem.add_node(Node::at(1.0, 0.0, 0.0)),
        problem.add_node(Node::at(0.0, 1.0, 0.0)),
        problem.add_node(Node::at(0.0, 0.0, 1.0)),
    ];
    let element = Element::new(ElementKind::Tet4, nodes, material).unwrap();
    problem.add_element_to("", element)
}

#[test]
fn arena_ids_are_sequential() {
    let mut p = Problem::new();
    let a = p.add_node(Node::at(0.0, 0.0, 0.0));
    let b = p.add_node(Node::at(1.0, 0.0, 0.0));
    assert_eq!(a, NodeId(0));
    assert_eq!(b, NodeId(1));
}

#[test]
fn nodes_are_mutable_in_place() {
    let mut p = Problem::new();
    let id = p.add_node(Node::at(0.0, 0.0, 0.0));
    p.node_mut(id).position.x = 3.0;
    assert_eq!(p.node(id).position.x, 3.0);
}

#[test]
fn element_centroid_is_vertex_average() {
    let mut p = Problem::new();
    let e = unit_tet(&mut p, None);
    let c = p.element_centroid(e);
    assert!((c.x - 0.25).abs() < 1e-12);
    assert!((c.y - 0.25).abs() < 1e-12);
    assert!((c.z - 0.25).abs() < 1e-12);
}

#[test]
fn distance_between_nodes() {
    let a = Node::at(0.0, 0.0, 0.0);
    let b = Node::at(3.0, 4.0, 0.0);
    assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
}

#[test]
fn validate_accepts_consistent_problem() {
    let mut p = Problem::new();
    let m = p.add_material(Material::NeoHookean { e: 1.0, v: 0.3 });
    unit_tet(&mut p, Some(m));
    assert!(p.validate().is_ok());
}

#[test]
fn validate_rejects_dangling_material() {
    let mut p = Problem::new();
    unit_tet(&mut p, Some(MaterialId(9)));
    assert!(p.validate().is_err());
}

#[test]
fn validate_rejects_empty_prescribed_curve() {
    let mut p = Problem::new();
    let curve = p.add_curve(LoadCurve::default());
    let node = p.add_node(Node::at(0.0, 0.0, 0.0));
    p.node_mut(node)
        .set_constraint(Dof::X, Constraint::displacement(curve, 1.0));
    assert!(p.validate().is_err());
}

#[test]
fn validate_rejects_rigid_interface_on_deformable_material() {
    let mut p = Problem::new();
    let soft = p.add_material(Material::NeoHookean { e: 1.0, v: 0.3 });
    let node = p.add_node(Node::at(0.0, 0.0, 0.0));
    let contact = p.add_contact(Contact::RigidInterface {
        body: soft,
        nodes: vec![node],
    });
    p.bind_contact(ContactBinding::Constant(contact));
    assert!(p.validate().is_err());
}

#[test]
fn validate_rejects_self_wrapping_trans_iso() {
    let mut p = Problem::new();
    let id = p.add_material(Material::NeoHookean { e: 1.0, v: 0.3 });
    // Overwrite with a wrapper that names itself as base.
    *p.material_mut(id) = Material::TransIso {
        c3: 1.0,
        c4: 2.0,
        c5: 3.0,
        lam_max: 4.0,
        axis: fabrica_model::Orientation::Vector {
            a: glam::DVec3::X,
            d: glam::DVec3::Y,
        },
        base: id,
    };
    assert!(p.validate().is_err());
}

#[test]
fn switched_constraint_resolves_per_time() {
    let sw = Switch::from_points([
        (0.0, fabrica_model::DofState::Free),
        (5.0, fabrica_model::DofState::Fixed),
    ]);
    assert_eq!(
        sw.active_at(Time(2.0)),
        Some(&fabrica_model::DofState::Free)
    );
    assert_eq!(
        sw.active_at(Time(5.0)),
        Some(&fabrica_model::DofState::Fixed)
    );
}

#[test]
fn surface_pair_options_iterate_in_key_order() {
    let mut pair = SurfacePair::default();
    pair.options.insert("tolerance".into(), "0.01".into());
    pair.options.insert("penalty".into(), "10".into());
    let keys: Vec<_> = pair.options.keys().cloned().collect();
    assert_eq!(keys, vec!["penalty".to_string(), "tolerance".to_string()]);
}

#[test]
fn contact_binding_switch_values() {
    let sw = Switch::from_points([(0.0, ContactId(0)), (3.0, ContactId(1))]);
    let binding = ContactBinding::Switched(sw);
    if let ContactBinding::Switched(sw) = &binding {
        assert_eq!(sw.active_at(Time(4.0)), Some(&ContactId(1)));
    } else {
        unreachable!();
    }
}
