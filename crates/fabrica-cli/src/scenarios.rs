//! Demo scenarios — procedural problems for each export feature area.
//!
//! Three canonical scenarios:
//! 1. **Beam** — A hexahedral column, fixed at the base, with a
//!    prescribed top displacement. Exercises geometry, boundary
//!    conditions, and load curves.
//! 2. **Indenter** — A rigid block pressed onto a deformable block
//!    through a sliding interface. Exercises rigid bodies, rigid-body
//!    constraints, and contact surfaces.
//! 3. **Staged** — Switch-driven boundary conditions across two
//!    instants. Exercises the timeline step sequence.

use fabrica_model::{
    Constraint, Contact, ContactBinding, Dof, DofState, Element, ElementKind, LoadCurve, Material,
    Node, Problem, SurfacePair, Switch,
};
use fabrica_types::NodeId;
use glam::DVec3;

/// Which demo scenario to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    /// Column with fixed base and prescribed top displacement.
    Beam,
    /// Rigid block over a deformable block with sliding contact.
    Indenter,
    /// Switch-driven boundary conditions over two instants.
    Staged,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::Beam,
            ScenarioKind::Indenter,
            ScenarioKind::Staged,
        ]
    }

    /// Returns the CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Beam => "beam",
            ScenarioKind::Indenter => "indenter",
            ScenarioKind::Staged => "staged",
        }
    }

    /// Returns a one-line description.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioKind::Beam => "hex8 column, fixed base, prescribed top displacement",
            ScenarioKind::Indenter => "rigid block on a deformable block via sliding contact",
            ScenarioKind::Staged => "switch-driven boundary conditions across two instants",
        }
    }

    /// Looks a scenario up by CLI name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }

    /// Builds the scenario's problem.
    pub fn build(&self) -> Problem {
        match self {
            ScenarioKind::Beam => beam(),
            ScenarioKind::Indenter => indenter(),
            ScenarioKind::Staged => staged(),
        }
    }
}

/// Adds a column of `layers` stacked unit cubes; returns the node
/// layers from bottom to top.
fn column(problem: &mut Problem, set: &str, layers: usize, material: Material) -> Vec<[NodeId; 4]> {
    let material = problem.add_material(material);
    let ring = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let rings: Vec<[NodeId; 4]> = (0..=layers)
        .map(|z| {
            ring.map(|(x, y)| problem.add_node(Node::at(x, y, z as f64)))
        })
        .collect();
    for z in 0..layers {
        let (lo, hi) = (rings[z], rings[z + 1]);
        let nodes = vec![lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]];
        let element =
            Element::new(ElementKind::Hex8, nodes, Some(material)).expect("eight nodes per hex8");
        problem.add_element_to(set, element);
    }
    rings
}

fn beam() -> Problem {
    let mut p = Problem::new();
    let rings = column(&mut p, "beam", 4, Material::NeoHookean { e: 1e6, v: 0.45 });
    let ramp = p.add_curve(LoadCurve::ramp());

    for &node in &rings[0] {
        for dof in Dof::TRANSLATIONAL {
            p.node_mut(node).set_constraint(dof, Constraint::fixed());
        }
    }
    for &node in &rings[4] {
        p.node_mut(node)
            .set_constraint(Dof::Z, Constraint::displacement(ramp, -0.5));
    }
    p
}

fn indenter() -> Problem {
    let mut p = Problem::new();
    let block_rings = column(
        &mut p,
        "block",
        1,
        Material::MooneyRivlin {
            c1: 0.8,
            c2: 0.2,
            k: 100.0,
        },
    );

    // Rigid indenter resting above the block.
    let rigid = p.add_material(Material::rigid(Some(DVec3::new(0.5, 0.5, 1.6)), None));
    let ring = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let lower: Vec<NodeId> = ring
        .iter()
        .map(|&(x, y)| p.add_node(Node::at(x, y, 1.2)))
        .collect();
    let upper: Vec<NodeId> = ring
        .iter()
        .map(|&(x, y)| p.add_node(Node::at(x, y, 2.0)))
        .collect();
    let nodes = lower.iter().chain(&upper).copied().collect();
    let element =
        Element::new(ElementKind::Hex8, nodes, Some(rigid)).expect("eight nodes per hex8");
    p.add_element_to("indenter", element);

    // Drive the indenter straight down, everything else held.
    let ramp = p.add_curve(LoadCurve::ramp());
    if let Some(dofs) = p.material_mut(rigid).rigid_constraints_mut() {
        for dof in Dof::ALL {
            dofs[dof.slot()] = Constraint::fixed();
        }
        dofs[Dof::Z.slot()] = Constraint::displacement(ramp, -0.4);
    }

    // Contact surfaces: indenter underside (master) vs block top
    // (slave).
    let master_el =
        Element::new(ElementKind::Surface4, lower, None).expect("four nodes per quad facet");
    let slave_el = Element::new(ElementKind::Surface4, block_rings[1].to_vec(), None)
        .expect("four nodes per quad facet");
    let surfaces = SurfacePair {
        master: vec![p.add_element(master_el)],
        slave: vec![p.add_element(slave_el)],
        options: [("penalty".to_string(), "100".to_string())].into(),
    };
    let contact = p.add_contact(Contact::Sliding {
        surfaces,
        biphasic: false,
        solute: false,
        friction_coefficient: 0.0,
    });
    p.bind_contact(ContactBinding::Constant(contact));

    for &node in &block_rings[0] {
        for dof in Dof::TRANSLATIONAL {
            p.node_mut(node).set_constraint(dof, Constraint::fixed());
        }
    }
    p
}

fn staged() -> Problem {
    let mut p = Problem::new();
    let rings = column(&mut p, "beam", 2, Material::NeoHookean { e: 1e6, v: 0.45 });
    let ramp = p.add_curve(LoadCurve::ramp());

    for &node in &rings[0] {
        for dof in Dof::TRANSLATIONAL {
            p.node_mut(node).set_constraint(dof, Constraint::fixed());
        }
    }

    // Top nodes: pulled until t = 1, then released and loaded sideways.
    for &node in &rings[2] {
        p.node_mut(node).set_constraint(
            Dof::Z,
            Constraint::Switched(Switch::from_points([
                (
                    0.0,
                    DofState::Displacement {
                        curve: ramp,
                        multiplier: 0.2,
                    },
                ),
                (1.0, DofState::Free),
            ])),
        );
        p.node_mut(node).set_constraint(
            Dof::X,
            Constraint::Switched(Switch::from_points([
                (
                    1.0,
                    DofState::Force {
                        curve: ramp,
                        multiplier: 10.0,
                    },
                ),
            ])),
        );
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_validates() {
        for kind in ScenarioKind::all() {
            let problem = kind.build();
            assert!(problem.validate().is_ok(), "{} failed", kind.name());
        }
    }

    #[test]
    fn every_scenario_exports() {
        for kind in ScenarioKind::all() {
            let problem = kind.build();
            let export = fabrica_export::build_document(&problem)
                .unwrap_or_else(|e| panic!("{} failed: {e}", kind.name()));
            assert!(export.warnings.is_empty(), "{} warned", kind.name());
        }
    }

    #[test]
    fn staged_scenario_produces_steps() {
        let problem = ScenarioKind::Staged.build();
        let export = fabrica_export::build_document(&problem).unwrap();
        assert_eq!(export.document.find_all("Step").count(), 2);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ScenarioKind::from_name("beam"), Some(ScenarioKind::Beam));
        assert_eq!(ScenarioKind::from_name("nope"), None);
    }
}
