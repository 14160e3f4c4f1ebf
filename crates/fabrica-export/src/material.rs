//! Material translator: domain material → schema type name + ordered
//! parameter list.
//!
//! Trans-iso wrappers are not wrapper types in the schema: the base
//! material's parameters are inlined into the wrapper's card and the
//! base itself is (normally) not a top-level material. Ogden
//! coefficient sequences are truncated to the first six pairs by
//! definition, not by accident.

use fabrica_model::{Material, Orientation, Problem};
use fabrica_types::MaterialId;
use glam::DVec3;

use crate::diag::{Diagnostics, Warning};
use crate::xml::{comma_join, XmlElement};

/// One translated parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// `<name>value</name>`
    Scalar {
        /// Schema parameter name.
        name: String,
        /// Decimal or comma-joined value text.
        value: String,
    },
    /// `<name type="kind">value</name>`
    Typed {
        /// Schema parameter name.
        name: String,
        /// The `type` attribute.
        kind: &'static str,
        /// Value text; empty means no text content.
        value: String,
    },
    /// `<name type="kind"><a>..</a><d>..</d></name>` — the vector
    /// material-axis form.
    Axes {
        /// Schema parameter name.
        name: String,
        /// The `type` attribute.
        kind: &'static str,
        /// Primary axis, comma-joined.
        a: String,
        /// Secondary axis, comma-joined.
        d: String,
    },
}

impl Param {
    fn scalar(name: impl Into<String>, value: impl ToString) -> Self {
        Param::Scalar {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Renders this parameter as an XML element.
    pub fn to_xml(&self) -> XmlElement {
        match self {
            Param::Scalar { name, value } => XmlElement::new(name.clone()).with_text(value.clone()),
            Param::Typed { name, kind, value } => {
                let el = XmlElement::new(name.clone()).with_attr("type", *kind);
                if value.is_empty() {
                    el
                } else {
                    el.with_text(value.clone())
                }
            }
            Param::Axes { name, kind, a, d } => XmlElement::new(name.clone())
                .with_attr("type", *kind)
                .with_child(XmlElement::new("a").with_text(a.clone()))
                .with_child(XmlElement::new("d").with_text(d.clone())),
        }
    }
}

/// A translated material: schema type name plus ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCard {
    /// Schema type name (e.g. `Ogden`, `trans iso Mooney-Rivlin`).
    pub type_name: String,
    /// Parameters in emission order.
    pub params: Vec<Param>,
    /// True when elements using this material need per-element fiber
    /// data (user-defined orientation).
    pub requires_element_fiber: bool,
}

/// Schema type name for a material. Trans-iso names depend on the
/// base material, recursively.
pub fn schema_type_name(problem: &Problem, id: MaterialId) -> String {
    match problem.material(id) {
        Material::LinearIsotropic { .. } => "isotropic elastic".to_string(),
        Material::NeoHookean { .. } => "neo-Hookean".to_string(),
        Material::HolmesMow { .. } => "Holmes-Mow".to_string(),
        Material::MooneyRivlin { .. } => "Mooney-Rivlin".to_string(),
        Material::VerondaWestmann { .. } => "Veronda-Westmann".to_string(),
        Material::ArrudaBoyce { .. } => "Arruda-Boyce".to_string(),
        Material::Ogden { .. } => "Ogden".to_string(),
        Material::Rigid { .. } => "rigid body".to_string(),
        Material::TransIso { base, .. } => {
            format!("trans iso {}", schema_type_name(problem, *base))
        }
        Material::LinearOrthotropic { .. } => "linear orthotropic".to_string(),
        Material::FungOrthotropic { .. } => "Fung orthotropic".to_string(),
    }
}

/// Translates one material into its card.
pub fn translate_material(
    problem: &Problem,
    id: MaterialId,
    diag: &mut Diagnostics,
) -> MaterialCard {
    let type_name = schema_type_name(problem, id);
    let mut requires_element_fiber = false;
    let params = match problem.material(id) {
        Material::LinearIsotropic { e, v } | Material::NeoHookean { e, v } => {
            vec![Param::scalar("E", e), Param::scalar("v", v)]
        }
        Material::HolmesMow { e, v, beta } => vec![
            Param::scalar("E", e),
            Param::scalar("v", v),
            Param::scalar("beta", beta),
        ],
        Material::MooneyRivlin { c1, c2, k } | Material::VerondaWestmann { c1, c2, k } => vec![
            Param::scalar("c1", c1),
            Param::scalar("c2", c2),
            Param::scalar("k", k),
        ],
        Material::ArrudaBoyce { mu, n, k } => vec![
            Param::scalar("mu", mu),
            Param::scalar("N", n),
            Param::scalar("k", k),
        ],
        Material::Ogden { ci, mi, k } => {
            let mut params = Vec::new();
            for (i, c) in ci.iter().take(6).enumerate() {
                params.push(Param::scalar(format!("c{}", i + 1), c));
            }
            for (i, m) in mi.iter().take(6).enumerate() {
                params.push(Param::scalar(format!("m{}", i + 1), m));
            }
            params.push(Param::scalar("k", k));
            params
        }
        Material::Rigid {
            center_of_mass,
            density,
            ..
        } => {
            let mut params = Vec::new();
            if let Some(com) = center_of_mass {
                params.push(Param::scalar("center_of_mass", join3(*com)));
            }
            if let Some(density) = density {
                params.push(Param::scalar("density", density));
            }
            if params.is_empty() {
                diag.warn(Warning::RigidBodyUnderspecified {
                    material: id.index(),
                });
            }
            params
        }
        Material::TransIso {
            c3,
            c4,
            c5,
            lam_max,
            axis,
            base,
        } => {
            let mut params = vec![
                Param::scalar("c3", c3),
                Param::scalar("c4", c4),
                Param::scalar("c5", c5),
                Param::scalar("lam_max", lam_max),
            ];
            let base_card = translate_material(problem, *base, diag);
            requires_element_fiber = base_card.requires_element_fiber;
            params.extend(base_card.params);

            let (kind, value) = match axis {
                Orientation::Vector { a, .. } => ("vector", join3(*a)),
                Orientation::Spherical { origin, .. } => ("spherical", join3(*origin)),
                Orientation::Nodal { edge1, .. } => {
                    ("local", format!("{},{}", edge1.0 + 1, edge1.1 + 1))
                }
                Orientation::User(_) => {
                    requires_element_fiber = true;
                    ("user", String::new())
                }
            };
            params.push(Param::Typed {
                name: "fiber".to_string(),
                kind,
                value,
            });
            params
        }
        Material::LinearOrthotropic {
            e1,
            e2,
            e3,
            g12,
            g23,
            g31,
            v12,
            v23,
            v31,
            axis,
        } => {
            let mut params = ortho_params(*e1, *e2, *e3, *g12, *g23, *g31, *v12, *v23, *v31);
            if let Some(param) = mat_axis_param(axis, id, diag) {
                params.push(param);
            }
            params
        }
        Material::FungOrthotropic {
            e1,
            e2,
            e3,
            g12,
            g23,
            g31,
            v12,
            v23,
            v31,
            c,
            k,
            axis,
        } => {
            let mut params = ortho_params(*e1, *e2, *e3, *g12, *g23, *g31, *v12, *v23, *v31);
            params.push(Param::scalar("c", c));
            params.push(Param::scalar("k", k));
            if let Some(param) = mat_axis_param(axis, id, diag) {
                params.push(param);
            }
            params
        }
    };

    MaterialCard {
        type_name,
        params,
        requires_element_fiber,
    }
}

#[allow(clippy::too_many_arguments)]
fn ortho_params(
    e1: f64,
    e2: f64,
    e3: f64,
    g12: f64,
    g23: f64,
    g31: f64,
    v12: f64,
    v23: f64,
    v31: f64,
) -> Vec<Param> {
    vec![
        Param::scalar("E1", e1),
        Param::scalar("E2", e2),
        Param::scalar("E3", e3),
        Param::scalar("G12", g12),
        Param::scalar("G23", g23),
        Param::scalar("G31", g31),
        Param::scalar("v12", v12),
        Param::scalar("v23", v23),
        Param::scalar("v31", v31),
    ]
}

/// The `mat_axis` parameter of an orthotropic material, or `None`
/// (with a warning) for axis kinds the schema cannot express.
fn mat_axis_param(axis: &Orientation, id: MaterialId, diag: &mut Diagnostics) -> Option<Param> {
    match axis {
        Orientation::Vector { a, d } => Some(Param::Axes {
            name: "mat_axis".to_string(),
            kind: "vector",
            a: join3(*a),
            d: join3(*d),
        }),
        Orientation::Nodal { edge1, edge2 } => Some(Param::Typed {
            name: "mat_axis".to_string(),
            kind: "local",
            value: format!("{},{},{}", edge1.0 + 1, edge1.1 + 1, edge2.1 + 1),
        }),
        Orientation::Spherical { .. } | Orientation::User(_) => {
            diag.warn(Warning::UnsupportedOrthotropicAxis {
                material: id.index(),
            });
            None
        }
    }
}

pub(crate) fn join3(v: DVec3) -> String {
    comma_join([v.x, v.y, v.z])
}
