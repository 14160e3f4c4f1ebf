//! Schema name tables.
//!
//! All spellings of the target schema live here, owned by the
//! translator — the domain model stays format-agnostic. Spring
//! elements have no element tag; they are written as boundary records
//! instead.

use fabrica_model::{Contact, Dof, ElementKind, Extrapolation, Interpolation};

/// Schema tag for an element kind, `None` for springs.
pub(crate) fn element_tag(kind: &ElementKind) -> Option<&'static str> {
    match kind {
        ElementKind::Tet4 => Some("tet4"),
        ElementKind::Penta6 => Some("pent6"),
        ElementKind::Hex8 => Some("hex8"),
        ElementKind::Shell3 { .. } => Some("tri3"),
        ElementKind::Shell4 { .. } => Some("quad4"),
        ElementKind::Surface3 => Some("tri3"),
        ElementKind::Surface4 => Some("quad4"),
        ElementKind::Spring { .. } => None,
    }
}

/// Schema type name for a contact interface. The sliding sub-type is
/// selected by the formulation flags, most specific first.
pub(crate) fn contact_type(contact: &Contact) -> &'static str {
    match contact {
        Contact::Sliding {
            solute,
            biphasic,
            friction_coefficient,
            ..
        } => {
            if *solute {
                "sliding3"
            } else if *biphasic {
                "sliding2"
            } else if *friction_coefficient != 0.0 {
                "sliding_with_gaps"
            } else {
                "facet-to-facet sliding"
            }
        }
        Contact::Tied { .. } => "tied",
        Contact::RigidInterface { .. } => "rigid",
    }
}

/// Schema name for a curve interpolation mode.
pub(crate) fn interpolation_name(mode: Interpolation) -> &'static str {
    match mode {
        Interpolation::Linear => "linear",
        Interpolation::Step => "step",
        Interpolation::Smooth => "smooth",
    }
}

/// Schema name for a curve extrapolation mode.
pub(crate) fn extrapolation_name(mode: Extrapolation) -> &'static str {
    match mode {
        Extrapolation::Constant => "constant",
        Extrapolation::Tangent => "tangent",
        Extrapolation::Repeat => "repeat",
        Extrapolation::RepeatOffset => "repeat offset",
    }
}

/// `bc` attribute code for a node DOF.
pub(crate) fn dof_code(dof: Dof) -> &'static str {
    match dof {
        Dof::X => "x",
        Dof::Y => "y",
        Dof::Z => "z",
        Dof::Rx => "Rx",
        Dof::Ry => "Ry",
        Dof::Rz => "Rz",
    }
}

/// Record tag for a rigid-body DOF.
pub(crate) fn rigid_dof_tag(dof: Dof) -> &'static str {
    match dof {
        Dof::X => "trans_x",
        Dof::Y => "trans_y",
        Dof::Z => "trans_z",
        Dof::Rx => "rot_x",
        Dof::Ry => "rot_y",
        Dof::Rz => "rot_z",
    }
}
