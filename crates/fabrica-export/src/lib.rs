//! # fabrica-export
//!
//! Model-graph resolver and translator: turns a
//! [`Problem`](fabrica_model::Problem) into a FEBio `.feb` document
//! (spec version 1.1).
//!
//! ## Pipeline
//!
//! 1. [`resolve`] — walk the entity graph from the problem's element
//!    sets and contact bindings, collecting the distinct entities of
//!    each kind.
//! 2. [`IdTable::assign`] — sequential 1-based output ids per kind,
//!    with the top-level material rule applied up front.
//! 3. Translators — materials, load curves, node/rigid constraints,
//!    contacts, and the timeline of switch-driven steps.
//! 4. [`build_document`] — assemble the section tree in fixed order,
//!    prune empty sections, and hand back the document plus every
//!    [`Warning`] raised along the way.
//!
//! Dropped constructs are never silent: each produces a structured
//! warning in the returned list and a `tracing` event.

mod boundary;
mod contact;
mod curves;
mod diag;
mod document;
mod material;
mod names;
mod resolve;
mod rigid;
mod table;
mod timeline;
mod xml;

pub use diag::{Diagnostics, Warning};
pub use document::{build_document, feb_to_string, write_feb, FebExport};
pub use material::{schema_type_name, translate_material, MaterialCard, Param};
pub use resolve::{resolve, Reachable};
pub use table::IdTable;
pub use xml::XmlElement;
