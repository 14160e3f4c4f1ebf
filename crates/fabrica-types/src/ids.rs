//! Strongly-typed identifiers for model entities.
//!
//! Newtype wrappers prevent accidental mixing of node indices with
//! element indices or material indices. Each id is a stable index into
//! the corresponding arena in `fabrica_model::Problem`.
//!
//! Ids are ordered so reachability sets iterate in a deterministic,
//! ascending order.

use serde::{Deserialize, Serialize};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Index into the element arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u32);

/// Index into the material arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// Index into the load-curve arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurveId(pub u32);

/// Index into the contact arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContactId(pub u32);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            /// Returns the raw index as `usize` for arena indexing.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<u32> for $name {
            fn from(val: u32) -> Self {
                Self(val)
            }
        }
    };
}

impl_id!(NodeId);
impl_id!(ElementId);
impl_id!(MaterialId);
impl_id!(CurveId);
impl_id!(ContactId);
