//! Totally-ordered time keys.
//!
//! Load-curve points and switches are keyed by time. Raw `f64` is not
//! `Ord`, so `Time` wraps it with `total_cmp` ordering, making it usable
//! as a `BTreeMap` key. NaN keys are representable but sort after all
//! finite values; callers are expected to supply finite times.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scalar::Real;

/// A point in simulation time, ordered by `f64::total_cmp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Time(pub Real);

impl Time {
    /// Returns the raw time value.
    #[inline]
    pub fn value(self) -> Real {
        self.0
    }
}

// Equality follows the total order so `Eq` and `Ord` agree on every
// bit pattern, NaN included.
impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<Real> for Time {
    fn from(val: Real) -> Self {
        Self(val)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
