//! Load curves: time-value mappings driving prescribed constraints.

use std::collections::BTreeMap;

use fabrica_types::{Real, Time};
use serde::{Deserialize, Serialize};

/// Interpolation between curve points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Straight lines between points.
    #[default]
    Linear,
    /// Piecewise-constant steps.
    Step,
    /// Smooth (cubic spline) interpolation.
    Smooth,
}

/// Extrapolation outside the curve's time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Extrapolation {
    /// Hold the boundary value.
    #[default]
    Constant,
    /// Continue along the boundary tangent.
    Tangent,
    /// Repeat the curve periodically.
    Repeat,
    /// Repeat the curve, offset by the last value each period.
    RepeatOffset,
}

/// An ordered time → value mapping with interpolation and
/// extrapolation modes. Points iterate sorted by time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadCurve {
    /// Curve points, keyed and iterated in time order.
    pub points: BTreeMap<Time, Real>,
    /// Interpolation between points.
    pub interpolation: Interpolation,
    /// Extrapolation beyond the first/last point.
    pub extrapolation: Extrapolation,
}

impl LoadCurve {
    /// Creates an empty curve with the given modes.
    pub fn new(interpolation: Interpolation, extrapolation: Extrapolation) -> Self {
        Self {
            points: BTreeMap::new(),
            interpolation,
            extrapolation,
        }
    }

    /// Builds a curve from `(time, value)` pairs with the given modes.
    pub fn from_points(
        points: impl IntoIterator<Item = (Real, Real)>,
        interpolation: Interpolation,
        extrapolation: Extrapolation,
    ) -> Self {
        Self {
            points: points.into_iter().map(|(t, v)| (Time(t), v)).collect(),
            interpolation,
            extrapolation,
        }
    }

    /// A linear ramp through `(0,0)` and `(1,1)` — the conventional
    /// default multiplier curve.
    pub fn ramp() -> Self {
        Self::from_points(
            [(0.0, 0.0), (1.0, 1.0)],
            Interpolation::Linear,
            Extrapolation::Constant,
        )
    }

    /// Inserts one point, replacing any point at exactly that time.
    pub fn insert(&mut self, time: Real, value: Real) {
        self.points.insert(Time(time), value);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
