use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Capabilities an edge cost must provide for shortest path search.
///
/// Addition saturates: `infinity().saturating_add(x)` is `infinity()` for
/// every `x`, and sums that exceed the representable range become infinity
/// rather than wrapping.
pub trait EdgeWeight: Clone + Ord + Debug {
    /// Identity for [`saturating_add`](Self::saturating_add)
    fn zero() -> Self;

    /// Sentinel greater than every finite weight
    fn infinity() -> Self;

    /// Combines two weights into the cost of traversing both
    fn saturating_add(&self, other: &Self) -> Self;

    /// Magnitude of this weight
    fn weight(&self) -> f64;

    /// Builds a weight of the given magnitude. Implementations round down so
    /// heuristic estimates never grow.
    fn from_weight(weight: f64) -> Self;

    fn is_infinite(&self) -> bool {
        *self >= Self::infinity()
    }

    /// True for weights usable on an edge: not negative and not NaN
    fn is_valid_edge(&self) -> bool {
        let w = self.weight();
        !w.is_nan() && w >= 0.0
    }
}

impl EdgeWeight for OrderedFloat<f64> {
    fn zero() -> Self {
        OrderedFloat(0.0)
    }

    fn infinity() -> Self {
        OrderedFloat(f64::INFINITY)
    }

    fn saturating_add(&self, other: &Self) -> Self {
        if self.is_infinite() || other.is_infinite() {
            return Self::infinity();
        }
        OrderedFloat(self.0 + other.0)
    }

    fn weight(&self) -> f64 {
        self.0
    }

    fn from_weight(weight: f64) -> Self {
        OrderedFloat(weight)
    }
}

impl EdgeWeight for u64 {
    fn zero() -> Self {
        0
    }

    fn infinity() -> Self {
        u64::MAX
    }

    fn saturating_add(&self, other: &Self) -> Self {
        u64::saturating_add(*self, *other)
    }

    fn weight(&self) -> f64 {
        *self as f64
    }

    fn from_weight(weight: f64) -> Self {
        // `as` saturates and maps NaN to zero.
        weight.floor() as u64
    }
}

/// Label given to combined roads once the joined ids grow past
/// [`MAX_LABEL_LEN`].
pub const LONG_ROAD_LABEL: &str = "really really long road";

/// Longest joined label kept when combining roads
pub const MAX_LABEL_LEN: usize = 1000;

/// A named road segment whose cost is its length in meters.
///
/// Equality and ordering only look at the distance; the id is a label.
/// Adding two roads joins their ids with `+`, which makes the combined weight
/// of a route read like the list of roads it uses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Road {
    pub road_id: String,
    distance: OrderedFloat<f64>,
}

impl Road {
    pub fn new(road_id: impl Into<String>, distance: f64) -> Self {
        Road {
            road_id: road_id.into(),
            distance: OrderedFloat(distance),
        }
    }

    /// Length in meters
    pub fn distance(&self) -> f64 {
        self.distance.0
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for Road {}

impl PartialOrd for Road {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Road {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

impl Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.road_id)
    }
}

impl EdgeWeight for Road {
    fn zero() -> Self {
        Road::new("ZERO", 0.0)
    }

    fn infinity() -> Self {
        Road::new("INFINITY", f64::INFINITY)
    }

    fn saturating_add(&self, other: &Self) -> Self {
        if self.is_infinite() || other.is_infinite() {
            return Self::infinity();
        }

        let distance = self.distance.0 + other.distance.0;
        if self.road_id.len() > MAX_LABEL_LEN || self.road_id == LONG_ROAD_LABEL {
            return Road::new(LONG_ROAD_LABEL, distance);
        }
        Road::new(format!("{}+{}", self.road_id, other.road_id), distance)
    }

    fn weight(&self) -> f64 {
        self.distance.0
    }

    fn from_weight(weight: f64) -> Self {
        Road::new("unnamed", weight)
    }
}
