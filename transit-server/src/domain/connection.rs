//! Connection records.

use std::fmt;

use super::StationId;

/// Edge weight (distance or cost). A weight of `0` is read as "no edge"
/// by every matrix consumer.
pub type Weight = u32;

/// An undirected weighted link between two stations.
///
/// `from`/`to` are stored as given but every consumer treats the pair
/// symmetrically: `(a, b, w)` is the same link as `(b, a, w)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    from: StationId,
    to: StationId,
    weight: Weight,
}

impl Connection {
    pub fn new(from: StationId, to: StationId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> StationId {
        self.from
    }

    pub fn to(&self) -> StationId {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Whether `station` is either endpoint.
    pub fn touches(&self, station: StationId) -> bool {
        self.from == station || self.to == station
    }

    /// Whether this connection links `a` and `b`, in either direction.
    pub fn joins(&self, a: StationId, b: StationId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From: {} -> To: {} (Weight: {})",
            self.from, self.to, self.weight
        )
    }
}
