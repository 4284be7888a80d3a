//! Station identifiers and records.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

impl InvalidStation {
    /// Every identifier up to `u32::MAX` is already taken.
    pub const NO_FREE_ID: Self = InvalidStation {
        reason: "no free station id",
    };
}

/// Caller-assigned station identifier.
///
/// Valid identifiers are positive; `0` is reserved as the "no stations"
/// answer of [`Network::max_station_id`](crate::network::Network::max_station_id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl StationId {
    /// Returns the identifier that follows this one, or `None` at `u32::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(StationId)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StationId {
    fn from(id: u32) -> Self {
        StationId(id)
    }
}

/// A network vertex.
///
/// Stations are immutable once created and identified by their id. The
/// name is what both lookup indexes key on.
///
/// # Examples
///
/// ```
/// use transit_server::domain::{Station, StationId};
///
/// let station = Station::new(StationId(7), "  Central ").unwrap();
/// assert_eq!(station.name(), "Central");
/// assert_eq!(station.to_string(), "ID: 7, Name: Central");
///
/// assert!(Station::new(StationId(0), "Central").is_err());
/// assert!(Station::new(StationId(1), "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station, trimming surrounding whitespace from the name.
    pub fn new(id: StationId, name: impl AsRef<str>) -> Result<Self, InvalidStation> {
        if id.0 == 0 {
            return Err(InvalidStation {
                reason: "id must be positive",
            });
        }

        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(InvalidStation {
                reason: "name must not be empty",
            });
        }

        Ok(Self {
            id,
            name: name.to_string(),
        })
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lexicographic (byte order) comparison of station names.
    pub fn cmp_by_name(&self, other: &Station) -> Ordering {
        self.name.as_str().cmp(other.name.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_name() {
        let s = Station::new(StationId(3), "  Luz\t").unwrap();
        assert_eq!(s.id(), StationId(3));
        assert_eq!(s.name(), "Luz");
    }

    #[test]
    fn reject_zero_id() {
        let err = Station::new(StationId(0), "Luz").unwrap_err();
        assert_eq!(err.to_string(), "invalid station: id must be positive");
    }

    #[test]
    fn reject_blank_name() {
        assert!(Station::new(StationId(1), "").is_err());
        assert!(Station::new(StationId(1), " \n ").is_err());
    }

    #[test]
    fn display() {
        let s = Station::new(StationId(12), "Sé").unwrap();
        assert_eq!(format!("{}", s), "ID: 12, Name: Sé");
        assert_eq!(format!("{}", StationId(12)), "12");
    }

    #[test]
    fn name_ordering_is_byte_order() {
        let upper = Station::new(StationId(1), "Zeta").unwrap();
        let lower = Station::new(StationId(2), "alpha").unwrap();
        // Uppercase letters sort before lowercase ones
        assert_eq!(upper.cmp_by_name(&lower), Ordering::Less);
        assert_eq!(lower.cmp_by_name(&upper), Ordering::Greater);
        assert_eq!(upper.cmp_by_name(&upper.clone()), Ordering::Equal);
    }

    #[test]
    fn next_id() {
        assert_eq!(StationId(4).next(), Some(StationId(5)));
        assert_eq!(StationId(u32::MAX).next(), None);
        assert_eq!(StationId::from(9), StationId(9));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any positive id with a non-blank name is accepted
        #[test]
        fn valid_always_constructs(id in 1u32.., name in "[A-Za-z][A-Za-z ]{0,20}") {
            let s = Station::new(StationId(id), &name).unwrap();
            prop_assert_eq!(s.id(), StationId(id));
            prop_assert_eq!(s.name(), name.trim());
        }

        /// Whitespace-only names are always rejected
        #[test]
        fn blank_rejected(id in 1u32.., name in "[ \t\n]{0,8}") {
            prop_assert!(Station::new(StationId(id), &name).is_err());
        }
    }
}
