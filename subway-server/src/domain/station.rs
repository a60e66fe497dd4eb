//! Station identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a station in the registry.
///
/// Station ids are assigned by the store when the station is created and
/// never change afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station: an identity plus a display name.
///
/// Immutable once created. Only the store constructs stations with a real
/// id, after the name has been accepted.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Station, StationId};
///
/// let jamsil = Station::new(StationId(1), "Jamsil");
/// assert_eq!(jamsil.id(), StationId(1));
/// assert_eq!(jamsil.name(), "Jamsil");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station with an already assigned id.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", StationId(42)), "42");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", StationId(7)), "StationId(7)");
    }

    #[test]
    fn equality_uses_id_and_name() {
        let a = Station::new(StationId(1), "Jamsil");
        let b = Station::new(StationId(1), "Jamsil");
        let c = Station::new(StationId(2), "Jamsil");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&StationId(3)).unwrap();
        assert_eq!(json, "3");

        let id: StationId = serde_json::from_str("5").unwrap();
        assert_eq!(id, StationId(5));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId(1));
        assert!(set.contains(&StationId(1)));
        assert!(!set.contains(&StationId(2)));
    }
}
