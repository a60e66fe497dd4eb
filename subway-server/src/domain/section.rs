//! Sections: directed track segments between two stations.

use std::fmt;

use super::error::SectionError;
use super::station::StationId;

/// A positive track distance between two adjacent stations.
///
/// Zero is rejected, so any `Distance` value is at least 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Create a distance, rejecting zero.
    pub fn new(value: u32) -> Result<Self, SectionError> {
        if value == 0 {
            return Err(SectionError::InvalidDistance);
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Distance remaining after carving `part` out of `self`.
    ///
    /// Returns `None` unless `part` is strictly shorter, since a section can
    /// only be divided into two non-empty pieces.
    pub fn remainder(self, part: Distance) -> Option<Distance> {
        self.0.checked_sub(part.0).and_then(|d| Distance::new(d).ok())
    }

    /// Sum of two distances, or `None` if it does not fit in a `u32`.
    pub fn join(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.0).map(Distance)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed section `up -> down` with a positive distance.
///
/// The two endpoints are always different stations; this is checked on
/// construction.
///
/// # Examples
///
/// ```
/// use subway_server::domain::{Distance, Section, SectionError, StationId};
///
/// let d = Distance::new(10).unwrap();
/// let section = Section::new(StationId(1), StationId(2), d).unwrap();
/// assert_eq!(section.up(), StationId(1));
///
/// assert_eq!(
///     Section::new(StationId(1), StationId(1), d),
///     Err(SectionError::SameStationInput)
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    up: StationId,
    down: StationId,
    distance: Distance,
}

impl Section {
    pub fn new(up: StationId, down: StationId, distance: Distance) -> Result<Self, SectionError> {
        if up == down {
            return Err(SectionError::SameStationInput);
        }
        Ok(Self { up, down, distance })
    }

    /// Build a section from raw wire values.
    pub fn from_raw(up: u64, down: u64, distance: u32) -> Result<Self, SectionError> {
        Self::new(StationId(up), StationId(down), Distance::new(distance)?)
    }

    pub fn up(&self) -> StationId {
        self.up
    }

    pub fn down(&self) -> StationId {
        self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Whether `station` is one of this section's endpoints.
    pub fn touches(&self, station: StationId) -> bool {
        self.up == station || self.down == station
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section({} -> {}, {})", self.up, self.down, self.distance)
    }
}
