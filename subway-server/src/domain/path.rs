//! Ordered section path of a single line.
//!
//! A line's sections are stored as an unordered set. [`LinePath`] validates
//! such a set into a single directed path (no branch, no cycle, no gap) and
//! keeps the sections ordered from the upstream terminal to the downstream
//! terminal. All mutations return a new path and leave `self` untouched, so a
//! rejected request can never leave a half-applied change behind.

use std::collections::HashMap;

use super::error::SectionError;
use super::section::Section;
use super::station::StationId;

/// The sections of one line, ordered upstream to downstream.
///
/// Invariants:
/// - consecutive sections share a station (`s[i].down() == s[i + 1].up()`)
/// - every station appears at most once in [`LinePath::stations`]
///
/// The empty path is valid and is the state of a line with no sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinePath {
    sections: Vec<Section>,
}

impl LinePath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate an unordered set of sections into an ordered path.
    ///
    /// Fails with [`SectionError::InconsistentPath`] if the sections branch,
    /// form a cycle, contain a duplicate, or fall into more than one piece.
    pub fn from_sections(
        sections: impl IntoIterator<Item = Section>,
    ) -> Result<Self, SectionError> {
        let sections: Vec<Section> = sections.into_iter().collect();
        if sections.is_empty() {
            return Ok(Self::new());
        }

        let mut outgoing: HashMap<StationId, Section> = HashMap::with_capacity(sections.len());
        let mut incoming: HashMap<StationId, Section> = HashMap::with_capacity(sections.len());
        for section in &sections {
            if outgoing.insert(section.up(), *section).is_some() {
                return Err(SectionError::InconsistentPath(
                    "station has more than one outgoing section",
                ));
            }
            if incoming.insert(section.down(), *section).is_some() {
                return Err(SectionError::InconsistentPath(
                    "station has more than one incoming section",
                ));
            }
        }

        let mut heads = outgoing.keys().filter(|s| !incoming.contains_key(*s));
        let head = match (heads.next(), heads.next()) {
            (Some(head), None) => *head,
            (None, _) => return Err(SectionError::InconsistentPath("sections form a cycle")),
            (Some(_), Some(_)) => {
                return Err(SectionError::InconsistentPath(
                    "sections are not connected",
                ));
            }
        };

        let mut ordered = Vec::with_capacity(sections.len());
        let mut current = head;
        while let Some(section) = outgoing.get(&current) {
            ordered.push(*section);
            current = section.down();
            if ordered.len() > sections.len() {
                return Err(SectionError::InconsistentPath("sections form a cycle"));
            }
        }

        // A walk shorter than the set means a detached cycle exists elsewhere.
        if ordered.len() != sections.len() {
            return Err(SectionError::InconsistentPath("sections are not connected"));
        }

        Ok(Self { sections: ordered })
    }

    /// Sections in order, upstream first.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Stations in travel order.
    ///
    /// Has `len() + 1` entries for a non-empty path and none for the empty one.
    pub fn stations(&self) -> Vec<StationId> {
        let Some(first) = self.sections.first() else {
            return Vec::new();
        };
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(first.up());
        stations.extend(self.sections.iter().map(Section::down));
        stations
    }

    /// Whether `station` lies anywhere on the path.
    pub fn contains(&self, station: StationId) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    /// The upstream terminal station.
    pub fn up_terminal(&self) -> Option<StationId> {
        self.sections.first().map(Section::up)
    }

    /// The downstream terminal station.
    pub fn down_terminal(&self) -> Option<StationId> {
        self.sections.last().map(Section::down)
    }

    /// Insert a section, keeping the path free of branches and cycles.
    ///
    /// - On an empty path the section becomes the only section.
    /// - A section ending at the upstream terminal is prepended, one starting
    ///   at the downstream terminal is appended.
    /// - A section that shares only its up station with the path divides the
    ///   section leaving that station; one that shares only its down station
    ///   divides the section arriving there. The new section must be strictly
    ///   shorter than the one it divides.
    pub fn add(&self, section: Section) -> Result<Self, SectionError> {
        if self.sections.is_empty() {
            return Ok(Self {
                sections: vec![section],
            });
        }

        let up_on_path = self.contains(section.up());
        let down_on_path = self.contains(section.down());

        match (up_on_path, down_on_path) {
            (true, true) => Err(SectionError::BothStationsInPath),
            (false, false) => Err(SectionError::NoStationInPath),
            (false, true) if self.up_terminal() == Some(section.down()) => {
                let mut sections = Vec::with_capacity(self.sections.len() + 1);
                sections.push(section);
                sections.extend_from_slice(&self.sections);
                Ok(Self { sections })
            }
            (true, false) if self.down_terminal() == Some(section.up()) => {
                let mut sections = self.sections.clone();
                sections.push(section);
                Ok(Self { sections })
            }
            (true, false) => self.divide_after(section),
            (false, true) => self.divide_before(section),
        }
    }

    /// Replace `up -> old_down` with `up -> new` and `new -> old_down`.
    fn divide_after(&self, section: Section) -> Result<Self, SectionError> {
        let idx = self
            .sections
            .iter()
            .position(|s| s.up() == section.up())
            .ok_or(SectionError::UncaughtAddError)?;
        let original = self.sections[idx];
        let rest = original
            .distance()
            .remainder(section.distance())
            .ok_or(SectionError::CannotDivideOriginalSection)?;
        let tail = Section::new(section.down(), original.down(), rest)?;

        Ok(self.splice(idx, [section, tail]))
    }

    /// Replace `old_up -> down` with `old_up -> new` and `new -> down`.
    fn divide_before(&self, section: Section) -> Result<Self, SectionError> {
        let idx = self
            .sections
            .iter()
            .position(|s| s.down() == section.down())
            .ok_or(SectionError::UncaughtAddError)?;
        let original = self.sections[idx];
        let rest = original
            .distance()
            .remainder(section.distance())
            .ok_or(SectionError::CannotDivideOriginalSection)?;
        let head = Section::new(original.up(), section.up(), rest)?;

        Ok(self.splice(idx, [head, section]))
    }

    /// Remove a station from the line.
    ///
    /// A terminal station takes its single section with it. An interior
    /// station's two sections are merged into one spanning both, with the
    /// distances added. Removing a terminal of a one-section line leaves an
    /// empty path.
    pub fn remove(&self, station: StationId) -> Result<Self, SectionError> {
        let arriving = self.sections.iter().position(|s| s.down() == station);
        let leaving = self.sections.iter().position(|s| s.up() == station);

        match (arriving, leaving) {
            (None, None) => Err(SectionError::SectionNotFound(station)),
            (None, Some(idx)) | (Some(idx), None) => {
                let mut sections = self.sections.clone();
                sections.remove(idx);
                Ok(Self { sections })
            }
            (Some(before), Some(after)) => {
                let first = self.sections[before];
                let second = self.sections[after];
                let distance = first
                    .distance()
                    .join(second.distance())
                    .ok_or(SectionError::MergedDistanceTooLong)?;
                let merged = Section::new(first.up(), second.down(), distance)?;
                let mut sections = self.sections.clone();
                sections.splice(before..=after, [merged]);
                Ok(Self { sections })
            }
        }
    }

    fn splice(&self, idx: usize, replacement: [Section; 2]) -> Self {
        let mut sections = self.sections.clone();
        sections.splice(idx..=idx, replacement);
        Self { sections }
    }
}

/// Order an unordered set of sections into the stations they connect.
pub fn linearize(sections: &[Section]) -> Result<Vec<StationId>, SectionError> {
    Ok(LinePath::from_sections(sections.iter().copied())?.stations())
}

/// Validate `sections`, insert `section`, and return the new ordered set.
pub fn apply_add(sections: &[Section], section: Section) -> Result<Vec<Section>, SectionError> {
    let path = LinePath::from_sections(sections.iter().copied())?;
    Ok(path.add(section)?.into_sections())
}

/// Validate `sections`, remove `station`, and return the new ordered set.
pub fn apply_remove(
    sections: &[Section],
    station: StationId,
) -> Result<Vec<Section>, SectionError> {
    let path = LinePath::from_sections(sections.iter().copied())?;
    Ok(path.remove(station)?.into_sections())
}
