//! Station, line, and section use cases.

use tracing::{debug, info};

use crate::domain::{Line, LineId, LinePath, Section, Station, StationId};
use crate::store::{LineStore, SectionStore, StationStore};

use super::error::ServiceError;

/// Request to create a line together with its first section.
#[derive(Debug, Clone)]
pub struct NewLine {
    pub name: String,
    pub color: String,
    pub first_section: Section,
}

/// A line with its stations in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDetails {
    pub line: Line,
    pub stations: Vec<Station>,
}

/// Subway network operations over a store.
///
/// The store is only reached through the collaborator traits, so tests can
/// run against [`MemoryStore`](crate::store::MemoryStore) directly.
pub struct SubwayService<S> {
    store: S,
}

impl<S> SubwayService<S>
where
    S: StationStore + LineStore + SectionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // Stations

    /// Register a new station. Names must be unique.
    pub fn create_station(&self, name: &str) -> Result<Station, ServiceError> {
        let name = require_name(name, "station")?;
        if self.store.station_by_name(name)?.is_some() {
            return Err(ServiceError::DuplicateStationName(name.to_string()));
        }

        let station = self.store.insert_station(name)?;
        info!(id = %station.id(), name = station.name(), "created station");
        Ok(station)
    }

    pub fn stations(&self) -> Result<Vec<Station>, ServiceError> {
        Ok(self.store.stations()?)
    }

    /// Delete a station that no line passes through.
    pub fn delete_station(&self, id: StationId) -> Result<(), ServiceError> {
        self.require_station(id)?;
        if let Some(line) = self.store.lines_through(id)?.first() {
            return Err(ServiceError::StationInUse {
                station: id,
                line: *line,
            });
        }

        self.store.delete_station(id)?;
        info!(%id, "deleted station");
        Ok(())
    }

    // Lines

    /// Create a line with its first section.
    ///
    /// Both stations of the first section must already exist.
    pub fn create_line(&self, new: NewLine) -> Result<LineDetails, ServiceError> {
        let name = require_name(&new.name, "line")?;
        if self.store.line_by_name(name)?.is_some() {
            return Err(ServiceError::DuplicateLineName(name.to_string()));
        }
        self.require_station(new.first_section.up())?;
        self.require_station(new.first_section.down())?;
        let path = LinePath::new().add(new.first_section)?;

        let line = self.store.insert_line(name, &new.color)?;
        self.store.replace_sections(line.id(), path.sections())?;
        info!(id = %line.id(), name = line.name(), "created line");

        self.details(line, &path)
    }

    /// All lines with their stations.
    pub fn lines(&self) -> Result<Vec<LineDetails>, ServiceError> {
        self.store
            .lines()?
            .into_iter()
            .map(|line| {
                let path = self.load_path(line.id())?;
                self.details(line, &path)
            })
            .collect()
    }

    pub fn line(&self, id: LineId) -> Result<LineDetails, ServiceError> {
        let line = self.require_line(id)?;
        let path = self.load_path(id)?;
        self.details(line, &path)
    }

    /// Rename and recolor a line. The new name must not belong to another line.
    pub fn update_line(&self, id: LineId, name: &str, color: &str) -> Result<(), ServiceError> {
        let line = self.require_line(id)?;
        let name = require_name(name, "line")?;
        if let Some(other) = self.store.line_by_name(name)?
            && other.id() != id
        {
            return Err(ServiceError::DuplicateLineName(name.to_string()));
        }

        self.store.update_line(&line.renamed(name, color))?;
        info!(%id, name, "updated line");
        Ok(())
    }

    pub fn delete_line(&self, id: LineId) -> Result<(), ServiceError> {
        if !self.store.delete_line(id)? {
            return Err(ServiceError::LineNotFound(id));
        }
        info!(%id, "deleted line");
        Ok(())
    }

    // Sections

    /// Insert a section into a line.
    ///
    /// The line's whole section set is replaced on success.
    pub fn add_section(&self, id: LineId, section: Section) -> Result<LineDetails, ServiceError> {
        let line = self.require_line(id)?;
        self.require_station(section.up())?;
        self.require_station(section.down())?;

        let path = self.load_path(id)?.add(section)?;
        self.store.replace_sections(id, path.sections())?;
        info!(line = %id, ?section, sections = path.len(), "added section");

        self.details(line, &path)
    }

    /// Remove a station from a line, re-linking its neighbours.
    pub fn remove_section(&self, id: LineId, station: StationId) -> Result<(), ServiceError> {
        self.require_line(id)?;

        let path = self.load_path(id)?.remove(station)?;
        self.store.replace_sections(id, path.sections())?;
        info!(line = %id, %station, sections = path.len(), "removed station from line");
        Ok(())
    }

    fn load_path(&self, id: LineId) -> Result<LinePath, ServiceError> {
        let sections = self.store.load_sections(id)?;
        debug!(line = %id, count = sections.len(), "loaded sections");
        Ok(LinePath::from_sections(sections)?)
    }

    fn details(&self, line: Line, path: &LinePath) -> Result<LineDetails, ServiceError> {
        let stations = path
            .stations()
            .into_iter()
            .map(|id| self.require_station(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LineDetails { line, stations })
    }

    fn require_station(&self, id: StationId) -> Result<Station, ServiceError> {
        self.store
            .station(id)?
            .ok_or(ServiceError::StationNotFound(id))
    }

    fn require_line(&self, id: LineId) -> Result<Line, ServiceError> {
        self.store.line(id)?.ok_or(ServiceError::LineNotFound(id))
    }
}

fn require_name<'a>(name: &'a str, kind: &'static str) -> Result<&'a str, ServiceError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::BlankName(kind));
    }
    Ok(trimmed)
}
