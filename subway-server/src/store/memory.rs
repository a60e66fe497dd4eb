//! In-memory store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Line, LineId, Section, Station, StationId};

use super::error::StoreError;
use super::{LineStore, SectionStore, StationStore};

#[derive(Debug, Default)]
struct Tables {
    last_station_id: u64,
    last_line_id: u64,
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    sections: HashMap<LineId, Vec<Section>>,
}

/// Thread-safe in-memory implementation of every store trait.
///
/// Ids are assigned sequentially from 1, like a database identity column,
/// and are never reused after a delete.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl StationStore for MemoryStore {
    fn insert_station(&self, name: &str) -> Result<Station, StoreError> {
        let mut tables = self.write()?;
        tables.last_station_id += 1;
        let station = Station::new(StationId(tables.last_station_id), name);
        tables.stations.insert(station.id(), station.clone());
        Ok(station)
    }

    fn station(&self, id: StationId) -> Result<Option<Station>, StoreError> {
        Ok(self.read()?.stations.get(&id).cloned())
    }

    fn station_by_name(&self, name: &str) -> Result<Option<Station>, StoreError> {
        Ok(self
            .read()?
            .stations
            .values()
            .find(|s| s.name() == name)
            .cloned())
    }

    fn stations(&self) -> Result<Vec<Station>, StoreError> {
        Ok(self.read()?.stations.values().cloned().collect())
    }

    fn delete_station(&self, id: StationId) -> Result<bool, StoreError> {
        Ok(self.write()?.stations.remove(&id).is_some())
    }
}

impl LineStore for MemoryStore {
    fn insert_line(&self, name: &str, color: &str) -> Result<Line, StoreError> {
        let mut tables = self.write()?;
        tables.last_line_id += 1;
        let line = Line::new(LineId(tables.last_line_id), name, color);
        tables.lines.insert(line.id(), line.clone());
        tables.sections.insert(line.id(), Vec::new());
        Ok(line)
    }

    fn line(&self, id: LineId) -> Result<Option<Line>, StoreError> {
        Ok(self.read()?.lines.get(&id).cloned())
    }

    fn line_by_name(&self, name: &str) -> Result<Option<Line>, StoreError> {
        Ok(self
            .read()?
            .lines
            .values()
            .find(|l| l.name() == name)
            .cloned())
    }

    fn lines(&self) -> Result<Vec<Line>, StoreError> {
        Ok(self.read()?.lines.values().cloned().collect())
    }

    fn update_line(&self, line: &Line) -> Result<bool, StoreError> {
        let mut tables = self.write()?;
        match tables.lines.get_mut(&line.id()) {
            Some(existing) => {
                *existing = line.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_line(&self, id: LineId) -> Result<bool, StoreError> {
        let mut tables = self.write()?;
        tables.sections.remove(&id);
        Ok(tables.lines.remove(&id).is_some())
    }
}

impl SectionStore for MemoryStore {
    fn load_sections(&self, line: LineId) -> Result<Vec<Section>, StoreError> {
        Ok(self
            .read()?
            .sections
            .get(&line)
            .cloned()
            .unwrap_or_default())
    }

    fn replace_sections(&self, line: LineId, sections: &[Section]) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        if !tables.lines.contains_key(&line) {
            return Err(StoreError::UnknownLine(line));
        }
        tables.sections.insert(line, sections.to_vec());
        Ok(())
    }

    fn lines_through(&self, station: StationId) -> Result<Vec<LineId>, StoreError> {
        let tables = self.read()?;
        let mut lines: Vec<LineId> = tables
            .sections
            .iter()
            .filter(|(_, sections)| sections.iter().any(|s| s.touches(station)))
            .map(|(id, _)| *id)
            .collect();
        lines.sort();
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(up: u64, down: u64, distance: u32) -> Section {
        Section::from_raw(up, down, distance).unwrap()
    }

    #[test]
    fn station_ids_are_sequential() {
        let store = MemoryStore::new();
        let a = store.insert_station("Jamsil").unwrap();
        let b = store.insert_station("Gangnam").unwrap();

        assert_eq!(a.id(), StationId(1));
        assert_eq!(b.id(), StationId(2));
        assert_eq!(store.stations().unwrap(), vec![a, b]);
    }

    #[test]
    fn deleted_station_ids_are_not_reused() {
        let store = MemoryStore::new();
        let a = store.insert_station("Jamsil").unwrap();
        assert!(store.delete_station(a.id()).unwrap());
        assert!(!store.delete_station(a.id()).unwrap());

        let b = store.insert_station("Jamsil").unwrap();
        assert_eq!(b.id(), StationId(2));
    }

    #[test]
    fn find_station_by_name() {
        let store = MemoryStore::new();
        let a = store.insert_station("Jamsil").unwrap();

        assert_eq!(store.station_by_name("Jamsil").unwrap(), Some(a.clone()));
        assert_eq!(store.station_by_name("Samsung").unwrap(), None);
        assert_eq!(store.station(a.id()).unwrap(), Some(a));
        assert_eq!(store.station(StationId(99)).unwrap(), None);
    }

    #[test]
    fn new_line_has_no_sections() {
        let store = MemoryStore::new();
        let line = store.insert_line("Line 2", "green").unwrap();

        assert_eq!(line.id(), LineId(1));
        assert!(store.load_sections(line.id()).unwrap().is_empty());
    }

    #[test]
    fn replace_sections_overwrites_whole_set() {
        let store = MemoryStore::new();
        let line = store.insert_line("Line 2", "green").unwrap();

        store
            .replace_sections(line.id(), &[section(1, 2, 3), section(2, 3, 4)])
            .unwrap();
        store.replace_sections(line.id(), &[section(1, 3, 7)]).unwrap();

        assert_eq!(store.load_sections(line.id()).unwrap(), vec![section(1, 3, 7)]);
    }

    #[test]
    fn replace_sections_for_unknown_line_fails() {
        let store = MemoryStore::new();
        assert_eq!(
            store.replace_sections(LineId(5), &[section(1, 2, 3)]),
            Err(StoreError::UnknownLine(LineId(5)))
        );
    }

    #[test]
    fn delete_line_drops_sections() {
        let store = MemoryStore::new();
        let line = store.insert_line("Line 2", "green").unwrap();
        store.replace_sections(line.id(), &[section(1, 2, 3)]).unwrap();

        assert!(store.delete_line(line.id()).unwrap());
        assert!(store.line(line.id()).unwrap().is_none());
        assert!(store.load_sections(line.id()).unwrap().is_empty());
        assert!(!store.delete_line(line.id()).unwrap());
    }

    #[test]
    fn update_line_keeps_id() {
        let store = MemoryStore::new();
        let line = store.insert_line("Line 2", "green").unwrap();

        assert!(store.update_line(&line.renamed("Line 9", "navy")).unwrap());
        let stored = store.line(line.id()).unwrap().unwrap();
        assert_eq!(stored.name(), "Line 9");
        assert_eq!(store.line_by_name("Line 2").unwrap(), None);

        let missing = Line::new(LineId(42), "x", "y");
        assert!(!store.update_line(&missing).unwrap());
    }

    #[test]
    fn lines_through_station() {
        let store = MemoryStore::new();
        let two = store.insert_line("Line 2", "green").unwrap();
        let nine = store.insert_line("Line 9", "gold").unwrap();
        store.replace_sections(two.id(), &[section(1, 2, 3)]).unwrap();
        store.replace_sections(nine.id(), &[section(2, 3, 3)]).unwrap();

        assert_eq!(
            store.lines_through(StationId(2)).unwrap(),
            vec![two.id(), nine.id()]
        );
        assert_eq!(store.lines_through(StationId(1)).unwrap(), vec![two.id()]);
        assert!(store.lines_through(StationId(7)).unwrap().is_empty());
    }
}
