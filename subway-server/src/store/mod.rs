//! Persistence collaborators for the subway network.
//!
//! The section-ordering core never touches storage directly. Services load a
//! line's sections through [`SectionStore`], transform them in memory, and
//! write the whole resulting set back in one call.
//!
//! Each store call is atomic on its own, but a load followed by a replace is
//! not: two concurrent mutations of the same line race and the last writer
//! wins. Callers are expected to serialize writes per line.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use crate::domain::{Line, LineId, Section, Station, StationId};

/// Station registry.
pub trait StationStore {
    /// Insert a station and return it with its assigned id.
    fn insert_station(&self, name: &str) -> Result<Station, StoreError>;

    /// Look up a station by id.
    fn station(&self, id: StationId) -> Result<Option<Station>, StoreError>;

    fn station_by_name(&self, name: &str) -> Result<Option<Station>, StoreError>;

    /// All stations, ordered by id.
    fn stations(&self) -> Result<Vec<Station>, StoreError>;

    /// Delete a station. Returns `false` if it did not exist.
    fn delete_station(&self, id: StationId) -> Result<bool, StoreError>;
}

/// Line registry.
pub trait LineStore {
    /// Insert a line with no sections and return it with its assigned id.
    fn insert_line(&self, name: &str, color: &str) -> Result<Line, StoreError>;

    fn line(&self, id: LineId) -> Result<Option<Line>, StoreError>;

    fn line_by_name(&self, name: &str) -> Result<Option<Line>, StoreError>;

    /// All lines, ordered by id.
    fn lines(&self) -> Result<Vec<Line>, StoreError>;

    /// Overwrite a line's name and color. Returns `false` if it did not exist.
    fn update_line(&self, line: &Line) -> Result<bool, StoreError>;

    /// Delete a line together with its sections. Returns `false` if it did
    /// not exist.
    fn delete_line(&self, id: LineId) -> Result<bool, StoreError>;
}

/// Per-line section storage.
pub trait SectionStore {
    /// All sections currently stored for a line, in no particular order.
    fn load_sections(&self, line: LineId) -> Result<Vec<Section>, StoreError>;

    /// Replace every section of a line with `sections`.
    fn replace_sections(&self, line: LineId, sections: &[Section]) -> Result<(), StoreError>;

    /// Lines that have a section touching `station`.
    fn lines_through(&self, station: StationId) -> Result<Vec<LineId>, StoreError>;
}
