//! Service error types.

use crate::domain::{LineId, SectionError, StationId};
use crate::store::StoreError;

/// Errors from subway use cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The section change was rejected
    #[error(transparent)]
    Section(#[from] SectionError),

    /// The store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line with this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// Another station already has this name
    #[error("a station named '{0}' already exists")]
    DuplicateStationName(String),

    /// Another line already has this name
    #[error("a line named '{0}' already exists")]
    DuplicateLineName(String),

    /// The station is still part of a line
    #[error("station {station} is still on line {line}")]
    StationInUse { station: StationId, line: LineId },

    /// A name that is empty or only whitespace
    #[error("{0} name must not be blank")]
    BlankName(&'static str),
}
