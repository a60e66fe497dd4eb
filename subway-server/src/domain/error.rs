//! Section validation errors.
//!
//! Every variant is a non-retryable validation failure detected before any
//! change is persisted. All of them are the caller's fault except
//! [`SectionError::UncaughtAddError`] and [`SectionError::InconsistentPath`],
//! which point at a logic gap or corrupted stored data.

use super::station::StationId;

/// Errors from building or mutating a line's section path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    /// A section's up and down station are the same station
    #[error("up and down station must be different stations")]
    SameStationInput,

    /// A section distance of zero
    #[error("section distance must be a positive integer")]
    InvalidDistance,

    /// Both stations of a new section are already on the line
    #[error("both stations of the section are already on the line")]
    BothStationsInPath,

    /// Neither station of a new section is on the line
    #[error("neither station of the section is on the line")]
    NoStationInPath,

    /// The station to remove is not on the line
    #[error("no section found for station {0}")]
    SectionNotFound(StationId),

    /// The new section is not shorter than the section it would divide
    #[error("cannot divide the original section: new distance must be shorter")]
    CannotDivideOriginalSection,

    /// Merging two sections would exceed the largest representable distance
    #[error("merged section distance is too long")]
    MergedDistanceTooLong,

    /// An add request that matched no known case
    #[error("invalid add request")]
    UncaughtAddError,

    /// Stored sections do not form a single simple path
    #[error("stored sections do not form a single path: {0}")]
    InconsistentPath(&'static str),
}

impl SectionError {
    /// Whether the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            SectionError::UncaughtAddError | SectionError::InconsistentPath(_)
        )
    }
}
