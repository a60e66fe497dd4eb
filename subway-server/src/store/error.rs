//! Store error types.

use crate::domain::LineId;

/// Errors from the backing store.
///
/// These are infrastructure failures, not validation failures: the request
/// itself may have been fine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the store lock
    #[error("store lock poisoned")]
    Poisoned,

    /// Sections were written for a line that does not exist
    #[error("line {0} does not exist in the store")]
    UnknownLine(LineId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(StoreError::Poisoned.to_string(), "store lock poisoned");
        assert_eq!(
            StoreError::UnknownLine(LineId(4)).to_string(),
            "line 4 does not exist in the store"
        );
    }
}
