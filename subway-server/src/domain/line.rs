//! Line identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a line, assigned by the store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, colored subway line.
///
/// The line's stations are not stored here: they live in the line's
/// sections and are recovered with [`LinePath`](super::LinePath).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
}

impl Line {
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns a copy with a new name and color, keeping the id.
    pub fn renamed(&self, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self::new(self.id, name, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renamed_keeps_id() {
        let line = Line::new(LineId(2), "Line 2", "green");
        let renamed = line.renamed("Line 9", "navy");

        assert_eq!(renamed.id(), LineId(2));
        assert_eq!(renamed.name(), "Line 9");
        assert_eq!(renamed.color(), "navy");
    }

    #[test]
    fn display() {
        assert_eq!(LineId(9).to_string(), "9");
        assert_eq!(format!("{:?}", LineId(9)), "LineId(9)");
    }
}
