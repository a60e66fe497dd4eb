//! Domain types for the subway network.
//!
//! This module contains the validated value types of the network and the
//! section-ordering logic. All types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod line;
mod path;
mod section;
mod station;

pub use error::SectionError;
pub use line::{Line, LineId};
pub use path::{LinePath, apply_add, apply_remove, linearize};
pub use section::{Distance, Section};
pub use station::{Station, StationId};
