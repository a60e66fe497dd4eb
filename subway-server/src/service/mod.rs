//! Use cases of the subway network.
//!
//! Every mutation follows the same shape: load the line's sections, validate
//! them into a [`LinePath`](crate::domain::LinePath), apply the change in
//! memory, and persist the complete resulting set. Nothing is written unless
//! the whole change has been accepted.

mod error;
mod subway;


pub use error::ServiceError;
pub use subway::{LineDetails, NewLine, SubwayService};
