//! Domain types for the metro route planner.
//!
//! Station keys, identities, paths and edges. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod name_key;
mod path;
mod station;

pub use error::DomainError;
pub use name_key::{InvalidName, MAX_KEY_CHARS, NameKey, normalize};
pub use path::{BlockedEdges, Edge, Path};
pub use station::{Station, StationId};
