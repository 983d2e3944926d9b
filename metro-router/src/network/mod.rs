//! Network construction.
//!
//! Turns declarative line data into a deduplicated station registry and an
//! undirected adjacency graph. Networks are always built whole from the
//! full line list; there is no incremental mutation.

mod config;
mod error;
mod graph;
mod lines;
mod registry;
mod shared;

pub use config::BuildConfig;
pub use error::{BuildError, LoadError, Resource};
pub use graph::NetworkGraph;
pub use lines::{LineDefinition, StationEntry, load_lines, namma_metro, parse_lines};
pub use registry::StationRegistry;
pub use shared::SharedNetwork;
