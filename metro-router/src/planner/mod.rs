//! Route planning over a built network.
//!
//! Minimum-hop breadth-first search, alternate routes found by blocking
//! one hop of the primary at a time, and per-hop line labels for
//! reporting.

mod alternates;
mod bfs;
mod config;
mod search;
mod segments;


pub use alternates::find_alternates;
pub use bfs::shortest_path;
pub use config::SearchConfig;
pub use search::{Endpoint, RouteError, RoutePlan, RoutePlanner};
pub use segments::{EdgeLine, LineLabel, LineSegment, annotate, group_segments, interchanges};
