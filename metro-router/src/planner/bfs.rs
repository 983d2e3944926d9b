//! Minimum-hop path search.
//!
//! Breadth-first search over the undirected station graph. Neighbours are
//! expanded in increasing identity order, so when several shortest paths
//! exist the result is always the same one.

use std::collections::VecDeque;

use tracing::trace;

use crate::domain::{BlockedEdges, Path, StationId};
use crate::network::NetworkGraph;

use super::search::RouteError;

/// Find a minimum-hop path from `source` to `destination`.
///
/// Edges in `blocked` are not traversed in either direction. The search
/// stops when `destination` is taken off the queue. The graph is not
/// modified.
///
/// # Errors
///
/// - `UnknownStation` if either identity is not in `graph`
/// - `NoRoute` if the destination is unreachable under `blocked`
pub fn shortest_path(
    graph: &NetworkGraph,
    source: StationId,
    destination: StationId,
    blocked: &BlockedEdges,
) -> Result<Path, RouteError> {
    for id in [source, destination] {
        if !graph.contains(id) {
            return Err(RouteError::UnknownStation(id));
        }
    }

    let count = graph.station_count();
    let mut visited = vec![false; count];
    let mut parent: Vec<Option<StationId>> = vec![None; count];
    let mut queue = VecDeque::new();

    visited[source.index()] = true;
    queue.push_back(source);
    let mut expanded = 0;

    while let Some(current) = queue.pop_front() {
        if current == destination {
            trace!(
                source = source.index(),
                destination = destination.index(),
                expanded,
                "Path found"
            );
            return Ok(reconstruct(&parent, destination));
        }
        expanded += 1;

        for next in graph.neighbors(current) {
            if visited[next.index()] || blocked.contains(current, next) {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = Some(current);
            queue.push_back(next);
        }
    }

    trace!(
        source = source.index(),
        destination = destination.index(),
        expanded,
        blocked = blocked.len(),
        "No path"
    );
    Err(RouteError::NoRoute)
}

/// Walk predecessors back from `destination` and reverse.
fn reconstruct(parent: &[Option<StationId>], destination: StationId) -> Path {
    let mut stations = vec![destination];
    let mut current = destination;
    while let Some(prev) = parent[current.index()] {
        stations.push(prev);
        current = prev;
    }
    stations.reverse();
    Path::from_reconstructed(stations)
}
