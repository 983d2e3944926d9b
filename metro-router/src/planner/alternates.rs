//! Alternate route suggestions.
//!
//! Each hop of the primary route is blocked in turn and the search re-run
//! between the same endpoints. Every distinct result is a detour around
//! one specific segment. This is a cheap approximation: it does not
//! enumerate all simple paths, and the alternates found are not
//! necessarily the next-shortest routes overall.

use tracing::debug;

use crate::domain::{BlockedEdges, Path};
use crate::network::NetworkGraph;

use super::bfs::shortest_path;

/// Find up to `max_alternates` routes that differ from `primary`.
///
/// Alternates are returned in the order of the blocked hop along the
/// primary (first hop blocked first). Each is distinct from the primary
/// and from every other alternate. A single-station primary has no hops
/// to block and yields nothing.
pub fn find_alternates(graph: &NetworkGraph, primary: &Path, max_alternates: usize) -> Vec<Path> {
    let mut alternates: Vec<Path> = Vec::new();
    let mut tried = 0;

    for (a, b) in primary.edges() {
        if alternates.len() >= max_alternates {
            break;
        }
        tried += 1;

        let blocked = BlockedEdges::single(a, b);
        let candidate = match shortest_path(
            graph,
            primary.source(),
            primary.destination(),
            &blocked,
        ) {
            Ok(path) => path,
            Err(_) => continue,
        };

        if &candidate == primary || alternates.contains(&candidate) {
            continue;
        }
        alternates.push(candidate);
    }

    debug!(
        hops = primary.hops(),
        tried,
        found = alternates.len(),
        "Alternate search complete"
    );

    alternates
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationId;
    use crate::network::{BuildConfig, LineDefinition};
    use proptest::prelude::*;

    fn graph_strategy() -> impl Strategy<Value = NetworkGraph> {
        let line = proptest::collection::vec(0..10usize, 2..7);
        proptest::collection::vec(line, 1..6).prop_map(|lines| {
            let defs: Vec<_> = lines
                .into_iter()
                .enumerate()
                .map(|(i, stops)| {
                    stops.iter().fold(LineDefinition::new(format!("l{i}")), |l, s| {
                        l.station(&format!("s{s}"))
                    })
                })
                .collect();
            NetworkGraph::build(&defs, &BuildConfig::default()).unwrap()
        })
    }

    proptest! {
        /// Alternates are distinct from each other and the primary, within
        /// the cap, and keep the primary's endpoints
        #[test]
        fn alternates_distinct(
            graph in graph_strategy(),
            a in 0..10usize,
            b in 0..10usize,
            cap in 0..5usize,
        ) {
            let n = graph.station_count();
            let (src, dst) = (StationId(a % n), StationId(b % n));

            if let Ok(primary) = shortest_path(&graph, src, dst, &BlockedEdges::none()) {
                let alternates = find_alternates(&graph, &primary, cap);
                prop_assert!(alternates.len() <= cap);
                for (i, alt) in alternates.iter().enumerate() {
                    prop_assert_ne!(alt, &primary);
                    prop_assert_eq!(alt.source(), src);
                    prop_assert_eq!(alt.destination(), dst);
                    for other in &alternates[i + 1..] {
                        prop_assert_ne!(alt, other);
                    }
                }
            }
        }
    }
}
