//! Route queries by station name.
//!
//! The planner resolves free-form station names against a built network,
//! runs the minimum-hop search, and attaches alternates and line labels.

use std::fmt;

use tracing::debug;

use crate::domain::{BlockedEdges, Path, StationId};
use crate::network::NetworkGraph;

use super::alternates::find_alternates;
use super::bfs::shortest_path;
use super::config::SearchConfig;
use super::segments::{EdgeLine, LineSegment, annotate, group_segments, interchanges};

/// Which end of a query a name was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("start"),
            Endpoint::Destination => f.write_str("destination"),
        }
    }
}

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A supplied name has no alphanumeric content
    #[error("{0} station name is empty after normalization")]
    InvalidName(Endpoint),

    /// One supplied name matches no station
    #[error("{endpoint} station not found: {name}")]
    StationNotFound { endpoint: Endpoint, name: String },

    /// Neither supplied name matches a station
    #[error("stations not found: {source_name} and {destination_name}")]
    StationsNotFound {
        source_name: String,
        destination_name: String,
    },

    /// Both stations exist but are not connected
    #[error("no route found")]
    NoRoute,

    /// An identity from a different network generation
    #[error("station {0} is not part of this network")]
    UnknownStation(StationId),
}

/// A primary route with its alternates and hop labels.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    /// The minimum-hop route.
    pub primary: Path,

    /// Detours, in the order of the primary hop they avoid.
    pub alternates: Vec<Path>,

    /// Line label for each hop of the primary route.
    pub edge_lines: Vec<EdgeLine>,
}

/// Route planner over one network generation.
pub struct RoutePlanner<'a> {
    graph: &'a NetworkGraph,
    config: &'a SearchConfig,
}

impl<'a> RoutePlanner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a NetworkGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// The network this planner searches.
    pub fn graph(&self) -> &'a NetworkGraph {
        self.graph
    }

    /// Resolve both names and find the minimum-hop route between them.
    pub fn find_route(&self, source: &str, destination: &str) -> Result<Path, RouteError> {
        let (from, to) = self.resolve(source, destination)?;
        let path = shortest_path(self.graph, from, to, &BlockedEdges::none())?;

        debug!(
            source = %from,
            destination = %to,
            hops = path.hops(),
            "Route found"
        );
        Ok(path)
    }

    /// Alternates to `primary`, capped by the configured maximum.
    pub fn find_alternates(&self, primary: &Path) -> Vec<Path> {
        find_alternates(self.graph, primary, self.config.max_alternates)
    }

    /// Alternates to `primary`, with an explicit cap.
    pub fn find_alternates_capped(&self, primary: &Path, max_alternates: usize) -> Vec<Path> {
        find_alternates(self.graph, primary, max_alternates)
    }

    /// Line label for each hop of `path`.
    pub fn segment_by_line(&self, path: &Path) -> Vec<EdgeLine> {
        annotate(self.graph.stations(), path)
    }

    /// Consecutive same-line hops of `path`, grouped.
    pub fn line_segments(&self, path: &Path) -> Vec<LineSegment> {
        group_segments(self.graph.stations(), path)
    }

    /// Multi-line stations along `path`.
    pub fn interchanges(&self, path: &Path) -> Vec<StationId> {
        interchanges(self.graph.stations(), path)
    }

    /// Find a route, its alternates and its hop labels in one call.
    pub fn plan(&self, source: &str, destination: &str) -> Result<RoutePlan, RouteError> {
        let primary = self.find_route(source, destination)?;
        let alternates = self.find_alternates(&primary);
        let edge_lines = self.segment_by_line(&primary);

        Ok(RoutePlan {
            primary,
            alternates,
            edge_lines,
        })
    }

    /// Stations whose key starts with `prefix`, for "did you mean" hints.
    pub fn suggest(&self, prefix: &str) -> Vec<StationId> {
        self.graph
            .stations()
            .suggest(prefix, self.config.max_suggestions)
    }

    fn resolve(&self, source: &str, destination: &str) -> Result<(StationId, StationId), RouteError> {
        let stations = self.graph.stations();
        let from = stations
            .lookup(source)
            .map_err(|_| RouteError::InvalidName(Endpoint::Source))?;
        let to = stations
            .lookup(destination)
            .map_err(|_| RouteError::InvalidName(Endpoint::Destination))?;

        match (from, to) {
            (Some(from), Some(to)) => Ok((from, to)),
            (None, None) => Err(RouteError::StationsNotFound {
                source_name: source.to_string(),
                destination_name: destination.to_string(),
            }),
            (None, Some(_)) => Err(RouteError::StationNotFound {
                endpoint: Endpoint::Source,
                name: source.to_string(),
            }),
            (Some(_), None) => Err(RouteError::StationNotFound {
                endpoint: Endpoint::Destination,
                name: destination.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{BuildConfig, LineDefinition};

    fn graph() -> NetworkGraph {
        NetworkGraph::build(
            &[
                LineDefinition::new("purple").stations(&["A", "B", "C", "D"]),
                LineDefinition::new("pink").stations(&["Q", "R"]),
            ],
            &BuildConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn error_display() {
        let err = RouteError::InvalidName(Endpoint::Source);
        assert_eq!(err.to_string(), "start station name is empty after normalization");

        let err = RouteError::StationNotFound {
            endpoint: Endpoint::Destination,
            name: "Atlantis".into(),
        };
        assert_eq!(err.to_string(), "destination station not found: Atlantis");

        let err = RouteError::StationsNotFound {
            source_name: "X".into(),
            destination_name: "Y".into(),
        };
        assert_eq!(err.to_string(), "stations not found: X and Y");

        assert_eq!(RouteError::NoRoute.to_string(), "no route found");
        assert_eq!(
            RouteError::UnknownStation(StationId(9)).to_string(),
            "station #9 is not part of this network"
        );
    }

    #[test]
    fn finds_route_by_name() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = RoutePlanner::new(&graph, &config);

        let path = planner.find_route("a", " d. ").unwrap();
        assert_eq!(path.hops(), 3);
        assert_eq!(graph.stations().display_name(path.source()), Some("A"));
        assert_eq!(graph.stations().display_name(path.destination()), Some("D"));
    }

    #[test]
    fn same_station_route() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = RoutePlanner::new(&graph, &config);

        let path = planner.find_route("B", "b").unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn not_found_distinguishes_endpoints() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = RoutePlanner::new(&graph, &config);

        assert_eq!(
            planner.find_route("Nowhere", "A").unwrap_err(),
            RouteError::StationNotFound {
                endpoint: Endpoint::Source,
                name: "Nowhere".into()
            }
        );
        assert_eq!(
            planner.find_route("A", "Nowhere").unwrap_err(),
            RouteError::StationNotFound {
                endpoint: Endpoint::Destination,
                name: "Nowhere".into()
            }
        );
        assert!(matches!(
            planner.find_route("X1", "X2").unwrap_err(),
            RouteError::StationsNotFound { .. }
        ));
    }

    #[test]
    fn empty_names_are_invalid() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = RoutePlanner::new(&graph, &config);

        assert_eq!(
            planner.find_route("", "A").unwrap_err(),
            RouteError::InvalidName(Endpoint::Source)
        );
        assert_eq!(
            planner.find_route("A", "?!").unwrap_err(),
            RouteError::InvalidName(Endpoint::Destination)
        );
    }

    #[test]
    fn disconnected_lines_have_no_route() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = RoutePlanner::new(&graph, &config);

        assert_eq!(planner.find_route("A", "R").unwrap_err(), RouteError::NoRoute);
    }

    #[test]
    fn plan_bundles_labels() {
        let graph = graph();
        let config = SearchConfig::default();
        let planner = RoutePlanner::new(&graph, &config);

        let plan = planner.plan("A", "C").unwrap();
        assert_eq!(plan.primary.hops(), 2);
        assert!(plan.alternates.is_empty());
        assert_eq!(plan.edge_lines.len(), 2);
        assert_eq!(plan.edge_lines[0].line.name(), Some("purple"));
    }

    #[test]
    fn suggestions_respect_limit() {
        let graph = graph();
        let config = SearchConfig::new(3, 1);
        let planner = RoutePlanner::new(&graph, &config);

        assert_eq!(planner.suggest("a"), vec![StationId(0)]);
        assert!(planner.suggest("zz").is_empty());
    }
}
