//! Paths, edges and blocked-edge sets.

use std::collections::HashSet;
use std::fmt;

use super::{DomainError, StationId};

/// An unordered pair of stations.
///
/// Stored with the smaller identity first, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: StationId,
    high: StationId,
}

impl Edge {
    /// Create the edge joining `a` and `b`.
    pub fn new(a: StationId, b: StationId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Both endpoints, smaller identity first.
    pub fn endpoints(&self) -> (StationId, StationId) {
        (self.low, self.high)
    }

    /// True if the edge joins a station to itself.
    pub fn is_loop(&self) -> bool {
        self.low == self.high
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}-{})", self.low.0, self.high.0)
    }
}

/// Edges excluded from a single search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedEdges {
    edges: HashSet<Edge>,
}

impl BlockedEdges {
    /// No blocked edges.
    pub fn none() -> Self {
        Self::default()
    }

    /// A set blocking exactly one edge.
    pub fn single(a: StationId, b: StationId) -> Self {
        let mut blocked = Self::default();
        blocked.block(a, b);
        blocked
    }

    /// Block the edge between `a` and `b`, in both directions.
    pub fn block(&mut self, a: StationId, b: StationId) {
        self.edges.insert(Edge::new(a, b));
    }

    /// True if travel between `a` and `b` is blocked (either direction).
    pub fn contains(&self, a: StationId, b: StationId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Number of blocked edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if nothing is blocked.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// An ordered, non-empty sequence of stations.
///
/// Paths produced by the planner visit no station twice and every
/// consecutive pair is connected. Paths built by hand through
/// [`Path::new`] are only checked for being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    stations: Vec<StationId>,
}

impl Path {
    /// Construct a path from a station sequence.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPath` if `stations` is empty.
    pub fn new(stations: Vec<StationId>) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        Ok(Self { stations })
    }

    /// A path rebuilt from a search's predecessor chain, which always
    /// holds at least the destination.
    pub(crate) fn from_reconstructed(stations: Vec<StationId>) -> Self {
        debug_assert!(!stations.is_empty(), "reconstructed path is empty");
        Self { stations }
    }

    /// The single-station path.
    pub fn single(station: StationId) -> Self {
        Self {
            stations: vec![station],
        }
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// First station.
    pub fn source(&self) -> StationId {
        self.stations[0]
    }

    /// Last station.
    pub fn destination(&self) -> StationId {
        self.stations[self.stations.len() - 1]
    }

    /// Number of stations, including both ends.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Never true for a constructed path.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Consecutive station pairs, in travel order.
    pub fn edges(&self) -> impl Iterator<Item = (StationId, StationId)> + '_ {
        self.stations.windows(2).map(|w| (w[0], w[1]))
    }

    /// True if the path calls at `station`.
    pub fn contains(&self, station: StationId) -> bool {
        self.stations.contains(&station)
    }
}
