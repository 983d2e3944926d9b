//! Undirected station connectivity.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::domain::{NameKey, Station, StationId};

use super::config::BuildConfig;
use super::error::BuildError;
use super::lines::{LineDefinition, StationEntry};
use super::registry::StationRegistry;

/// A built metro network: the station registry plus adjacency.
///
/// The graph is undirected and loop-free. Neighbour sets are ordered by
/// identity, which is what makes search tie-breaking deterministic.
///
/// A network is never patched after it is built. Changing the line data
/// or the build configuration means building a new `NetworkGraph`.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    registry: StationRegistry,
    adjacency: Vec<BTreeSet<StationId>>,
    edge_count: usize,
}

impl NetworkGraph {
    /// Build a network from an ordered list of lines.
    ///
    /// Lines are replayed in order; station identities follow the order in
    /// which names are first seen.
    ///
    /// # Errors
    ///
    /// Fails on an empty line name, a station name with no alphanumeric
    /// content, or an exceeded capacity bound. No partial network is
    /// returned.
    pub fn build(lines: &[LineDefinition], config: &BuildConfig) -> Result<Self, BuildError> {
        let mut graph = Self {
            registry: StationRegistry::new(config),
            adjacency: Vec::new(),
            edge_count: 0,
        };

        for (index, line) in lines.iter().enumerate() {
            let name = line.name.trim();
            if name.is_empty() {
                return Err(BuildError::InvalidLineName { index });
            }
            graph.build_line(name, &line.stations, config.include_planned)?;
        }

        debug!(
            lines = lines.len(),
            stations = graph.station_count(),
            edges = graph.edge_count,
            include_planned = config.include_planned,
            "Network built"
        );

        Ok(graph)
    }

    /// Register every station of one line and chain consecutive stations.
    ///
    /// Planned entries are skipped when `include_planned` is false; the
    /// chain is broken at each skipped entry rather than bridged.
    fn build_line(
        &mut self,
        line_name: &str,
        entries: &[StationEntry],
        include_planned: bool,
    ) -> Result<(), BuildError> {
        let mut previous: Option<StationId> = None;
        let mut skipped = 0;

        for (position, entry) in entries.iter().enumerate() {
            if entry.planned && !include_planned {
                previous = None;
                skipped += 1;
                continue;
            }

            let key = NameKey::parse(&entry.name).map_err(|source| BuildError::InvalidName {
                line: line_name.to_string(),
                position,
                source,
            })?;

            let id = self.registry.register_key(&entry.name, key, entry.planned)?;
            self.registry.tag_line(id, line_name)?;
            if self.adjacency.len() < self.registry.len() {
                self.adjacency.resize_with(self.registry.len(), BTreeSet::new);
            }

            if let Some(prev) = previous {
                self.connect(prev, id);
            }
            previous = Some(id);
        }

        trace!(
            line = line_name,
            stations = entries.len(),
            skipped,
            "Line registered"
        );
        Ok(())
    }

    /// Add the undirected edge between `a` and `b` during a build.
    ///
    /// Self-loops, repeated edges and identities outside this network are
    /// ignored. Returns true if a new edge was added.
    fn connect(&mut self, a: StationId, b: StationId) -> bool {
        let n = self.adjacency.len();
        if a == b || a.index() >= n || b.index() >= n {
            return false;
        }
        let added = self.adjacency[a.index()].insert(b);
        self.adjacency[b.index()].insert(a);
        if added {
            self.edge_count += 1;
        }
        added
    }

    /// True if `a` and `b` are directly connected.
    pub fn connected(&self, a: StationId, b: StationId) -> bool {
        self.adjacency
            .get(a.index())
            .is_some_and(|n| n.contains(&b))
    }

    /// Neighbours of a station, in increasing identity order.
    ///
    /// Unknown identities have no neighbours.
    pub fn neighbors(&self, id: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.get(id.index()).into_iter().flatten().copied()
    }

    /// True if `id` belongs to this network.
    pub fn contains(&self, id: StationId) -> bool {
        self.registry.contains(id)
    }

    /// The station registry.
    pub fn stations(&self) -> &StationRegistry {
        &self.registry
    }

    /// Look up a station by identity.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.registry.station(id)
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
