//! Shared, rebuildable network handle.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use super::config::BuildConfig;
use super::error::BuildError;
use super::graph::NetworkGraph;
use super::lines::LineDefinition;

/// Thread-safe handle to the current network generation.
///
/// Readers take a snapshot and search it without holding any lock. A
/// rebuild constructs the new generation off to the side and swaps it in
/// whole; snapshots taken earlier stay valid (for their own identities)
/// until dropped.
#[derive(Clone)]
pub struct SharedNetwork {
    current: Arc<RwLock<Generation>>,
    lines: Arc<Vec<LineDefinition>>,
}

struct Generation {
    graph: Arc<NetworkGraph>,
    config: BuildConfig,
}

impl SharedNetwork {
    /// Build the first generation from `lines`.
    pub fn build(lines: Vec<LineDefinition>, config: BuildConfig) -> Result<Self, BuildError> {
        let graph = NetworkGraph::build(&lines, &config)?;

        Ok(Self {
            current: Arc::new(RwLock::new(Generation {
                graph: Arc::new(graph),
                config,
            })),
            lines: Arc::new(lines),
        })
    }

    /// The current network generation.
    pub fn snapshot(&self) -> Arc<NetworkGraph> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard.graph)
    }

    /// The configuration the current generation was built with.
    pub fn config(&self) -> BuildConfig {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        guard.config.clone()
    }

    /// Rebuild from the stored line data with a new configuration.
    ///
    /// On success, replaces the current generation and returns its station
    /// count. On failure, the existing generation is preserved and the
    /// error is returned.
    pub fn rebuild(&self, config: BuildConfig) -> Result<usize, BuildError> {
        let graph = match NetworkGraph::build(&self.lines, &config) {
            Ok(graph) => graph,
            Err(e) => {
                warn!(error = %e, "Network rebuild failed, keeping previous generation");
                return Err(e);
            }
        };
        let count = graph.station_count();

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Generation {
            graph: Arc::new(graph),
            config,
        };

        debug!(stations = count, "Network generation swapped");
        Ok(count)
    }

    /// Show or hide planned stations, rebuilding the network.
    pub fn set_include_planned(&self, include: bool) -> Result<usize, BuildError> {
        let config = self.config().with_include_planned(include);
        self.rebuild(config)
    }
}
