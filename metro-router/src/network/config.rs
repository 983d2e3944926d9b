//! Network build configuration.

/// Limits and visibility settings applied when building a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Maximum number of distinct stations.
    /// Exceeding it aborts the build.
    pub station_capacity: usize,

    /// Maximum number of lines a single station may belong to.
    pub max_lines_per_station: usize,

    /// Whether stations flagged as planned take part in the network.
    /// When false, planned entries are left out and their lines are split
    /// around them.
    pub include_planned: bool,
}

impl BuildConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        station_capacity: usize,
        max_lines_per_station: usize,
        include_planned: bool,
    ) -> Self {
        Self {
            station_capacity,
            max_lines_per_station,
            include_planned,
        }
    }

    /// Same limits, with planned-station visibility set to `include`.
    pub fn with_include_planned(mut self, include: bool) -> Self {
        self.include_planned = include;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            station_capacity: 400,
            max_lines_per_station: 6,
            include_planned: true,
        }
    }
}
