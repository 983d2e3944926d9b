//! Search configuration for the route planner.

/// Configuration parameters for route queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of alternate routes to return alongside the primary.
    pub max_alternates: usize,

    /// Maximum number of station suggestions offered for an unknown name.
    pub max_suggestions: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_alternates: usize, max_suggestions: usize) -> Self {
        Self {
            max_alternates,
            max_suggestions,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_alternates: 3,
            max_suggestions: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_alternates, 3);
        assert_eq!(config.max_suggestions, 20);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(1, 5);

        assert_eq!(config.max_alternates, 1);
        assert_eq!(config.max_suggestions, 5);
    }
}
