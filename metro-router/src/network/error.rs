//! Network build and load errors.

use std::fmt;

use crate::domain::InvalidName;

/// A bounded resource of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Distinct stations in the registry
    Stations,
    /// Lines tagged on one station
    LinesPerStation,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Stations => f.write_str("stations"),
            Resource::LinesPerStation => f.write_str("lines per station"),
        }
    }
}

/// Errors that abort a network build.
///
/// A failed build never yields a partial network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A line has an empty name
    #[error("line {index} has an empty name")]
    InvalidLineName { index: usize },

    /// A station entry has no usable name
    #[error("line {line}, station {position}: {source}")]
    InvalidName {
        line: String,
        position: usize,
        source: InvalidName,
    },

    /// A station registered outside any line has no usable name
    #[error(transparent)]
    UnnamedStation(#[from] InvalidName),

    /// A configured bound was exceeded
    #[error("capacity exceeded: more than {limit} {resource}")]
    CapacityExceeded { resource: Resource, limit: usize },
}

/// Errors reading a network definition file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid line list
    #[error("failed to parse network file: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NameKey;

    #[test]
    fn error_display() {
        let err = BuildError::InvalidLineName { index: 2 };
        assert_eq!(err.to_string(), "line 2 has an empty name");

        let err = BuildError::CapacityExceeded {
            resource: Resource::Stations,
            limit: 400,
        };
        assert_eq!(err.to_string(), "capacity exceeded: more than 400 stations");

        let err = BuildError::CapacityExceeded {
            resource: Resource::LinesPerStation,
            limit: 6,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: more than 6 lines per station"
        );

        let err = BuildError::from(NameKey::parse("?").unwrap_err());
        assert_eq!(
            err.to_string(),
            "invalid station name \"?\": normalizes to an empty key"
        );

        let source = NameKey::parse("--").unwrap_err();
        let err = BuildError::InvalidName {
            line: "green".into(),
            position: 3,
            source,
        };
        assert_eq!(
            err.to_string(),
            "line green, station 3: invalid station name \"--\": normalizes to an empty key"
        );
    }

    #[test]
    fn load_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = LoadError::from(json_err);
        assert!(err.to_string().starts_with("failed to parse network file"));
    }
}
