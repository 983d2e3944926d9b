//! Station identity and attributes.

use std::fmt;

use super::NameKey;

/// Dense station identity, assigned in first-seen order.
///
/// Identities are only meaningful within the network build that produced
/// them; a rebuild may assign different identities to the same names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

impl StationId {
    /// Returns the identity as an index into per-station tables.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A deduplicated station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Human-readable name, as first seen (trimmed).
    pub display_name: String,

    /// Canonical matching key; unique across a registry.
    pub key: NameKey,

    /// Lines serving this station, in first-tagged order.
    pub lines: Vec<String>,

    /// Whether the station is under construction rather than open.
    pub planned: bool,
}

impl Station {
    /// Create a station with no line memberships.
    ///
    /// Falls back to the key for display when the trimmed name is empty.
    pub fn new(raw_name: &str, key: NameKey, planned: bool) -> Self {
        let trimmed = raw_name.trim();
        let display_name = if trimmed.is_empty() {
            key.as_str().to_string()
        } else {
            trimmed.to_string()
        };

        Self {
            display_name,
            key,
            lines: Vec::new(),
            planned,
        }
    }

    /// True if the station is served by `line`.
    pub fn serves(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// True if more than one line calls here.
    pub fn is_interchange(&self) -> bool {
        self.lines.len() > 1
    }
}

/// Formats as a station-list row: `Majestic (purple, green) [planned]`.
impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)?;
        if !self.lines.is_empty() {
            write!(f, " ({})", self.lines.join(", "))?;
        }
        if self.planned {
            f.write_str(" [planned]")?;
        }
        Ok(())
    }
}
