//! Station deduplication.
//!
//! Every station name on every line goes through the registry. Names that
//! normalize to the same key are the same station and share one identity.

use std::collections::HashMap;

use crate::domain::{InvalidName, NameKey, Station, StationId, normalize};

use super::config::BuildConfig;
use super::error::{BuildError, Resource};

/// Arena of stations indexed by dense identity.
///
/// The first registration of a key wins: later registrations of the same
/// key return the existing identity and do not overwrite its display name
/// or planned flag. Line tags accumulate across registrations.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    stations: Vec<Station>,
    by_key: HashMap<NameKey, StationId>,
    capacity: usize,
    max_lines_per_station: usize,
}

impl StationRegistry {
    /// Create an empty registry with the limits from `config`.
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            stations: Vec::new(),
            by_key: HashMap::new(),
            capacity: config.station_capacity,
            max_lines_per_station: config.max_lines_per_station,
        }
    }

    /// Register a station by its raw name.
    ///
    /// Returns the existing identity if the name's key is already known.
    ///
    /// # Errors
    ///
    /// - `UnnamedStation` if the name normalizes to an empty key
    /// - `CapacityExceeded` if a new station would exceed the station bound
    pub fn register(&mut self, raw_name: &str, planned: bool) -> Result<StationId, BuildError> {
        let key = NameKey::parse(raw_name)?;
        self.register_key(raw_name, key, planned)
    }

    /// Register a station whose key the caller has already parsed from
    /// `raw_name`.
    pub(crate) fn register_key(
        &mut self,
        raw_name: &str,
        key: NameKey,
        planned: bool,
    ) -> Result<StationId, BuildError> {
        debug_assert_eq!(normalize(raw_name), key.as_str());

        if let Some(&id) = self.by_key.get(&key) {
            return Ok(id);
        }

        if self.stations.len() >= self.capacity {
            return Err(BuildError::CapacityExceeded {
                resource: Resource::Stations,
                limit: self.capacity,
            });
        }

        let id = StationId(self.stations.len());
        self.by_key.insert(key.clone(), id);
        self.stations.push(Station::new(raw_name, key, planned));
        Ok(id)
    }

    /// Add `line` to a station's line set, unless already present.
    ///
    /// # Errors
    ///
    /// `CapacityExceeded` if the station already belongs to the maximum
    /// number of lines.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this registry.
    pub fn tag_line(&mut self, id: StationId, line: &str) -> Result<(), BuildError> {
        let station = &mut self.stations[id.index()];
        if station.serves(line) {
            return Ok(());
        }
        if station.lines.len() >= self.max_lines_per_station {
            return Err(BuildError::CapacityExceeded {
                resource: Resource::LinesPerStation,
                limit: self.max_lines_per_station,
            });
        }
        station.lines.push(line.to_string());
        Ok(())
    }

    /// Find the station a raw name refers to.
    ///
    /// Returns `Ok(None)` for a well-formed name that matches no station.
    pub fn lookup(&self, raw_name: &str) -> Result<Option<StationId>, InvalidName> {
        let key = NameKey::parse(raw_name)?;
        Ok(self.by_key.get(&key).copied())
    }

    /// Stations whose key starts with the normalized `prefix`, in identity
    /// order, at most `limit` of them.
    ///
    /// A prefix with no alphanumeric content matches nothing.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<StationId> {
        let prefix = normalize(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }

        self.iter()
            .filter(|(_, station)| station.key.starts_with(&prefix))
            .map(|(id, _)| id)
            .take(limit)
            .collect()
    }

    /// Look up a station by identity.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    /// Display name for a station.
    pub fn display_name(&self, id: StationId) -> Option<&str> {
        self.station(id).map(|s| s.display_name.as_str())
    }

    /// Lines serving a station, in first-tagged order.
    pub fn lines(&self, id: StationId) -> Option<&[String]> {
        self.station(id).map(|s| s.lines.as_slice())
    }

    /// Whether a station is planned rather than open.
    pub fn is_planned(&self, id: StationId) -> Option<bool> {
        self.station(id).map(|s| s.planned)
    }

    /// True if `id` was issued by this registry.
    pub fn contains(&self, id: StationId) -> bool {
        id.index() < self.stations.len()
    }

    /// All stations with their identities, in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations
            .iter()
            .enumerate()
            .map(|(i, s)| (StationId(i), s))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new(&BuildConfig::default())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Registering any sequence of names never creates two stations
        /// with the same key
        #[test]
        fn keys_stay_unique(names in proptest::collection::vec("[A-Za-z .]{1,12}", 0..40)) {
            let mut reg = StationRegistry::new(&BuildConfig::default());
            for name in &names {
                if NameKey::parse(name).is_ok() {
                    reg.register(name, false).unwrap();
                }
            }

            let mut keys: Vec<_> = reg.iter().map(|(_, s)| s.key.clone()).collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), total);
        }

        /// Re-registering a key returns the identity it was first given
        #[test]
        fn identity_is_stable(name in "[A-Za-z]{1,12}", extra in "[ .]{0,3}") {
            let mut reg = StationRegistry::new(&BuildConfig::default());
            let first = reg.register(&name, false).unwrap();
            let variant = format!("{extra}{}{extra}", name.to_uppercase());
            let second = reg.register(&variant, true).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(reg.is_planned(first), Some(false));
        }
    }
}
