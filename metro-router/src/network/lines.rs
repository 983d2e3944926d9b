//! Declarative line data.
//!
//! A network is described as an ordered list of lines, each an ordered list
//! of station entries. The same list is replayed in full on every build.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// One station position on a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEntry {
    /// Station name as written in the line data.
    pub name: String,

    /// Whether this stop is under construction.
    #[serde(default)]
    pub planned: bool,
}

/// A named line and its stations in running order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefinition {
    pub name: String,
    pub stations: Vec<StationEntry>,
}

impl LineDefinition {
    /// Create a line with no stations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stations: Vec::new(),
        }
    }

    /// Append an open station.
    pub fn station(self, name: &str) -> Self {
        self.entry(name, false)
    }

    /// Append a planned station.
    pub fn planned_station(self, name: &str) -> Self {
        self.entry(name, true)
    }

    /// Append open stations in order.
    pub fn stations(self, names: &[&str]) -> Self {
        names.iter().fold(self, |line, name| line.station(name))
    }

    fn entry(mut self, name: &str, planned: bool) -> Self {
        self.stations.push(StationEntry {
            name: name.to_string(),
            planned,
        });
        self
    }
}

/// Parse a JSON line list.
pub fn parse_lines(json: &str) -> Result<Vec<LineDefinition>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON line list from disk.
///
/// The format is an array of `{"name": ..., "stations": [{"name": ...,
/// "planned": false}, ...]}` objects; `planned` may be omitted.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<LineDefinition>, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    parse_lines(&contents)
}

/// The Bengaluru Namma Metro network: purple, green and pink lines.
///
/// Spellings are kept as they appear in the source timetable data;
/// interchanges (Majestic, M.G. Road, Jayadeva Hospital) are written
/// differently on different lines and rely on name normalization to merge.
pub fn namma_metro() -> Vec<LineDefinition> {
    vec![
        LineDefinition::new("purple").stations(&[
            "challaghatta",
            "kengeri",
            "Kengeri Bus Terminal",
            "Pattanagere",
            "Jnanbharati",
            "Rajarajeshwari Nagar",
            "Nayandahalli",
            "mysore road",
            "deepanjali nagar",
            "attiguppe",
            "vijayanagar",
            "Hosahalli",
            "magadi road",
            "majestic",
            "Central Road",
            "Vidhana Soudha",
            "Cubbon Park",
            "m.g. road",
            "trinity",
            "halasuru",
            "indiranagar",
            "swami vivekananda road",
            "baiyappanahalli",
            "Benniganahalli",
            "kr puram",
            "Singayyanapalya",
            "Garudacharpalaya",
            "hoodi",
            "Seetharampalya",
            "Kundalahalli",
            "Nallurhalli",
            "Sri Satya Sai Hospital",
            "Pattandur Agrahara",
            "Kadugodi Tree Park",
            "Channasandra(HopeFarm)",
            "whitefield(Kadugodi)",
        ]),
        LineDefinition::new("green").stations(&[
            "Madavara",
            "Chikkabidarakallu",
            "Manjunathanagar",
            "nagasandra",
            "Dasarhalli",
            "Jalahalli",
            "Peenya Industry",
            "Peenya",
            "Gorguntepalya",
            "Yeswantpur",
            "Sandal Soap Factory",
            "Mahalakshmi",
            "Rajijnagar",
            "Kuvempu road",
            "Srirampura",
            "Sampige Road",
            "majestic",
            "Chickpete",
            "Krishna Rajendra Market",
            "National College",
            "Lalbagh",
            "South End Circle",
            "Jayanagar",
            "Rashtreeya Vidyalaya Road",
            "Banashankari",
            "jayadeva hospital",
            "Yelachenahalli",
            "Konanakunte Cross",
            "Vajarahalli",
            "Thalaghattapura",
            "Silk Institute",
        ]),
        LineDefinition::new("pink").stations(&[
            "kalena agrahara",
            "hulimavu",
            "iim bangalore",
            "jp nagar 4th phase",
            "jayadeva hospital",
            "Tavarekere",
            "dairy circle",
            "lakkasandra",
            "langford town",
            "rashtriya military school",
            "mg road",
            "shivajinagar",
            "Cantonment",
            "Pottery Town",
            "tannery road",
            "Venkateshpura",
            "kadugundanahalli",
            "nagawara",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builder_appends_in_order() {
        let line = LineDefinition::new("pink")
            .station("A")
            .planned_station("B")
            .stations(&["C", "D"]);

        assert_eq!(line.name, "pink");
        let names: Vec<_> = line.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        let planned: Vec<_> = line.stations.iter().map(|s| s.planned).collect();
        assert_eq!(planned, vec![false, true, false, false]);
    }

    #[test]
    fn parse_defaults_planned_to_false() {
        let json = r#"[
            {"name": "yellow", "stations": [
                {"name": "RV Road"},
                {"name": "Ragigudda", "planned": true}
            ]}
        ]"#;

        let lines = parse_lines(json).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            LineDefinition::new("yellow")
                .station("RV Road")
                .planned_station("Ragigudda")
        );
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_lines(r#"[{"name": "x"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        let lines = namma_metro();
        std::fs::write(&path, serde_json::to_string_pretty(&lines).unwrap()).unwrap();

        let loaded = load_lines(&path).unwrap();
        assert_eq!(loaded, lines);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_lines(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn namma_metro_lines() {
        let lines = namma_metro();
        let names: Vec<_> = lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["purple", "green", "pink"]);
        assert_eq!(lines[0].stations.len(), 36);
        assert_eq!(lines[1].stations.len(), 31);
        assert_eq!(lines[2].stations.len(), 18);
        assert!(lines.iter().flat_map(|l| &l.stations).all(|s| !s.planned));
    }
}
