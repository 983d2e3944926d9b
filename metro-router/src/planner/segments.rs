//! Line annotation for paths.
//!
//! Labels each hop with a line serving both of its stations, groups
//! consecutive same-line hops into segments, and lists interchanges.
//! Reporting layers build their route summaries from these.

use std::fmt;

use crate::domain::{Path, StationId};
use crate::network::StationRegistry;

/// The line a hop was travelled on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LineLabel {
    /// A line serving both stations of the hop.
    Line(String),
    /// The two stations share no line.
    Unknown,
}

impl LineLabel {
    /// The line name, if known.
    pub fn name(&self) -> Option<&str> {
        match self {
            LineLabel::Line(name) => Some(name.as_str()),
            LineLabel::Unknown => None,
        }
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineLabel::Line(name) => f.write_str(name),
            LineLabel::Unknown => f.write_str("unknown"),
        }
    }
}

/// Line label for one hop of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLine {
    /// Index of the hop: hop `i` joins `path[i]` and `path[i + 1]`.
    pub edge_index: usize,
    pub line: LineLabel,
}

/// A run of consecutive hops on the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment {
    pub line: LineLabel,
    pub from: StationId,
    pub to: StationId,
    pub hops: usize,
}

/// Label every hop of `path` with a shared line.
///
/// For each hop, the first station's lines are scanned in the order they
/// were tagged, and the first one also serving the second station wins.
/// Hops whose stations share no line (possible only for hand-built paths)
/// are labelled `Unknown`.
pub fn annotate(stations: &StationRegistry, path: &Path) -> Vec<EdgeLine> {
    path.edges()
        .enumerate()
        .map(|(edge_index, (a, b))| EdgeLine {
            edge_index,
            line: shared_line(stations, a, b),
        })
        .collect()
}

fn shared_line(stations: &StationRegistry, a: StationId, b: StationId) -> LineLabel {
    let (Some(a), Some(b)) = (stations.station(a), stations.station(b)) else {
        return LineLabel::Unknown;
    };

    a.lines
        .iter()
        .find(|line| b.serves(line))
        .map(|line| LineLabel::Line(line.clone()))
        .unwrap_or(LineLabel::Unknown)
}

/// Group consecutive hops with the same label into segments.
pub fn group_segments(stations: &StationRegistry, path: &Path) -> Vec<LineSegment> {
    let hops = path.stations();
    let mut segments: Vec<LineSegment> = Vec::new();

    for edge in annotate(stations, path) {
        let to = hops[edge.edge_index + 1];
        match segments.last_mut() {
            Some(current) if current.line == edge.line => {
                current.to = to;
                current.hops += 1;
            }
            _ => segments.push(LineSegment {
                line: edge.line,
                from: hops[edge.edge_index],
                to,
                hops: 1,
            }),
        }
    }

    segments
}

/// Stations along `path` that belong to more than one line.
///
/// Endpoints are included; callers decide whether to count them.
pub fn interchanges(stations: &StationRegistry, path: &Path) -> Vec<StationId> {
    path.stations()
        .iter()
        .copied()
        .filter(|&id| stations.station(id).is_some_and(|s| s.is_interchange()))
        .collect()
}
