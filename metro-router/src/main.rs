use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_router::domain::{Path, StationId};
use metro_router::network::{
    BuildConfig, LineDefinition, NetworkGraph, load_lines, namma_metro,
};
use metro_router::planner::{Endpoint, RouteError, RoutePlanner, SearchConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("usage: metro-router <from> <to>");
        eprintln!("       metro-router --stations");
        eprintln!("       metro-router --suggest <prefix>");
        return ExitCode::from(2);
    };

    // Line data: METRO_NETWORK file, or the built-in network
    let lines: Vec<LineDefinition> = match std::env::var("METRO_NETWORK") {
        Ok(path) => match load_lines(&path) {
            Ok(lines) => lines,
            Err(e) => {
                error!(path = %path, error = %e, "Failed to load network");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => namma_metro(),
    };

    let include_planned = std::env::var("METRO_INCLUDE_PLANNED")
        .map(|v| !matches!(v.as_str(), "0" | "false" | "off"))
        .unwrap_or(true);
    let build_config = BuildConfig::default().with_include_planned(include_planned);

    let mut search_config = SearchConfig::default();
    if let Ok(raw) = std::env::var("METRO_MAX_ALTERNATES") {
        match raw.parse() {
            Ok(n) => search_config.max_alternates = n,
            Err(_) => eprintln!("Warning: ignoring invalid METRO_MAX_ALTERNATES={raw}"),
        }
    }

    let graph = match NetworkGraph::build(&lines, &build_config) {
        Ok(graph) => graph,
        Err(e) => {
            error!(error = %e, "Failed to build network");
            return ExitCode::FAILURE;
        }
    };
    info!(
        stations = graph.station_count(),
        edges = graph.edge_count(),
        "Network loaded"
    );

    let planner = RoutePlanner::new(&graph, &search_config);

    let (from, to) = match command {
        Command::Stations => {
            print_stations(&graph);
            return ExitCode::SUCCESS;
        }
        Command::Suggest(prefix) => {
            return if print_suggestions(&planner, prefix) > 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
        Command::Route { from, to } => (from, to),
    };

    match planner.plan(from, to) {
        Ok(plan) => {
            print_route(&planner, &plan.primary);
            if plan.alternates.is_empty() {
                println!("No alternate routes found.");
            } else {
                println!("Alternate suggestions:");
                for (i, alternate) in plan.alternates.iter().enumerate() {
                    println!("  Alt {}) {}", i + 1, station_list(&graph, alternate));
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            match &e {
                RouteError::StationNotFound { endpoint, name } => {
                    print_suggestions(&planner, name);
                    if *endpoint == Endpoint::Source {
                        eprintln!("Check the start station spelling.");
                    }
                }
                RouteError::StationsNotFound {
                    source_name,
                    destination_name,
                } => {
                    print_suggestions(&planner, source_name);
                    print_suggestions(&planner, destination_name);
                }
                _ => {}
            }
            ExitCode::FAILURE
        }
    }
}

enum Command<'a> {
    Route { from: &'a str, to: &'a str },
    Stations,
    Suggest(&'a str),
}

impl<'a> Command<'a> {
    fn parse(args: &'a [String]) -> Option<Self> {
        match args {
            [flag] if flag == "--stations" => Some(Command::Stations),
            [flag, prefix] if flag == "--suggest" => Some(Command::Suggest(prefix)),
            [from, to] if !from.starts_with("--") => Some(Command::Route { from, to }),
            _ => None,
        }
    }
}

fn name(graph: &NetworkGraph, id: StationId) -> &str {
    graph.stations().display_name(id).unwrap_or("?")
}

fn station_list(graph: &NetworkGraph, path: &Path) -> String {
    path.stations()
        .iter()
        .map(|&id| name(graph, id))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn print_route(planner: &RoutePlanner<'_>, path: &Path) {
    let graph = planner.graph();

    println!("From: {}", name(graph, path.source()));
    println!("To:   {}", name(graph, path.destination()));
    println!();
    println!("Route: {}", station_list(graph, path));
    println!();

    println!("Segments by line:");
    for segment in planner.line_segments(path) {
        println!(
            "  Line {}: {} -> {} ({} stops)",
            segment.line,
            name(graph, segment.from),
            name(graph, segment.to),
            segment.hops
        );
    }

    println!("Interchanges:");
    let interchanges = planner.interchanges(path);
    if interchanges.is_empty() {
        println!("  None");
    }
    for id in interchanges {
        let lines = graph.stations().lines(id).unwrap_or_default().join(", ");
        println!("  {} ({})", name(graph, id), lines);
    }

    println!("Total stops: {}", path.hops());
    println!();
}

fn print_stations(graph: &NetworkGraph) {
    println!("Station list (total: {})", graph.station_count());
    for (_, station) in graph.stations().iter() {
        println!(" - {station}");
    }
}

fn print_suggestions(planner: &RoutePlanner<'_>, raw: &str) -> usize {
    let graph = planner.graph();
    let matches = planner.suggest(raw);

    println!("Matches for \"{raw}\":");
    if matches.is_empty() {
        println!("  (no prefix matches)");
    }
    for &id in &matches {
        println!("  - {}", name(graph, id));
    }
    matches.len()
}
