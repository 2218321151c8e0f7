use std::process::ExitCode;

use route_graph::graph::{Graph, sample_triples};
use route_graph::planner::{RouteQuery, SearchConfig};
use route_graph::report::Report;
use tracing_subscriber::EnvFilter;

/// Output format, from `ROUTE_GRAPH_FORMAT` (`text` or `json`).
const FORMAT_VAR: &str = "ROUTE_GRAPH_FORMAT";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let json = match std::env::var(FORMAT_VAR).as_deref() {
        Ok("json") => true,
        Ok("text") | Err(_) => false,
        Ok(other) => {
            eprintln!("Unknown {FORMAT_VAR} {other:?}; expected \"text\" or \"json\"");
            return ExitCode::FAILURE;
        }
    };

    let graph = match Graph::from_triples(sample_triples()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to load graph: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = SearchConfig::default();
    let query = RouteQuery::new(&graph, &config);
    let report = Report::problem_set(&query);

    if json {
        match report.to_json() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{report}");
    }

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
