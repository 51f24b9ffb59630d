use std::fs;
use std::path::{Path, PathBuf};

use routegraph_parser::{clean_file, load_routes, parse_airports};
use serde::Serialize;
use tracing::info;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::outputs::{write_graph, OutputPaths};
use crate::transform::{build_graph, Graph, TransformStats};

/// Per-run report: input fingerprints, step counters and where the graph went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    pub input_dir: PathBuf,
    pub airports_hash: String,
    pub routes_hash: String,
    #[serde(flatten)]
    pub stats: TransformStats,
    pub nodes: usize,
    pub edges: usize,
    pub outputs: OutputPaths,
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub graph: Graph,
    pub summary: PipelineSummary,
}

/// Clean, load, transform and write, in that order. Any failure aborts the
/// run before the next stage starts.
pub fn run(config: &PipelineConfig) -> Result<PipelineOutput> {
    let airports_path = config.airports_path();
    let routes_path = config.routes_path();

    info!(path = %airports_path.display(), "cleaning airports");
    let cleaned = clean_file(&airports_path)?;
    let airports = parse_airports(&cleaned)?;
    info!(count = airports.len(), "loaded airports");

    let routes = load_routes(&routes_path)?;
    info!(count = routes.len(), "loaded routes");

    let airports_hash = fingerprint(&airports_path)?;
    let routes_hash = fingerprint(&routes_path)?;

    let (graph, stats) = build_graph(&airports, &routes);
    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        unknown_source = stats.unknown_source,
        unknown_destination = stats.unknown_destination,
        "built route graph"
    );

    let outputs = write_graph(&config.output_dir, &graph)?;

    let summary = PipelineSummary {
        input_dir: config.input_dir.clone(),
        airports_hash,
        routes_hash,
        stats,
        nodes: graph.nodes.len(),
        edges: graph.edges.len(),
        outputs,
    };

    Ok(PipelineOutput { graph, summary })
}

fn fingerprint(path: &Path) -> Result<String> {
    let contents = fs::read(path).map_err(|err| PipelineError::io(path, err))?;
    Ok(blake3::hash(&contents).to_hex().to_string())
}
