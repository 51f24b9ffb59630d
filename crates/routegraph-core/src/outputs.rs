use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{Terminator, Writer, WriterBuilder};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{EDGES_FILE, NODES_FILE};
use crate::error::{PipelineError, Result};
use crate::transform::{Edge, Graph, Node};

/// Paths of the files written for one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub nodes: PathBuf,
    pub edges: PathBuf,
}

/// Creates `output_dir` (and parents) and writes `nodes.txt` and `edges.txt`
/// into it, replacing whatever was there.
pub fn write_graph(output_dir: &Path, graph: &Graph) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir).map_err(|err| PipelineError::io(output_dir, err))?;

    let paths = OutputPaths {
        nodes: output_dir.join(NODES_FILE),
        edges: output_dir.join(EDGES_FILE),
    };

    write_nodes(&paths.nodes, &graph.nodes)?;
    write_edges(&paths.edges, &graph.edges)?;

    Ok(paths)
}

pub fn write_nodes(path: &Path, nodes: &[Node]) -> Result<()> {
    write_rows(path, nodes)
}

pub fn write_edges(path: &Path, edges: &[Edge]) -> Result<()> {
    write_rows(path, edges)
}

/// Headerless, comma-separated, one record per `\n`-terminated line.
fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).map_err(|err| PipelineError::io(path, err))?;
    let mut writer = headerless_writer(file);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|err| PipelineError::io(path, err))?;

    if rows.is_empty() {
        warn!(path = %path.display(), "wrote empty output file");
    } else {
        info!(path = %path.display(), rows = rows.len(), "wrote output file");
    }
    Ok(())
}

fn headerless_writer(file: File) -> Writer<File> {
    WriterBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file)
}
