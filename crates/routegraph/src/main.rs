use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use routegraph_core::{pipelines, preview, PipelineConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build an airport route graph from airports.dat and routes.dat", long_about = None)]
struct Cli {
    /// TOML file with input_dir / output_dir / preview_rows
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding airports.dat and routes.dat
    #[arg(long)]
    input_dir: Option<PathBuf>,
    /// Directory nodes.txt and edges.txt are written to (created if missing)
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Rows of each table to print after the run
    #[arg(long)]
    preview_rows: Option<usize>,
    /// Print the run summary as JSON instead of a table
    #[arg(long)]
    summary_json: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<PipelineConfig> {
        let base = match &self.config {
            Some(path) => PipelineConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => PipelineConfig::default(),
        };
        let mut config = base
            .with_env_overrides()
            .context("invalid ROUTEGRAPH_* environment override")?;

        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(rows) = self.preview_rows {
            config.preview_rows = rows;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        "starting route graph build"
    );
    println!("Starting the graph build...");

    let output = pipelines::run(&config).with_context(|| {
        format!(
            "route graph build from {} failed",
            config.input_dir.display()
        )
    })?;
    println!("Data loaded and transformed successfully.");

    println!("Nodes:");
    println!("{}", preview::nodes_table(&output.graph.nodes, config.preview_rows));
    println!("Edges:");
    println!("{}", preview::edges_table(&output.graph.edges, config.preview_rows));

    if cli.summary_json {
        let json = serde_json::to_string_pretty(&output.summary)
            .context("failed to serialize run summary")?;
        println!("{json}");
    } else {
        println!("{}", preview::summary_table(&output.summary));
    }

    println!(
        "Wrote {} and {}",
        output.summary.outputs.nodes.display(),
        output.summary.outputs.edges.display()
    );

    Ok(())
}
