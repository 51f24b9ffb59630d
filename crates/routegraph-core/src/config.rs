use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

pub const DEFAULT_INPUT_DIR: &str = "input_data";
pub const DEFAULT_OUTPUT_DIR: &str = "cleaned_data";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

pub const AIRPORTS_FILE: &str = "airports.dat";
pub const ROUTES_FILE: &str = "routes.dat";
pub const NODES_FILE: &str = "nodes.txt";
pub const EDGES_FILE: &str = "edges.txt";

pub const ENV_INPUT_DIR: &str = "ROUTEGRAPH_INPUT_DIR";
pub const ENV_OUTPUT_DIR: &str = "ROUTEGRAPH_OUTPUT_DIR";
pub const ENV_PREVIEW_ROWS: &str = "ROUTEGRAPH_PREVIEW_ROWS";

/// Where a run reads its `.dat` inputs and writes the graph files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl PipelineConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Keys left out of the document keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| {
            PipelineError::Config(format!(
                "failed to read config file '{}': {err}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Overrides fields from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Overrides fields from an arbitrary lookup, so callers can substitute
    /// the environment.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_INPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(rows) = lookup(ENV_PREVIEW_ROWS) {
            self.preview_rows = rows.trim().parse().map_err(|err| {
                PipelineError::Config(format!("{ENV_PREVIEW_ROWS}='{rows}' is not a row count: {err}"))
            })?;
        }
        Ok(self)
    }

    pub fn airports_path(&self) -> PathBuf {
        self.input_dir.join(AIRPORTS_FILE)
    }

    pub fn routes_path(&self) -> PathBuf {
        self.input_dir.join(ROUTES_FILE)
    }

    pub fn nodes_path(&self) -> PathBuf {
        self.output_dir.join(NODES_FILE)
    }

    pub fn edges_path(&self) -> PathBuf {
        self.output_dir.join(EDGES_FILE)
    }
}
