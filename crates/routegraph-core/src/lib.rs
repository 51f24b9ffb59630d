pub mod config;
pub mod distance;
pub mod error;
pub mod outputs;
pub mod pipelines;
pub mod preview;
pub mod transform;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipelines::{run, PipelineOutput, PipelineSummary};
pub use transform::{build_graph, Edge, Graph, Node, TransformStats};
