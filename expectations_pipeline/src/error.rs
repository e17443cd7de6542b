//! Error types for pipeline runs.

use expectations_validator::EngineError;
use thiserror::Error;

/// Errors surfaced by a pipeline run.
///
/// Collaborator failures keep their phase so a failed run names the stage
/// that broke, not just the underlying cause.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The extractor failed to produce a dataset
    #[error("extract phase failed: {0}")]
    Extract(#[source] anyhow::Error),

    /// The transformer failed
    #[error("transform phase failed: {0}")]
    Transform(#[source] anyhow::Error),

    /// The loader failed
    #[error("load phase failed: {0}")]
    Load(#[source] anyhow::Error),

    /// A validation round hit a structural problem (column-less dataset)
    #[error(transparent)]
    Engine(#[from] EngineError),
}
