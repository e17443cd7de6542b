//! Error types for batch evaluation.

use expectations_core::InvalidRuleError;
use thiserror::Error;

/// Errors that can occur while building datasets or evaluating batches.
///
/// Structural errors (`EmptyDataset`, `RaggedColumn`, `DuplicateColumn`)
/// are fatal to the whole run. Evaluation errors (`ColumnNotFound`,
/// `NonNumericValue`, `NoValues`) are scoped to one expectation and degrade
/// to a recorded failure inside [`crate::Batch::validate`], so sibling
/// expectations keep running.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Dataset has no columns at all
    #[error("dataset has no columns")]
    EmptyDataset,

    /// A column's length disagrees with the rest of the dataset
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    /// An expectation references a column absent from the batch
    #[error("column '{0}' not found in batch")]
    ColumnNotFound(String),

    /// A bound rule hit a value no minimum/maximum can be computed over
    #[error("column '{column}' holds a {type_name} value, cannot compute {statistic}")]
    NonNumericValue {
        column: String,
        type_name: &'static str,
        statistic: &'static str,
    },

    /// A bound rule found no non-null values to compare
    #[error("column '{column}' has no values to compute {statistic}")]
    NoValues {
        column: String,
        statistic: &'static str,
    },

    /// Rule construction failed inside the engine (meta-validation builds
    /// its own aggregate rule)
    #[error(transparent)]
    InvalidRule(#[from] InvalidRuleError),
}
