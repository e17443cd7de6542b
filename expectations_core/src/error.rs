//! Error types for rule construction.

use thiserror::Error;

/// Malformed rule parameters, detected at construction time.
///
/// Construction-time errors are fatal to that one rule: the caller must not
/// add it to an expectation list. They are never deferred to evaluation.
#[derive(Debug, Error)]
pub enum InvalidRuleError {
    /// A membership or set-equality rule was given no values
    #[error("value set for column '{column}' must not be empty")]
    EmptyValueSet {
        /// Target column of the rejected rule
        column: String,
    },

    /// A bound rule's acceptable range is inverted
    #[error("bound range for column '{column}' is inverted: low {low} > high {high}")]
    InvertedRange {
        /// Target column of the rejected rule
        column: String,
        /// Lower end of the range
        low: f64,
        /// Upper end of the range
        high: f64,
    },

    /// A bound rule was given a NaN or infinite bound
    #[error("bound for column '{column}' must be finite, got {value}")]
    NonFiniteBound {
        /// Target column of the rejected rule
        column: String,
        /// The offending bound
        value: f64,
    },
}
