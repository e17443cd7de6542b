//! Validation outcomes and the tabular result format.
//!
//! One [`ValidationResult`] per evaluated expectation, assembled into a
//! [`ValidationTable`] whose rows stay positionally aligned with the input
//! expectation order. The table is itself consumable as input data for a
//! meta-validation round: its `results` column holds the outcome tokens a
//! second-order expectation evaluates.

use crate::Expectation;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Name of the label column when a result table is re-read as a dataset.
pub const EXPECTATIONS_COLUMN: &str = "expectations";

/// Name of the outcome-token column when a result table is re-read as a
/// dataset.
pub const RESULTS_COLUMN: &str = "results";

/// Outcome of evaluating one expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Maps a boolean comparison result onto an outcome.
    pub fn from_bool(passed: bool) -> Self {
        if passed {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    /// The canonical token stored in the results column.
    pub fn as_token(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Failure => "failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// The statistic a rule evaluation computed, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservedValue {
    /// A numeric statistic (column minimum or maximum)
    Number(f64),
    /// A distinct-value set statistic
    ValueSet(BTreeSet<String>),
}

impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservedValue::Number(n) => write!(f, "{}", n),
            ObservedValue::ValueSet(set) => {
                let values: Vec<&str> = set.iter().map(String::as_str).collect();
                write!(f, "{{{}}}", values.join(", "))
            }
        }
    }
}

/// The outcome of evaluating exactly one expectation against one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    expectation: Expectation,
    outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    observed: Option<ObservedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl ValidationResult {
    /// Creates a result from a completed rule evaluation.
    pub fn evaluated(expectation: Expectation, outcome: Outcome, observed: ObservedValue) -> Self {
        Self {
            expectation,
            outcome,
            observed: Some(observed),
            reason: None,
        }
    }

    /// Creates a failure result for an expectation whose evaluation could
    /// not complete (e.g. the referenced column is absent).
    ///
    /// The error degrades to a recorded failure so sibling expectations in
    /// the same run keep executing.
    pub fn degraded(expectation: Expectation, reason: impl Into<String>) -> Self {
        Self {
            expectation,
            outcome: Outcome::Failure,
            observed: None,
            reason: Some(reason.into()),
        }
    }

    pub fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn observed(&self) -> Option<&ObservedValue> {
        self.observed.as_ref()
    }

    /// Diagnostic reason attached to degraded failures.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// The two-column tabular result of one validation round.
///
/// Rows are positionally aligned with the input expectation order: row `i`
/// holds the outcome of expectation `i`. The label and outcome columns are
/// exposed separately so the table can be re-wrapped as a dataset for
/// meta-validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationTable {
    results: Vec<ValidationResult>,
}

impl ValidationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Vec::with_capacity(capacity),
        }
    }

    /// Appends a result, preserving run order.
    pub fn push(&mut self, result: ValidationResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ValidationResult> {
        self.results.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// The label column: one expectation label per row, in run order.
    pub fn labels(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| r.expectation().label())
            .collect()
    }

    /// The outcome column: one outcome per row, in run order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.results.iter().map(|r| r.outcome()).collect()
    }

    /// Number of rows whose outcome is a failure.
    pub fn failure_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| !r.outcome().is_success())
            .count()
    }
}

impl<'a> IntoIterator for &'a ValidationTable {
    type Item = &'a ValidationResult;
    type IntoIter = std::slice::Iter<'a, ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Aggregate outcome of a meta-validation round.
///
/// `Success` iff every entry in the validated table's results column is a
/// success token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaVerdict {
    Success,
    Failure,
}

impl MetaVerdict {
    pub fn is_success(&self) -> bool {
        matches!(self, MetaVerdict::Success)
    }
}

impl fmt::Display for MetaVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaVerdict::Success => f.write_str("success"),
            MetaVerdict::Failure => f.write_str("failure"),
        }
    }
}
