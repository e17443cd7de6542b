//! Batches: one dataset snapshot bound to an evaluation context.
//!
//! A batch is the unit of evaluation. It borrows the dataset read-only,
//! owns its caller-supplied [`EvaluationContext`], and exposes the single
//! `validate` entry point every rule kind goes through — whether the
//! column holds business data or validation outcomes.

use crate::{Column, DataSet, DataValue, EngineError};
use expectations_core::{Expectation, ExpectationKind, ObservedValue, Outcome, ValidationResult};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Caller-supplied context a batch is created under.
///
/// Scoped to one validation round; carries a round label and free-form
/// metadata for diagnostics. Purely local, no external session.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    label: String,
    metadata: HashMap<String, String>,
}

impl EvaluationContext {
    /// Creates a context labelled after its validation round
    /// (e.g. `"extract"`, `"transform"`, `"meta"`).
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            metadata: HashMap::new(),
        }
    }

    /// The round label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Adds metadata to the context.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }
}

/// One dataset snapshot wrapped as a unit of evaluation.
///
/// Creating a batch never mutates the dataset; the batch only answers
/// column-statistic queries over it. Batches are created fresh per
/// validation round and discarded after the round completes.
#[derive(Debug)]
pub struct Batch<'d> {
    data: &'d DataSet,
    context: EvaluationContext,
}

impl<'d> Batch<'d> {
    /// Wraps a dataset under a caller-supplied context.
    ///
    /// Fails with [`EngineError::EmptyDataset`] for a column-less dataset.
    /// A dataset with columns but zero rows is accepted: membership rules
    /// evaluate over an empty distinct set and bound rules degrade to
    /// failures (there is no minimum of nothing).
    pub fn new(data: &'d DataSet, context: EvaluationContext) -> Result<Self, EngineError> {
        if data.column_count() == 0 {
            return Err(EngineError::EmptyDataset);
        }
        debug!(
            round = context.label(),
            columns = data.column_count(),
            rows = data.row_count(),
            "batch created"
        );
        Ok(Self { data, context })
    }

    /// The context this batch was created under.
    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    /// The wrapped dataset.
    pub fn dataset(&self) -> &DataSet {
        self.data
    }

    /// Evaluates exactly one expectation against the wrapped dataset.
    ///
    /// Evaluation errors (absent column, no comparable values) degrade to
    /// a `Failure` result carrying the error text as its reason, so one
    /// bad rule never aborts the rest of a run.
    pub fn validate(&self, expectation: &Expectation) -> ValidationResult {
        match evaluate(self.data, expectation) {
            Ok((outcome, observed)) => {
                debug!(
                    round = self.context.label(),
                    expectation = %expectation,
                    outcome = outcome.as_token(),
                    observed = %observed,
                    "expectation evaluated"
                );
                ValidationResult::evaluated(expectation.clone(), outcome, observed)
            }
            Err(err) => {
                warn!(
                    round = self.context.label(),
                    expectation = %expectation,
                    error = %err,
                    "expectation degraded to failure"
                );
                ValidationResult::degraded(expectation.clone(), err.to_string())
            }
        }
    }
}

/// Evaluates one expectation against a dataset.
///
/// The one code path for "does this column satisfy this rule": each rule
/// kind maps to a statistic computation plus a comparison, selected by the
/// tagged variant.
pub fn evaluate(
    data: &DataSet,
    expectation: &Expectation,
) -> Result<(Outcome, ObservedValue), EngineError> {
    let column = data
        .column(expectation.column())
        .ok_or_else(|| EngineError::ColumnNotFound(expectation.column().to_string()))?;

    match expectation.kind() {
        ExpectationKind::CategoricalMembership { allowed_values } => {
            let distinct = distinct_values(column);
            let outcome = Outcome::from_bool(distinct.is_subset(allowed_values));
            Ok((outcome, ObservedValue::ValueSet(distinct)))
        }
        ExpectationKind::MinBound { low, high } => {
            let min = numeric_extremum(column, Extremum::Min)?;
            let outcome = Outcome::from_bool(*low <= min && min <= *high);
            Ok((outcome, ObservedValue::Number(min)))
        }
        ExpectationKind::MaxBound { low, high } => {
            let max = numeric_extremum(column, Extremum::Max)?;
            let outcome = Outcome::from_bool(*low <= max && max <= *high);
            Ok((outcome, ObservedValue::Number(max)))
        }
        ExpectationKind::SetEquality { expected_values } => {
            let distinct = distinct_values(column);
            let outcome = Outcome::from_bool(&distinct == expected_values);
            Ok((outcome, ObservedValue::ValueSet(distinct)))
        }
    }
}

/// The distinct-value set of a column. Nulls carry no token and are
/// excluded.
fn distinct_values(column: &Column) -> BTreeSet<String> {
    column
        .values()
        .iter()
        .filter_map(DataValue::as_token)
        .collect()
}

enum Extremum {
    Min,
    Max,
}

impl Extremum {
    fn statistic(&self) -> &'static str {
        match self {
            Extremum::Min => "minimum",
            Extremum::Max => "maximum",
        }
    }
}

/// Minimum or maximum over the column's non-null values.
///
/// A non-numeric value makes the statistic undefined; a column with no
/// non-null values has no extremum. Both are reported as errors for the
/// caller to degrade.
fn numeric_extremum(column: &Column, extremum: Extremum) -> Result<f64, EngineError> {
    let mut acc: Option<f64> = None;
    for value in column.values() {
        if value.is_null() {
            continue;
        }
        let v = value
            .as_float()
            .ok_or_else(|| EngineError::NonNumericValue {
                column: column.name().to_string(),
                type_name: value.type_name(),
                statistic: extremum.statistic(),
            })?;
        acc = Some(match acc {
            None => v,
            Some(current) => match extremum {
                Extremum::Min => current.min(v),
                Extremum::Max => current.max(v),
            },
        });
    }
    acc.ok_or_else(|| EngineError::NoValues {
        column: column.name().to_string(),
        statistic: extremum.statistic(),
    })
}
