//! Expectation types: declarative correctness rules over a single column.
//!
//! An `Expectation` pairs a target column name with an `ExpectationKind`,
//! the tagged rule variant that drives evaluation. Expectations are built
//! once through the constructors in [`crate::builder`], are immutable
//! afterwards, and carry no evaluation logic themselves.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// The rule variants an expectation can carry.
///
/// Each variant maps to one statistic-computation + comparison procedure in
/// the evaluation engine. The enum is the single extension point for new
/// rule kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpectationKind {
    /// Every distinct value in the column must be a member of the set.
    ///
    /// The column may use only a subset of the allowed values.
    CategoricalMembership {
        /// Values the column is allowed to contain
        allowed_values: BTreeSet<String>,
    },

    /// The column's minimum value must fall within `[low, high]`.
    MinBound {
        /// Lower bound for the observed minimum (inclusive)
        low: f64,
        /// Upper bound for the observed minimum (inclusive)
        high: f64,
    },

    /// The column's maximum value must fall within `[low, high]`.
    MaxBound {
        /// Lower bound for the observed maximum (inclusive)
        low: f64,
        /// Upper bound for the observed maximum (inclusive)
        high: f64,
    },

    /// The column's distinct values must equal the set exactly.
    ///
    /// Stricter than membership: unexpected extra values and missing
    /// expected values both fail. This is the rule the meta-validation
    /// round applies to the results column.
    SetEquality {
        /// The exact distinct-value set the column must exhibit
        expected_values: BTreeSet<String>,
    },
}

impl ExpectationKind {
    /// Returns the rule kind's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            ExpectationKind::CategoricalMembership { .. } => "categorical_membership",
            ExpectationKind::MinBound { .. } => "min_bound",
            ExpectationKind::MaxBound { .. } => "max_bound",
            ExpectationKind::SetEquality { .. } => "set_equality",
        }
    }
}

/// An immutable rule descriptor bound to one column.
///
/// Construction is separated from execution so the same rule set can be
/// replayed against different batches (raw extract, post-transform data,
/// or a table of validation outcomes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expectation {
    pub(crate) column: String,
    pub(crate) kind: ExpectationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<String>,
}

impl Expectation {
    /// The name of the column this expectation targets.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The rule variant.
    pub fn kind(&self) -> &ExpectationKind {
        &self.kind
    }

    /// The label used to identify this expectation in result tables.
    ///
    /// Falls back to a derived `kind(column)` label when no user label
    /// was attached.
    pub fn label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}({})", self.kind.name(), self.column),
        }
    }

    /// Attaches a user-defined label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
