//! Meta-validation: validating the validation results themselves.
//!
//! The result table of a round is re-wrapped as a dataset and fed through
//! the same batch machinery, under a single aggregate rule: the distinct
//! values of its results column must equal exactly the success token.
//! Keeping one evaluation code path for "does this column satisfy this
//! rule" is the point — the column holding rule outcomes is not special.

use crate::{Batch, DataSet, DataValue, EngineError, EvaluationContext};
use expectations_core::{
    EXPECTATIONS_COLUMN, Expectation, MetaVerdict, Outcome, RESULTS_COLUMN, ValidationTable,
};
use tracing::{debug, info};

/// Computes the aggregate verdict over a round's validation table.
#[derive(Debug, Default)]
pub struct MetaValidator;

impl MetaValidator {
    /// Creates a new meta-validator.
    pub fn new() -> Self {
        Self
    }

    /// Re-wraps `table` as a batch and applies the aggregate rule.
    ///
    /// An empty table (zero expectations ran) is vacuously successful;
    /// this is a deliberate policy, not a property of the aggregate rule,
    /// which would otherwise reject the empty distinct set.
    pub fn meta_validate(&self, table: &ValidationTable) -> Result<MetaVerdict, EngineError> {
        if table.is_empty() {
            debug!("empty validation table, vacuously successful");
            return Ok(MetaVerdict::Success);
        }

        let dataset = table_to_dataset(table)?;
        let batch = Batch::new(&dataset, EvaluationContext::new("meta"))?;
        let aggregate =
            Expectation::set_equality(RESULTS_COLUMN, [Outcome::Success.as_token()])?;
        let result = batch.validate(&aggregate);

        let verdict = if result.outcome().is_success() {
            MetaVerdict::Success
        } else {
            MetaVerdict::Failure
        };
        info!(
            rows = table.len(),
            failures = table.failure_count(),
            verdict = %verdict,
            "meta-validation complete"
        );
        Ok(verdict)
    }
}

/// Lowers a validation table into the two-column dataset the meta round
/// evaluates: expectation labels and outcome tokens, positionally aligned.
pub fn table_to_dataset(table: &ValidationTable) -> Result<DataSet, EngineError> {
    let labels: Vec<DataValue> = table
        .labels()
        .into_iter()
        .map(DataValue::String)
        .collect();
    let outcomes: Vec<DataValue> = table
        .outcomes()
        .into_iter()
        .map(|o| DataValue::String(o.as_token().to_string()))
        .collect();

    DataSet::from_columns(vec![
        (EXPECTATIONS_COLUMN, labels),
        (RESULTS_COLUMN, outcomes),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectations_core::{ObservedValue, ValidationResult};
    use pretty_assertions::assert_eq;

    fn table_from_outcomes(outcomes: &[Outcome]) -> ValidationTable {
        let mut table = ValidationTable::new();
        for (i, outcome) in outcomes.iter().enumerate() {
            let exp = Expectation::min_bound("age", 0.0, 100.0)
                .unwrap()
                .with_label(format!("exp_{}", i));
            table.push(ValidationResult::evaluated(
                exp,
                *outcome,
                ObservedValue::Number(0.0),
            ));
        }
        table
    }

    #[test]
    fn test_all_success_gives_success() {
        let table = table_from_outcomes(&[Outcome::Success, Outcome::Success, Outcome::Success]);
        let verdict = MetaValidator::new().meta_validate(&table).unwrap();
        assert_eq!(verdict, MetaVerdict::Success);
    }

    #[test]
    fn test_single_failure_gives_failure() {
        let table = table_from_outcomes(&[Outcome::Success, Outcome::Success, Outcome::Failure]);
        let verdict = MetaValidator::new().meta_validate(&table).unwrap();
        assert_eq!(verdict, MetaVerdict::Failure);
    }

    #[test]
    fn test_one_failure_among_many_successes() {
        let mut outcomes = vec![Outcome::Success; 10];
        outcomes[4] = Outcome::Failure;
        let verdict = MetaValidator::new()
            .meta_validate(&table_from_outcomes(&outcomes))
            .unwrap();
        assert_eq!(verdict, MetaVerdict::Failure);
    }

    #[test]
    fn test_all_failure_gives_failure() {
        let table = table_from_outcomes(&[Outcome::Failure, Outcome::Failure]);
        let verdict = MetaValidator::new().meta_validate(&table).unwrap();
        assert_eq!(verdict, MetaVerdict::Failure);
    }

    #[test]
    fn test_empty_table_is_vacuously_successful() {
        let verdict = MetaValidator::new()
            .meta_validate(&ValidationTable::new())
            .unwrap();
        assert_eq!(verdict, MetaVerdict::Success);
    }

    #[test]
    fn test_table_lowers_to_aligned_columns() {
        let table = table_from_outcomes(&[Outcome::Success, Outcome::Failure]);
        let dataset = table_to_dataset(&table).unwrap();

        assert_eq!(dataset.column_count(), 2);
        assert_eq!(dataset.row_count(), 2);

        let results = dataset.column(RESULTS_COLUMN).unwrap();
        assert_eq!(
            results.values(),
            &[
                DataValue::String("success".to_string()),
                DataValue::String("failure".to_string())
            ]
        );
        let labels = dataset.column(EXPECTATIONS_COLUMN).unwrap();
        assert_eq!(labels.values()[0], DataValue::String("exp_0".to_string()));
    }
}
