//! Validation runner: executes an ordered expectation list against a batch.

use crate::Batch;
use expectations_core::{Expectation, ValidationTable};
use tracing::info;

/// Runs expectations against a batch, in order, with failure isolation.
///
/// Every expectation is evaluated regardless of earlier outcomes — a
/// failing rule never stops later ones from running, and a rule whose
/// evaluation errors (absent column) occupies its slot as a degraded
/// failure. The output table is positionally aligned with the input list.
#[derive(Debug, Default)]
pub struct ValidationRunner;

impl ValidationRunner {
    /// Creates a new runner.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates `expectations` against `batch`, producing one result row
    /// per expectation in input order.
    pub fn run(&self, batch: &Batch<'_>, expectations: &[Expectation]) -> ValidationTable {
        let mut table = ValidationTable::with_capacity(expectations.len());

        for expectation in expectations {
            table.push(batch.validate(expectation));
        }

        info!(
            round = batch.context().label(),
            total = table.len(),
            failures = table.failure_count(),
            "validation round complete"
        );
        table
    }
}
