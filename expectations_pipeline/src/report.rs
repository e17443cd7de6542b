//! Reporting surface for validation rounds.

use expectations_core::{MetaVerdict, ValidationTable};
use serde::Serialize;
use tracing::{info, warn};

/// The outcome of one validation round: the full result table plus the
/// aggregate verdict of its meta-validation pass.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    round: String,
    verdict: MetaVerdict,
    table: ValidationTable,
}

impl RoundReport {
    pub fn new(round: impl Into<String>, verdict: MetaVerdict, table: ValidationTable) -> Self {
        Self {
            round: round.into(),
            verdict,
            table,
        }
    }

    /// The round label (`"extract"`, `"transform"`).
    pub fn round(&self) -> &str {
        &self.round
    }

    pub fn verdict(&self) -> MetaVerdict {
        self.verdict
    }

    pub fn table(&self) -> &ValidationTable {
        &self.table
    }
}

/// Receives round reports as structured values.
///
/// Formatting is the sink's concern; the engine and pipeline only emit
/// values. The default [`TracingSink`] logs them.
pub trait ReportSink {
    fn report(&mut self, report: &RoundReport);
}

/// Logs each round through `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&mut self, report: &RoundReport) {
        if report.verdict().is_success() {
            info!(
                round = report.round(),
                expectations = report.table().len(),
                "data quality checks all passed"
            );
        } else {
            warn!(
                round = report.round(),
                expectations = report.table().len(),
                failures = report.table().failure_count(),
                "not all data quality checks passed"
            );
            for result in report.table() {
                if !result.outcome().is_success() {
                    warn!(
                        round = report.round(),
                        expectation = %result.expectation(),
                        reason = result.reason().unwrap_or("statistic outside expected range"),
                        "failed expectation"
                    );
                }
            }
        }
    }
}
