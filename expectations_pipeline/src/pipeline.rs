//! Pipeline orchestration: extract → validate → transform → validate → load.
//!
//! The pipeline is the adapter between the collaborators and the engine.
//! It creates a fresh batch per round, replays the round's suite, runs the
//! meta-validation pass, and applies the gate policy to the verdict. The
//! engine itself never gates the load; that decision lives here, with the
//! caller's policy.

use crate::{Extractor, Loader, PipelineError, ReportSink, RoundReport, TracingSink, Transformer};
use expectations_core::ExpectationSuite;
use expectations_validator::{Batch, DataSet, EvaluationContext, MetaValidator, ValidationRunner};
use tracing::{info, warn};

/// What the pipeline does with a failed round verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePolicy {
    /// Stop the run after a failed round; the load never happens.
    #[default]
    HaltOnFailure,
    /// Record the verdict and keep going; the caller inspects the report.
    ProceedAndReport,
}

/// The assembled outcome of one pipeline run.
#[derive(Debug)]
pub struct RunReport {
    rounds: Vec<RoundReport>,
    loaded: bool,
}

impl RunReport {
    /// Reports for each validation round that ran, in order.
    pub fn rounds(&self) -> &[RoundReport] {
        &self.rounds
    }

    /// True if every round's verdict was successful.
    pub fn passed(&self) -> bool {
        self.rounds.iter().all(|r| r.verdict().is_success())
    }

    /// True if the load phase ran.
    pub fn loaded(&self) -> bool {
        self.loaded
    }
}

/// Wires the ETL collaborators around the validation engine.
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
    extract_suite: ExpectationSuite,
    transform_suite: Option<ExpectationSuite>,
    policy: GatePolicy,
    sink: Box<dyn ReportSink>,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer,
    L: Loader,
{
    /// Builds a pipeline validating the raw extract against `extract_suite`.
    ///
    /// Defaults: no post-transform round, [`GatePolicy::HaltOnFailure`],
    /// reports logged through [`TracingSink`].
    pub fn new(extractor: E, transformer: T, loader: L, extract_suite: ExpectationSuite) -> Self {
        Self {
            extractor,
            transformer,
            loader,
            extract_suite,
            transform_suite: None,
            policy: GatePolicy::default(),
            sink: Box::new(TracingSink),
        }
    }

    /// Re-validates the transformed dataset against `suite` before loading.
    pub fn with_transform_suite(mut self, suite: ExpectationSuite) -> Self {
        self.transform_suite = Some(suite);
        self
    }

    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn ReportSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Runs the full workflow.
    ///
    /// Collaborator failures abort with a phase-tagged error. Failed
    /// quality verdicts are not errors: under `HaltOnFailure` the run ends
    /// early with `loaded == false`, under `ProceedAndReport` it carries
    /// on; either way the caller gets the round reports.
    pub fn run(&mut self) -> Result<RunReport, PipelineError> {
        info!("starting pipeline run");
        let raw = self.extractor.extract().map_err(PipelineError::Extract)?;
        info!(
            rows = raw.row_count(),
            columns = raw.column_count(),
            "extract phase complete"
        );

        let mut rounds = Vec::new();

        let round = run_round("extract", &raw, &self.extract_suite)?;
        self.sink.report(&round);
        let halt = self.policy == GatePolicy::HaltOnFailure && !round.verdict().is_success();
        rounds.push(round);
        if halt {
            warn!(round = "extract", "gate closed, skipping transform and load");
            return Ok(RunReport {
                rounds,
                loaded: false,
            });
        }

        let transformed = self
            .transformer
            .transform(raw)
            .map_err(PipelineError::Transform)?;
        info!(
            rows = transformed.row_count(),
            columns = transformed.column_count(),
            "transform phase complete"
        );

        if let Some(suite) = &self.transform_suite {
            let round = run_round("transform", &transformed, suite)?;
            self.sink.report(&round);
            let halt = self.policy == GatePolicy::HaltOnFailure && !round.verdict().is_success();
            rounds.push(round);
            if halt {
                warn!(round = "transform", "gate closed, skipping load");
                return Ok(RunReport {
                    rounds,
                    loaded: false,
                });
            }
        }

        self.loader
            .load(&transformed)
            .map_err(PipelineError::Load)?;
        info!("load phase complete");

        Ok(RunReport {
            rounds,
            loaded: true,
        })
    }
}

/// One validation round: fresh batch, full suite, meta-validation pass.
fn run_round(
    label: &str,
    data: &DataSet,
    suite: &ExpectationSuite,
) -> Result<RoundReport, PipelineError> {
    let batch = Batch::new(data, EvaluationContext::new(label))?;
    let table = ValidationRunner::new().run(&batch, suite.expectations());
    let verdict = MetaValidator::new().meta_validate(&table)?;
    Ok(RoundReport::new(label, verdict, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectations_core::{Expectation, MetaVerdict};
    use expectations_validator::DataValue;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StaticExtractor(DataSet);

    impl Extractor for StaticExtractor {
        fn extract(&mut self) -> anyhow::Result<DataSet> {
            Ok(self.0.clone())
        }
    }

    struct PassthroughTransformer;

    impl Transformer for PassthroughTransformer {
        fn transform(&mut self, data: DataSet) -> anyhow::Result<DataSet> {
            Ok(data)
        }
    }

    #[derive(Default, Clone)]
    struct RecordingLoader {
        loads: Rc<RefCell<usize>>,
    }

    impl Loader for RecordingLoader {
        fn load(&mut self, _data: &DataSet) -> anyhow::Result<()> {
            *self.loads.borrow_mut() += 1;
            Ok(())
        }
    }

    fn extract_data() -> DataSet {
        DataSet::from_columns(vec![
            ("smoker", vec!["yes".into(), "no".into()]),
            ("age", vec![DataValue::Int(19), DataValue::Int(24)]),
        ])
        .unwrap()
    }

    fn passing_suite() -> ExpectationSuite {
        ExpectationSuite::new("extract_checks")
            .with_expectation(Expectation::categorical_membership("smoker", ["yes", "no"]).unwrap())
            .with_expectation(Expectation::min_bound("age", 18.0, 25.0).unwrap())
    }

    fn failing_suite() -> ExpectationSuite {
        ExpectationSuite::new("extract_checks")
            .with_expectation(Expectation::min_bound("age", 21.0, 25.0).unwrap())
    }

    #[test]
    fn test_clean_run_loads() {
        let loader = RecordingLoader::default();
        let loads = loader.loads.clone();
        let mut pipeline = Pipeline::new(
            StaticExtractor(extract_data()),
            PassthroughTransformer,
            loader,
            passing_suite(),
        );

        let report = pipeline.run().unwrap();
        assert!(report.passed());
        assert!(report.loaded());
        assert_eq!(report.rounds().len(), 1);
        assert_eq!(*loads.borrow(), 1);
    }

    #[test]
    fn test_gate_halts_load_on_failed_round() {
        let loader = RecordingLoader::default();
        let loads = loader.loads.clone();
        let mut pipeline = Pipeline::new(
            StaticExtractor(extract_data()),
            PassthroughTransformer,
            loader,
            failing_suite(),
        );

        let report = pipeline.run().unwrap();
        assert!(!report.passed());
        assert!(!report.loaded());
        assert_eq!(report.rounds()[0].verdict(), MetaVerdict::Failure);
        assert_eq!(*loads.borrow(), 0);
    }

    #[test]
    fn test_proceed_policy_loads_despite_failure() {
        let loader = RecordingLoader::default();
        let loads = loader.loads.clone();
        let mut pipeline = Pipeline::new(
            StaticExtractor(extract_data()),
            PassthroughTransformer,
            loader,
            failing_suite(),
        )
        .with_policy(GatePolicy::ProceedAndReport);

        let report = pipeline.run().unwrap();
        assert!(!report.passed());
        assert!(report.loaded());
        assert_eq!(*loads.borrow(), 1);
    }

    #[test]
    fn test_transform_round_sees_stamped_columns() {
        let transform_suite = ExpectationSuite::new("transform_checks")
            .with_expectation(Expectation::min_bound("unique_id", 1.0, 1.0).unwrap())
            .with_expectation(Expectation::max_bound("unique_id", 2.0, 2.0).unwrap());

        let loader = RecordingLoader::default();
        let loads = loader.loads.clone();
        let mut pipeline = Pipeline::new(
            StaticExtractor(extract_data()),
            crate::StampTransformer::default(),
            loader,
            passing_suite(),
        )
        .with_transform_suite(transform_suite);

        let report = pipeline.run().unwrap();
        assert!(report.passed());
        assert_eq!(report.rounds().len(), 2);
        assert_eq!(report.rounds()[1].round(), "transform");
        assert_eq!(*loads.borrow(), 1);
    }

    #[test]
    fn test_extract_failure_is_phase_tagged() {
        struct FailingExtractor;
        impl Extractor for FailingExtractor {
            fn extract(&mut self) -> anyhow::Result<DataSet> {
                anyhow::bail!("connection refused")
            }
        }

        let mut pipeline = Pipeline::new(
            FailingExtractor,
            PassthroughTransformer,
            RecordingLoader::default(),
            passing_suite(),
        );

        let err = pipeline.run().unwrap_err();
        assert!(matches!(err, PipelineError::Extract(_)));
        assert!(err.to_string().contains("extract phase failed"));
    }

    #[test]
    fn test_column_less_extract_is_fatal() {
        let mut pipeline = Pipeline::new(
            StaticExtractor(DataSet::empty()),
            PassthroughTransformer,
            RecordingLoader::default(),
            passing_suite(),
        );

        let err = pipeline.run().unwrap_err();
        assert!(matches!(err, PipelineError::Engine(_)));
    }

    #[test]
    fn test_sink_receives_each_round() {
        #[derive(Default)]
        struct CountingSink(Rc<RefCell<Vec<String>>>);
        impl ReportSink for CountingSink {
            fn report(&mut self, report: &RoundReport) {
                self.0.borrow_mut().push(report.round().to_string());
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = Pipeline::new(
            StaticExtractor(extract_data()),
            PassthroughTransformer,
            RecordingLoader::default(),
            passing_suite(),
        )
        .with_transform_suite(passing_suite())
        .with_sink(Box::new(CountingSink(seen.clone())));

        pipeline.run().unwrap();
        assert_eq!(*seen.borrow(), vec!["extract", "transform"]);
    }
}
