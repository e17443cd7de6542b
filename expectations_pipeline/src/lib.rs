//! # Batch Quality Expectations — Pipeline
//!
//! The ETL adapter around the validation engine. The engine validates and
//! reports; this crate decides what a run looks like: extract a dataset,
//! validate it, transform it, optionally re-validate, and load it only if
//! the gate policy lets a failed verdict through.
//!
//! Collaborators (extraction, transformation, loading, reporting) are
//! trait objects the caller supplies; the only provided implementations
//! are the ones every feature-store run wants — id/event-time stamping
//! and tracing-backed reporting.
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{Expectation, ExpectationSuite};
//! use expectations_pipeline::{Extractor, Pipeline, StampTransformer, Loader};
//! use expectations_validator::{DataSet, DataValue};
//!
//! struct InMemoryExtractor;
//!
//! impl Extractor for InMemoryExtractor {
//!     fn extract(&mut self) -> anyhow::Result<DataSet> {
//!         Ok(DataSet::from_columns(vec![
//!             ("age", vec![DataValue::Int(19), DataValue::Int(24)]),
//!         ])?)
//!     }
//! }
//!
//! struct DiscardLoader;
//!
//! impl Loader for DiscardLoader {
//!     fn load(&mut self, _data: &DataSet) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let suite = ExpectationSuite::new("extract_checks")
//!     .with_expectation(Expectation::min_bound("age", 18.0, 25.0).unwrap());
//!
//! let mut pipeline = Pipeline::new(
//!     InMemoryExtractor,
//!     StampTransformer::default(),
//!     DiscardLoader,
//!     suite,
//! );
//!
//! let report = pipeline.run().unwrap();
//! assert!(report.passed());
//! assert!(report.loaded());
//! ```

mod error;
mod phases;
mod pipeline;
mod report;

pub use error::*;
pub use phases::*;
pub use pipeline::*;
pub use report::*;
