//! # Batch Quality Expectations — Validator
//!
//! Evaluation engine for the Batch Quality Expectations workflow. This
//! crate provides the execution side of the two-level validation model:
//!
//! - Columnar datasets ([`DataSet`], [`DataValue`])
//! - Batches binding one snapshot to an evaluation context ([`Batch`])
//! - Ordered rule execution with failure isolation ([`ValidationRunner`])
//! - The second-order pass over the results table ([`MetaValidator`])
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::Expectation;
//! use expectations_validator::{
//!     Batch, DataSet, DataValue, EvaluationContext, MetaValidator, ValidationRunner,
//! };
//!
//! let dataset = DataSet::from_columns(vec![
//!     ("smoker", vec!["yes".into(), "no".into()]),
//!     ("age", vec![DataValue::Int(19), DataValue::Int(31)]),
//! ])
//! .unwrap();
//!
//! let batch = Batch::new(&dataset, EvaluationContext::new("extract")).unwrap();
//! let expectations = vec![
//!     Expectation::categorical_membership("smoker", ["yes", "no"]).unwrap(),
//!     Expectation::min_bound("age", 18.0, 25.0).unwrap(),
//! ];
//!
//! let table = ValidationRunner::new().run(&batch, &expectations);
//! let verdict = MetaValidator::new().meta_validate(&table).unwrap();
//! assert!(verdict.is_success());
//! ```

mod batch;
mod dataset;
mod error;
mod meta;
mod runner;

pub use batch::*;
pub use dataset::*;
pub use error::*;
pub use meta::*;
pub use runner::*;
