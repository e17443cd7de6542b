//! # Batch Quality Expectations — Core
//!
//! Core rule and result types for the Batch Quality Expectations engine.
//!
//! This crate defines the declarative side of the two-level validation
//! model: immutable per-column rules ("expectations"), the suites that
//! group them, and the tabular result format a validation round produces.
//! Evaluation itself lives in the `expectations_validator` crate; keeping
//! construction separate from execution lets the same rule set be replayed
//! against different batches.
//!
//! ## Key Concepts
//!
//! - **Expectation**: an immutable correctness rule over one column
//! - **ExpectationSuite**: a named, ordered list of expectations
//! - **ValidationTable**: positionally aligned per-rule outcomes, reusable
//!   as the input dataset of a meta-validation round
//! - **MetaVerdict**: the aggregate pass/fail outcome of that second round
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{Expectation, ExpectationSuite};
//!
//! let suite = ExpectationSuite::new("extract_checks")
//!     .with_expectation(
//!         Expectation::categorical_membership("smoker", ["yes", "no"]).unwrap(),
//!     )
//!     .with_expectation(Expectation::min_bound("age", 18.0, 25.0).unwrap());
//!
//! assert_eq!(suite.len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod result;
pub mod rule;

pub use builder::*;
pub use error::*;
pub use result::*;
pub use rule::*;
