//! Parser for expectation suite files (YAML/TOML formats).
//!
//! A suite file names the suite and lists its rules in run order. Parsed
//! rules go through the rule builder, so a file carrying malformed
//! parameters (an empty allowed-value set, an inverted bound range) fails
//! at parse time rather than surfacing later during evaluation.
//!
//! # Example
//!
//! ```rust
//! use expectations_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: extract_checks
//! expectations:
//!   - column: smoker
//!     rule:
//!       type: categorical_membership
//!       allowed_values: ["yes", "no"]
//!   - column: age
//!     label: min_age_exp
//!     rule:
//!       type: min_bound
//!       low: 18.0
//!       high: 25.0
//! "#;
//!
//! let suite = parse_yaml(yaml).expect("Failed to parse suite");
//! assert_eq!(suite.name(), "extract_checks");
//! assert_eq!(suite.len(), 2);
//! ```

use expectations_core::{Expectation, ExpectationSuite, InvalidRuleError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during suite parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// A rule in the file carries malformed parameters
    #[error(transparent)]
    InvalidRule(#[from] InvalidRuleError),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported suite file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Raw file shape; rules are rebuilt through the validated constructors.
#[derive(Debug, Deserialize)]
struct SuiteDoc {
    name: String,
    expectations: Vec<ExpectationDoc>,
}

#[derive(Debug, Deserialize)]
struct ExpectationDoc {
    column: String,
    #[serde(default)]
    label: Option<String>,
    rule: RuleDoc,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RuleDoc {
    CategoricalMembership { allowed_values: Vec<String> },
    MinBound { low: f64, high: f64 },
    MaxBound { low: f64, high: f64 },
    SetEquality { expected_values: Vec<String> },
}

impl ExpectationDoc {
    fn build(self) -> std::result::Result<Expectation, InvalidRuleError> {
        let expectation = match self.rule {
            RuleDoc::CategoricalMembership { allowed_values } => {
                Expectation::categorical_membership(self.column, allowed_values)?
            }
            RuleDoc::MinBound { low, high } => Expectation::min_bound(self.column, low, high)?,
            RuleDoc::MaxBound { low, high } => Expectation::max_bound(self.column, low, high)?,
            RuleDoc::SetEquality { expected_values } => {
                Expectation::set_equality(self.column, expected_values)?
            }
        };
        Ok(match self.label {
            Some(label) => expectation.with_label(label),
            None => expectation,
        })
    }
}

fn build_suite(doc: SuiteDoc) -> Result<ExpectationSuite> {
    let mut suite = ExpectationSuite::new(doc.name);
    for expectation in doc.expectations {
        suite.push(expectation.build()?);
    }
    Ok(suite)
}

/// Parse an expectation suite from a YAML string.
pub fn parse_yaml(content: &str) -> Result<ExpectationSuite> {
    let doc: SuiteDoc = serde_yaml_ng::from_str(content)?;
    build_suite(doc)
}

/// Parse an expectation suite from a TOML string.
pub fn parse_toml(content: &str) -> Result<ExpectationSuite> {
    let doc: SuiteDoc =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    build_suite(doc)
}

/// Detect the suite format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SuiteFormat::Yaml`
/// * `.toml` → `SuiteFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not
/// recognized.
pub fn detect_format(path: &Path) -> Result<SuiteFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(SuiteFormat::Yaml),
        "toml" => Ok(SuiteFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse an expectation suite from a file with automatic format detection.
///
/// The format is determined by the file extension:
/// - `.yaml`, `.yml` → parsed as YAML
/// - `.toml` → parsed as TOML
///
/// # Example
///
/// ```no_run
/// use expectations_parser::parse_file;
/// use std::path::Path;
///
/// let suite = parse_file(Path::new("suites/extract_checks.yml")).unwrap();
/// println!("Loaded suite: {}", suite.name());
/// ```
pub fn parse_file(path: &Path) -> Result<ExpectationSuite> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        SuiteFormat::Yaml => parse_yaml(&content),
        SuiteFormat::Toml => parse_toml(&content),
    }
}
