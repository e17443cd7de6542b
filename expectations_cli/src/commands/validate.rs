use anyhow::{Context, Result, anyhow, bail};
use expectations_parser::parse_file;
use expectations_validator::{
    Batch, DataSet, DataValue, EvaluationContext, MetaValidator, ValidationRunner,
};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(suite_path: &str, data_path: &str, format: &str) -> Result<()> {
    info!("Validating dataset: {}", data_path);
    info!("Suite: {}", suite_path);

    // Parse the suite file
    let suite = parse_file(Path::new(suite_path))
        .with_context(|| format!("Failed to parse suite file: {}", suite_path))?;

    output::print_info(&format!(
        "Suite loaded: {} ({} expectations)",
        suite.name(),
        suite.len()
    ));

    // Load the dataset
    let dataset = read_dataset(Path::new(data_path))?;
    output::print_info(&format!(
        "Dataset loaded: {} columns, {} rows",
        dataset.column_count(),
        dataset.row_count()
    ));

    // One batch per invocation; the context is scoped to this run
    let batch = Batch::new(&dataset, EvaluationContext::new("cli"))?;
    let table = ValidationRunner::new().run(&batch, suite.expectations());
    let verdict = MetaValidator::new().meta_validate(&table)?;

    output::print_validation_table(&table, verdict, format);

    if !verdict.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads a dataset from a JSON file shaped as an object of column arrays:
/// `{"age": [19, 33], "smoker": ["yes", "no"]}`.
fn read_dataset(path: &Path) -> Result<DataSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Dataset file is not valid JSON: {}", path.display()))?;

    let object = value
        .as_object()
        .ok_or_else(|| anyhow!("dataset file must be a JSON object of column arrays"))?;

    let mut dataset = DataSet::empty();
    for (name, column) in object {
        let array = column
            .as_array()
            .ok_or_else(|| anyhow!("column '{}' must be a JSON array", name))?;
        let values = array
            .iter()
            .map(|v| convert_value(name, v))
            .collect::<Result<Vec<DataValue>>>()?;
        dataset.insert_column(name.as_str(), values)?;
    }
    Ok(dataset)
}

fn convert_value(column: &str, value: &serde_json::Value) -> Result<DataValue> {
    match value {
        serde_json::Value::Null => Ok(DataValue::Null),
        serde_json::Value::Bool(b) => Ok(DataValue::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(DataValue::Int(i))
            } else {
                let f = n
                    .as_f64()
                    .ok_or_else(|| anyhow!("column '{}' holds a non-representable number", column))?;
                Ok(DataValue::Float(f))
            }
        }
        serde_json::Value::String(s) => Ok(DataValue::String(s.clone())),
        other => bail!(
            "column '{}' holds an unsupported JSON value: {}",
            column,
            other
        ),
    }
}
