//! Collaborator traits for the ETL phases, plus the stamping transformer.
//!
//! The engine never performs I/O: where the data comes from, how it is
//! reshaped, and where it lands are caller concerns expressed through
//! these traits. Implementations are free to wrap a database read, a file,
//! or an in-memory table.

use chrono::Utc;
use expectations_validator::{DataSet, DataValue};

/// Supplies the raw tabular dataset to the first validation round.
pub trait Extractor {
    /// Produces one dataset snapshot (column-name → values, all columns
    /// equal length).
    fn extract(&mut self) -> anyhow::Result<DataSet>;
}

/// Reshapes the extracted dataset for loading.
pub trait Transformer {
    /// Consumes the input dataset and returns the transformed one.
    fn transform(&mut self, data: DataSet) -> anyhow::Result<DataSet>;
}

/// Consumes the transformed dataset after the caller has inspected the
/// round verdicts.
pub trait Loader {
    /// Writes the dataset to its destination.
    fn load(&mut self, data: &DataSet) -> anyhow::Result<()>;
}

/// Appends a sequential id column and a constant event-time column.
///
/// Feature stores key their rows on an entity id and an event timestamp;
/// this transformer stamps both onto an otherwise unkeyed extract. Ids
/// start at 1; the timestamp is taken once per run so every row of a run
/// shares it.
#[derive(Debug, Clone)]
pub struct StampTransformer {
    id_column: String,
    time_column: String,
}

impl StampTransformer {
    pub fn new(id_column: impl Into<String>, time_column: impl Into<String>) -> Self {
        Self {
            id_column: id_column.into(),
            time_column: time_column.into(),
        }
    }
}

impl Default for StampTransformer {
    fn default() -> Self {
        Self::new("unique_id", "event_time")
    }
}

impl Transformer for StampTransformer {
    fn transform(&mut self, mut data: DataSet) -> anyhow::Result<DataSet> {
        let rows = data.row_count();

        let ids: Vec<DataValue> = (1..=rows as i64).map(DataValue::Int).collect();
        let stamp = Utc::now().to_rfc3339();
        let times = vec![DataValue::Timestamp(stamp); rows];

        data.insert_column(self.id_column.as_str(), ids)?;
        data.insert_column(self.time_column.as_str(), times)?;
        Ok(data)
    }
}
