//! Columnar dataset representation.
//!
//! Datasets are column-oriented because every rule kind is a per-column
//! statistic: the batch answers "minimum of `age`" or "distinct values of
//! `smoker`" without ever materializing rows. All columns are equal length;
//! ragged input is rejected at construction.

use crate::EngineError;

/// A value in a dataset column.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Timestamp value (RFC 3339 string)
    Timestamp(String),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::String(_) => "string",
            DataValue::Int(_) => "int64",
            DataValue::Float(_) => "float64",
            DataValue::Bool(_) => "boolean",
            DataValue::Timestamp(_) => "timestamp",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float. Integers widen losslessly
    /// enough for statistic comparison.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The canonical token used when a value joins a distinct-value set.
    ///
    /// Null has no token: nulls never contribute to distinct sets.
    pub fn as_token(&self) -> Option<String> {
        match self {
            DataValue::Null => None,
            DataValue::String(s) => Some(s.clone()),
            DataValue::Int(i) => Some(i.to_string()),
            DataValue::Float(f) => Some(f.to_string()),
            DataValue::Bool(b) => Some(b.to_string()),
            DataValue::Timestamp(ts) => Some(ts.clone()),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

/// A named column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<DataValue>,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[DataValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A column-oriented tabular dataset snapshot.
///
/// Column order is preserved from insertion. Every column has the same
/// number of rows; inserting a column of a different length fails with
/// [`EngineError::RaggedColumn`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    columns: Vec<Column>,
}

impl DataSet {
    /// Creates a dataset with no columns.
    ///
    /// A batch cannot be created over it; columns must be inserted first.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a dataset from `(name, values)` pairs, preserving order.
    pub fn from_columns<N>(columns: Vec<(N, Vec<DataValue>)>) -> Result<Self, EngineError>
    where
        N: Into<String>,
    {
        let mut dataset = Self::empty();
        for (name, values) in columns {
            dataset.insert_column(name, values)?;
        }
        Ok(dataset)
    }

    /// Appends a column.
    ///
    /// Fails if the name is already taken or the length disagrees with the
    /// existing columns.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<DataValue>,
    ) -> Result<(), EngineError> {
        let name = name.into();
        if self.column(&name).is_some() {
            return Err(EngineError::DuplicateColumn(name));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != values.len() {
                return Err(EngineError::RaggedColumn {
                    column: name,
                    expected: first.len(),
                    actual: values.len(),
                });
            }
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (zero for a column-less dataset).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_data_value_types() {
        assert_eq!(DataValue::Null.type_name(), "null");
        assert_eq!(DataValue::String("test".into()).type_name(), "string");
        assert_eq!(DataValue::Int(42).type_name(), "int64");
        assert_eq!(DataValue::Float(3.5).type_name(), "float64");
        assert_eq!(DataValue::Bool(true).type_name(), "boolean");
    }

    #[test]
    fn test_data_value_conversions() {
        let val = DataValue::String("hello".into());
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(val.as_int(), None);

        let val = DataValue::Int(42);
        assert_eq!(val.as_int(), Some(42));
        assert_eq!(val.as_float(), Some(42.0));
        assert_eq!(val.as_str(), None);
    }

    #[test]
    fn test_null_has_no_token() {
        assert_eq!(DataValue::Null.as_token(), None);
        assert_eq!(DataValue::Int(3).as_token(), Some("3".to_string()));
        assert_eq!(DataValue::Bool(false).as_token(), Some("false".to_string()));
    }

    #[test]
    fn test_from_columns_preserves_order() {
        let dataset = DataSet::from_columns(vec![
            ("smoker", vec!["yes".into(), "no".into()]),
            ("age", vec![DataValue::Int(30), DataValue::Int(45)]),
        ])
        .unwrap();

        assert_eq!(dataset.column_count(), 2);
        assert_eq!(dataset.row_count(), 2);
        let names: Vec<&str> = dataset.column_names().collect();
        assert_eq!(names, vec!["smoker", "age"]);
    }

    #[test]
    fn test_ragged_column_rejected() {
        let err = DataSet::from_columns(vec![
            ("a", vec![DataValue::Int(1), DataValue::Int(2)]),
            ("b", vec![DataValue::Int(3)]),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            EngineError::RaggedColumn {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let mut dataset = DataSet::empty();
        dataset.insert_column("a", vec![DataValue::Int(1)]).unwrap();
        let err = dataset
            .insert_column("a", vec![DataValue::Int(2)])
            .unwrap_err();
        assert!(matches!(err, EngineError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_zero_row_dataset_is_well_formed() {
        let dataset = DataSet::from_columns(vec![("a", Vec::<DataValue>::new())]).unwrap();
        assert_eq!(dataset.column_count(), 1);
        assert_eq!(dataset.row_count(), 0);
        assert!(dataset.is_empty());
    }
}
