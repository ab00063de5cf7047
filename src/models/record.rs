use std::fmt;

use serde::Serialize;

/// A single column value borrowed from a record.
///
/// Text columns take part in substring filtering, numeric columns in exact
/// equality. `Display` produces the value as it appears in CSV and Markdown
/// exports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Number(f64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Number(x) => write!(f, "{x}"),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// A row of one entity collection.
///
/// `COLUMNS` lists the wire keys in serialization order; `field` resolves one
/// of those keys to its value. Exports and the filter engine only ever go
/// through these two, so every entity gets both behaviours from one table.
pub trait Record: Clone + Serialize + Send + Sync {
    type Id: PartialEq + ?Sized;

    const COLUMNS: &'static [&'static str];

    fn id(&self) -> &Self::Id;

    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Column values rendered as text, missing columns as empty strings.
    fn row(&self) -> Vec<String> {
        Self::COLUMNS
            .iter()
            .map(|column| self.field(column).map(|v| v.to_string()).unwrap_or_default())
            .collect()
    }
}
