//! Summary data model.
//!
//! Every summarizer returns one of the structs below; [`Summary`] wraps them together with the
//! [`Summary::Empty`] failure sentinel. All types serialize to plain JSON through `serde`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single distinct value from a tabular column.
///
/// Values are normalized to plain Rust scalars so they serialize directly as JSON numbers or
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string, exactly as it appeared in the cell.
    Utf8(String),
}

impl CellValue {
    /// Numeric view of the value, `None` for strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            Self::Utf8(_) => None,
        }
    }
}

/// Statistics reported for numeric columns.
///
/// `None` serializes as `null` and marks a statistic that is undefined for the column
/// (mean/median of an empty column, standard deviation of fewer than two values).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericStats {
    pub sum: f64,
    pub average: Option<f64>,
    pub median: Option<f64>,
    pub standard_deviation: Option<f64>,
}

/// Per-column result of the tabular summarizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Column name from the header row (de-duplicated).
    #[serde(skip)]
    pub name: String,
    /// Distinct non-missing values in first-seen order.
    pub unique_values: Vec<CellValue>,
    /// Present only when the column is numeric.
    #[serde(flatten)]
    pub stats: Option<NumericStats>,
}

impl ColumnSummary {
    /// Whether the column was classified as numeric.
    pub fn is_numeric(&self) -> bool {
        self.stats.is_some()
    }
}

/// Result of the tabular summarizer: columns in source order.
///
/// Serializes as a JSON object keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSummary {
    /// Column summaries in header order.
    pub columns: Vec<ColumnSummary>,
    /// Number of data rows read (header excluded). Not part of the serialized mapping.
    pub row_count: usize,
}

impl TableSummary {
    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

impl Serialize for TableSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, column)?;
        }
        map.end()
    }
}

/// Result of the text summarizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextSummary {
    /// Number of `\n` characters plus one. An empty file reports one row.
    pub rows: usize,
    /// Whitespace-delimited tokens.
    pub words: usize,
    /// Unicode scalar values, including whitespace and newlines.
    pub characters: usize,
    /// Email-like matches in order of appearance, duplicates kept.
    pub emails: Vec<String>,
    /// Nine-digit matches in order of appearance, duplicates kept.
    pub phone_numbers: Vec<String>,
}

/// Result of the hierarchical (JSON) summarizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StructureSummary {
    /// Mappings, sequences and counted scalars visited.
    pub rows: usize,
    /// Whitespace tokens of scalar values. Keys contribute nothing here.
    pub words: usize,
    /// Key lengths plus scalar string lengths.
    pub characters: usize,
}

/// Format-specific summary, or the empty failure sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Summary {
    Tabular(TableSummary),
    Text(TextSummary),
    Structure(StructureSummary),
    /// The operation failed; serializes as `{}`.
    #[default]
    Empty,
}

impl Summary {
    /// `true` for the failure sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Convert to a JSON value. [`Summary::Empty`] becomes `{}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Tabular(t) => t.serialize(serializer),
            Self::Text(t) => t.serialize(serializer),
            Self::Structure(s) => s.serialize(serializer),
            Self::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

impl From<TableSummary> for Summary {
    fn from(value: TableSummary) -> Self {
        Self::Tabular(value)
    }
}

impl From<TextSummary> for Summary {
    fn from(value: TextSummary) -> Self {
        Self::Text(value)
    }
}

impl From<StructureSummary> for Summary {
    fn from(value: StructureSummary) -> Self {
        Self::Structure(value)
    }
}
