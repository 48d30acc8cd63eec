//! CSV (delimited tabular) summarizer.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{SummaryError, SummaryResult};
use crate::processing::{describe, describe_integers};
use crate::types::{CellValue, ColumnSummary, TableSummary};

/// Cell contents treated as missing by default.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling tabular parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Exact cell contents that count as missing.
    pub na_values: Vec<String>,
}

impl Default for TabularOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TabularOptions {
    /// Tab-separated input with the default missing-value tokens.
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    fn is_missing(&self, raw: &str) -> bool {
        self.na_values.iter().any(|na| na == raw)
    }
}

/// Summarize a delimited file column by column.
///
/// Rules:
///
/// - The first row is the header; duplicate names become `name.1`, `name.2`, ...
/// - Missing cells (short rows or NA tokens) are left out of `unique_values`.
/// - A column is numeric only if every non-missing value parses as a finite number; it then
///   gets sum / average / median / sample standard deviation.
/// - Rows with more fields than the header are rejected.
pub fn summarize_csv_from_path(
    path: impl AsRef<Path>,
    options: &TabularOptions,
) -> SummaryResult<TableSummary> {
    let mut rdr = reader_builder(options).from_path(path)?;
    summarize_csv_from_reader(&mut rdr, options)
}

/// Summarize CSV data held in memory.
pub fn summarize_csv_from_str(input: &str, options: &TabularOptions) -> SummaryResult<TableSummary> {
    let mut rdr = reader_builder(options).from_reader(input.as_bytes());
    summarize_csv_from_reader(&mut rdr, options)
}

/// Summarize CSV data from an existing reader.
///
/// The reader should be built with `has_headers(true)` and `flexible(true)` so that short rows
/// are padded instead of rejected.
pub fn summarize_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    options: &TabularOptions,
) -> SummaryResult<TableSummary> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(SummaryError::MalformedTable {
            row: 1,
            message: "no columns to parse".to_string(),
        });
    }

    let names = dedupe_names(headers.iter());
    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    let mut columns: Vec<Vec<&str>> = vec![Vec::new(); names.len()];

    for (row_idx0, record) in records.iter().enumerate() {
        if record.len() > names.len() {
            return Err(SummaryError::MalformedTable {
                // 1-based, header is row 1.
                row: row_idx0 + 2,
                message: format!(
                    "expected {} fields, saw {}",
                    names.len(),
                    record.len()
                ),
            });
        }
        for (idx, raw) in record.iter().enumerate() {
            if !options.is_missing(raw) {
                columns[idx].push(raw);
            }
        }
    }

    let row_count = records.len();
    let columns = names
        .into_iter()
        .zip(columns)
        .map(|(name, cells)| summarize_column(name, &cells, row_count))
        .collect();

    Ok(TableSummary { columns, row_count })
}

fn reader_builder(options: &TabularOptions) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter);
    builder
}

fn dedupe_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for header in headers {
        let mut candidate = header.to_string();
        let mut suffix = 1;
        while out.contains(&candidate) {
            candidate = format!("{header}.{suffix}");
            suffix += 1;
        }
        out.push(candidate);
    }
    out
}

/// Column classification derived from its non-missing cells.
enum ColumnKind {
    Int64(Vec<i64>),
    Float64(Vec<f64>),
    Utf8,
}

fn classify(cells: &[&str], row_count: usize) -> ColumnKind {
    if cells.is_empty() {
        // An all-missing column is numeric once there is data; a header-only table is not.
        return if row_count > 0 {
            ColumnKind::Float64(Vec::new())
        } else {
            ColumnKind::Utf8
        };
    }

    if let Ok(ints) = cells
        .iter()
        .map(|c| c.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
    {
        return ColumnKind::Int64(ints);
    }

    // `inf` and `nan` spellings parse as f64 but have no JSON number form.
    match cells
        .iter()
        .map(|c| c.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<_>>>()
    {
        Some(floats) => ColumnKind::Float64(floats),
        None => ColumnKind::Utf8,
    }
}

fn summarize_column(name: String, cells: &[&str], row_count: usize) -> ColumnSummary {
    match classify(cells, row_count) {
        ColumnKind::Int64(values) => {
            let mut seen = HashSet::new();
            let unique_values = values
                .iter()
                .filter(|v| seen.insert(**v))
                .map(|v| CellValue::Int64(*v))
                .collect();
            ColumnSummary {
                name,
                unique_values,
                stats: Some(describe_integers(&values)),
            }
        }
        ColumnKind::Float64(values) => {
            let mut seen = HashSet::new();
            let unique_values = values
                .iter()
                .filter(|v| seen.insert(float_key(**v)))
                .map(|v| CellValue::Float64(*v))
                .collect();
            ColumnSummary {
                name,
                unique_values,
                stats: Some(describe(&values)),
            }
        }
        ColumnKind::Utf8 => {
            let mut seen = HashSet::new();
            let unique_values = cells
                .iter()
                .filter(|c| seen.insert(**c))
                .map(|c| CellValue::Utf8(c.to_string()))
                .collect();
            ColumnSummary {
                name,
                unique_values,
                stats: None,
            }
        }
    }
}

// 0.0 and -0.0 are the same value.
fn float_key(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}
