//! Format dispatch.
//!
//! Most callers should use [`summarize_path`], which picks the summarizer for a file and never
//! fails: any error is reported to the configured [`SummaryObserver`] and replaced by
//! [`Summary::Empty`] (`{}` once serialized).
//!
//! - If [`SummaryOptions::format`] is `None`, the format is taken from the file extension. The
//!   content itself is never inspected to guess a format.
//! - [`try_summarize_path`] performs the same dispatch but returns the error instead.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::error::{SummaryError, SummaryResult};
use crate::types::Summary;

use super::observability::{SummaryContext, SummaryObserver, SummarySeverity, SummaryStats};
use super::tabular::{self, TabularOptions};
use super::walker::WalkOptions;
use super::{json, text};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Delimited tabular data (CSV/TSV).
    Tabular,
    /// Free text.
    Text,
    /// Nested JSON.
    Hierarchical,
}

impl SummaryFormat {
    /// Parse a format from a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" | "tsv" => Some(Self::Tabular),
            "txt" | "text" => Some(Self::Text),
            "json" => Some(Self::Hierarchical),
            _ => None,
        }
    }

    /// Parse a format from a MIME content type; parameters such as `charset` are ignored.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "text/csv" | "text/tab-separated-values" => Some(Self::Tabular),
            "text/plain" => Some(Self::Text),
            "application/json" => Some(Self::Hierarchical),
            _ => None,
        }
    }

    /// Short lowercase name, as used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tabular => "tabular",
            Self::Text => "text",
            Self::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling dispatch.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct SummaryOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<SummaryFormat>,
    /// Tabular parsing options. A `.tsv` extension switches the delimiter to a tab.
    pub tabular: TabularOptions,
    /// Hierarchical walk options.
    pub walk: WalkOptions,
    /// Reject inputs larger than this many bytes before parsing.
    pub max_input_bytes: Option<u64>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SummaryObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: SummarySeverity,
}

impl fmt::Debug for SummaryOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummaryOptions")
            .field("format", &self.format)
            .field("tabular", &self.tabular)
            .field("walk", &self.walk)
            .field("max_input_bytes", &self.max_input_bytes)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            format: None,
            tabular: TabularOptions::default(),
            walk: WalkOptions::default(),
            max_input_bytes: None,
            observer: None,
            alert_at_or_above: SummarySeverity::Critical,
        }
    }
}

/// Summarize a file, returning [`Summary::Empty`] on any failure.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` with row stats
/// - `on_failure` with a computed severity
/// - `on_alert` when that severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use file_summarizer::summarize::{summarize_path, StdErrObserver, SummaryOptions};
///
/// let opts = SummaryOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let summary = summarize_path("report.csv", &opts);
/// println!("{}", summary.to_json());
/// ```
pub fn summarize_path(path: impl AsRef<Path>, options: &SummaryOptions) -> Summary {
    let path = path.as_ref();
    let format = options.format.or_else(|| infer_format_from_path(path).ok());
    let result = try_summarize_path(path, options);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = SummaryContext {
            path: path.to_path_buf(),
            format,
        };
        match &result {
            Ok(summary) => obs.on_success(&ctx, SummaryStats { rows: row_stat(summary) }),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.unwrap_or_default()
}

/// Summarize a file, returning the error instead of the empty sentinel.
///
/// ```no_run
/// use file_summarizer::summarize::{try_summarize_path, SummaryFormat, SummaryOptions};
///
/// # fn main() -> Result<(), file_summarizer::SummaryError> {
/// let opts = SummaryOptions {
///     format: Some(SummaryFormat::Hierarchical),
///     ..Default::default()
/// };
/// // Useful when an upload was saved without its original extension.
/// let summary = try_summarize_path("upload-0001", &opts)?;
/// println!("{}", summary.to_json());
/// # Ok(())
/// # }
/// ```
pub fn try_summarize_path(path: impl AsRef<Path>, options: &SummaryOptions) -> SummaryResult<Summary> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    if let Some(limit) = options.max_input_bytes {
        let size = fs::metadata(path)?.len();
        if size > limit {
            return Err(SummaryError::InputTooLarge { size, limit });
        }
    }

    let summary = match format {
        SummaryFormat::Tabular => {
            let opts = tabular_options_for(path, &options.tabular);
            Summary::Tabular(tabular::summarize_csv_from_path(path, &opts)?)
        }
        SummaryFormat::Text => Summary::Text(text::summarize_text_from_path(path)?),
        SummaryFormat::Hierarchical => {
            Summary::Structure(json::summarize_json_from_path(path, &options.walk)?)
        }
    };
    Ok(summary)
}

fn tabular_options_for(path: &Path, base: &TabularOptions) -> TabularOptions {
    let is_tsv = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
    if is_tsv && base.delimiter == b',' {
        TabularOptions {
            delimiter: b'\t',
            ..base.clone()
        }
    } else {
        base.clone()
    }
}

fn row_stat(summary: &Summary) -> usize {
    match summary {
        Summary::Tabular(t) => t.row_count,
        Summary::Text(t) => t.rows,
        Summary::Structure(s) => s.rows,
        Summary::Empty => 0,
    }
}

pub(crate) fn severity_for_error(e: &SummaryError) -> SummarySeverity {
    match e {
        SummaryError::Io(_) => SummarySeverity::Critical,
        SummaryError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => SummarySeverity::Critical,
            _ => SummarySeverity::Error,
        },
        SummaryError::Json(err) if err.is_io() => SummarySeverity::Critical,
        SummaryError::ThreadPool(_) => SummarySeverity::Critical,
        SummaryError::InputTooLarge { .. } => SummarySeverity::Warning,
        SummaryError::Json(_)
        | SummaryError::Encoding(_)
        | SummaryError::MalformedTable { .. }
        | SummaryError::DepthLimitExceeded { .. }
        | SummaryError::UnsupportedFormat { .. }
        | SummaryError::Pattern(_) => SummarySeverity::Error,
    }
}

pub(crate) fn infer_format_from_path(path: &Path) -> SummaryResult<SummaryFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| SummaryError::UnsupportedFormat {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    SummaryFormat::from_extension(ext).ok_or_else(|| SummaryError::UnsupportedFormat {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// Owned request object, handy for queueing work.
#[derive(Clone, Debug)]
pub struct SummaryRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling dispatch.
    pub options: SummaryOptions,
}

impl SummaryRequest {
    pub fn new(path: impl Into<PathBuf>, options: SummaryOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Execute the request by calling [`summarize_path`].
    pub fn run(&self) -> Summary {
        summarize_path(&self.path, &self.options)
    }
}
