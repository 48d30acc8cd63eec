use thiserror::Error;

/// Convenience result type for summarization operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Error type returned by the strict summarization functions.
///
/// Shared across the CSV, text and JSON summarizers. The sentinel entrypoint
/// [`crate::summarize::summarize_path`] converts every variant into an empty summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse error, including invalid UTF-8 inside a record.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON syntax error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// File content is not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Tabular input whose shape cannot be turned into columns.
    #[error("malformed table at row {row}: {message}")]
    MalformedTable { row: usize, message: String },

    /// Hierarchical input nested deeper than the configured walk limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// No summarizer could be selected for the input.
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    /// Input file is larger than the configured maximum.
    #[error("input is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },

    /// Batch file filter is not a valid glob.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The batch worker pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
