//! Reporting for [`super::summarize_path`].
//!
//! The sentinel entrypoint turns every failure into an empty summary, so the only place a caller
//! learns *why* a file came back as `{}` is the [`SummaryObserver`] configured on
//! [`super::SummaryOptions`]. Each call produces exactly one `on_success` or `on_failure`, plus
//! an `on_alert` when the failure's severity reaches the configured threshold.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::SummaryError;

use super::unified::SummaryFormat;

/// How bad a failed summary is. Ordered, so thresholds compare with `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SummarySeverity {
    Info,
    /// The input was refused without being read, e.g. over the size limit.
    Warning,
    /// The input was read but could not be summarized (bad syntax, encoding, shape, depth).
    Error,
    /// The input could not be read at all.
    Critical,
}

impl SummarySeverity {
    /// Lowercase label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for SummarySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The file a report is about.
#[derive(Debug, Clone)]
pub struct SummaryContext {
    pub path: PathBuf,
    /// Explicit or extension-derived format; `None` when neither was available.
    pub format: Option<SummaryFormat>,
}

impl SummaryContext {
    /// Format name for log lines, `"unknown"` when the format could not be determined.
    pub fn format_name(&self) -> &'static str {
        self.format.map_or("unknown", |f| f.as_str())
    }
}

/// Reported with every successful summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    /// Data rows for tables (header excluded); the `rows` count for text and JSON.
    pub rows: usize,
}

/// Receives the outcome of every [`super::summarize_path`] call.
///
/// All methods default to doing nothing, except `on_alert`, which forwards to `on_failure`.
/// Observers are shared across batch worker threads, hence `Send + Sync`.
pub trait SummaryObserver: Send + Sync {
    fn on_success(&self, _ctx: &SummaryContext, _stats: SummaryStats) {}

    fn on_failure(&self, _ctx: &SummaryContext, _severity: SummarySeverity, _error: &SummaryError) {}

    fn on_alert(&self, ctx: &SummaryContext, severity: SummarySeverity, error: &SummaryError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Delivers each event to every child observer, in insertion order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SummaryObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn SummaryObserver>>) -> Self {
        Self { observers }
    }

    /// Append one more observer.
    pub fn with(mut self, observer: Arc<dyn SummaryObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SummaryObserver for CompositeObserver {
    fn on_success(&self, ctx: &SummaryContext, stats: SummaryStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &SummaryContext, severity: SummarySeverity, error: &SummaryError) {
        self.observers
            .iter()
            .for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &SummaryContext, severity: SummarySeverity, error: &SummaryError) {
        self.observers
            .iter()
            .for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Prints one `summarize:` line per event to stderr.
///
/// ```text
/// summarize: ok tabular data/people.csv rows=3
/// summarize: error hierarchical data/broken.json: json error: EOF while parsing a list ...
/// summarize: ALERT critical text data/missing.txt: io error: No such file or directory ...
/// ```
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    fn failure_line(
        ctx: &SummaryContext,
        label: &str,
        severity: SummarySeverity,
        error: &SummaryError,
    ) -> String {
        format!(
            "summarize: {label}{severity} {} {}: {error}",
            ctx.format_name(),
            ctx.path.display()
        )
    }
}

impl SummaryObserver for StdErrObserver {
    fn on_success(&self, ctx: &SummaryContext, stats: SummaryStats) {
        eprintln!(
            "summarize: ok {} {} rows={}",
            ctx.format_name(),
            ctx.path.display(),
            stats.rows
        );
    }

    fn on_failure(&self, ctx: &SummaryContext, severity: SummarySeverity, error: &SummaryError) {
        eprintln!("{}", Self::failure_line(ctx, "", severity, error));
    }

    fn on_alert(&self, ctx: &SummaryContext, severity: SummarySeverity, error: &SummaryError) {
        eprintln!("{}", Self::failure_line(ctx, "ALERT ", severity, error));
    }
}

/// Emits structured `tracing` events: `debug` on success, `warn` on failure, `error` on alert.
///
/// Nothing is printed unless the application installs a subscriber.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SummaryObserver for TracingObserver {
    fn on_success(&self, ctx: &SummaryContext, stats: SummaryStats) {
        tracing::debug!(
            format = ctx.format_name(),
            path = %ctx.path.display(),
            rows = stats.rows,
            "summary produced"
        );
    }

    fn on_failure(&self, ctx: &SummaryContext, severity: SummarySeverity, error: &SummaryError) {
        tracing::warn!(
            severity = severity.as_str(),
            format = ctx.format_name(),
            path = %ctx.path.display(),
            %error,
            "summary failed"
        );
    }

    fn on_alert(&self, ctx: &SummaryContext, severity: SummarySeverity, error: &SummaryError) {
        tracing::error!(
            severity = severity.as_str(),
            format = ctx.format_name(),
            path = %ctx.path.display(),
            %error,
            "summary failure alert"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::{CompositeObserver, StdErrObserver, SummaryContext, SummarySeverity, TracingObserver};
    use crate::error::SummaryError;
    use crate::summarize::SummaryFormat;

    #[test]
    fn failure_line_names_severity_format_and_path() {
        let ctx = SummaryContext {
            path: PathBuf::from("in/report.json"),
            format: Some(SummaryFormat::Hierarchical),
        };
        let err = SummaryError::DepthLimitExceeded { limit: 4 };

        assert_eq!(
            StdErrObserver::failure_line(&ctx, "", SummarySeverity::Error, &err),
            "summarize: error hierarchical in/report.json: nesting depth exceeds limit of 4"
        );
        assert!(
            StdErrObserver::failure_line(&ctx, "ALERT ", SummarySeverity::Critical, &err)
                .starts_with("summarize: ALERT critical hierarchical")
        );
    }

    #[test]
    fn unknown_format_is_labelled() {
        let ctx = SummaryContext {
            path: PathBuf::from("upload"),
            format: None,
        };
        assert_eq!(ctx.format_name(), "unknown");
    }

    #[test]
    fn severities_order_for_thresholds() {
        assert!(SummarySeverity::Critical > SummarySeverity::Error);
        assert!(SummarySeverity::Error > SummarySeverity::Warning);
        assert!(SummarySeverity::Warning > SummarySeverity::Info);
        assert_eq!(SummarySeverity::Warning.to_string(), "warning");
    }

    #[test]
    fn composite_grows_with_builder() {
        let composite = CompositeObserver::default()
            .with(Arc::new(StdErrObserver))
            .with(Arc::new(TracingObserver));
        assert_eq!(composite.len(), 2);
        assert!(!composite.is_empty());
    }
}
