//! Summarization entrypoints and implementations.
//!
//! Most callers should use [`summarize_path`] (from [`unified`]) which:
//!
//! - takes the format from [`SummaryOptions::format`], or from the file extension
//! - runs the matching summarizer
//! - reports success/failure/alerts to an optional [`SummaryObserver`]
//! - returns [`crate::types::Summary::Empty`] instead of an error
//!
//! Format-specific functions returning [`crate::SummaryResult`] live under:
//! - [`tabular`]
//! - [`text`]
//! - [`json`] (using [`walker`])

pub mod json;
pub mod observability;
pub mod tabular;
pub mod text;
pub mod unified;
pub mod walker;

pub use observability::{
    CompositeObserver, StdErrObserver, SummaryContext, SummaryObserver, SummarySeverity, SummaryStats,
    TracingObserver,
};
pub use tabular::TabularOptions;
pub use unified::{summarize_path, try_summarize_path, SummaryFormat, SummaryOptions, SummaryRequest};
pub use walker::WalkOptions;
