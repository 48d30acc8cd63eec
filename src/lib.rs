//! `file-summarizer` produces format-appropriate summaries of single data files.
//!
//! The primary entrypoint is [`summarize::summarize_path`], which picks a summarizer from an
//! explicit [`summarize::SummaryFormat`] (or the file extension) and returns a
//! [`types::Summary`] that serializes straight to JSON.
//!
//! ## What you get per format
//!
//! - **Tabular** (`.csv`, `.tsv`): for every column, its distinct non-missing values and, for
//!   numeric columns, `sum`, `average`, `median` and `standard_deviation`.
//! - **Text** (`.txt`): `rows`, `words`, `characters`, plus `emails` and nine-digit
//!   `phone_numbers` found in the content.
//! - **Hierarchical** (`.json`): `rows`, `words`, `characters` counted over every object, array,
//!   string and number in the document.
//!
//! Failures never escape [`summarize::summarize_path`]: they are reported to an optional
//! [`summarize::SummaryObserver`] and the result is [`types::Summary::Empty`], which serializes
//! as `{}`. Undefined statistics (e.g. the standard deviation of a single value) are `null`.
//! Use the format-specific functions or [`summarize::try_summarize_path`] to get the
//! [`SummaryError`] instead.
//!
//! ## Quick example
//!
//! ```no_run
//! use file_summarizer::summarize::{summarize_path, SummaryOptions};
//!
//! let summary = summarize_path("people.csv", &SummaryOptions::default());
//! if summary.is_empty() {
//!     eprintln!("could not summarize people.csv");
//! }
//! println!("{}", summary.to_json());
//! ```
//!
//! In-memory input works through the format modules directly:
//!
//! ```rust
//! use file_summarizer::summarize::json::summarize_json_from_str;
//! use file_summarizer::summarize::text::summarize_text_from_str;
//! use file_summarizer::summarize::WalkOptions;
//!
//! let text = summarize_text_from_str("Jane Doe jane@example.com 123456789");
//! assert_eq!(text.words, 4);
//! assert_eq!(text.emails, vec!["jane@example.com"]);
//!
//! let json = summarize_json_from_str(r#"{"a": [1, 2], "b": "x y"}"#, &WalkOptions::default()).unwrap();
//! assert_eq!((json.rows, json.words, json.characters), (5, 2, 7));
//! ```
//!
//! ## Counting rules worth knowing
//!
//! These follow long-standing behavior and are kept for compatibility:
//!
//! - An empty text file reports `rows = 1`.
//! - JSON object keys add to `characters` but never to `words`.
//! - JSON booleans and `null` are not counted at all, not even as a row.
//!
//! ## Modules
//!
//! - [`summarize`]: dispatch plus the tabular, text and JSON summarizers
//! - [`batch`]: parallel summarization of a directory tree
//! - [`processing`]: numeric column statistics
//! - [`types`]: summary data model
//! - [`error`]: error type shared by all summarizers

pub mod batch;
pub mod error;
pub mod processing;
pub mod summarize;
pub mod types;

pub use error::{SummaryError, SummaryResult};
