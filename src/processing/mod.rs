//! Numeric processing shared by the summarizers.
//!
//! Currently implemented:
//!
//! - [`describe()`]: sum / mean / median / sample standard deviation of a column
//! - [`describe_integers()`]: the same, with an exact sum for integer columns
//!
//! ```rust
//! use file_summarizer::processing::{describe, describe_integers};
//!
//! let stats = describe(&[30.0, 40.0, 50.0]);
//! assert_eq!(stats.sum, 120.0);
//! assert_eq!(stats.standard_deviation, Some(10.0));
//!
//! // Undefined statistics are `None`, never a panic.
//! assert_eq!(describe(&[1.0]).standard_deviation, None);
//! assert_eq!(describe_integers(&[i64::MAX, 1, -1]).sum, i64::MAX as f64);
//! ```

pub mod stats;

pub use stats::{describe, describe_integers};
