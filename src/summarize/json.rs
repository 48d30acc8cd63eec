//! JSON (hierarchical) summarizer.
//!
//! Any JSON document is accepted: objects, arrays and bare scalars. Counting rules live in
//! [`super::walker`].
//!
//! The parser's own recursion limit is disabled so that [`WalkOptions::max_depth`] is the only
//! nesting limit. Documents nested deeper than that are rejected by a byte scan before anything
//! is parsed.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{SummaryError, SummaryResult};
use crate::types::StructureSummary;

use super::walker::{walk, WalkOptions};

/// Summarize a UTF-8 JSON file.
pub fn summarize_json_from_path(
    path: impl AsRef<Path>,
    options: &WalkOptions,
) -> SummaryResult<StructureSummary> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    summarize_json_from_str(&text, options)
}

/// Summarize a JSON document held in memory.
pub fn summarize_json_from_str(input: &str, options: &WalkOptions) -> SummaryResult<StructureSummary> {
    check_nesting(input, options.max_depth)?;

    let mut de = serde_json::Deserializer::from_str(input);
    de.disable_recursion_limit();
    let value = serde_json::Value::deserialize(&mut de)?;
    de.end()?;

    summarize_json_value(&value, options)
}

/// Summarize an already parsed JSON value.
pub fn summarize_json_value(
    value: &serde_json::Value,
    options: &WalkOptions,
) -> SummaryResult<StructureSummary> {
    walk(value, options)
}

// Containers opened at a depth the walker would reject. Brackets inside strings are skipped.
fn check_nesting(input: &str, max_depth: usize) -> SummaryResult<()> {
    let mut open = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in input.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                // The root container sits at depth 0.
                if open > max_depth {
                    return Err(SummaryError::DepthLimitExceeded { limit: max_depth });
                }
                open += 1;
            }
            b']' | b'}' => open = open.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
