//! Iterative structure walker for hierarchical (JSON) values.
//!
//! Each visited value is classified as a [`StructureNode`] and folded into a running
//! [`StructureSummary`]:
//!
//! - mapping: one row, plus the character length of every key (keys add no words)
//! - sequence: one row
//! - scalar (string, integer, float): one row, its whitespace tokens as words and its rendered
//!   length as characters
//!
//! Booleans and `null` are not nodes and contribute nothing, not even a row.
//!
//! Traversal is depth-first pre-order over an explicit work stack, so nesting depth is bounded
//! by [`WalkOptions::max_depth`] rather than by the native call stack.

use serde_json::{Map, Number, Value};

use crate::error::{SummaryError, SummaryResult};
use crate::types::StructureSummary;

/// Default walk depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling the structure walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum value depth; the root sits at depth 0.
    ///
    /// This is also the parse limit for JSON text. Parsing still recurses once per level, so
    /// limits in the thousands need a thread with a larger stack than the 2 MiB default.
    pub max_depth: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A counted scalar. Only these three kinds take part in the summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    String(&'a str),
    Integer(i128),
    Float(f64),
}

impl Scalar<'_> {
    /// Textual form used for word and character counts.
    ///
    /// Integers render in decimal. Floats use the shortest round-trip digits, in positional form
    /// (`2.5`, `1.0`, `0.0001`) for decimal exponents from -4 to 15 and in scientific form with
    /// a signed two-digit exponent (`1e-05`, `1.5e+20`) outside that range.
    pub fn render(&self) -> String {
        match self {
            Scalar::String(s) => (*s).to_string(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) => render_float(*f),
        }
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e-5`.
    let sci = format!("{f:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let fixed = f.to_string();
        if fixed.contains('.') { fixed } else { format!("{fixed}.0") }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

/// Classification of one hierarchical value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructureNode<'a> {
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    Scalar(Scalar<'a>),
}

impl<'a> StructureNode<'a> {
    /// Classify a JSON value. Returns `None` for booleans and `null`.
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::Mapping(map)),
            Value::Array(items) => Some(Self::Sequence(items)),
            Value::String(s) => Some(Self::Scalar(Scalar::String(s))),
            Value::Number(n) => Some(Self::Scalar(classify_number(n))),
            Value::Bool(_) | Value::Null => None,
        }
    }
}

fn classify_number(n: &Number) -> Scalar<'static> {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        Scalar::Integer(i128::from(u))
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Walk `root` and return its summary.
///
/// Fails with [`SummaryError::DepthLimitExceeded`] when a value sits deeper than
/// `options.max_depth`.
pub fn walk(root: &Value, options: &WalkOptions) -> SummaryResult<StructureSummary> {
    let mut summary = StructureSummary::default();
    let mut pending: Vec<(&Value, usize)> = vec![(root, 0)];

    while let Some((value, depth)) = pending.pop() {
        if depth > options.max_depth {
            return Err(SummaryError::DepthLimitExceeded {
                limit: options.max_depth,
            });
        }

        let Some(node) = StructureNode::classify(value) else {
            continue;
        };
        summary.rows += 1;

        match node {
            StructureNode::Mapping(map) => {
                for key in map.keys() {
                    summary.characters += key.chars().count();
                }
                // Reversed so that the first child is popped first.
                pending.extend(map.values().rev().map(|v| (v, depth + 1)));
            }
            StructureNode::Sequence(items) => {
                pending.extend(items.iter().rev().map(|v| (v, depth + 1)));
            }
            StructureNode::Scalar(scalar) => {
                let text = scalar.render();
                summary.words += text.split_whitespace().count();
                summary.characters += text.chars().count();
            }
        }
    }

    Ok(summary)
}
