//! Directory-level summarization.
//!
//! [`summarize_directory`] walks a directory, keeps files whose extension maps to a
//! [`SummaryFormat`] (and that match an optional glob), and summarizes them in parallel on a
//! dedicated `rayon` pool. Every file is an independent [`summarize_path`] call, so a failing
//! file yields [`Summary::Empty`] without affecting the others.

use std::path::{Path, PathBuf};

use glob::Pattern;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{SummaryError, SummaryResult};
use crate::summarize::unified::infer_format_from_path;
use crate::summarize::{summarize_path, SummaryFormat, SummaryOptions};
use crate::types::Summary;

/// Configuration for [`summarize_directory`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Glob matched against each file's path relative to the root (e.g. `**/*.csv`).
    pub pattern: Option<String>,
    /// Maximum directory depth below the root; `None` for unlimited.
    pub max_depth: Option<usize>,
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Worker threads; `None` uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Options passed to every per-file call. `format` is overridden per file.
    pub summary: SummaryOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            pattern: None,
            max_depth: None,
            follow_links: false,
            num_threads: None,
            summary: SummaryOptions::default(),
        }
    }
}

/// One summarized file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub format: SummaryFormat,
    pub summary: Summary,
}

/// Summarize every supported file under `root`.
///
/// Entries come back sorted by path. Unreadable directory entries are skipped with a `tracing`
/// warning.
///
/// ```no_run
/// use file_summarizer::batch::{summarize_directory, BatchOptions};
///
/// # fn main() -> Result<(), file_summarizer::SummaryError> {
/// let opts = BatchOptions {
///     pattern: Some("**/*.json".to_string()),
///     num_threads: Some(4),
///     ..Default::default()
/// };
/// for entry in summarize_directory("data/", &opts)? {
///     println!("{} {}", entry.path.display(), entry.summary.to_json());
/// }
/// # Ok(())
/// # }
/// ```
pub fn summarize_directory(
    root: impl AsRef<Path>,
    options: &BatchOptions,
) -> SummaryResult<Vec<BatchEntry>> {
    let root = root.as_ref();
    let pattern = options
        .pattern
        .as_deref()
        .map(Pattern::new)
        .transpose()?;

    let files = collect_files(root, options, pattern.as_ref())?;

    let mut builder = ThreadPoolBuilder::new();
    if let Some(n) = options.num_threads {
        builder = builder.num_threads(n.max(1));
    }
    let pool = builder.build()?;

    let entries: Vec<BatchEntry> = pool.install(|| {
        files
            .into_par_iter()
            .map(|(path, format)| {
                let opts = SummaryOptions {
                    format: Some(format),
                    ..options.summary.clone()
                };
                let summary = summarize_path(&path, &opts);
                BatchEntry {
                    path,
                    format,
                    summary,
                }
            })
            .collect()
    });
    Ok(entries)
}

fn collect_files(
    root: &Path,
    options: &BatchOptions,
    pattern: Option<&Pattern>,
) -> SummaryResult<Vec<(PathBuf, SummaryFormat)>> {
    if !root.is_dir() {
        return Err(SummaryError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        )));
    }

    let mut walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth.saturating_add(1));
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if let Some(p) = pattern {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if !p.matches_path(relative) {
                continue;
            }
        }
        if let Ok(format) = infer_format_from_path(&path) {
            files.push((path, format));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}
