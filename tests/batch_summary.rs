use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use file_summarizer::batch::{summarize_directory, BatchOptions};
use file_summarizer::summarize::SummaryFormat;
use file_summarizer::types::Summary;
use file_summarizer::SummaryError;

fn tmp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("file-summarizer-batch-{tag}-{nanos}"));
    fs::create_dir_all(dir.join("nested")).unwrap();
    dir
}

fn populate(dir: &Path) {
    fs::write(dir.join("b.json"), r#"{"a": [1, 2], "b": "x y"}"#).unwrap();
    fs::write(dir.join("a.csv"), "age\n30\n40\n50\n").unwrap();
    fs::write(dir.join("notes.txt"), "call 123456789").unwrap();
    fs::write(dir.join("image.png"), [0u8, 1, 2]).unwrap();
    fs::write(dir.join("nested").join("broken.json"), "{").unwrap();
}

#[test]
fn summarizes_supported_files_in_path_order() {
    let dir = tmp_dir("all");
    populate(&dir);

    let entries = summarize_directory(
        &dir,
        &BatchOptions {
            num_threads: Some(2),
            ..Default::default()
        },
    )
    .unwrap();
    let _ = fs::remove_dir_all(&dir);

    let names: Vec<_> = entries
        .iter()
        .map(|e| e.path.strip_prefix(&dir).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("a.csv"),
            PathBuf::from("b.json"),
            PathBuf::from("nested").join("broken.json"),
            PathBuf::from("notes.txt"),
        ]
    );

    assert_eq!(entries[0].format, SummaryFormat::Tabular);
    assert_eq!(entries[0].summary.to_json()["age"]["sum"], serde_json::json!(120.0));
    assert!(matches!(entries[1].summary, Summary::Structure(s) if s.rows == 5));
    // One failing file does not affect the rest.
    assert!(entries[2].summary.is_empty());
    assert!(matches!(&entries[3].summary, Summary::Text(t) if t.phone_numbers == vec!["123456789"]));
}

#[test]
fn glob_and_depth_filter_files() {
    let dir = tmp_dir("filter");
    populate(&dir);

    let only_json = summarize_directory(
        &dir,
        &BatchOptions {
            pattern: Some("*.json".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let top_level = summarize_directory(
        &dir,
        &BatchOptions {
            max_depth: Some(0),
            ..Default::default()
        },
    )
    .unwrap();
    let _ = fs::remove_dir_all(&dir);

    assert_eq!(only_json.len(), 2);
    assert!(only_json.iter().all(|e| e.format == SummaryFormat::Hierarchical));
    assert_eq!(top_level.len(), 3);
}

#[test]
fn missing_root_is_an_error() {
    let err = summarize_directory("tests/fixtures/no_such_dir", &BatchOptions::default()).unwrap_err();
    assert!(matches!(err, SummaryError::Io(_)));
}

#[test]
fn invalid_glob_is_an_error() {
    let opts = BatchOptions {
        pattern: Some("[".to_string()),
        ..Default::default()
    };
    let err = summarize_directory("tests/fixtures", &opts).unwrap_err();
    assert!(matches!(err, SummaryError::Pattern(_)));
}

#[test]
fn entries_serialize_with_format_names() {
    let entries = summarize_directory(
        "tests/fixtures",
        &BatchOptions {
            pattern: Some("nested.json".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    let value = serde_json::to_value(&entries).unwrap();
    assert_eq!(value[0]["format"], serde_json::json!("hierarchical"));
    assert_eq!(
        value[0]["summary"],
        serde_json::json!({"rows": 5, "words": 2, "characters": 7})
    );
}
