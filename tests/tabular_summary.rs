use file_summarizer::summarize::tabular::{
    summarize_csv_from_path, summarize_csv_from_reader, summarize_csv_from_str, TabularOptions,
};
use file_summarizer::types::{CellValue, Summary};
use file_summarizer::SummaryError;

#[test]
fn summarize_csv_from_path_happy_path() {
    let table = summarize_csv_from_path("tests/fixtures/people.csv", &TabularOptions::default()).unwrap();

    assert_eq!(table.row_count, 3);
    assert_eq!(
        table.column_names().collect::<Vec<_>>(),
        vec!["name", "age", "score", "city", "note"]
    );

    let age = table.column("age").unwrap();
    assert_eq!(
        age.unique_values,
        vec![CellValue::Int64(30), CellValue::Int64(40), CellValue::Int64(50)]
    );
    let stats = age.stats.unwrap();
    assert_eq!(stats.sum, 120.0);
    assert_eq!(stats.average, Some(40.0));
    assert_eq!(stats.median, Some(40.0));
    assert_eq!(stats.standard_deviation, Some(10.0));

    let city = table.column("city").unwrap();
    assert_eq!(
        city.unique_values,
        vec![
            CellValue::Utf8("London".to_string()),
            CellValue::Utf8("New York".to_string())
        ]
    );
    assert!(city.stats.is_none());
}

#[test]
fn missing_cells_are_left_out_of_unique_values() {
    let table = summarize_csv_from_path("tests/fixtures/people.csv", &TabularOptions::default()).unwrap();
    let note = table.column("note").unwrap();
    assert_eq!(note.unique_values, vec![CellValue::Utf8("x1".to_string())]);
    assert!(!note.is_numeric());
}

#[test]
fn sum_reconciles_with_unique_values_times_frequency() {
    let input = "score\n2.5\n1\n2.5\n\n4\n1\n2.5\n";
    let table = summarize_csv_from_str(input, &TabularOptions::default()).unwrap();
    let col = table.column("score").unwrap();

    let raw: Vec<f64> = input
        .lines()
        .skip(1)
        .filter(|l| !l.is_empty())
        .map(|l| l.parse().unwrap())
        .collect();
    let reconciled: f64 = col
        .unique_values
        .iter()
        .map(|u| {
            let v = u.as_f64().unwrap();
            v * raw.iter().filter(|r| **r == v).count() as f64
        })
        .sum();

    assert_eq!(col.stats.unwrap().sum, reconciled);
    assert_eq!(reconciled, 13.5);
}

#[test]
fn one_non_numeric_entry_removes_statistics() {
    let input = "qty\n1\n2\nthree\n4\n";
    let table = summarize_csv_from_str(input, &TabularOptions::default()).unwrap();
    let col = table.column("qty").unwrap();
    assert!(col.stats.is_none());
    assert_eq!(
        col.unique_values,
        vec![
            CellValue::Utf8("1".to_string()),
            CellValue::Utf8("2".to_string()),
            CellValue::Utf8("three".to_string()),
            CellValue::Utf8("4".to_string()),
        ]
    );

    let json = serde_json::to_value(&table).unwrap();
    assert!(json["qty"].get("sum").is_none());
}

#[test]
fn single_value_column_has_null_standard_deviation() {
    let table = summarize_csv_from_str("x,y\n5,a\n", &TabularOptions::default()).unwrap();
    let stats = table.column("x").unwrap().stats.unwrap();
    assert_eq!(stats.sum, 5.0);
    assert_eq!(stats.standard_deviation, None);

    let json = serde_json::to_value(&table).unwrap();
    assert!(json["x"]["standard_deviation"].is_null());
    assert_eq!(json["x"]["median"], serde_json::json!(5.0));
}

#[test]
fn all_missing_column_is_numeric_without_moments() {
    let table = summarize_csv_from_str("a,b\n1,\n2,NA\n", &TabularOptions::default()).unwrap();
    let b = table.column("b").unwrap();
    assert!(b.unique_values.is_empty());
    let stats = b.stats.unwrap();
    assert_eq!(stats.sum, 0.0);
    assert_eq!(stats.average, None);
}

#[test]
fn header_only_table_has_no_statistics() {
    let table = summarize_csv_from_str("a,b\n", &TabularOptions::default()).unwrap();
    assert_eq!(table.row_count, 0);
    assert_eq!(table.columns.len(), 2);
    assert!(table.columns.iter().all(|c| c.unique_values.is_empty() && c.stats.is_none()));
}

#[test]
fn short_rows_are_padded_with_missing_cells() {
    let table = summarize_csv_from_str("a,b,c\n1,2,3\n4\n", &TabularOptions::default()).unwrap();
    assert_eq!(table.column("a").unwrap().unique_values.len(), 2);
    assert_eq!(table.column("c").unwrap().unique_values, vec![CellValue::Int64(3)]);
}

#[test]
fn long_rows_are_rejected_with_row_number() {
    let err = summarize_csv_from_path("tests/fixtures/ragged.csv", &TabularOptions::default()).unwrap_err();
    assert!(matches!(err, SummaryError::MalformedTable { row: 3, .. }));
    assert!(err.to_string().contains("malformed table at row 3"));
}

#[test]
fn empty_input_is_an_error() {
    let err = summarize_csv_from_str("", &TabularOptions::default()).unwrap_err();
    assert!(matches!(err, SummaryError::MalformedTable { .. }));
}

#[test]
fn missing_file_surfaces_as_csv_error() {
    let err = summarize_csv_from_path("tests/fixtures/does_not_exist.csv", &TabularOptions::default())
        .unwrap_err();
    assert!(matches!(err, SummaryError::Csv(_)));
}

#[test]
fn tab_delimited_reader() {
    let input = "id\tlabel\n1\tred\n2\tblue\n2\tred\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(b'\t')
        .from_reader(input.as_bytes());

    let table = summarize_csv_from_reader(&mut rdr, &TabularOptions::tsv()).unwrap();
    assert_eq!(
        table.column("id").unwrap().unique_values,
        vec![CellValue::Int64(1), CellValue::Int64(2)]
    );
    assert_eq!(table.column("label").unwrap().unique_values.len(), 2);
}

#[test]
fn column_order_is_stable_in_serialized_output() {
    let input = "zeta,alpha,mid\n1,2,3\n";
    let table = summarize_csv_from_str(input, &TabularOptions::default()).unwrap();
    let text = serde_json::to_string(&table).unwrap();
    let zeta = text.find("\"zeta\"").unwrap();
    let alpha = text.find("\"alpha\"").unwrap();
    let mid = text.find("\"mid\"").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn to_json_keeps_source_column_order() {
    let table = summarize_csv_from_str("zeta,alpha,mid\n1,2,3\n", &TabularOptions::default()).unwrap();
    let value = Summary::from(table).to_json();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn infinity_and_nan_tokens_are_text() {
    let table = summarize_csv_from_str("x\ninf\n1\n", &TabularOptions::default()).unwrap();
    let col = table.column("x").unwrap();
    assert!(!col.is_numeric());
    assert_eq!(
        col.unique_values,
        vec![CellValue::Utf8("inf".to_string()), CellValue::Utf8("1".to_string())]
    );

    let table = summarize_csv_from_str("y\n2.5\nInfinity\n", &TabularOptions::default()).unwrap();
    assert!(!table.column("y").unwrap().is_numeric());

    let json = serde_json::to_string(&table).unwrap();
    assert!(!json.contains("null"));
}
