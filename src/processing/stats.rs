//! Descriptive statistics over a numeric column.

use crate::types::NumericStats;

/// Compute every statistic reported for a numeric column.
///
/// `sum` is `0.0` for an empty column. `average` and `median` are `None` when there are no
/// values, `standard_deviation` (N-1 denominator) when there are fewer than two. The median of
/// an even count is the mean of the two middle values.
pub fn describe(values: &[f64]) -> NumericStats {
    NumericStats {
        sum: values.iter().sum(),
        average: mean(values),
        median: median(values),
        standard_deviation: sample_std_dev(values),
    }
}

/// Like [`describe`], but sums integers exactly before converting to `f64`.
pub fn describe_integers(values: &[i64]) -> NumericStats {
    let exact: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let floats: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    NumericStats {
        sum: exact as f64,
        ..describe(&floats)
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}
