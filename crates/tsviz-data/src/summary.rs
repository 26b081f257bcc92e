//! Whole-dataset summary computation.

use std::collections::{BTreeMap, BTreeSet};

use tsviz_core::models::{Dataset, Summary};

/// Compute the [`Summary`] of `dataset` in one full pass.
///
/// Time bounds are absent for an empty dataset; every configured grouping
/// column is still reported, with a distinct count of zero.
pub fn summarize(dataset: &Dataset) -> Summary {
    let mut time_start = None;
    let mut time_end = None;
    for record in &dataset.rows {
        if time_start.map_or(true, |start| record.time < start) {
            time_start = Some(record.time);
        }
        if time_end.map_or(true, |end| record.time > end) {
            time_end = Some(record.time);
        }
    }

    let groups: BTreeMap<String, usize> = dataset
        .group_columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let distinct: BTreeSet<&str> =
                dataset.rows.iter().map(|r| r.keys[i].as_str()).collect();
            (column.clone(), distinct.len())
        })
        .collect();

    Summary {
        rows: dataset.len(),
        time_start,
        time_end,
        groups,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tsviz_core::models::Record;

    fn record(secs: i64, keys: &[&str]) -> Record {
        Record {
            time: Utc.timestamp_opt(secs, 0).unwrap(),
            value: 0.0,
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_summarize_empty_dataset() {
        let dataset = Dataset::new(vec!["sensor".to_string()]);
        let summary = summarize(&dataset);

        assert_eq!(summary.rows, 0);
        assert!(summary.time_start.is_none());
        assert!(summary.time_end.is_none());
        assert_eq!(summary.groups.get("sensor"), Some(&0));
    }

    #[test]
    fn test_summarize_time_bounds() {
        let mut dataset = Dataset::new(vec![]);
        dataset.rows.push(record(50, &[]));
        dataset.rows.push(record(10, &[]));
        dataset.rows.push(record(30, &[]));

        let summary = summarize(&dataset);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.time_start, Some(Utc.timestamp_opt(10, 0).unwrap()));
        assert_eq!(summary.time_end, Some(Utc.timestamp_opt(50, 0).unwrap()));
        assert!(summary.time_start <= summary.time_end);
        assert!(summary.groups.is_empty());
    }

    #[test]
    fn test_summarize_distinct_counts_per_column() {
        let mut dataset = Dataset::new(vec!["site".to_string(), "sensor".to_string()]);
        dataset.rows.push(record(0, &["north", "A"]));
        dataset.rows.push(record(1, &["north", "A"]));
        dataset.rows.push(record(2, &["north", "B"]));
        dataset.rows.push(record(3, &["south", "B"]));

        let summary = summarize(&dataset);
        assert_eq!(summary.groups.get("site"), Some(&2));
        assert_eq!(summary.groups.get("sensor"), Some(&2));
    }

    #[test]
    fn test_summarize_single_row() {
        let mut dataset = Dataset::new(vec![]);
        dataset.rows.push(record(42, &[]));

        let summary = summarize(&dataset);
        assert_eq!(summary.time_start, summary.time_end);
        assert_eq!(summary.time_start, Some(Utc.timestamp_opt(42, 0).unwrap()));
    }
}
