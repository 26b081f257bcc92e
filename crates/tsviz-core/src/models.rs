use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the combined dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// UTC timestamp parsed from the configured time column.
    pub time: DateTime<Utc>,
    /// Measured value parsed from the configured value column.
    pub value: f64,
    /// Grouping-key values, aligned with [`Dataset::group_columns`].
    pub keys: Vec<String>,
}

/// The combined in-memory dataset built by ingestion.
///
/// Rows are stored in file order (files sorted by path, rows in read order
/// within each file). Nothing is deduplicated or re-sorted here; per-group
/// time ordering is applied only at plot time.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Ordered grouping column names from the configuration.
    pub group_columns: Vec<String>,
    /// All records, concatenated across input files.
    pub rows: Vec<Record>,
}

impl Dataset {
    /// Create an empty dataset for the given grouping columns.
    pub fn new(group_columns: Vec<String>) -> Self {
        Self {
            group_columns,
            rows: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Canonical column names in export order: `time`, `value`, then the
    /// grouping columns under their original names.
    pub fn header(&self) -> Vec<String> {
        let mut header = vec!["time".to_string(), "value".to_string()];
        header.extend(self.group_columns.iter().cloned());
        header
    }
}

/// Derived, non-persistent view of a dataset computed by the summarize
/// command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Total row count.
    pub rows: usize,
    /// Earliest timestamp, absent when the dataset is empty.
    pub time_start: Option<DateTime<Utc>>,
    /// Latest timestamp, absent when the dataset is empty.
    pub time_end: Option<DateTime<Utc>>,
    /// Distinct-value count per grouping column.
    pub groups: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(secs: i64, value: f64, keys: &[&str]) -> Record {
        Record {
            time: Utc.timestamp_opt(secs, 0).unwrap(),
            value,
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_header_without_grouping() {
        let dataset = Dataset::new(vec![]);
        assert_eq!(dataset.header(), vec!["time", "value"]);
    }

    #[test]
    fn test_header_preserves_grouping_order() {
        let dataset = Dataset::new(vec!["site".to_string(), "sensor".to_string()]);
        assert_eq!(dataset.header(), vec!["time", "value", "site", "sensor"]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut dataset = Dataset::new(vec![]);
        assert!(dataset.is_empty());

        dataset.rows.push(record(0, 1.0, &[]));
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());
    }
}
