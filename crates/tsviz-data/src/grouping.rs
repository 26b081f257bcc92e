//! Partitioning of the dataset by grouping-key combination.
//!
//! Built as an explicit single pass producing a map from key tuple to row
//! indices, so the plot layer never touches rows outside its group.

use std::collections::BTreeMap;

use tsviz_core::models::Dataset;

/// One partition of the dataset: the grouping-key tuple and the indices of
/// the rows carrying it, in original dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Grouping-column values, aligned with `Dataset::group_columns`.
    /// Empty when no grouping columns are configured.
    pub key: Vec<String>,
    /// Indices into `Dataset::rows`, ascending.
    pub indices: Vec<usize>,
}

/// Partition `dataset` into groups, ordered by key.
///
/// With no grouping columns every row shares the empty key, so a non-empty
/// dataset forms exactly one group. An empty dataset always yields zero
/// groups, whatever the grouping configuration.
pub fn partition(dataset: &Dataset) -> Vec<Group> {
    let mut map: BTreeMap<Vec<String>, Vec<usize>> = BTreeMap::new();
    for (index, record) in dataset.rows.iter().enumerate() {
        map.entry(record.keys.clone()).or_default().push(index);
    }

    map.into_iter()
        .map(|(key, indices)| Group { key, indices })
        .collect()
}

/// Derive the label naming one group.
///
/// Multiple grouping columns join their values with `_` in column order; a
/// single column uses the value directly; no grouping columns use the fixed
/// label `all`. Values that themselves contain `_` can collide; no escaping
/// is attempted.
pub fn group_label(key: &[String]) -> String {
    match key {
        [] => "all".to_string(),
        [single] => single.clone(),
        many => many.join("_"),
    }
}

/// Return `indices` reordered so the referenced rows are ascending in time.
///
/// The sort is stable: rows with equal timestamps keep their original
/// relative order.
pub fn sorted_by_time(dataset: &Dataset, indices: &[usize]) -> Vec<usize> {
    let mut sorted = indices.to_vec();
    sorted.sort_by_key(|&i| dataset.rows[i].time);
    sorted
}

// ── Tests ──────────────────────────────────────────────────────────────────────
