//! CSV file discovery and ingestion.
//!
//! Expands the configured glob pattern, reads every matched file as headered
//! CSV, renames the configured columns onto the canonical `time`/`value`
//! names, and concatenates the rows into one [`Dataset`].

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tsviz_core::config::{ColumnsConfig, Config};
use tsviz_core::error::{Result, VizError};
use tsviz_core::models::{Dataset, Record};
use tsviz_core::time_utils::parse_timestamp;

// ── File discovery ─────────────────────────────────────────────────────────────

/// Expand `source` joined with `pattern` into matching file paths, sorted
/// lexicographically so ingestion order is deterministic.
///
/// Zero matches is not an error; the caller gets an empty list.
pub fn find_input_files(source: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = source.join(pattern).to_string_lossy().into_owned();

    let entries = glob::glob(&full_pattern).map_err(|source| VizError::Pattern {
        pattern: full_pattern.clone(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        warn!("No files match {}", full_pattern);
    }

    Ok(files)
}

/// Build the combined dataset for `config`.
///
/// Files are read sequentially in sorted order; any failure in any file
/// aborts the whole run.
pub fn ingest(config: &Config) -> Result<Dataset> {
    let files = find_input_files(&config.data.source, &config.data.pattern)?;

    let mut dataset = Dataset::new(config.columns.grouping.clone());
    for path in &files {
        let before = dataset.len();
        read_file(path, &config.columns, &mut dataset)?;
        debug!("{}: {} rows", path.display(), dataset.len() - before);
    }

    debug!(
        "Ingested {} rows from {} files",
        dataset.len(),
        files.len()
    );
    Ok(dataset)
}

// ── Per-file reading ───────────────────────────────────────────────────────────

/// Read one CSV file, project it onto the canonical columns, and append its
/// rows to `dataset`.
fn read_file(path: &Path, columns: &ColumnsConfig, dataset: &mut Dataset) -> Result<()> {
    let file = std::fs::File::open(path).map_err(|source| VizError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();

    let time_idx = column_index(&headers, &columns.time, path)?;
    let value_idx = column_index(&headers, &columns.value, path)?;
    let group_idx: Vec<usize> = columns
        .grouping
        .iter()
        .map(|column| column_index(&headers, column, path))
        .collect::<Result<_>>()?;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| csv_error(path, source))?;

        let raw_time = record.get(time_idx).unwrap_or("");
        let time = parse_timestamp(raw_time).ok_or_else(|| VizError::TimestampParse {
            path: path.to_path_buf(),
            value: raw_time.to_string(),
        })?;

        let raw_value = record.get(value_idx).unwrap_or("").trim();
        let value: f64 = raw_value.parse().map_err(|_| VizError::ValueParse {
            path: path.to_path_buf(),
            row: row_no,
            value: raw_value.to_string(),
        })?;

        // Projection: everything outside time/value/grouping is dropped here.
        let keys: Vec<String> = group_idx
            .iter()
            .map(|&i| record.get(i).unwrap_or("").to_string())
            .collect();

        dataset.rows.push(Record { time, value, keys });
    }

    Ok(())
}

fn column_index(headers: &csv::StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| VizError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn csv_error(path: &Path, source: csv::Error) -> VizError {
    VizError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
