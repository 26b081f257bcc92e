//! Flat-file export of the combined dataset.

use std::path::{Path, PathBuf};

use tracing::debug;
use tsviz_core::error::{Result, VizError};
use tsviz_core::models::Dataset;
use tsviz_core::time_utils::format_timestamp;

/// Name of the export file written under the output directory.
pub const EXPORT_FILE_NAME: &str = "combined.csv";

/// Write `dataset` as a single CSV file under `out_dir`, overwriting any
/// previous export. Returns the path written.
///
/// The header row is the canonical column order (`time`, `value`, grouping
/// columns); rows keep the dataset's current order. An empty dataset still
/// produces a header-only file.
pub fn export_csv(dataset: &Dataset, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|source| VizError::OutputWrite {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(EXPORT_FILE_NAME);
    let write_err = |source: std::io::Error| VizError::OutputWrite {
        path: path.clone(),
        source,
    };

    let file = std::fs::File::create(&path).map_err(write_err)?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(dataset.header())
        .map_err(|e| write_err(std::io::Error::other(e)))?;

    for record in &dataset.rows {
        let mut row = vec![format_timestamp(record.time), record.value.to_string()];
        row.extend(record.keys.iter().cloned());
        writer
            .write_record(&row)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
    }

    writer.flush().map_err(write_err)?;

    debug!("Exported {} rows to {}", dataset.len(), path.display());
    Ok(path)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
