use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, VizError};

// ── Configuration model ────────────────────────────────────────────────────────

/// Typed view of the YAML configuration file.
///
/// All required keys are checked eagerly by [`Config::load`]; a missing or
/// empty value fails the run before any input file is touched.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub columns: ColumnsConfig,
    pub output: OutputConfig,
}

/// Where to find the input files.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory the glob pattern is resolved against.
    pub source: PathBuf,
    /// Glob pattern matching the input CSV files, relative to `source`.
    pub pattern: String,
}

/// How source columns map onto the canonical dataset columns.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsConfig {
    /// Source column holding the timestamp; renamed to `time`.
    pub time: String,
    /// Source column holding the measured value; renamed to `value`.
    pub value: String,
    /// Columns whose value combinations partition the dataset.
    /// Kept under their original names.
    #[serde(default)]
    pub grouping: Vec<String>,
}

/// Where output artifacts are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Destination directory for plots and exports.
    pub dir: PathBuf,
}

// ── Loading ────────────────────────────────────────────────────────────────────

impl Config {
    /// Read and validate the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| VizError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every required value is usable.
    ///
    /// Serde already rejects missing keys; this catches present-but-empty
    /// values, which would otherwise surface as confusing downstream errors.
    fn validate(&self) -> Result<()> {
        fn require(value: &str, key: &str) -> Result<()> {
            if value.trim().is_empty() {
                return Err(VizError::ConfigValidation(format!(
                    "{key} must not be empty"
                )));
            }
            Ok(())
        }

        require(&self.data.source.to_string_lossy(), "data.source")?;
        require(&self.data.pattern, "data.pattern")?;
        require(&self.columns.time, "columns.time")?;
        require(&self.columns.value, "columns.value")?;
        require(&self.output.dir.to_string_lossy(), "output.dir")?;

        for (i, column) in self.columns.grouping.iter().enumerate() {
            require(column, &format!("columns.grouping[{i}]"))?;
        }

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
