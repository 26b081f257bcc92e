use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by tsviz.
#[derive(Error, Debug)]
pub enum VizError {
    /// The configuration file does not exist or could not be opened.
    #[error("Configuration file not found: {path}: {source}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML or is missing required keys.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// A configuration value is present but unusable (e.g. an empty string).
    #[error("Configuration error: {0}")]
    ConfigValidation(String),

    /// The configured glob pattern is malformed.
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A matched input file could not be read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A matched input file could not be parsed as CSV.
    #[error("Failed to parse CSV file {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A configured column name is absent from a file's header row.
    #[error("Column {column:?} not found in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A cell in the time column did not match any recognised format.
    #[error("Invalid timestamp {value:?} in {path}")]
    TimestampParse { path: PathBuf, value: String },

    /// A cell in the value column is not a number.
    #[error("Invalid numeric value {value:?} in {path} (row {row})")]
    ValueParse {
        path: PathBuf,
        row: usize,
        value: String,
    },

    /// An output file or directory could not be written.
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plotting backend failed while rendering an image.
    #[error("Failed to render plot {path}: {message}")]
    Render { path: PathBuf, message: String },

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the tsviz crates.
pub type Result<T> = std::result::Result<T, VizError>;
