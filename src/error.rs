use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Unsupported dataset format: {} (expected .csv or .parquet)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Row {row}: missing value for required column `{column}`")]
    MissingField { row: usize, column: &'static str },

    #[error("Record {id}: invalid value {value:?} in column `{column}`")]
    InvalidField {
        id: String,
        column: &'static str,
        value: String,
    },

    #[error("Duplicate show_id {0}")]
    DuplicateId(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type ReportResult<T> = std::result::Result<T, ReportError>;
