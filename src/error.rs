use std::path::PathBuf;
use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Sheet '{0}' does not exist in the workbook")]
    MissingSheet(String),

    #[error("CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No valid records to process")]
    NoValidRecords,

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Failed to save '{}': {reason}. Make sure the file is closed and not in use.", .path.display())]
    Save { path: PathBuf, reason: String },

    #[error("Backup error: {0}")]
    Backup(String),
}
