//! Error message tests
//!
//! These strings are what the operator sees after "❌ Error:".

use paxgrid::error::GridError;
use std::path::PathBuf;

#[test]
fn test_missing_file_message() {
    let err = GridError::MissingFile(PathBuf::from("Grilla de Pax 2030.xlsx"));
    assert_eq!(err.to_string(), "File not found: Grilla de Pax 2030.xlsx");
}

#[test]
fn test_missing_sheet_message() {
    let err = GridError::MissingSheet("PISO 2".to_string());
    assert_eq!(err.to_string(), "Sheet 'PISO 2' does not exist in the workbook");
}

#[test]
fn test_missing_columns_lists_every_column() {
    let err = GridError::MissingColumns(vec!["Edad".to_string(), "Voucher".to_string()]);
    assert_eq!(err.to_string(), "CSV is missing required columns: Edad, Voucher");
}

#[test]
fn test_no_valid_records_message() {
    assert_eq!(GridError::NoValidRecords.to_string(), "No valid records to process");
}

#[test]
fn test_save_error_hints_file_in_use() {
    let err = GridError::Save {
        path: PathBuf::from("grid.xlsx"),
        reason: "Permission denied".to_string(),
    };
    let message = err.to_string();
    assert!(message.starts_with("Failed to save 'grid.xlsx': Permission denied"));
    assert!(message.contains("file is closed"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: GridError = io.into();
    assert!(matches!(err, GridError::Io(_)));
    assert_eq!(err.to_string(), "IO error: denied");
}

#[test]
fn test_yaml_error_conversion() {
    let yaml = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
    let err: GridError = yaml.into();
    assert!(err.to_string().starts_with("YAML configuration error:"));
}

#[test]
fn test_workbook_and_backup_messages() {
    assert_eq!(
        GridError::Workbook("bad zip".to_string()).to_string(),
        "Workbook error: bad zip"
    );
    assert_eq!(
        GridError::Backup("no name".to_string()).to_string(),
        "Backup error: no name"
    );
}

#[test]
fn test_config_error_message() {
    let err = GridError::Config("summary anchor row and column are 1-based".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid configuration: summary anchor row and column are 1-based"
    );
}
