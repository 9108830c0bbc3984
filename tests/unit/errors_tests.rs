/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use tcdc::errors::{AppError, ConfigError};

#[test]
fn test_appError_file_shouldDisplayCorrectly() {
    let error = AppError::File("missing.txt".to_string());
    let display = format!("{}", error);
    assert!(display.contains("File error"));
    assert!(display.contains("missing.txt"));
}

#[test]
fn test_configError_read_shouldDisplayPath() {
    let error = ConfigError::Read {
        path: PathBuf::from("tcdc.json"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to read config file"));
    assert!(display.contains("tcdc.json"));
    assert!(display.contains("denied"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapAsConfig() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = ConfigError::Serialize(parse_error).into();
    assert!(matches!(error, AppError::Config(_)));
    assert!(format!("{}", error).starts_with("Config error"));
}

#[test]
fn test_appError_fromIoError_shouldConvertToFile() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let error: AppError = io_error.into();
    assert!(matches!(error, AppError::File(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldConvertToUnknown() {
    let error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(error, AppError::Unknown(ref message) if message == "something odd"));
}
