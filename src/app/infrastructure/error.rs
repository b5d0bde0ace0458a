use thiserror::Error;

use crate::app::services::import::ImportError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_import_error_conversion() {
        let app_err: AppError = ImportError::Empty.into();
        assert!(matches!(app_err, AppError::Import(ImportError::Empty)));
        assert_eq!(app_err.to_string(), "Import error: file is empty");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Template("unknown template: foo".to_string());
        assert_eq!(err.to_string(), "Template error: unknown template: foo");

        let err = AppError::Persistence("no data directory".to_string());
        assert_eq!(err.to_string(), "Persistence error: no data directory");
    }
}
