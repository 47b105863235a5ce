//! Error types for the Folio load and render pipeline.
//!
//! - [`CsvError`] - Dataset reading and CSV parsing errors
//! - [`ShapeError`] - Fatal configuration errors found while shaping rows
//! - [`LoadError`] - Top-level loading errors (parse + shape)
//! - [`ServerError`] - HTTP server errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading or parsing the dataset.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to decode the file content.
    #[error("Failed to decode dataset: {0}")]
    EncodingError(String),

    /// Invalid CSV format.
    #[error("Invalid CSV format at line {line}: {message}")]
    ParseError { line: u64, message: String },

    /// Empty file.
    #[error("Dataset is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in dataset")]
    NoHeaders,

    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CsvError::IoError(io),
            csv::ErrorKind::Utf8 { err, .. } => CsvError::EncodingError(err.to_string()),
            other => CsvError::ParseError {
                line,
                message: format!("{:?}", other),
            },
        }
    }
}

// =============================================================================
// Shaping Errors
// =============================================================================

/// Fatal configuration errors detected while shaping rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// The dataset has no profile rows at all.
    #[error("Dataset has no 'profile' rows; at least 'name' and 'role' are required")]
    MissingProfile,

    /// A required profile key is absent.
    #[error("Profile is missing the required '{0}' row (section=profile, key={0})")]
    MissingProfileKey(String),
}

// =============================================================================
// Load Errors (top-level)
// =============================================================================

/// Top-level loading errors.
///
/// This is the error returned by [`crate::transform::pipeline::load_portfolio`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// Dataset parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Shaping error.
    #[error("Portfolio error: {0}")]
    Shape(#[from] ShapeError),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Loading error (startup or reload).
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Invalid request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for shaping operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::EmptyFile;
        let load_err: LoadError = csv_err.into();
        assert!(load_err.to_string().contains("empty"));

        let shape_err = ShapeError::MissingProfileKey("name".into());
        let load_err: LoadError = shape_err.into();
        assert!(load_err.to_string().contains("'name'"));

        let server_err: ServerError = load_err.into();
        assert!(server_err.to_string().starts_with("Load error"));
    }

    #[test]
    fn test_missing_column_format() {
        let err = CsvError::MissingColumn("section".into());
        assert_eq!(err.to_string(), "Missing required column: section");
    }
}
