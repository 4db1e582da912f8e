use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and wrapper scripts to distinguish between
/// argument problems and failures of the run itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every identifier was processed and the report was written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing input, unreadable report, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the CVE enrichment run.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hints next to the variants.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Input file not found: {path}\n\n💡 Hint: {suggestion}")]
    InputNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse input file: {path}\nDetails: {details}\n\n💡 Hint: Each line must be 'library;CVE-ID' separated by a semicolon")]
    InputParseError { path: PathBuf, details: String },

    #[error("Failed to read previous report: {path}\nDetails: {details}\n\n💡 Hint: Fix or remove the file; it is rewritten at the end of every run")]
    ReportReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_input_not_found_display() {
        let error = CrawlError::InputNotFound {
            path: PathBuf::from("/data/libs.csv"),
            suggestion: "Pass the list with --input".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Input file not found"));
        assert!(display.contains("/data/libs.csv"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("--input"));
    }

    #[test]
    fn test_report_read_error_display() {
        let error = CrawlError::ReportReadError {
            path: PathBuf::from("libs_updated.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read previous report"));
        assert!(display.contains("libs_updated.csv"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = CrawlError::FileWriteError {
            path: PathBuf::from("/test/out.csv"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/out.csv"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_identifier_display() {
        let error = CrawlError::InvalidIdentifier {
            value: "CVE/1".to_string(),
            reason: "contains '/'".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid identifier 'CVE/1': contains '/'"
        );
    }

    #[test]
    fn test_validation_display() {
        let error = CrawlError::Validation {
            message: "workers must be at least 1".to_string(),
        };
        assert!(format!("{}", error).contains("workers must be at least 1"));
    }
}
