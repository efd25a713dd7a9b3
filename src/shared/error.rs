use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Individual licenses that could not be resolved do not change the exit code;
/// only failures that abort the whole run do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every license was attempted (some may have been skipped or failed)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable SBOM, malformed SBOM, invalid configuration, etc.)
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

/// Application-specific errors for license resolution.
#[derive(Debug, Error)]
pub enum LicenseError {
    #[error("Failed to read SBOM: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SbomReadError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM\nDetails: {details}\n\n💡 Hint: Please verify that the input is a CycloneDX JSON document")]
    SbomParseError { details: String },

    #[error("Failed to download {url}\nDetails: {details}")]
    DownloadError { url: String, details: String },

    #[error("Server returned status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to write license cache entry: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the cache directory is writable")]
    CacheWriteError { path: PathBuf, details: String },

    #[error("Failed to write license file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    TargetWriteError { path: PathBuf, details: String },

    #[error("Invalid license name '{name}': {reason}")]
    InvalidLicenseName { name: String, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
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
    fn test_sbom_read_error_display() {
        let error = LicenseError::SbomReadError {
            path: PathBuf::from("/test/bom.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read SBOM"));
        assert!(display.contains("/test/bom.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_sbom_parse_error_display() {
        let error = LicenseError::SbomParseError {
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse SBOM"));
        assert!(display.contains("line 1 column 1"));
        assert!(display.contains("CycloneDX"));
    }

    #[test]
    fn test_http_status_display() {
        let error = LicenseError::HttpStatus {
            url: "https://example.com/mit.txt".to_string(),
            status: 404,
        };
        assert_eq!(
            format!("{}", error),
            "Server returned status 404 for https://example.com/mit.txt"
        );
    }

    #[test]
    fn test_cache_write_error_display() {
        let error = LicenseError::CacheWriteError {
            path: PathBuf::from("/cache/MIT.txt"),
            details: "No space left on device".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("license cache entry"));
        assert!(display.contains("/cache/MIT.txt"));
        assert!(display.contains("No space left on device"));
    }

    #[test]
    fn test_invalid_license_name_display() {
        let error = LicenseError::InvalidLicenseName {
            name: "../etc".to_string(),
            reason: "contains '..'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("../etc"));
        assert!(display.contains("contains '..'"));
    }

    #[test]
    fn test_security_error_display() {
        let error = LicenseError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
