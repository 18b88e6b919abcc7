//! Shared error types for reflection, decoration and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for electrolyte-decorator operations
#[derive(Debug, Error)]
pub enum Error {
    /// The source text of a callable could not be matched against any
    /// recognized declaration shape.
    #[error("Parse error in `{callable}`: {message}")]
    Parse { callable: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a parse error for the named callable
    pub fn parse(callable: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            callable: callable.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Whether this error is a parse failure
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_names_callable() {
        let err = Error::parse("logger", "no parameter list found");
        assert_eq!(
            err.to_string(),
            "Parse error in `logger`: no parameter list found"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::file_system("Failed to read config file", "/tmp/x.toml", io);
        assert_eq!(err.to_string(), "File system error: Failed to read config file");
        assert_eq!(err.source().map(|e| e.to_string()), Some("missing".to_string()));
        assert!(!err.is_parse());
    }

    #[test]
    fn test_json_error_is_transparent() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let message = json.to_string();
        let err: Error = json.into();
        assert_eq!(err.to_string(), message);
    }
}
