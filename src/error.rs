//! Error types for chirpy

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chirpy
#[derive(Debug, Error)]
pub enum ChirpyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode database {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Chirp not found: {0}")]
    ChirpNotFound(u64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChirpyError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChirpyError::Decode { .. } => 2,
            ChirpyError::ChirpNotFound(_) => 3,
            ChirpyError::Config(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChirpyError::Decode { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • The file at {} is not a valid chirpy database\n\
                    • Point --db or CHIRPY_DB at another file\n\
                    • An empty file is a valid empty database",
                    self,
                    path.display()
                )
            }
            ChirpyError::ChirpNotFound(id) => {
                format!(
                    "No chirp with id {}\n\n\
                    Suggestions:\n\
                    • Use 'chirpy list' to see existing chirps\n\
                    • Ids start at 1",
                    id
                )
            }
            ChirpyError::Config(msg) => {
                if msg.contains("chirpy.toml") || msg.contains("config file") {
                    format!(
                        "{}\n\n\
                        Expected keys: database, log_level\n\
                        Example:\n\
                        database = \"database.json\"\n\
                        log_level = \"info\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChirpyError
pub type Result<T> = std::result::Result<T, ChirpyError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{\"chirps\":").unwrap_err()
    }

    #[test]
    fn test_decode_error_suggestions() {
        let err = ChirpyError::Decode {
            path: PathBuf::from("/tmp/database.json"),
            source: decode_error(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/database.json"));
        assert!(msg.contains("CHIRPY_DB"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_chirp_not_found_suggestions() {
        let err = ChirpyError::ChirpNotFound(42);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("42"));
        assert!(msg.contains("chirpy list"));
    }

    #[test]
    fn test_config_file_suggestions() {
        let err = ChirpyError::Config("Failed to parse chirpy.toml: bad".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("database, log_level"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ChirpyError::ChirpNotFound(1).exit_code(), 3);
        assert_eq!(ChirpyError::Config("x".to_string()).exit_code(), 4);
        assert_eq!(ChirpyError::Encode(decode_error()).exit_code(), 1);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ChirpyError::from(io).exit_code(), 1);
    }

    #[test]
    fn test_encode_message_is_not_database_specific() {
        let msg = ChirpyError::Encode(decode_error()).to_string();
        assert!(msg.starts_with("Failed to encode JSON: "));
        assert!(!msg.contains("database"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let msg = ChirpyError::from(io).display_with_suggestions();
        assert_eq!(msg, "IO error: disk full");
    }
}
