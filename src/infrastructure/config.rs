//! Configuration management

use crate::error::{ChirpyError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "chirpy.toml";

const DEFAULT_DATABASE: &str = "database.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: PathBuf::from(DEFAULT_DATABASE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration from file and environment.
    ///
    /// An explicit `config_file` must exist. Without one, `chirpy.toml` in
    /// the working directory is used when present. `CHIRPY_DB` overrides the
    /// database path from either source.
    pub fn resolve(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_from_file(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        if let Ok(db) = std::env::var("CHIRPY_DB") {
            if !db.is_empty() {
                config.database = PathBuf::from(db);
            }
        }

        Ok(config)
    }

    /// Load config from a TOML file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChirpyError::Config(format!("config file not found: {}", path.display()))
            } else {
                ChirpyError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            ChirpyError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database, PathBuf::from("database.json"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chirpy.toml");
        fs::write(&path, "database = \"/var/lib/chirpy/db.json\"\nlog_level = \"debug\"\n")
            .unwrap();

        let config = Config::load_from_file(&path).unwrap();

        assert_eq!(config.database, PathBuf::from("/var/lib/chirpy/db.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chirpy.toml");
        fs::write(&path, "log_level = \"info\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();

        assert_eq!(config.database, PathBuf::from("database.json"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_file(&temp.path().join("nope.toml"));

        match result.unwrap_err() {
            ChirpyError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chirpy.toml");
        fs::write(&path, "database = [").unwrap();

        match Config::load_from_file(&path).unwrap_err() {
            ChirpyError::Config(msg) => assert!(msg.contains("Failed to parse config file")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
