//! Initialize database use case

use crate::error::Result;
use crate::infrastructure::JsonFileDatabase;
use std::fs;
use std::path::Path;

/// Whether `init` had to create the database file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Ensure an (empty) database file exists at the specified path.
pub fn init(path: &Path) -> Result<InitOutcome> {
    // Create the parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let existed = path.exists();
    JsonFileDatabase::open(path)?;

    Ok(if existed {
        InitOutcome::AlreadyExists
    } else {
        InitOutcome::Created
    })
}
