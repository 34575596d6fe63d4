//! Output formatting utilities

use crate::domain::Chirp;
use crate::error::{ChirpyError, Result};

/// Format a list of chirps for display, ids right-aligned
pub fn format_chirp_list(chirps: &[Chirp]) -> String {
    if chirps.is_empty() {
        return "No chirps found".to_string();
    }

    let width = chirps
        .iter()
        .map(|chirp| chirp.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for chirp in chirps {
        output.push_str(&format!("{:>width$}  {}\n", chirp.id, chirp.body, width = width));
    }
    output
}

/// Format a single chirp for display
pub fn format_chirp(chirp: &Chirp) -> String {
    format!("{}  {}", chirp.id, chirp.body)
}

/// Pretty JSON for any chirp output
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(ChirpyError::Encode)
}
