//! JSON I/O helpers.
//!
//! - `load_observation`: read a [`StrandObservation`] produced by the
//!   segmentation and quantization stages.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::recovery::StrandObservation;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load one observation document from disk.
pub fn load_observation(path: &Path) -> Result<StrandObservation, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read observation {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse observation {}: {e}", path.display()))
}

/// Serialize `value` as pretty JSON into `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
