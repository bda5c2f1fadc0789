//! # File I/O Module
//!
//! Scenario file operations:
//! - **Atomic saves**: write to `.tmp`, sync, rename so an interrupted save
//!   never leaves a truncated file
//! - **Version validation**: refuse files written by an incompatible schema
//!
//! ## File Format
//!
//! Scenarios are saved as `.fin` files containing JSON. Plain parameter sets
//! (just a [`BeamParams`] object) can be loaded with [`load_params`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use fin_core::file_io::{load_scenario, save_scenario};
//! use fin_core::params::BeamParams;
//! use fin_core::scenario::Scenario;
//! use std::path::Path;
//!
//! let scenario = Scenario::new("default-params", BeamParams::default());
//! let path = Path::new("default.fin");
//!
//! save_scenario(&scenario, path)?;
//! let loaded = load_scenario(path)?;
//! assert_eq!(loaded.meta.id, "default-params");
//! # Ok::<(), fin_core::errors::FinError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::errors::{FinError, FinResult};
use crate::params::BeamParams;
use crate::scenario::{Scenario, SCHEMA_VERSION};

/// Serialize `value` as pretty JSON and write it to `path` atomically.
///
/// The save process:
/// 1. Serialize to JSON
/// 2. Write to a temporary file next to the target (`.tmp`)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over the target
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> FinResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| FinError::serialization(e.to_string()))?;

    let tmp_path = path.with_extension(match path.extension() {
        Some(ext) => format!("{}.tmp", ext.to_string_lossy()),
        None => "tmp".to_string(),
    });

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        FinError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        FinError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        FinError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        FinError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "Saved JSON file");
    Ok(())
}

/// Save a scenario with atomic write semantics.
pub fn save_scenario(scenario: &Scenario, path: &Path) -> FinResult<()> {
    save_json(scenario, path)
}

/// Load a scenario from a `.fin` file.
///
/// # Returns
///
/// * `Ok(Scenario)` - Successfully loaded scenario
/// * `Err(FinError::VersionMismatch)` - File version is incompatible
/// * `Err(FinError::SerializationError)` - Invalid JSON
/// * `Err(FinError::FileError)` - I/O error
pub fn load_scenario(path: &Path) -> FinResult<Scenario> {
    let contents = read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&contents)
        .map_err(|e| FinError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))?;

    validate_version(&scenario.meta.version)?;
    Ok(scenario)
}

/// Load a bare parameter set from a JSON file.
///
/// Missing numeric fields read as zero, as with any other [`BeamParams`]
/// deserialization.
pub fn load_params(path: &Path) -> FinResult<BeamParams> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| FinError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

fn read_to_string(path: &Path) -> FinResult<String> {
    let mut file =
        File::open(path).map_err(|e| FinError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| FinError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> FinResult<()> {
    let mismatch = || FinError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    let (Some(&file_major), Some(&current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor version may contain breaking changes
    if current_major == 0 {
        if let (Some(&file_minor), Some(&current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("fin_core_test_{}_{}.fin", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let scenario = Scenario::new("roundtrip", BeamParams::default()).with_description("saved");
        save_scenario(&scenario, &path).unwrap();

        let loaded = load_scenario(&path).unwrap();
        assert_eq!(loaded, scenario);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        let tmp_path = path.with_extension("fin.tmp");

        save_scenario(&Scenario::new("atomic", BeamParams::default()), &path).unwrap();
        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_params_file() {
        let path = temp_path("params");
        fs::write(&path, r#"{"layers_foot": 6, "layers_tip": 3, "length_mm": 300.0}"#).unwrap();

        let params = load_params(&path).unwrap();
        assert_eq!(params.layers_foot, 6);
        assert_eq!(params.layers_tip, 3);
        assert_eq!(params.width_mm, 0.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_scenario(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let path = temp_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        let err = load_scenario(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_newer_version_rejected_on_load() {
        let path = temp_path("newer");
        let mut scenario = Scenario::new("newer", BeamParams::default());
        scenario.meta.version = "0.9.0".to_string();
        save_scenario(&scenario, &path).unwrap();

        let err = load_scenario(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }
}
