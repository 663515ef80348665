//! # Config File I/O
//!
//! Loads and saves [`TubConfig`] records as JSON.
//!
//! - **Atomic saves**: write to a `.tmp` file, verify it parses, then rename
//!   over the target
//! - **Validated loads**: the schema version and every field are checked
//!   before a config is handed to the calculators
//!
//! ## Example
//!
//! ```rust,no_run
//! use tub_core::config::TubConfig;
//! use tub_core::file_io::{load_config, save_config};
//! use std::path::Path;
//!
//! let path = Path::new("tub.json");
//! save_config(&TubConfig::default(), path)?;
//!
//! let config = load_config(path)?;
//! println!("Water depth: {} in", config.geometry.water_depth_in);
//! # Ok::<(), tub_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::TubConfig;
use crate::errors::{CalcError, CalcResult};

/// Temp file path used during an atomic save
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Parse a config from JSON text without touching the filesystem.
///
/// A missing `geometry` record is reported as [`CalcError::MissingField`]
/// rather than a generic parse error.
pub fn parse_config(json: &str) -> CalcResult<TubConfig> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| CalcError::serialization(e.to_string()))?;

    if value.get("geometry").is_none() {
        return Err(CalcError::missing_field("geometry"));
    }

    let config: TubConfig =
        serde_json::from_value(value).map_err(|e| CalcError::serialization(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Create `path`, write `bytes` and sync them to disk.
fn write_synced(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut file = File::create(path).map_err(|e| {
        CalcError::file_error("create temp file", path.display().to_string(), e.to_string())
    })?;

    file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", path.display().to_string(), e.to_string())
    })?;

    file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", path.display().to_string(), e.to_string())
    })
}

/// Save a config to a file with atomic write semantics.
///
/// The save process:
/// 1. Validate and serialize the config to JSON
/// 2. Write to a temporary file (`<path>.tmp`) and sync it to disk
/// 3. Re-read the temp file and confirm it parses
/// 4. Rename the temp file over `path`
pub fn save_config(config: &TubConfig, path: &Path) -> CalcResult<()> {
    config.validate()?;

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);

    let written = write_synced(&tmp_path, json.as_bytes()).and_then(|()| {
        fs::read_to_string(&tmp_path).map_err(|e| {
            CalcError::file_error("verify temp file", tmp_path.display().to_string(), e.to_string())
        })
    });
    let written = match written {
        Ok(written) => written,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
    };
    if let Err(e) = serde_json::from_str::<TubConfig>(&written) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CalcError::serialization(format!("Verification of {} failed: {}", tmp_path.display(), e)));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::info!("saved config to {}", path.display());
    Ok(())
}

/// Load and validate a config from a file.
///
/// # Returns
///
/// * `Ok(TubConfig)` - Successfully loaded and validated
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::MissingField)` - No `geometry` record
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::InvalidInput)` - A value failed validation
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_config(path: &Path) -> CalcResult<TubConfig> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let config = parse_config(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => {
            CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), reason))
        }
        other => other,
    })?;

    log::info!("loaded config from {}", path.display());
    Ok(config)
}
