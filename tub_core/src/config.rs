//! # Tub Configuration
//!
//! `TubConfig` is the root record for one tub design. It bundles the tub
//! geometry, the frame geometry, and the material properties, and it is what
//! gets saved to and loaded from JSON config files.
//!
//! ## Structure
//!
//! ```text
//! TubConfig
//! ├── version: schema version of the file
//! ├── geometry: TubGeometry (required)
//! ├── frame: FrameGeometry (defaults when absent)
//! └── materials: MaterialsConfig (defaults when absent)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tub_core::config::TubConfig;
//!
//! let config = TubConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let json = serde_json::to_string_pretty(&config).unwrap();
//! assert!(json.contains("\"geometry\""));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::geometry::{FrameGeometry, TubGeometry};
use crate::materials::MaterialsConfig;

/// Current schema version for config files
pub const SCHEMA_VERSION: &str = "0.1.0";

fn schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Root configuration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubConfig {
    /// Schema version the file was written with
    #[serde(default = "schema_version")]
    pub version: String,

    /// Tub box geometry
    pub geometry: TubGeometry,

    /// Extrusion frame geometry
    #[serde(default)]
    pub frame: FrameGeometry,

    /// Material properties
    #[serde(default)]
    pub materials: MaterialsConfig,
}

impl Default for TubConfig {
    fn default() -> Self {
        TubConfig::new(TubGeometry::default())
    }
}

impl TubConfig {
    /// Create a config for the given tub with default frame and materials.
    pub fn new(geometry: TubGeometry) -> Self {
        TubConfig {
            version: schema_version(),
            geometry,
            frame: FrameGeometry::default(),
            materials: MaterialsConfig::default(),
        }
    }

    /// Validate every record and the schema version.
    pub fn validate(&self) -> CalcResult<()> {
        validate_version(&self.version)?;
        self.geometry.validate()?;
        self.frame.validate()?;
        self.materials.validate()?;
        Ok(())
    }
}

/// Check that a file version is compatible with the current schema.
///
/// Major versions must match; within 0.x, a file with a newer minor version
/// than this build understands is rejected.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0 && file_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}
