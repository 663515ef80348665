//! # tub_core - Tub Deflection Calculation Engine
//!
//! `tub_core` estimates deflection and bending stress for a rectangular tub
//! built from MDF panels on an aluminum extrusion frame, loaded by the water
//! it holds. It uses closed-form beam and thin-plate formulas. There is no
//! finite-element model, so results are engineering estimates.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from geometry + materials to results
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Inch-pound internally**: Millimetres only for the extrusion size and display
//! - **One formula set**: The same plate and load model for every surface
//!
//! ## Quick Start
//!
//! ```rust
//! use tub_core::calculations::bottom_panel;
//! use tub_core::geometry::TubGeometry;
//! use tub_core::materials::MaterialsConfig;
//! use tub_core::profile::bottom_profile;
//!
//! let geom = TubGeometry::default();
//! let mat = MaterialsConfig::default();
//!
//! let result = bottom_panel::calculate(&geom, &mat);
//! println!("Bottom: δ = {:.4} in, σ = {:.0} psi", result.max_deflection_in, result.max_stress_psi);
//!
//! let points = bottom_profile(&geom, &mat, None);
//! assert_eq!(points.len(), 11);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Tub and frame dimensions
//! - [`materials`] - Water, MDF and extrusion properties
//! - [`equations`] - Beam, plate and section formulas
//! - [`loads`] - Hydrostatic load derivation
//! - [`calculations`] - Bottom panel, side wall and frame calculators
//! - [`profile`] - Sampled deflection profiles for plotting
//! - [`report`] - Bundled analysis of a whole config
//! - [`config`] / [`file_io`] - Config records and JSON load/save
//! - [`units`] - Inch/millimetre conversion
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod geometry;
pub mod loads;
pub mod materials;
pub mod profile;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{DeflectionResult, WallSide};
pub use config::TubConfig;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_config, save_config};
pub use geometry::{FrameGeometry, TubGeometry};
pub use materials::MaterialsConfig;
pub use profile::{DeflectionProfilePoint, SamplePattern};
pub use report::TubAnalysis;
