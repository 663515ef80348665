//! # Material Properties
//!
//! Material inputs for the tub model: the hydrostatic load source (water),
//! the MDF panels, and the aluminum extrusion frame.
//!
//! The extrusion is described by its section properties directly rather than
//! looked up from a catalog, since T-slot vendors publish I and c per profile.
//!
//! ## Example
//!
//! ```rust
//! use tub_core::materials::MaterialsConfig;
//!
//! let mat = MaterialsConfig::default();
//! assert!(mat.validate().is_ok());
//! println!("MDF E = {} psi", mat.mdf_e_psi);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Unit weight of fresh water as a pressure gradient (psi per inch of depth).
///
/// 62.4 pcf / 1728 in³/ft³ = 0.0361 lb/in³
pub const WATER_WEIGHT_PSI_PER_IN: f64 = 0.0361;

/// Typical modulus of elasticity for standard MDF (psi)
pub const MDF_E_PSI: f64 = 400_000.0;

/// Modulus of elasticity for 6063-T5/T6 aluminum extrusion (psi)
pub const ALUMINUM_E_PSI: f64 = 10_000_000.0;

/// Material property record.
///
/// ## JSON Example
///
/// ```json
/// {
///   "water_weight_psi_per_in": 0.0361,
///   "mdf_e_psi": 400000.0,
///   "aluminum_e_psi": 10000000.0,
///   "extrusion_i_in4": 0.2385,
///   "extrusion_c_in": 0.7874
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialsConfig {
    /// Water weight density expressed as pressure gain per inch of depth (psi/in)
    pub water_weight_psi_per_in: f64,

    /// MDF modulus of elasticity (psi)
    pub mdf_e_psi: f64,

    /// Aluminum extrusion modulus of elasticity (psi)
    pub aluminum_e_psi: f64,

    /// Extrusion moment of inertia about the bending axis (in⁴)
    pub extrusion_i_in4: f64,

    /// Distance from the extrusion's neutral axis to its extreme fiber (in)
    pub extrusion_c_in: f64,
}

impl Default for MaterialsConfig {
    /// Water, standard MDF, and a 40 mm square T-slot profile
    /// (I ≈ 9.93 cm⁴, c = 20 mm).
    fn default() -> Self {
        MaterialsConfig {
            water_weight_psi_per_in: WATER_WEIGHT_PSI_PER_IN,
            mdf_e_psi: MDF_E_PSI,
            aluminum_e_psi: ALUMINUM_E_PSI,
            extrusion_i_in4: 0.2385,
            extrusion_c_in: 0.7874,
        }
    }
}

impl MaterialsConfig {
    /// Validate that every property is a positive number.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("water_weight_psi_per_in", self.water_weight_psi_per_in)?;
        require_positive("mdf_e_psi", self.mdf_e_psi)?;
        require_positive("aluminum_e_psi", self.aluminum_e_psi)?;
        require_positive("extrusion_i_in4", self.extrusion_i_in4)?;
        require_positive("extrusion_c_in", self.extrusion_c_in)?;
        Ok(())
    }

    /// Extrusion section modulus S = I/c (in³)
    pub fn extrusion_section_modulus_in3(&self) -> f64 {
        self.extrusion_i_in4 / self.extrusion_c_in
    }
}
