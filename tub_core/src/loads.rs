//! Hydrostatic load derivation
//!
//! Turns the water depth and tub geometry into the pressures and line loads
//! that the panel and member calculators consume.
//!
//! # Overview
//!
//! - [`effective_water_depth`] - Configured depth clamped to the wall height
//! - [`bottom_pressure`] - Full hydrostatic pressure on the floor, γh
//! - [`average_side_pressure`] - Mean of the triangular wall profile, γh/2
//! - [`triangular_line_load`] - Resultant of the wall profile per unit width, γh²/2
//! - [`tributary_line_load`] - Pressure times the width a member collects from
//!
//! The walls are always loaded with the average pressure γh/2 applied as a
//! uniform plate load. The triangular resultant is reported for reference only.
//!
//! # Example
//!
//! ```
//! use tub_core::geometry::TubGeometry;
//! use tub_core::materials::MaterialsConfig;
//! use tub_core::loads::HydrostaticLoads;
//!
//! let loads = HydrostaticLoads::derive(&TubGeometry::default(), &MaterialsConfig::default());
//! assert!((loads.bottom_pressure_psi - 0.722).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::TubGeometry;
use crate::materials::MaterialsConfig;

/// Water depth actually acting on the tub (in).
///
/// The configured depth is clamped to `[0, height]`; water above the rim
/// spills and adds no load.
pub fn effective_water_depth(geom: &TubGeometry) -> f64 {
    if geom.water_depth_in > geom.height_in {
        log::debug!(
            "water depth {:.2} in exceeds wall height {:.2} in; clamping",
            geom.water_depth_in,
            geom.height_in
        );
    }
    geom.water_depth_in.min(geom.height_in).max(0.0)
}

/// Uniform pressure on the tub floor, q = γh (psi)
pub fn bottom_pressure(geom: &TubGeometry, mat: &MaterialsConfig) -> f64 {
    mat.water_weight_psi_per_in * effective_water_depth(geom)
}

/// Average lateral wall pressure, q = γh/2 (psi)
///
/// Mean of the linear profile running from zero at the waterline to γh at the
/// floor, used as the uniform-equivalent load on the walls.
pub fn average_side_pressure(geom: &TubGeometry, mat: &MaterialsConfig) -> f64 {
    bottom_pressure(geom, mat) / 2.0
}

/// Resultant of the triangular wall pressure per unit wall length, w = γh²/2 (lb/in)
///
/// Equal to the average side pressure times the wetted height.
pub fn triangular_line_load(geom: &TubGeometry, mat: &MaterialsConfig) -> f64 {
    average_side_pressure(geom, mat) * effective_water_depth(geom)
}

/// Line load on a member collecting pressure over a tributary width, w = p·b (lb/in)
#[inline]
pub fn tributary_line_load(pressure_psi: f64, tributary_width_in: f64) -> f64 {
    pressure_psi * tributary_width_in
}

/// Every derived load for one geometry, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrostaticLoads {
    /// Clamped water depth (in)
    pub water_depth_in: f64,
    /// Floor pressure γh (psi)
    pub bottom_pressure_psi: f64,
    /// Average wall pressure γh/2 (psi)
    pub side_pressure_psi: f64,
    /// Triangular wall resultant γh²/2 (lb/in)
    pub wall_resultant_lb_per_in: f64,
}

impl HydrostaticLoads {
    /// Derive all loads for the given tub and materials.
    pub fn derive(geom: &TubGeometry, mat: &MaterialsConfig) -> Self {
        let h = effective_water_depth(geom);
        let q = mat.water_weight_psi_per_in * h;
        HydrostaticLoads {
            water_depth_in: h,
            bottom_pressure_psi: q,
            side_pressure_psi: q / 2.0,
            wall_resultant_lb_per_in: q * h / 2.0,
        }
    }
}
