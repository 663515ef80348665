//! # Side Wall Calculation
//!
//! Deflection and stress of the MDF wall panels under lateral water pressure.
//! The short and long walls are the same calculation. They differ in which tub
//! dimension runs along the wall and which post count subdivides it.
//!
//! ## Assumptions
//!
//! - Average pressure γh/2 applied uniformly (uniform equivalent of the
//!   triangular profile)
//! - Base deflection from a simply-supported plate whose governing span is the
//!   wall height
//! - Posts split the wall into `posts + 1` equal panels. Deflection is scaled
//!   by (panel width / wall length)⁴, the fourth-power span dependence of the
//!   plate formula
//! - Stress from a vertical strip beam one panel wide spanning the wall height
//!
//! ## Example
//!
//! ```rust
//! use tub_core::calculations::side_wall::{calculate, WallSide};
//! use tub_core::geometry::TubGeometry;
//! use tub_core::materials::MaterialsConfig;
//!
//! let mut geom = TubGeometry::default();
//! geom.long_wall_post_count = Some(1);
//!
//! let long = calculate(WallSide::Long, &geom, &MaterialsConfig::default());
//! let short = calculate(WallSide::Short, &geom, &MaterialsConfig::default());
//! assert!(long.max_deflection_in < short.max_deflection_in);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::DeflectionResult;
use crate::equations::{beam, plate, section};
use crate::geometry::TubGeometry;
use crate::loads;
use crate::materials::MaterialsConfig;

/// Which pair of walls to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    /// Walls spanning the tub width
    Short,
    /// Walls spanning the tub length
    Long,
}

impl WallSide {
    /// Horizontal length of this wall (in)
    pub fn wall_length_in(self, geom: &TubGeometry) -> f64 {
        match self {
            WallSide::Short => geom.width_in,
            WallSide::Long => geom.length_in,
        }
    }

    /// Stiffening posts along this wall
    pub fn post_count(self, geom: &TubGeometry) -> u32 {
        match self {
            WallSide::Short => geom.short_posts(),
            WallSide::Long => geom.long_posts(),
        }
    }

    /// Panels between posts along this wall
    pub fn panel_count(self, geom: &TubGeometry) -> f64 {
        match self {
            WallSide::Short => geom.short_wall_panels(),
            WallSide::Long => geom.long_wall_panels(),
        }
    }

    /// Width of one panel between posts (in)
    pub fn panel_width_in(self, geom: &TubGeometry) -> f64 {
        self.wall_length_in(geom) / self.panel_count(geom)
    }

    /// Deflection reduction from subdividing the wall, (panel width / wall length)⁴
    pub fn stiffening_factor(self, geom: &TubGeometry) -> f64 {
        self.panel_count(geom).recip().powi(4)
    }
}

/// Calculate wall deflection and stress for one side of the tub.
pub fn calculate(side: WallSide, geom: &TubGeometry, mat: &MaterialsConfig) -> DeflectionResult {
    let t = geom.side_thickness_in;
    let span = geom.height_in;
    let q = loads::average_side_pressure(geom, mat);

    let d = plate::flexural_rigidity(mat.mdf_e_psi, t);
    let base_deflection = plate::simply_supported_max_deflection(q, span, d);
    let max_deflection_in = base_deflection * side.stiffening_factor(geom);

    let panel_width = side.panel_width_in(geom);
    let w = loads::tributary_line_load(q, panel_width);
    let max_moment_inlb = beam::uniform_load_max_moment(w, span);
    let i = section::rectangular_moment_of_inertia(panel_width, t);
    let max_stress_psi = section::bending_stress(max_moment_inlb, t / 2.0, i);

    log::debug!(
        "{:?} wall: {} post(s), panel {:.2} in, q = {:.4} psi, δ = {:.5} in (base {:.5}), σ = {:.1} psi",
        side,
        side.post_count(geom),
        panel_width,
        q,
        max_deflection_in,
        base_deflection,
        max_stress_psi
    );

    DeflectionResult {
        span_in: span,
        load_lb_per_in: w,
        max_moment_inlb,
        max_deflection_in,
        max_stress_psi,
    }
}

/// Short wall (across the tub width)
pub fn calculate_short_wall(geom: &TubGeometry, mat: &MaterialsConfig) -> DeflectionResult {
    calculate(WallSide::Short, geom, mat)
}

/// Long wall (along the tub length)
pub fn calculate_long_wall(geom: &TubGeometry, mat: &MaterialsConfig) -> DeflectionResult {
    calculate(WallSide::Long, geom, mat)
}
