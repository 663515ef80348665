//! # Bottom Panel Calculation
//!
//! Deflection and stress of the MDF floor panel under full hydrostatic pressure.
//!
//! ## Assumptions
//!
//! - The floor is divided into bays by the transverse supports; each bay is a
//!   plate simply supported on all four edges
//! - Uniform pressure γh over the whole bay (no depth variation across the floor)
//! - Deflection governed by the short side of the bay
//! - Stress from a strip beam spanning the short side, as wide as the long side
//!
//! ## Example
//!
//! ```rust
//! use tub_core::calculations::bottom_panel::calculate;
//! use tub_core::geometry::TubGeometry;
//! use tub_core::materials::MaterialsConfig;
//!
//! let result = calculate(&TubGeometry::default(), &MaterialsConfig::default());
//!
//! assert_eq!(result.span_in, 30.0);
//! println!("δ_max = {:.4} in, σ_max = {:.0} psi", result.max_deflection_in, result.max_stress_psi);
//! ```

use crate::calculations::DeflectionResult;
use crate::equations::{beam, plate, section};
use crate::geometry::TubGeometry;
use crate::loads;
use crate::materials::MaterialsConfig;

/// Plan dimensions of one floor bay as (short side, long side) in inches.
pub fn bay_dimensions(geom: &TubGeometry) -> (f64, f64) {
    if geom.bottom_support_count < 2 {
        log::debug!(
            "{} bottom support(s) configured; treating the floor as a single bay",
            geom.bottom_support_count
        );
    }
    let panel_length = geom.bottom_panel_length_in();
    (panel_length.min(geom.width_in), panel_length.max(geom.width_in))
}

/// Calculate bottom panel deflection and stress.
///
/// # Steps
///
/// 1. Bay length L/(n−1), short side a = min(bay length, width)
/// 2. Plate rigidity D from bottom thickness
/// 3. δ_max = k·q·a⁴/D
/// 4. σ_max from a strip of width b spanning a: w = q·b, M = wa²/8, σ = M(t/2)/I
pub fn calculate(geom: &TubGeometry, mat: &MaterialsConfig) -> DeflectionResult {
    let (a, b) = bay_dimensions(geom);
    let t = geom.bottom_thickness_in;
    let q = loads::bottom_pressure(geom, mat);

    let d = plate::flexural_rigidity(mat.mdf_e_psi, t);
    let max_deflection_in = plate::simply_supported_max_deflection(q, a, d);

    let w = loads::tributary_line_load(q, b);
    let max_moment_inlb = beam::uniform_load_max_moment(w, a);
    let i = section::rectangular_moment_of_inertia(b, t);
    let max_stress_psi = section::bending_stress(max_moment_inlb, t / 2.0, i);

    log::debug!(
        "bottom panel: bay {:.2} x {:.2} in, q = {:.4} psi, D = {:.1}, δ = {:.5} in, σ = {:.1} psi",
        a,
        b,
        q,
        d,
        max_deflection_in,
        max_stress_psi
    );

    DeflectionResult {
        span_in: a,
        load_lb_per_in: w,
        max_moment_inlb,
        max_deflection_in,
        max_stress_psi,
    }
}
