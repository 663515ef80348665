//! # Frame Extrusion Calculation
//!
//! Aluminum extrusion members that carry the panel reactions back to the frame
//! corners.
//!
//! ## Members
//!
//! - **Long rail**: horizontal extrusion behind a long wall. The wall panel spans
//!   vertically between the bottom and top rails, so each rail collects the
//!   average wall pressure over half the wetted height. Long-wall posts split
//!   the rail into shorter spans.
//! - **Bottom support**: an interior transverse extrusion under the floor,
//!   spanning the frame width and collecting full floor pressure over one bay
//!   length.
//!
//! Both are simply-supported beams under uniform load:
//! M = wL²/8, δ = 5wL⁴/(384EI), σ = M/S with S = I/c.
//!
//! ## Example
//!
//! ```rust
//! use tub_core::calculations::frame;
//! use tub_core::geometry::{FrameGeometry, TubGeometry};
//! use tub_core::materials::MaterialsConfig;
//!
//! let rail = frame::calculate(
//!     &TubGeometry::default(),
//!     &FrameGeometry::default(),
//!     &MaterialsConfig::default(),
//! );
//! assert_eq!(rail.span_in, 63.0);
//! ```

use crate::calculations::DeflectionResult;
use crate::equations::beam;
use crate::geometry::{FrameGeometry, TubGeometry};
use crate::loads;
use crate::materials::MaterialsConfig;

fn extrusion_beam(span: f64, w: f64, mat: &MaterialsConfig) -> DeflectionResult {
    let max_moment_inlb = beam::uniform_load_max_moment(w, span);
    let max_deflection_in =
        beam::uniform_load_max_deflection(w, span, mat.aluminum_e_psi, mat.extrusion_i_in4);
    let max_stress_psi = max_moment_inlb / mat.extrusion_section_modulus_in3();

    DeflectionResult {
        span_in: span,
        load_lb_per_in: w,
        max_moment_inlb,
        max_deflection_in,
        max_stress_psi,
    }
}

/// Calculate the long frame rail (the frame/extrusion result).
///
/// Span is the frame length divided by the long-wall panel count; tributary
/// width is half the effective water depth.
pub fn calculate(geom: &TubGeometry, frame: &FrameGeometry, mat: &MaterialsConfig) -> DeflectionResult {
    let span = frame.length_in / geom.long_wall_panels();
    let tributary = loads::effective_water_depth(geom) / 2.0;
    let w = loads::tributary_line_load(loads::average_side_pressure(geom, mat), tributary);

    let result = extrusion_beam(span, w, mat);
    log::debug!(
        "frame rail: {:.1} mm extrusion, span {:.2} in, w = {:.3} lb/in, δ = {:.5} in, σ = {:.0} psi",
        frame.extrusion_size_mm,
        span,
        w,
        result.max_deflection_in,
        result.max_stress_psi
    );
    result
}

/// Calculate an interior transverse bottom support.
///
/// Span is the frame width; tributary width is one floor bay.
pub fn calculate_bottom_support(
    geom: &TubGeometry,
    frame: &FrameGeometry,
    mat: &MaterialsConfig,
) -> DeflectionResult {
    let span = frame.width_in;
    let tributary = geom.bottom_panel_length_in();
    let w = loads::tributary_line_load(loads::bottom_pressure(geom, mat), tributary);

    let result = extrusion_beam(span, w, mat);
    log::debug!(
        "bottom support: span {:.2} in, tributary {:.2} in, w = {:.3} lb/in, δ = {:.5} in, σ = {:.0} psi",
        span,
        tributary,
        w,
        result.max_deflection_in,
        result.max_stress_psi
    );
    result
}
