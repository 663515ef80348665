//! # Thin Plate Formulas
//!
//! Closed-form approximations for a rectangular plate simply supported on all
//! four edges under uniform pressure (Kirchhoff thin-plate theory).
//!
//! ## Notation
//!
//! - `E` = Modulus of elasticity (psi)
//! - `t` = Plate thickness (in)
//! - `ν` = Poisson's ratio
//! - `D` = Flexural rigidity (lb·in)
//! - `q` = Uniform pressure (psi)
//! - `a` = Short side of the plate (in)
//! - `u, v` = Normalized plate coordinates in [0, 1]
//!
//! ## Deflection coefficient
//!
//! The maximum deflection uses δ_max = k·q·a⁴/D with k = 0.00406, the
//! square-plate coefficient from Timoshenko's series solution. For longer
//! plates the true coefficient grows toward 0.013 (a/b → 0); the square value
//! is used for every surface so that bottom, short wall and long wall results
//! stay comparable with one another.
//!
//! ## References
//!
//! - Timoshenko & Woinowsky-Krieger, Theory of Plates and Shells, Table 8
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 11.4, Case 1a

use std::f64::consts::PI;

/// Poisson's ratio used for MDF panels
pub const MDF_POISSON_RATIO: f64 = 0.30;

/// Maximum-deflection coefficient for a uniformly loaded, simply-supported square plate
pub const PLATE_DEFLECTION_COEFF: f64 = 0.00406;

/// Flexural rigidity of a plate
///
/// # Formula
/// D = E·t³ / (12·(1 − ν²)), ν = 0.30
///
/// # Example
/// ```rust
/// use tub_core::equations::plate::flexural_rigidity;
///
/// // 3/4" MDF, E = 400 ksi
/// let d = flexural_rigidity(400_000.0, 0.75);
/// assert!((d - 15453.30).abs() < 0.01);
/// ```
#[inline]
pub fn flexural_rigidity(e: f64, t: f64) -> f64 {
    e * t.powi(3) / (12.0 * (1.0 - MDF_POISSON_RATIO * MDF_POISSON_RATIO))
}

/// Maximum (center) deflection of a simply-supported plate under uniform pressure
///
/// # Formula
/// δ_max = k·q·a⁴ / D, k = 0.00406
///
/// # Arguments
/// * `q` - Uniform pressure (psi)
/// * `a` - Governing (short) span (in)
/// * `d` - Flexural rigidity (lb·in)
#[inline]
pub fn simply_supported_max_deflection(q: f64, a: f64, d: f64) -> f64 {
    PLATE_DEFLECTION_COEFF * q * a.powi(4) / d
}

/// First-mode shape of a simply-supported plate
///
/// # Formula
/// φ(u, v) = sin(πu)·sin(πv)
///
/// Zero along every edge, exactly 1.0 at the center (u = v = 0.5).
#[inline]
pub fn mode_shape(u: f64, v: f64) -> f64 {
    (PI * u).sin() * (PI * v).sin()
}
