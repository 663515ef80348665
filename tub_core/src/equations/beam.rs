//! # Simply-Supported Beam Formulas
//!
//! Uniform-load equations for a simply-supported beam, pin at one end and
//! roller at the other. These cover both the frame extrusions and the
//! strip-beam stress check applied to MDF panels.
//!
//! ## Notation
//!
//! - `L` = Span length (in)
//! - `x` = Position along beam from left support (in)
//! - `w` = Uniform load intensity (lb/in)
//! - `M` = Bending moment (lb·in)
//! - `δ` = Deflection (in)
//! - `E` = Modulus of elasticity (psi)
//! - `I` = Moment of inertia (in⁴)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive in the direction of water pressure (outward / downward)
//! - Moment: Positive sagging
//! - Deflection: Positive in the load direction
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 2a

/// Maximum moment for uniform load (at midspan)
///
/// # Formula
/// M_max = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Deflection at position x for uniform load w
///
/// # Formula (Roark's Table 8.1, Case 2a)
/// δ(x) = wx(L³ - 2Lx² + x³) / (24EI)
///
/// Zero at both supports, maximum at midspan.
#[inline]
pub fn uniform_load_deflection(w: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    w * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / (24.0 * e * i)
}

/// Maximum deflection for uniform load (at midspan)
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}
