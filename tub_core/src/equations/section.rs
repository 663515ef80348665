//! # Cross-Section Property Formulas
//!
//! Geometric properties used to turn a panel or extrusion into a beam for
//! stress checks.
//!
//! ## Notation
//!
//! - `I` = Moment of inertia (second moment of area)
//! - `c` = Distance from neutral axis to extreme fiber
//! - `b` = Width of section (for a panel strip, the strip width)
//! - `d` = Depth of section (for a panel strip, the panel thickness)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 3

/// Calculate moment of inertia for rectangular section about centroidal axis
///
/// A panel strip bends about its mid-thickness:
///
/// ```text
///     ┌──────────────────────┐
///   t │══════════════════════│ ← neutral axis at t/2
///     └──────────────────────┘
///                b
/// ```
///
/// # Formula
/// I = bd³/12
///
/// # Example
/// ```rust
/// use tub_core::equations::section::rectangular_moment_of_inertia;
///
/// // 30" wide strip of 3/4" MDF
/// let i = rectangular_moment_of_inertia(30.0, 0.75);
/// // I = 30 × 0.75³ / 12 = 1.0547 in⁴
/// assert!((i - 1.0547).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Extreme-fiber bending stress
///
/// # Formula
/// σ = M·c / I
///
/// # Arguments
/// * `m` - Bending moment (lb·in)
/// * `c` - Distance from neutral axis to extreme fiber (in)
/// * `i` - Moment of inertia (in⁴)
#[inline]
pub fn bending_stress(m: f64, c: f64, i: f64) -> f64 {
    m * c / i
}
