//! # Unit Types
//!
//! Lightweight newtype wrappers for the two length units the tub model deals in.
//!
//! All calculation is done in inches, pounds and psi. Millimetres only show up
//! in two places: the extrusion cross-section size (T-slot profiles are sold by
//! metric size) and display output for users who think in metric.
//!
//! ## Example
//!
//! ```rust
//! use tub_core::units::{Inches, Millimeters};
//!
//! let extrusion = Millimeters(40.0);
//! let size: Inches = extrusion.into();
//! assert!((size.0 - 1.5748).abs() < 1e-4);
//!
//! let deflection = Inches(0.1);
//! let mm: Millimeters = deflection.into();
//! assert!((mm.0 - 2.54).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Millimetres per inch (exact by definition)
pub const MM_PER_INCH: f64 = 25.4;

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

/// Convert a raw inch value to millimetres for display.
#[inline]
pub fn in_to_mm(inches: f64) -> f64 {
    Millimeters::from(Inches(inches)).0
}
