//! # Structural Calculations
//!
//! Per-component deflection and stress estimates for the tub. Each calculator
//! is a pure function of the geometry and material records and returns a
//! fresh [`DeflectionResult`]:
//!
//! - `calculate(&TubGeometry, ..., &MaterialsConfig) -> DeflectionResult`
//!
//! Calculators do not validate. They rely on the inputs having passed
//! `validate()` on the config records, and they handle the documented edge
//! cases (depth above the rim, missing posts, a single support) by clamping.
//!
//! ## Available Calculations
//!
//! - [`bottom_panel`] - Floor panel between transverse supports
//! - [`side_wall`] - Short and long wall panels between posts
//! - [`frame`] - Aluminum extrusion rail and bottom support members

pub mod bottom_panel;
pub mod frame;
pub mod side_wall;

use serde::{Deserialize, Serialize};

pub use side_wall::WallSide;

/// Summary result for one panel or member.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_in": 30.0,
///   "load_lb_per_in": 21.66,
///   "max_moment_inlb": 2436.75,
///   "max_deflection_in": 0.1536,
///   "max_stress_psi": 866.4
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionResult {
    /// Governing span (in)
    pub span_in: f64,

    /// Line load on the equivalent beam (lb/in)
    pub load_lb_per_in: f64,

    /// Maximum bending moment (lb·in)
    pub max_moment_inlb: f64,

    /// Maximum deflection (in)
    pub max_deflection_in: f64,

    /// Maximum bending stress at the extreme fiber (psi)
    pub max_stress_psi: f64,
}

impl DeflectionResult {
    /// Deflection as a fraction of span, expressed as the L/δ ratio.
    ///
    /// Returns infinity for an unloaded member.
    pub fn span_ratio(&self) -> f64 {
        if self.max_deflection_in > 0.0 {
            self.span_in / self.max_deflection_in
        } else {
            f64::INFINITY
        }
    }
}

/// Which surface or member a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Floor panel
    BottomPanel,
    /// Wall across the tub width
    ShortWall,
    /// Wall along the tub length
    LongWall,
    /// Horizontal extrusion backing a long wall
    FrameRail,
    /// Transverse extrusion under the floor
    BottomSupport,
}

impl Component {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Component::BottomPanel => "Bottom panel",
            Component::ShortWall => "Short wall",
            Component::LongWall => "Long wall",
            Component::FrameRail => "Frame rail",
            Component::BottomSupport => "Bottom support",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_ratio() {
        let result = DeflectionResult {
            span_in: 30.0,
            load_lb_per_in: 1.0,
            max_moment_inlb: 1.0,
            max_deflection_in: 0.125,
            max_stress_psi: 1.0,
        };
        assert_eq!(result.span_ratio(), 240.0);
    }

    #[test]
    fn test_span_ratio_unloaded() {
        let result = DeflectionResult {
            span_in: 30.0,
            load_lb_per_in: 0.0,
            max_moment_inlb: 0.0,
            max_deflection_in: 0.0,
            max_stress_psi: 0.0,
        };
        assert!(result.span_ratio().is_infinite());
    }

    #[test]
    fn test_component_labels() {
        assert_eq!(Component::LongWall.label(), "Long wall");
        assert_eq!(Component::BottomSupport.label(), "Bottom support");
    }
}
