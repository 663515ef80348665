//! # Deflection Profiles
//!
//! Discretized deflection values across a surface, for plotting.
//!
//! Each surface is sampled at a fixed table of normalized (u, v) coordinates,
//! u along the primary span axis and v across it. The deflection at a sample is
//! the surface's maximum deflection times the first plate mode
//! sin(πu)·sin(πv). That gives a smooth single-hump shape that is zero on the
//! edges and peaks at the center. It approximates a simply-supported plate and
//! does not solve the plate equation.
//!
//! The frame rail is a beam rather than a plate, so its profile is the exact
//! simply-supported deflection curve sampled at fixed stations along the span.
//!
//! The order of each table is part of the interface: consumers label points by
//! index ("point 3 of the bottom pattern").
//!
//! ## Example
//!
//! ```rust
//! use tub_core::geometry::TubGeometry;
//! use tub_core::materials::MaterialsConfig;
//! use tub_core::profile::bottom_profile;
//!
//! let points = bottom_profile(&TubGeometry::default(), &MaterialsConfig::default(), None);
//! assert_eq!(points.len(), 11);
//!
//! // Center point is last and carries the full deflection
//! let center = points[10];
//! assert_eq!(center.position_in, 30.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{bottom_panel, frame, side_wall};
use crate::equations::beam::uniform_load_deflection;
use crate::equations::plate::mode_shape;
use crate::geometry::{FrameGeometry, TubGeometry};
use crate::materials::MaterialsConfig;

/// 11-point layout: four points near each long edge, two mid-edge, one center.
const GRID_11: [(f64, f64); 11] = [
    (0.2, 0.2),
    (0.4, 0.2),
    (0.6, 0.2),
    (0.8, 0.2),
    (0.2, 0.8),
    (0.4, 0.8),
    (0.6, 0.8),
    (0.8, 0.8),
    (0.2, 0.5),
    (0.8, 0.5),
    (0.5, 0.5),
];

/// 5-point layout: four near-corner points and the center.
const CORNERS_5: [(f64, f64); 5] = [
    (0.25, 0.25),
    (0.75, 0.25),
    (0.25, 0.75),
    (0.75, 0.75),
    (0.5, 0.5),
];

/// Rail stations as fractions of the span, supports included.
const RAIL_STATIONS: [f64; 9] = [0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1.0];

/// Fixed sampling layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplePattern {
    /// 11 points, used for the bottom and the long wall
    Grid11,
    /// 5 points, used for the short wall
    Corners5,
}

impl SamplePattern {
    /// Normalized (u, v) coordinates in their fixed order
    pub fn coordinates(self) -> &'static [(f64, f64)] {
        match self {
            SamplePattern::Grid11 => &GRID_11,
            SamplePattern::Corners5 => &CORNERS_5,
        }
    }
}

/// One sampled point of a deflection profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionProfilePoint {
    /// Position along the primary axis (in)
    pub position_in: f64,
    /// Deflection at that point (in)
    pub deflection_in: f64,
}

/// Sample a surface with the given pattern.
///
/// # Arguments
///
/// * `pattern` - Sampling layout
/// * `dimension_in` - Physical length of the primary axis; x = u × dimension
/// * `max_deflection_in` - Deflection at the surface center
/// * `count` - Keep only the first `count` points; `None` keeps the whole pattern
pub fn sample(
    pattern: SamplePattern,
    dimension_in: f64,
    max_deflection_in: f64,
    count: Option<usize>,
) -> Vec<DeflectionProfilePoint> {
    let coords = pattern.coordinates();
    coords[..kept(coords.len(), count)]
        .iter()
        .map(|&(u, v)| DeflectionProfilePoint {
            position_in: u * dimension_in,
            deflection_in: max_deflection_in * mode_shape(u, v),
        })
        .collect()
}

fn kept(len: usize, count: Option<usize>) -> usize {
    count.map_or(len, |c| c.min(len))
}

/// Floor profile along the tub length
pub fn bottom_profile(
    geom: &TubGeometry,
    mat: &MaterialsConfig,
    count: Option<usize>,
) -> Vec<DeflectionProfilePoint> {
    let w_max = bottom_panel::calculate(geom, mat).max_deflection_in;
    sample(SamplePattern::Grid11, geom.length_in, w_max, count)
}

/// Short wall profile across the tub width
pub fn short_wall_profile(
    geom: &TubGeometry,
    mat: &MaterialsConfig,
    count: Option<usize>,
) -> Vec<DeflectionProfilePoint> {
    let w_max = side_wall::calculate_short_wall(geom, mat).max_deflection_in;
    sample(SamplePattern::Corners5, geom.width_in, w_max, count)
}

/// Long wall profile along the tub length
pub fn long_wall_profile(
    geom: &TubGeometry,
    mat: &MaterialsConfig,
    count: Option<usize>,
) -> Vec<DeflectionProfilePoint> {
    let w_max = side_wall::calculate_long_wall(geom, mat).max_deflection_in;
    sample(SamplePattern::Grid11, geom.length_in, w_max, count)
}

/// Long frame rail deflection curve over one span between posts.
///
/// Positions run from the first support (0) to the second (span).
pub fn frame_rail_profile(
    geom: &TubGeometry,
    frame: &FrameGeometry,
    mat: &MaterialsConfig,
    count: Option<usize>,
) -> Vec<DeflectionProfilePoint> {
    let rail = frame::calculate(geom, frame, mat);
    RAIL_STATIONS[..kept(RAIL_STATIONS.len(), count)]
        .iter()
        .map(|&u| {
            let x = u * rail.span_in;
            DeflectionProfilePoint {
                position_in: x,
                deflection_in: uniform_load_deflection(
                    rail.load_lb_per_in,
                    rail.span_in,
                    x,
                    mat.aluminum_e_psi,
                    mat.extrusion_i_in4,
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lengths() {
        assert_eq!(SamplePattern::Grid11.coordinates().len(), 11);
        assert_eq!(SamplePattern::Corners5.coordinates().len(), 5);
    }

    #[test]
    fn test_patterns_stay_inside_surface() {
        for pattern in [SamplePattern::Grid11, SamplePattern::Corners5] {
            for &(u, v) in pattern.coordinates() {
                assert!(u > 0.0 && u < 1.0);
                assert!(v > 0.0 && v < 1.0);
            }
        }
    }

    #[test]
    fn test_center_sample_is_max() {
        let points = sample(SamplePattern::Corners5, 30.0, 0.05, None);
        assert_eq!(points[4].position_in, 15.0);
        assert_eq!(points[4].deflection_in, 0.05);
        for p in &points[..4] {
            assert!(p.deflection_in < 0.05);
            assert!(p.deflection_in > 0.0);
        }
    }

    #[test]
    fn test_positions_follow_pattern_order() {
        let points = sample(SamplePattern::Grid11, 60.0, 1.0, None);
        let xs: Vec<f64> = points.iter().map(|p| p.position_in).collect();
        let expected = [12.0, 24.0, 36.0, 48.0, 12.0, 24.0, 36.0, 48.0, 12.0, 48.0, 30.0];
        for (x, e) in xs.iter().zip(expected.iter()) {
            assert!((x - e).abs() < 1e-9, "x = {}, expected {}", x, e);
        }
    }

    #[test]
    fn test_symmetric_samples_match() {
        let points = sample(SamplePattern::Grid11, 60.0, 1.0, None);
        // (0.2, 0.2) mirrors (0.8, 0.8); (0.2, 0.5) mirrors (0.8, 0.5)
        assert!((points[0].deflection_in - points[7].deflection_in).abs() < 1e-12);
        assert!((points[8].deflection_in - points[9].deflection_in).abs() < 1e-12);
    }

    #[test]
    fn test_truncation() {
        assert_eq!(sample(SamplePattern::Grid11, 60.0, 1.0, Some(10)).len(), 10);
        assert_eq!(sample(SamplePattern::Grid11, 60.0, 1.0, Some(50)).len(), 11);
        assert!(sample(SamplePattern::Corners5, 30.0, 1.0, Some(0)).is_empty());
    }

    #[test]
    fn test_surface_profiles() {
        let geom = TubGeometry::default();
        let mat = MaterialsConfig::default();

        let bottom = bottom_profile(&geom, &mat, None);
        let short = short_wall_profile(&geom, &mat, None);
        let long = long_wall_profile(&geom, &mat, Some(10));

        assert_eq!(bottom.len(), 11);
        assert_eq!(short.len(), 5);
        assert_eq!(long.len(), 10);

        let w_bottom = bottom_panel::calculate(&geom, &mat).max_deflection_in;
        assert_eq!(bottom[10].deflection_in, w_bottom);
        assert_eq!(short[4].position_in, 15.0);
    }

    #[test]
    fn test_frame_rail_profile() {
        let geom = TubGeometry::default();
        let frame_geom = FrameGeometry::default();
        let mat = MaterialsConfig::default();
        let rail = frame::calculate(&geom, &frame_geom, &mat);

        let points = frame_rail_profile(&geom, &frame_geom, &mat, None);
        assert_eq!(points.len(), 9);
        assert_eq!(points[0].deflection_in, 0.0);
        assert!(points[8].deflection_in.abs() < 1e-12);
        assert_eq!(points[8].position_in, rail.span_in);

        let mid = points[4].deflection_in;
        assert!((mid - rail.max_deflection_in).abs() / rail.max_deflection_in < 1e-9);
        assert!((points[2].deflection_in - points[6].deflection_in).abs() < 1e-12);
        assert_eq!(frame_rail_profile(&geom, &frame_geom, &mat, Some(4)).len(), 4);
    }
}
