//! # Tub and Frame Geometry
//!
//! Plain value records describing the tub box and the extrusion frame around it.
//! All dimensions are inches except the extrusion profile size, which is given
//! in millimetres the way T-slot profiles are sold.
//!
//! ## Water depth
//!
//! `water_depth_in` is measured up from the tub floor. Older configs called this
//! field "freeboard", which normally means the distance from the rim down to the
//! waterline; the alias is accepted on load but the value is always read as depth.
//!
//! ## Optional post counts
//!
//! Stiffening posts are optional. A missing post count means no posts, and
//! the wall is one full-width panel.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{Inches, Millimeters};

/// Tub box dimensions and panel layout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_in": 60.0,
///   "width_in": 30.0,
///   "height_in": 24.0,
///   "bottom_thickness_in": 0.75,
///   "side_thickness_in": 0.75,
///   "water_depth_in": 20.0,
///   "bottom_support_count": 3,
///   "long_wall_post_count": 1
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubGeometry {
    /// Inside length of the tub (in)
    pub length_in: f64,

    /// Inside width of the tub (in)
    pub width_in: f64,

    /// Wall height (in)
    pub height_in: f64,

    /// Bottom panel thickness (in)
    pub bottom_thickness_in: f64,

    /// Side wall panel thickness (in)
    pub side_thickness_in: f64,

    /// Water depth measured from the tub floor (in). Clamped to `height_in`.
    #[serde(alias = "freeboard_in")]
    pub water_depth_in: f64,

    /// Number of transverse supports under the bottom panel, ends included
    pub bottom_support_count: u32,

    /// Stiffening posts along each long wall (absent means none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_wall_post_count: Option<u32>,

    /// Stiffening posts along each short wall (absent means none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_wall_post_count: Option<u32>,
}

impl Default for TubGeometry {
    fn default() -> Self {
        TubGeometry {
            length_in: 60.0,
            width_in: 30.0,
            height_in: 24.0,
            bottom_thickness_in: 0.75,
            side_thickness_in: 0.75,
            water_depth_in: 20.0,
            bottom_support_count: 3,
            long_wall_post_count: None,
            short_wall_post_count: None,
        }
    }
}

impl TubGeometry {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_in", self.length_in)?;
        require_positive("width_in", self.width_in)?;
        require_positive("height_in", self.height_in)?;
        require_positive("bottom_thickness_in", self.bottom_thickness_in)?;
        require_positive("side_thickness_in", self.side_thickness_in)?;
        if !self.water_depth_in.is_finite() || self.water_depth_in < 0.0 {
            return Err(CalcError::invalid_input(
                "water_depth_in",
                self.water_depth_in.to_string(),
                "Water depth cannot be negative",
            ));
        }
        if self.bottom_support_count == 0 {
            return Err(CalcError::invalid_input(
                "bottom_support_count",
                "0",
                "At least one bottom support is required",
            ));
        }
        Ok(())
    }

    /// Long wall posts, with absence read as zero
    pub fn long_posts(&self) -> u32 {
        self.long_wall_post_count.unwrap_or(0)
    }

    /// Short wall posts, with absence read as zero
    pub fn short_posts(&self) -> u32 {
        self.short_wall_post_count.unwrap_or(0)
    }

    /// Wall panels along each long wall, posts + 1
    pub fn long_wall_panels(&self) -> f64 {
        f64::from(self.long_posts()) + 1.0
    }

    /// Wall panels along each short wall, posts + 1
    pub fn short_wall_panels(&self) -> f64 {
        f64::from(self.short_posts()) + 1.0
    }

    /// Length of one bottom panel between adjacent transverse supports (in).
    ///
    /// L / (n − 1), falling back to the full length when fewer than two
    /// supports are configured.
    pub fn bottom_panel_length_in(&self) -> f64 {
        let bays = self.bottom_support_count.saturating_sub(1).max(1);
        self.length_in / f64::from(bays)
    }
}

/// Extrusion frame dimensions.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_in": 63.0,
///   "width_in": 33.0,
///   "height_in": 24.0,
///   "extrusion_size_mm": 40.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Overall frame length (in)
    pub length_in: f64,

    /// Overall frame width (in)
    pub width_in: f64,

    /// Overall frame height (in). Reported only; the rail and support
    /// checks depend on the frame plan dimensions.
    pub height_in: f64,

    /// Square extrusion profile size (mm), e.g. 40 for 4040
    pub extrusion_size_mm: f64,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        FrameGeometry {
            length_in: 63.0,
            width_in: 33.0,
            height_in: 24.0,
            extrusion_size_mm: 40.0,
        }
    }
}

impl FrameGeometry {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("frame.length_in", self.length_in)?;
        require_positive("frame.width_in", self.width_in)?;
        require_positive("frame.height_in", self.height_in)?;
        require_positive("frame.extrusion_size_mm", self.extrusion_size_mm)?;
        Ok(())
    }

    /// Extrusion profile size converted to inches
    pub fn extrusion_size_in(&self) -> f64 {
        Inches::from(Millimeters(self.extrusion_size_mm)).0
    }
}
