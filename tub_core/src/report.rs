//! # Analysis Report
//!
//! Runs every calculator and profile sampler for one [`TubConfig`] and bundles
//! the results, stamped with the time they were generated. This is the record
//! the CLI prints and the JSON a renderer consumes.
//!
//! ## Example
//!
//! ```rust
//! use tub_core::config::TubConfig;
//! use tub_core::report::TubAnalysis;
//!
//! let analysis = TubAnalysis::run(&TubConfig::default(), None);
//! assert_eq!(analysis.bottom_profile.len(), 11);
//! assert_eq!(analysis.short_wall_profile.len(), 5);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{bottom_panel, frame, side_wall, Component, DeflectionResult};
use crate::config::TubConfig;
use crate::loads::HydrostaticLoads;
use crate::profile::{self, DeflectionProfilePoint};

/// Full set of results for one tub design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubAnalysis {
    /// When the analysis was run
    pub generated_at: DateTime<Utc>,

    /// Derived hydrostatic loads
    pub loads: HydrostaticLoads,

    /// Extrusion profile size (in)
    pub extrusion_size_in: f64,

    /// Floor panel
    pub bottom_panel: DeflectionResult,

    /// Walls across the width
    pub short_wall: DeflectionResult,

    /// Walls along the length
    pub long_wall: DeflectionResult,

    /// Long frame rail
    pub frame_rail: DeflectionResult,

    /// Interior transverse bottom support
    pub bottom_support: DeflectionResult,

    /// Floor profile samples
    pub bottom_profile: Vec<DeflectionProfilePoint>,

    /// Short wall profile samples
    pub short_wall_profile: Vec<DeflectionProfilePoint>,

    /// Long wall profile samples
    pub long_wall_profile: Vec<DeflectionProfilePoint>,

    /// Frame rail deflection curve
    pub frame_rail_profile: Vec<DeflectionProfilePoint>,
}

impl TubAnalysis {
    /// Run every calculation for `config`.
    ///
    /// `point_count` truncates each profile; `None` keeps the full patterns.
    /// The config is assumed to have been validated.
    pub fn run(config: &TubConfig, point_count: Option<usize>) -> Self {
        let geom = &config.geometry;
        let mat = &config.materials;

        let analysis = TubAnalysis {
            generated_at: Utc::now(),
            loads: HydrostaticLoads::derive(geom, mat),
            extrusion_size_in: config.frame.extrusion_size_in(),
            bottom_panel: bottom_panel::calculate(geom, mat),
            short_wall: side_wall::calculate_short_wall(geom, mat),
            long_wall: side_wall::calculate_long_wall(geom, mat),
            frame_rail: frame::calculate(geom, &config.frame, mat),
            bottom_support: frame::calculate_bottom_support(geom, &config.frame, mat),
            bottom_profile: profile::bottom_profile(geom, mat, point_count),
            short_wall_profile: profile::short_wall_profile(geom, mat, point_count),
            long_wall_profile: profile::long_wall_profile(geom, mat, point_count),
            frame_rail_profile: profile::frame_rail_profile(geom, &config.frame, mat, point_count),
        };

        log::info!(
            "analysis complete: worst deflection {:.4} in ({})",
            analysis.governing().1.max_deflection_in,
            analysis.governing().0.label()
        );
        analysis
    }

    /// Summary results in a fixed order, labelled by component
    pub fn components(&self) -> [(Component, &DeflectionResult); 5] {
        [
            (Component::BottomPanel, &self.bottom_panel),
            (Component::ShortWall, &self.short_wall),
            (Component::LongWall, &self.long_wall),
            (Component::FrameRail, &self.frame_rail),
            (Component::BottomSupport, &self.bottom_support),
        ]
    }

    /// Component with the largest deflection
    pub fn governing(&self) -> (Component, &DeflectionResult) {
        self.components()
            .into_iter()
            .fold((Component::BottomPanel, &self.bottom_panel), |best, next| {
                if next.1.max_deflection_in > best.1.max_deflection_in {
                    next
                } else {
                    best
                }
            })
    }
}
