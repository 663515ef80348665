//! End-to-end behavior of the calculators on representative tubs.

use approx::assert_relative_eq;

use tub_core::calculations::{bottom_panel, frame, side_wall};
use tub_core::equations::plate::mode_shape;
use tub_core::loads;
use tub_core::profile::{self, SamplePattern};
use tub_core::{FrameGeometry, MaterialsConfig, TubAnalysis, TubConfig, TubGeometry};

fn example_tub() -> TubGeometry {
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

fn example_materials() -> MaterialsConfig {
    MaterialsConfig {
        water_weight_psi_per_in: 0.0361,
        mdf_e_psi: 400_000.0,
        ..MaterialsConfig::default()
    }
}

/// A spread of tub shapes used for the monotonicity sweeps.
fn geometries() -> Vec<TubGeometry> {
    let mut out = Vec::new();
    for &(length, width) in &[(60.0, 30.0), (48.0, 48.0), (72.0, 24.0), (36.0, 60.0)] {
        for &supports in &[1u32, 2, 3, 5] {
            out.push(TubGeometry {
                length_in: length,
                width_in: width,
                bottom_support_count: supports,
                ..example_tub()
            });
        }
    }
    out
}

#[test]
fn example_scenario_bottom_panel() {
    let geom = example_tub();
    let mat = example_materials();

    assert_eq!(geom.bottom_panel_length_in(), 30.0);
    assert_relative_eq!(loads::bottom_pressure(&geom, &mat), 0.722, max_relative = 1e-12);

    let result = bottom_panel::calculate(&geom, &mat);
    assert_eq!(result.span_in, 30.0);
    assert!(result.max_deflection_in.is_finite() && result.max_deflection_in > 0.0);
    assert!(result.max_stress_psi.is_finite() && result.max_stress_psi > 0.0);

    // Pinned regression for the chosen plate coefficient
    assert_relative_eq!(result.max_deflection_in, 0.153648, max_relative = 1e-5);
    assert_relative_eq!(result.max_stress_psi, 866.4, max_relative = 1e-9);
}

#[test]
fn doubling_thickness_cuts_deflection_by_eight() {
    let mat = example_materials();
    let thin = bottom_panel::calculate(&example_tub(), &mat);
    let thick = bottom_panel::calculate(
        &TubGeometry {
            bottom_thickness_in: 1.5,
            ..example_tub()
        },
        &mat,
    );
    assert_relative_eq!(thin.max_deflection_in / thick.max_deflection_in, 8.0, max_relative = 1e-12);
}

#[test]
fn bottom_results_decrease_with_thickness() {
    let mat = example_materials();
    for geom in geometries() {
        let mut previous = bottom_panel::calculate(&geom, &mat);
        for &t in &[0.875, 1.0, 1.25, 1.5] {
            let next = bottom_panel::calculate(
                &TubGeometry {
                    bottom_thickness_in: t,
                    ..geom
                },
                &mat,
            );
            assert!(next.max_deflection_in < previous.max_deflection_in, "{:?}", geom);
            assert!(next.max_stress_psi < previous.max_stress_psi, "{:?}", geom);
            previous = next;
        }
    }
}

#[test]
fn bottom_deflection_increases_with_depth_below_rim() {
    let mat = example_materials();
    for geom in geometries() {
        let mut previous = bottom_panel::calculate(&TubGeometry { water_depth_in: 2.0, ..geom }, &mat);
        for &h in &[6.0, 12.0, 18.0, 23.5] {
            let next = bottom_panel::calculate(&TubGeometry { water_depth_in: h, ..geom }, &mat);
            assert!(next.max_deflection_in > previous.max_deflection_in);
            assert!(next.max_stress_psi > previous.max_stress_psi);
            previous = next;
        }
    }
}

#[test]
fn overfilled_tub_matches_brim_full() {
    let mat = example_materials();
    let full = TubGeometry {
        water_depth_in: 24.0,
        ..example_tub()
    };
    let over = TubGeometry {
        water_depth_in: 40.0,
        ..example_tub()
    };
    let frame_geom = FrameGeometry::default();

    assert_eq!(bottom_panel::calculate(&full, &mat), bottom_panel::calculate(&over, &mat));
    assert_eq!(
        side_wall::calculate_short_wall(&full, &mat),
        side_wall::calculate_short_wall(&over, &mat)
    );
    assert_eq!(
        side_wall::calculate_long_wall(&full, &mat),
        side_wall::calculate_long_wall(&over, &mat)
    );
    assert_eq!(
        frame::calculate(&full, &frame_geom, &mat),
        frame::calculate(&over, &frame_geom, &mat)
    );
    assert_eq!(
        profile::bottom_profile(&full, &mat, None),
        profile::bottom_profile(&over, &mat, None)
    );
}

#[test]
fn mode_shape_vanishes_on_edges_and_peaks_at_center() {
    for &s in &[0.0, 0.1, 0.3, 0.5, 0.7, 1.0] {
        assert!(mode_shape(0.0, s).abs() < 1e-15);
        assert!(mode_shape(1.0, s).abs() < 1e-15);
        assert!(mode_shape(s, 0.0).abs() < 1e-15);
        assert!(mode_shape(s, 1.0).abs() < 1e-15);
    }

    let w_max = 0.0421;
    let points = profile::sample(SamplePattern::Grid11, 60.0, w_max, None);
    assert_eq!(points[10].deflection_in, w_max);
}

#[test]
fn short_wall_two_posts_scale_by_one_third_to_the_fourth() {
    let mat = example_materials();
    let plain = side_wall::calculate_short_wall(&example_tub(), &mat);
    let posted = side_wall::calculate_short_wall(
        &TubGeometry {
            short_wall_post_count: Some(2),
            ..example_tub()
        },
        &mat,
    );
    assert_relative_eq!(
        posted.max_deflection_in,
        plain.max_deflection_in * (1.0f64 / 3.0).powi(4),
        max_relative = 1e-12
    );
    assert_relative_eq!(posted.max_deflection_in / plain.max_deflection_in, 0.012345679, max_relative = 1e-6);
}

#[test]
fn posts_strictly_reduce_wall_deflection() {
    let mat = example_materials();
    let plain_long = side_wall::calculate_long_wall(&example_tub(), &mat);
    let plain_short = side_wall::calculate_short_wall(&example_tub(), &mat);
    for n in 1..=4 {
        let geom = TubGeometry {
            long_wall_post_count: Some(n),
            short_wall_post_count: Some(n),
            ..example_tub()
        };
        assert!(side_wall::calculate_long_wall(&geom, &mat).max_deflection_in < plain_long.max_deflection_in);
        assert!(side_wall::calculate_short_wall(&geom, &mat).max_deflection_in < plain_short.max_deflection_in);
    }
}

#[test]
fn maximum_post_counts_analyze_without_overflow() {
    let config = TubConfig::new(TubGeometry {
        long_wall_post_count: Some(u32::MAX),
        short_wall_post_count: Some(u32::MAX),
        ..example_tub()
    });
    config.validate().unwrap();

    let analysis = TubAnalysis::run(&config, None);
    for (component, result) in analysis.components() {
        assert!(result.span_in.is_finite() && result.span_in > 0.0, "{:?}", component);
        assert!(result.max_deflection_in.is_finite(), "{:?}", component);
        assert!(result.max_stress_psi.is_finite(), "{:?}", component);
    }
    assert!(analysis.long_wall.max_deflection_in < analysis.bottom_panel.max_deflection_in);
    assert!(analysis
        .frame_rail_profile
        .iter()
        .all(|p| p.deflection_in.is_finite()));

    let panels = 4_294_967_296.0_f64;
    assert_relative_eq!(
        side_wall::calculate_short_wall(&config.geometry, &config.materials).max_deflection_in,
        0.0314671 / panels.powi(4),
        max_relative = 1e-5
    );
}

#[test]
fn repeated_calls_are_bit_identical() {
    let geom = TubGeometry {
        long_wall_post_count: Some(1),
        ..example_tub()
    };
    let mat = example_materials();
    let frame_geom = FrameGeometry::default();

    let bits = |x: f64| x.to_bits();
    let a = bottom_panel::calculate(&geom, &mat);
    let b = bottom_panel::calculate(&geom, &mat);
    assert_eq!(bits(a.max_deflection_in), bits(b.max_deflection_in));
    assert_eq!(bits(a.max_stress_psi), bits(b.max_stress_psi));

    assert_eq!(
        frame::calculate(&geom, &frame_geom, &mat),
        frame::calculate(&geom, &frame_geom, &mat)
    );
    assert_eq!(
        profile::long_wall_profile(&geom, &mat, None),
        profile::long_wall_profile(&geom, &mat, None)
    );
    assert_eq!(
        profile::short_wall_profile(&geom, &mat, Some(5)),
        profile::short_wall_profile(&geom, &mat, Some(5))
    );
}

#[test]
fn degenerate_support_counts_stay_finite() {
    let mat = example_materials();
    for supports in [0u32, 1] {
        let geom = TubGeometry {
            bottom_support_count: supports,
            ..example_tub()
        };
        let result = bottom_panel::calculate(&geom, &mat);
        assert!(result.max_deflection_in.is_finite());
        assert!(result.max_stress_psi.is_finite());
        assert!(frame::calculate_bottom_support(&geom, &FrameGeometry::default(), &mat)
            .max_deflection_in
            .is_finite());
    }
}

#[test]
fn full_analysis_of_default_config() {
    let config = TubConfig::default();
    config.validate().unwrap();
    let analysis = TubAnalysis::run(&config, None);

    assert_relative_eq!(analysis.loads.water_depth_in, 20.0);
    assert_relative_eq!(analysis.short_wall.max_deflection_in, 0.0314671, max_relative = 1e-5);
    // Without posts both walls share the same deflection
    assert_eq!(analysis.short_wall.max_deflection_in, analysis.long_wall.max_deflection_in);
    assert_eq!(analysis.short_wall_profile.len(), 5);
}

#[test]
fn shipped_defaults_file_matches_builtin_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/defaults.json");
    let loaded = tub_core::load_config(&path).unwrap();
    assert_eq!(loaded, TubConfig::default());
}
