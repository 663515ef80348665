//! # Tubcalc CLI
//!
//! Terminal front end for the tub deflection calculator. Loads a config file
//! (or the built-in defaults), applies any overrides from the command line,
//! and prints a summary table or the full JSON analysis.
//!
//! Set `RUST_LOG=debug` to see the intermediate quantities each calculator derives.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tub_core::calculations::DeflectionResult;
use tub_core::profile::DeflectionProfilePoint;
use tub_core::units::in_to_mm;
use tub_core::{load_config, save_config, CalcError, CalcResult, TubAnalysis, TubConfig};

/// Deflection and stress estimates for an MDF tub on an extrusion frame
#[derive(Debug, Parser)]
#[command(name = "tub_cli", version, about)]
struct Cli {
    /// JSON config file (uses built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the water depth measured from the tub floor (in)
    #[arg(long)]
    water_depth: Option<f64>,

    /// Override the number of bottom transverse supports
    #[arg(long)]
    supports: Option<u32>,

    /// Override the long wall post count
    #[arg(long)]
    long_posts: Option<u32>,

    /// Override the short wall post count
    #[arg(long)]
    short_posts: Option<u32>,

    /// Limit each deflection profile to the first N sample points
    #[arg(long)]
    points: Option<usize>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Write the default config to this path and exit
    #[arg(long, value_name = "PATH")]
    write_defaults: Option<PathBuf>,
}

impl Cli {
    fn build_config(&self) -> CalcResult<TubConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => TubConfig::default(),
        };

        let geom = &mut config.geometry;
        if let Some(depth) = self.water_depth {
            geom.water_depth_in = depth;
        }
        if let Some(supports) = self.supports {
            geom.bottom_support_count = supports;
        }
        if let Some(posts) = self.long_posts {
            geom.long_wall_post_count = Some(posts);
        }
        if let Some(posts) = self.short_posts {
            geom.short_wall_post_count = Some(posts);
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> CalcResult<()> {
    if let Some(path) = &cli.write_defaults {
        save_config(&TubConfig::default(), path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = cli.build_config()?;
    let analysis = TubAnalysis::run(&config, cli.points);

    if cli.json {
        let json = serde_json::to_string_pretty(&analysis)
            .map_err(|e| CalcError::serialization(e.to_string()))?;
        println!("{}", json);
    } else {
        print_summary(&config, &analysis);
    }
    Ok(())
}

fn print_summary(config: &TubConfig, analysis: &TubAnalysis) {
    let geom = &config.geometry;

    println!("═══════════════════════════════════════════════════════════");
    println!("  TUB DEFLECTION ESTIMATE");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Tub:        {:.1} x {:.1} x {:.1} in",
        geom.length_in, geom.width_in, geom.height_in
    );
    println!(
        "  Panels:     bottom {:.3} in, sides {:.3} in",
        geom.bottom_thickness_in, geom.side_thickness_in
    );
    println!(
        "  Water:      {:.2} in effective (configured {:.2} in)",
        analysis.loads.water_depth_in, geom.water_depth_in
    );
    println!(
        "  Supports:   {} bottom, {} long-wall posts, {} short-wall posts",
        geom.bottom_support_count,
        geom.long_posts(),
        geom.short_posts()
    );
    println!("  Frame:      {}", describe_frame(config));
    println!();
    println!("Loads:");
    println!("  q_bottom = {:.4} psi", analysis.loads.bottom_pressure_psi);
    println!("  q_side   = {:.4} psi (average)", analysis.loads.side_pressure_psi);
    println!();
    println!(
        "  {:<15} {:>8} {:>9} {:>11} {:>10} {:>9} {:>9}",
        "Component", "Span in", "w lb/in", "M lb·in", "δ in", "δ mm", "σ psi"
    );
    for (component, result) in analysis.components() {
        print_result_row(component.label(), result);
    }
    println!();

    print_profile("Bottom profile", &analysis.bottom_profile);
    print_profile("Short wall profile", &analysis.short_wall_profile);
    print_profile("Long wall profile", &analysis.long_wall_profile);
    print_profile("Frame rail profile", &analysis.frame_rail_profile);

    let (component, worst) = analysis.governing();
    println!("═══════════════════════════════════════════════════════════");
    println!(
        "  GOVERNS: {} at {:.4} in ({:.2} mm, L/{:.0})",
        component.label(),
        worst.max_deflection_in,
        in_to_mm(worst.max_deflection_in),
        worst.span_ratio()
    );
    println!("═══════════════════════════════════════════════════════════");
}

fn describe_frame(config: &TubConfig) -> String {
    let frame = &config.frame;
    format!(
        "{:.1} x {:.1} x {:.1} in, {:.0} mm extrusion ({:.3} in)",
        frame.length_in,
        frame.width_in,
        frame.height_in,
        frame.extrusion_size_mm,
        frame.extrusion_size_in()
    )
}

fn print_result_row(label: &str, result: &DeflectionResult) {
    println!(
        "  {:<15} {:>8.2} {:>9.3} {:>11.1} {:>10.5} {:>9.3} {:>9.0}",
        label,
        result.span_in,
        result.load_lb_per_in,
        result.max_moment_inlb,
        result.max_deflection_in,
        in_to_mm(result.max_deflection_in),
        result.max_stress_psi
    );
}

fn print_profile(title: &str, points: &[DeflectionProfilePoint]) {
    println!("{} ({} points):", title, points.len());
    for (i, p) in points.iter().enumerate() {
        println!(
            "  {:>2}: x = {:>7.2} in   δ = {:.5} in ({:.3} mm)",
            i + 1,
            p.position_in,
            p.deflection_in,
            in_to_mm(p.deflection_in)
        );
    }
    println!();
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tub_cli").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_without_arguments() {
        let config = parse(&[]).build_config().unwrap();
        assert_eq!(config, TubConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let cli = parse(&["--water-depth", "12", "--supports", "4", "--long-posts", "2"]);
        let config = cli.build_config().unwrap();
        assert_eq!(config.geometry.water_depth_in, 12.0);
        assert_eq!(config.geometry.bottom_support_count, 4);
        assert_eq!(config.geometry.long_wall_post_count, Some(2));
        assert_eq!(config.geometry.short_wall_post_count, None);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = parse(&["--supports", "0"]);
        let err = cli.build_config().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_frame_description() {
        let mut config = TubConfig::default();
        config.frame.height_in = 30.0;
        assert_eq!(
            describe_frame(&config),
            "63.0 x 33.0 x 30.0 in, 40 mm extrusion (1.575 in)"
        );
    }

    #[test]
    fn test_config_file_and_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tub.json");
        save_config(&TubConfig::default(), &path).unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--points", "4", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.points, Some(4));
        assert!(run(&cli).is_ok());
    }
}
