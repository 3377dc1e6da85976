//! Command-line argument parsing.

use clap::Parser;

use crate::params::{FlyAwayParams, PlaneParams, DEFAULT_DESTINATION_URL};
use crate::scene::SceneConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "driftplane")]
#[command(about = "Animated crumpled-plane landing scene", long_about = None)]
pub struct Args {
    /// Plane width in world units (1-500)
    #[arg(long, value_name = "UNITS", default_value_t = 400.0)]
    pub width: f64,

    /// Plane height in world units (1-500)
    #[arg(long, value_name = "UNITS", default_value_t = 400.0)]
    pub height: f64,

    /// Quads along the width (1-100)
    #[arg(long, value_name = "COUNT", default_value_t = 50)]
    pub width_segments: u32,

    /// Quads along the height (1-100)
    #[arg(long, value_name = "COUNT", default_value_t = 50)]
    pub height_segments: u32,

    /// Seed for the surface perturbation and starfield
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Destination reported when the fly-away finishes
    #[arg(long, value_name = "URL", default_value = DEFAULT_DESTINATION_URL)]
    pub url: String,
}

impl Args {
    /// Plane parameters from the command line, clamped to panel ranges
    pub fn plane_params(&self) -> PlaneParams {
        let requested = PlaneParams {
            width: self.width,
            height: self.height,
            width_segments: self.width_segments,
            height_segments: self.height_segments,
        };
        let clamped = requested.clamped();
        if clamped != requested {
            log::warn!(
                "Plane parameters out of range, using {}x{} units with {}x{} segments",
                clamped.width,
                clamped.height,
                clamped.width_segments,
                clamped.height_segments
            );
        }
        clamped
    }

    /// Build the scene configuration
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            plane: self.plane_params(),
            fly_away: FlyAwayParams {
                destination_url: self.url.clone(),
                ..FlyAwayParams::default()
            },
            seed: self.seed,
            ..SceneConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["driftplane"]);
        assert_eq!(args.plane_params(), PlaneParams::default());
        assert!(args.seed.is_none());
        assert_eq!(args.url, DEFAULT_DESTINATION_URL);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let args = Args::parse_from([
            "driftplane",
            "--width",
            "900",
            "--height-segments",
            "0",
            "--seed",
            "7",
        ]);
        let plane = args.plane_params();
        assert_eq!(plane.width, 500.0);
        assert_eq!(plane.height_segments, 1);

        let config = args.scene_config();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.plane, plane);
    }

    #[test]
    fn test_url_override() {
        let args = Args::parse_from(["driftplane", "--url", "https://example.org/"]);
        assert_eq!(
            args.scene_config().fly_away.destination_url,
            "https://example.org/"
        );
    }
}
