//! Plane geometry and surface animation parameters.

use std::ops::RangeInclusive;

/// Allowed range for plane width and height (world units)
pub const SIZE_RANGE: RangeInclusive<f64> = 1.0..=500.0;

/// Allowed range for segment counts along either axis
pub const SEGMENT_RANGE: RangeInclusive<u32> = 1..=100;

/// Grid dimensions, as exposed on the control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneParams {
    /// Plane extent along X (world units)
    pub width: f64,

    /// Plane extent along Y (world units)
    pub height: f64,

    /// Quads along X
    pub width_segments: u32,

    /// Quads along Y
    pub height_segments: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            width_segments: 50,
            height_segments: 50,
        }
    }
}

impl PlaneParams {
    /// Clamp every field into its control-panel range.
    ///
    /// Non-finite sizes collapse to the lower bound.
    pub fn clamped(self) -> Self {
        Self {
            width: clamp_size(self.width),
            height: clamp_size(self.height),
            width_segments: clamp_segments(self.width_segments),
            height_segments: clamp_segments(self.height_segments),
        }
    }

    /// Vertices produced by a grid with these dimensions
    pub fn vertex_count(&self) -> usize {
        (self.width_segments as usize + 1) * (self.height_segments as usize + 1)
    }

    /// Triangles produced by a grid with these dimensions
    pub fn triangle_count(&self) -> usize {
        self.width_segments as usize * self.height_segments as usize * 2
    }
}

fn clamp_size(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end())
    } else {
        *SIZE_RANGE.start()
    }
}

fn clamp_segments(value: u32) -> u32 {
    value.clamp(*SEGMENT_RANGE.start(), *SEGMENT_RANGE.end())
}

/// Surface perturbation, wave and hover-fade constants
#[derive(Debug, Clone)]
pub struct SurfaceParams {
    /// Full width of the one-time random displacement per axis.
    /// Each component moves by (U(0,1) - 0.5) * span, so ±1.5 for 3.0.
    pub perturbation_span: f64,

    /// Time accumulator increment per tick (not scaled by frame time)
    pub time_step: f64,

    /// Horizontal wave amplitude (world units)
    pub wave_amplitude_x: f64,

    /// Vertical wave amplitude (world units, 10x smaller than X)
    pub wave_amplitude_y: f64,

    /// Resting vertex color (linear RGB)
    pub base_tint: [f32; 3],

    /// Color written to a hovered triangle when its fade starts
    pub highlight_tint: [f32; 3],

    /// Duration of one hover fade (seconds)
    pub fade_duration_s: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            perturbation_span: 3.0,
            time_step: 0.01,
            wave_amplitude_x: 0.01,
            wave_amplitude_y: 0.001,
            base_tint: [0.0, 0.19, 0.4],
            highlight_tint: [0.1, 0.5, 1.0],
            fade_duration_s: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_keeps_valid_params() {
        let params = PlaneParams::default();
        assert_eq!(params.clamped(), params);
    }

    #[test]
    fn test_clamped_pulls_out_of_range_values_in() {
        let params = PlaneParams {
            width: 0.0,
            height: 9000.0,
            width_segments: 0,
            height_segments: 250,
        }
        .clamped();

        assert_eq!(params.width, 1.0);
        assert_eq!(params.height, 500.0);
        assert_eq!(params.width_segments, 1);
        assert_eq!(params.height_segments, 100);
    }

    #[test]
    fn test_clamped_handles_nan_size() {
        let params = PlaneParams {
            width: f64::NAN,
            height: f64::INFINITY,
            ..PlaneParams::default()
        }
        .clamped();

        assert_eq!(params.width, 1.0);
        assert_eq!(params.height, 1.0);
    }

    #[test]
    fn test_counts() {
        let params = PlaneParams {
            width_segments: 3,
            height_segments: 2,
            ..PlaneParams::default()
        };
        assert_eq!(params.vertex_count(), 12);
        assert_eq!(params.triangle_count(), 12);
    }
}
