//! Hover fades: hit triangles flash bright and ease back to the base tint.

use crate::params::SurfaceParams;
use crate::tween::{Ease, Tween};

/// One in-flight fade on a single triangle
#[derive(Debug, Clone)]
struct Fade {
    face: [u32; 3],
    /// Mesh epoch the fade was started under
    epoch: u64,
    progress: Tween,
}

/// Fire-and-forget color fades for hovered triangles
///
/// Fades are not coordinated: several may target the same vertex, and they
/// are applied in start order so the most recently started one wins the slot.
#[derive(Debug, Clone)]
pub struct HoverHighlighter {
    fades: Vec<Fade>,
    highlight: [f32; 3],
    base: [f32; 3],
    duration_s: f32,
    ease: Ease,
}

impl HoverHighlighter {
    pub fn new(params: &SurfaceParams) -> Self {
        Self {
            fades: Vec::new(),
            highlight: params.highlight_tint,
            base: params.base_tint,
            duration_s: params.fade_duration_s,
            ease: Ease::default(),
        }
    }

    /// Start a new fade on `face`, tagged with the current mesh `epoch`
    pub fn on_hit(&mut self, face: [u32; 3], epoch: u64) {
        self.fades.push(Fade {
            face,
            epoch,
            progress: Tween::new(0.0, 1.0, self.duration_s, self.ease),
        });
    }

    /// Advance all fades by `dt_s` and write their colors into `colors`.
    ///
    /// Fades from another epoch are dropped without writing. Finished fades
    /// write the base tint once and are removed. Returns whether any color
    /// slot was written.
    pub fn advance(&mut self, dt_s: f32, epoch: u64, colors: &mut [[f32; 3]]) -> bool {
        self.fades.retain(|fade| fade.epoch == epoch);

        let mut wrote = false;
        for fade in &mut self.fades {
            let color = blend(self.highlight, self.base, fade.progress.advance(dt_s));
            for &index in &fade.face {
                if let Some(slot) = colors.get_mut(index as usize) {
                    *slot = color;
                    wrote = true;
                }
            }
        }

        self.fades.retain(|fade| !fade.progress.is_finished());
        wrote
    }

    /// Color at eased fraction `f` of a fade
    #[cfg(test)]
    fn color_at(&self, f: f32) -> [f32; 3] {
        blend(self.highlight, self.base, f)
    }

    /// Number of fades still running
    pub fn active(&self) -> usize {
        self.fades.len()
    }
}

/// `from * (1 - f) + to * f`, exact at both ends
fn blend(from: [f32; 3], to: [f32; 3], f: f32) -> [f32; 3] {
    [
        from[0] * (1.0 - f) + to[0] * f,
        from[1] * (1.0 - f) + to[1] * f,
        from[2] * (1.0 - f) + to[2] * f,
    ]
}
