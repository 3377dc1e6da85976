//! Scalar property tweens with GSAP-style easing curves.
//!
//! Tweens are advanced explicitly by the frame clock; nothing runs on its own.

/// Easing curve applied to linear progress in [0, 1]
///
/// Names follow GSAP, where `power3` is the quartic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out (GSAP's default curve)
    #[default]
    Power1Out,
    /// Quartic ease-in
    Power3In,
    /// Quartic ease-in-out
    Power3InOut,
}

impl Ease {
    /// Map linear progress `t` to eased progress. Input is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power3In => t.powi(4),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
        }
    }
}

/// A single scalar interpolation with optional start delay
#[derive(Debug, Clone)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub ease: Ease,
    elapsed_s: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_s: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_s,
            delay_s: 0.0,
            ease,
            elapsed_s: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_s: f32) -> Self {
        self.delay_s = delay_s;
        self
    }

    /// Advance by `dt_s` seconds and return the new value
    pub fn advance(&mut self, dt_s: f32) -> f32 {
        if dt_s.is_finite() && dt_s > 0.0 {
            self.elapsed_s += dt_s;
        }
        self.value()
    }

    /// Whether the start delay has passed
    pub fn has_started(&self) -> bool {
        self.elapsed_s > self.delay_s
    }

    /// Eased progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if !self.has_started() {
            return 0.0;
        }
        if self.duration_s <= 0.0 {
            return 1.0;
        }
        self.ease
            .apply((self.elapsed_s - self.delay_s) / self.duration_s)
    }

    /// Current interpolated value (exactly `from` at 0, exactly `to` at 1)
    pub fn value(&self) -> f32 {
        let f = self.progress();
        self.from * (1.0 - f) + self.to * f
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_s >= self.delay_s + self.duration_s
    }
}
