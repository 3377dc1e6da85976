//! Scripted fly-away: dolly in, tilt up, then lift off and hand over the URL.

use crate::camera::Camera;
use crate::params::FlyAwayParams;
use crate::tween::{Ease, Tween};

/// Running fly-away sequence
///
/// Start values are captured from the camera when the sequence begins.
#[derive(Debug, Clone)]
pub struct FlyAway {
    dolly: Tween,
    tilt: Tween,
    lift: Tween,
    destination_url: String,
    navigated: bool,
}

impl FlyAway {
    pub fn start(params: &FlyAwayParams, camera: &Camera) -> Self {
        Self {
            dolly: Tween::new(
                camera.position.z,
                params.dolly_to_z,
                params.dolly_duration_s,
                Ease::Power3InOut,
            ),
            tilt: Tween::new(
                camera.pitch,
                params.pitch_to_rad,
                params.pitch_duration_s,
                Ease::Power3InOut,
            ),
            lift: Tween::new(
                camera.position.y,
                params.lift_to_y,
                params.lift_duration_s,
                Ease::Power3In,
            )
            .with_delay(params.lift_delay_s),
            destination_url: params.destination_url.clone(),
            navigated: false,
        }
    }

    /// Move the camera along the sequence.
    ///
    /// Returns the destination URL exactly once, on the tick the lift completes.
    pub fn advance(&mut self, dt_s: f32, camera: &mut Camera) -> Option<String> {
        camera.position.z = self.dolly.advance(dt_s);
        camera.pitch = self.tilt.advance(dt_s);

        let y = self.lift.advance(dt_s);
        if self.lift.has_started() {
            camera.position.y = y;
        }

        if self.lift.is_finished() && !self.navigated {
            self.navigated = true;
            return Some(self.destination_url.clone());
        }
        None
    }

    pub fn is_complete(&self) -> bool {
        self.navigated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CameraParams;

    #[test]
    fn test_fly_away_sequence() {
        let params = FlyAwayParams::default();
        let mut camera = Camera::new(&CameraParams::default(), 1.0);
        let mut fly = FlyAway::start(&params, &camera);

        // First second: dolly and tilt under way, lift waiting
        for _ in 0..10 {
            assert!(fly.advance(0.1, &mut camera).is_none());
        }
        assert!(camera.position.z < 50.0 && camera.position.z > 25.0);
        assert!(camera.pitch > 0.0 && camera.pitch < 1.57);
        assert_eq!(camera.position.y, 0.0);

        // Past the two-second mark the dolly and tilt have landed
        for _ in 0..12 {
            assert!(fly.advance(0.1, &mut camera).is_none());
        }
        assert_eq!(camera.position.z, 25.0);
        assert_eq!(camera.pitch, 1.57);
        assert!(camera.position.y > 0.0);

        let mut destination = None;
        for _ in 0..20 {
            if let Some(url) = fly.advance(0.1, &mut camera) {
                assert!(destination.is_none(), "navigation must fire once");
                destination = Some(url);
            }
        }

        assert_eq!(destination.as_deref(), Some(params.destination_url.as_str()));
        assert_eq!(camera.position.y, 1000.0);
        assert!(fly.is_complete());
    }

    #[test]
    fn test_single_large_step_completes() {
        let params = FlyAwayParams {
            destination_url: "https://example.org/".to_string(),
            ..FlyAwayParams::default()
        };
        let mut camera = Camera::new(&CameraParams::default(), 1.0);
        let mut fly = FlyAway::start(&params, &camera);

        assert_eq!(
            fly.advance(10.0, &mut camera).as_deref(),
            Some("https://example.org/")
        );
        assert!(fly.advance(1.0, &mut camera).is_none());
    }
}
