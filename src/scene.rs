//! Scene state: surface, camera, stars, pointer and the exit transition.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::Camera;
use crate::params::{CameraParams, FlyAwayParams, PlaneParams, StarfieldParams, SurfaceParams};
use crate::stars::Starfield;
use crate::surface::{Hit, SurfaceAnimator};
use crate::transition::FlyAway;

/// Everything needed to build a [`Scene`]
#[derive(Debug, Clone, Default)]
pub struct SceneConfig {
    pub plane: PlaneParams,
    pub surface: SurfaceParams,
    pub camera: CameraParams,
    pub stars: StarfieldParams,
    pub fly_away: FlyAwayParams,
    /// Fixed seed for reproducible geometry; entropy when `None`
    pub seed: Option<u64>,
}

/// Outcome of a scene tick
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// The fly-away finished; leave for this URL
    Navigate(String),
}

/// Convert a cursor position in pixels to normalized device coordinates.
///
/// Y is flipped so +1 is the top edge. Returns `None` for an empty viewport.
pub fn ndc_from_cursor(x: f64, y: f64, width: u32, height: u32) -> Option<Vec2> {
    if width == 0 || height == 0 {
        return None;
    }
    let ndc_x = (x / width as f64) * 2.0 - 1.0;
    let ndc_y = -(y / height as f64) * 2.0 + 1.0;
    Some(Vec2::new(ndc_x as f32, ndc_y as f32))
}

pub struct Scene {
    pub camera: Camera,
    pub surface: SurfaceAnimator,
    pub stars: Starfield,
    /// Pointer in normalized device coordinates; `None` until it first moves
    pointer: Option<Vec2>,
    fly_away_params: FlyAwayParams,
    fly_away: Option<FlyAway>,
    last_hit: Option<Hit>,
}

impl Scene {
    pub fn new(config: SceneConfig, aspect: f32) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let stars = Starfield::generate(&config.stars, &mut rng);
        let surface = SurfaceAnimator::new(config.plane.clamped(), config.surface, rng);

        Self {
            camera: Camera::new(&config.camera, aspect),
            surface,
            stars,
            pointer: None,
            fly_away_params: config.fly_away,
            fly_away: None,
            last_hit: None,
        }
    }

    /// Record the pointer position in normalized device coordinates
    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = Some(ndc);
    }

    /// Viewport changed size: only the projection follows
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
    }

    /// Swap in a new surface for changed control-panel values
    pub fn regenerate(&mut self, plane: PlaneParams) {
        self.surface.regenerate(plane.clamped());
        self.last_hit = None;
    }

    /// Begin the fly-away. Returns false if it is already running.
    pub fn begin_fly_away(&mut self) -> bool {
        if self.fly_away.is_some() {
            log::debug!("Fly-away already in progress");
            return false;
        }
        log::info!("Starting fly-away transition");
        self.fly_away = Some(FlyAway::start(&self.fly_away_params, &self.camera));
        true
    }

    /// Destination URL once the fly-away has started
    pub fn leaving_for(&self) -> Option<&str> {
        self.fly_away
            .as_ref()
            .map(|_| self.fly_away_params.destination_url.as_str())
    }

    /// Advance one frame
    ///
    /// # Arguments
    /// * `dt_s` - Wall-clock seconds since the previous frame
    pub fn tick(&mut self, dt_s: f32) -> Option<SceneEvent> {
        let ray = self
            .pointer
            .and_then(|pointer| self.camera.ray_from_ndc(pointer));
        self.last_hit = self.surface.tick(dt_s, ray.as_ref());
        if let Some(hit) = &self.last_hit {
            log::trace!(
                "Hit face {:?} at {} ({} fades live)",
                hit.face,
                hit.point,
                self.surface.active_fades()
            );
        }
        self.stars.tick();

        let fly_away = self.fly_away.as_mut()?;
        fly_away
            .advance(dt_s, &mut self.camera)
            .map(SceneEvent::Navigate)
    }

    /// Triangle under the pointer on the last tick
    pub fn last_hit(&self) -> Option<&Hit> {
        self.last_hit.as_ref()
    }
}
