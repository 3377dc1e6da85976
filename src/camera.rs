//! Perspective camera with pointer-ray unprojection.

use glam::{DVec3, Mat4, Vec2, Vec3};

use crate::params::CameraParams;
use crate::surface::Ray;

/// Camera looking down -Z, tilted by `pitch` about the X axis
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    /// Rotation about X (radians); positive tilts the view up toward +Y
    pub pitch: f32,
    fov_y_rad: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(params: &CameraParams, aspect: f32) -> Self {
        Self {
            position: Vec3::from_array(params.position),
            pitch: 0.0,
            fov_y_rad: params.fov_degrees.to_radians(),
            aspect,
            near: params.near_plane,
            far: params.far_plane,
        }
    }

    /// Update aspect ratio after a viewport resize. Degenerate sizes are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Camera-to-world transform
    pub fn world_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_x(self.pitch)
    }

    pub fn view(&self) -> Mat4 {
        self.world_transform().inverse()
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_rad, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Ray from the camera through normalized device coordinates `ndc`.
    ///
    /// Returns `None` when `ndc` is non-finite or outside [-1, 1]².
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Option<Ray> {
        if !ndc.is_finite() || ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
            return None;
        }

        let inv_view_proj = self.view_proj().as_dmat4().inverse();
        let far_point = inv_view_proj.project_point3(DVec3::new(ndc.x as f64, ndc.y as f64, 1.0));
        let origin = self.position.as_dvec3();

        Ray::new(origin, far_point - origin)
    }
}
