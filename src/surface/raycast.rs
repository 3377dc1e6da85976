//! Ray/triangle intersection for pointer picking.

use glam::DVec3;

/// Rays closer to parallel than this are treated as misses
const PARALLEL_EPSILON: f64 = 1e-12;

/// Half-line from `origin` along unit `direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    ///
    /// Returns `None` for non-finite input or a zero-length direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Option<Self> {
        if !origin.is_finite() {
            return None;
        }
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Möller–Trumbore test against triangle (v0, v1, v2), both faces.
    ///
    /// Returns the distance along the ray to the hit point.
    pub fn intersect_triangle(&self, v0: DVec3, v1: DVec3, v2: DVec3) -> Option<f64> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let pvec = self.direction.cross(edge2);
        let det = edge1.dot(pvec);
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = self.origin - v0;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = self.direction.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        (t > PARALLEL_EPSILON).then_some(t)
    }
}

/// Nearest triangle under a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Vertex indices of the hit triangle
    pub face: [u32; 3],
    /// Distance from the ray origin
    pub distance: f64,
    /// World-space hit point
    pub point: DVec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (DVec3, DVec3, DVec3) {
        (
            DVec3::new(-1.0, -1.0, 0.0),
            DVec3::new(1.0, -1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_ray_hits_front_face() {
        let (a, b, c) = triangle();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z).unwrap();
        let t = ray.intersect_triangle(a, b, c).expect("should hit");
        assert!((t - 10.0).abs() < 1e-12);
        assert!(ray.at(t).z.abs() < 1e-12);
    }

    #[test]
    fn test_ray_hits_back_face() {
        let (a, b, c) = triangle();
        let ray = Ray::new(DVec3::new(0.0, 0.0, -4.0), DVec3::Z).unwrap();
        let t = ray.intersect_triangle(a, b, c).expect("double-sided hit");
        assert!((t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_misses_outside_triangle() {
        let (a, b, c) = triangle();
        let ray = Ray::new(DVec3::new(5.0, 5.0, 10.0), DVec3::NEG_Z).unwrap();
        assert!(ray.intersect_triangle(a, b, c).is_none());
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let (a, b, c) = triangle();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::Z).unwrap();
        assert!(ray.intersect_triangle(a, b, c).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let (a, b, c) = triangle();
        let ray = Ray::new(DVec3::new(-5.0, 0.0, 0.0), DVec3::X).unwrap();
        assert!(ray.intersect_triangle(a, b, c).is_none());
    }

    #[test]
    fn test_degenerate_rays_rejected() {
        assert!(Ray::new(DVec3::ZERO, DVec3::ZERO).is_none());
        assert!(Ray::new(DVec3::splat(f64::NAN), DVec3::Z).is_none());
        assert!(Ray::new(DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 1.0)).is_none());
    }
}
