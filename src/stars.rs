//! Rotating starfield backdrop.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use rand::Rng;

use crate::params::StarfieldParams;

/// Vertex data for a single star point
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
}

/// Static point cloud that slowly rolls about the X axis
pub struct Starfield {
    pub vertices: Vec<StarVertex>,
    rotation_x: f32,
    rotation_per_tick: f32,
}

impl Starfield {
    /// Scatter `params.count` stars uniformly in a cube of edge `params.spread`
    pub fn generate<R: Rng + ?Sized>(params: &StarfieldParams, rng: &mut R) -> Self {
        let vertices = (0..params.count)
            .map(|_| StarVertex {
                position: [
                    (rng.gen::<f32>() - 0.5) * params.spread,
                    (rng.gen::<f32>() - 0.5) * params.spread,
                    (rng.gen::<f32>() - 0.5) * params.spread,
                ],
            })
            .collect();

        Self {
            vertices,
            rotation_x: 0.0,
            rotation_per_tick: params.rotation_per_tick,
        }
    }

    pub fn tick(&mut self) {
        self.rotation_x += self.rotation_per_tick;
    }

    #[cfg(test)]
    fn rotation_x(&self) -> f32 {
        self.rotation_x
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_stars_fill_cube() {
        let params = StarfieldParams::default();
        let stars = Starfield::generate(&params, &mut StdRng::seed_from_u64(1));

        assert_eq!(stars.vertices.len(), 1000);
        for star in &stars.vertices {
            assert!(star.position.iter().all(|c| c.abs() <= 1000.0));
        }
    }

    #[test]
    fn test_rotation_accumulates_per_tick() {
        let mut stars =
            Starfield::generate(&StarfieldParams::default(), &mut StdRng::seed_from_u64(1));
        for _ in 0..4 {
            stars.tick();
        }
        assert!((stars.rotation_x() - 0.002).abs() < 1e-7);
        assert_ne!(stars.model(), Mat4::IDENTITY);
    }
}
