//! Perturbed plane mesh: generation, wave displacement and picking.

use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;

use super::raycast::{Hit, Ray};
use super::Vertex;
use crate::params::{PlaneParams, SurfaceParams};

/// Plane grid with baked random perturbation
///
/// `baseline`, `phases`, `positions` and `colors` always have one entry per
/// vertex. Regeneration builds a whole new mesh; nothing is resized in place.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    pub plane: PlaneParams,
    /// Positions right after perturbation (read-only between regenerations)
    pub baseline: Vec<DVec3>,
    /// Per-component oscillation phase in [0, 2π)
    pub phases: Vec<DVec3>,
    /// Live positions, rewritten every tick
    pub positions: Vec<DVec3>,
    /// Live vertex colors (linear RGB)
    pub colors: Vec<[f32; 3]>,
    /// Triangle list
    pub indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Build a perturbed grid spanning [-w/2, w/2] × [-h/2, h/2] in the XY plane.
    ///
    /// Rows run from the top edge (y = +h/2) downward, x ascending within a row.
    /// Every component is displaced by `(U(0,1) - 0.5) * span`, then each
    /// vertex draws its three phases.
    pub fn generate<R: Rng + ?Sized>(
        plane: &PlaneParams,
        surface: &SurfaceParams,
        rng: &mut R,
    ) -> Self {
        let columns = plane.width_segments as usize + 1;
        let rows = plane.height_segments as usize + 1;
        let segment_w = plane.width / plane.width_segments as f64;
        let segment_h = plane.height / plane.height_segments as f64;
        let half_w = plane.width / 2.0;
        let half_h = plane.height / 2.0;
        let span = surface.perturbation_span;

        let vertex_count = plane.vertex_count();
        let mut baseline = Vec::with_capacity(vertex_count);
        let mut phases = Vec::with_capacity(vertex_count);

        for iy in 0..rows {
            let y = half_h - iy as f64 * segment_h;
            for ix in 0..columns {
                let x = ix as f64 * segment_w - half_w;

                let jitter = DVec3::new(
                    (rng.gen::<f64>() - 0.5) * span,
                    (rng.gen::<f64>() - 0.5) * span,
                    (rng.gen::<f64>() - 0.5) * span,
                );
                baseline.push(DVec3::new(x, y, 0.0) + jitter);

                phases.push(DVec3::new(
                    rng.gen::<f64>() * TAU,
                    rng.gen::<f64>() * TAU,
                    rng.gen::<f64>() * TAU,
                ));
            }
        }

        Self {
            plane: *plane,
            positions: baseline.clone(),
            baseline,
            phases,
            colors: vec![surface.base_tint; vertex_count],
            indices: grid_indices(plane.width_segments, plane.height_segments),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Rewrite live positions for accumulated time `time`.
    ///
    /// X sways with cosine, Y bobs with sine; Z stays at its baseline.
    pub fn apply_wave(&mut self, time: f64, surface: &SurfaceParams) {
        let tables = self.baseline.iter().zip(&self.phases);
        for (live, (base, phase)) in self.positions.iter_mut().zip(tables) {
            live.x = base.x + (time + phase.x).cos() * surface.wave_amplitude_x;
            live.y = base.y + (time + phase.y).sin() * surface.wave_amplitude_y;
            live.z = base.z;
        }
    }

    /// Nearest triangle of the live mesh under `ray`
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;

        for tri in self.indices.chunks_exact(3) {
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];

            let Some(distance) = ray.intersect_triangle(v0, v1, v2) else {
                continue;
            };
            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(Hit {
                    face: [tri[0], tri[1], tri[2]],
                    distance,
                    point: ray.at(distance),
                });
            }
        }

        nearest
    }

    /// Interleaved f32 vertex data for upload
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(position, color)| Vertex {
                position: position.as_vec3().to_array(),
                color: *color,
            })
            .collect()
    }
}

/// Two triangles per quad: (a, b, d) and (b, c, d), where a/d are on the
/// upper row and b/c on the row below.
fn grid_indices(width_segments: u32, height_segments: u32) -> Vec<u32> {
    let columns = width_segments + 1;
    let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = ix + columns * iy;
            let b = ix + columns * (iy + 1);
            let c = (ix + 1) + columns * (iy + 1);
            let d = (ix + 1) + columns * iy;

            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    indices
}
