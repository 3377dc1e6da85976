//! Per-tick surface animation: wave displacement plus hover highlighting.

use rand::rngs::StdRng;

use super::highlight::HoverHighlighter;
use super::mesh::SurfaceMesh;
use super::raycast::{Hit, Ray};
use crate::params::{PlaneParams, SurfaceParams};

/// What the renderer must re-upload after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upload {
    /// Nothing changed since the last upload
    Clean,
    /// Vertex positions or colors changed
    Vertices,
    /// The mesh was regenerated; index and vertex buffers must be rebuilt
    Geometry,
}

/// Owns the live mesh, the time accumulator and the hover fades
pub struct SurfaceAnimator {
    mesh: SurfaceMesh,
    params: SurfaceParams,
    highlighter: HoverHighlighter,
    rng: StdRng,
    /// Accumulated animation time (advances by a fixed step per tick)
    time: f64,
    /// Bumped on every regeneration; fades from older epochs are discarded
    epoch: u64,
    vertices_dirty: bool,
    geometry_dirty: bool,
}

impl SurfaceAnimator {
    /// Generate the initial mesh with `rng`, which is kept for regenerations
    pub fn new(plane: PlaneParams, params: SurfaceParams, mut rng: StdRng) -> Self {
        let mesh = SurfaceMesh::generate(&plane, &params, &mut rng);
        Self {
            mesh,
            highlighter: HoverHighlighter::new(&params),
            params,
            rng,
            time: 0.0,
            epoch: 0,
            vertices_dirty: true,
            geometry_dirty: true,
        }
    }

    /// Replace the mesh with a freshly generated one.
    ///
    /// The swap is atomic: in-flight fades belong to the old epoch and are
    /// dropped on the next tick. The time accumulator keeps running.
    pub fn regenerate(&mut self, plane: PlaneParams) {
        self.mesh = SurfaceMesh::generate(&plane, &self.params, &mut self.rng);
        self.epoch += 1;
        self.geometry_dirty = true;
        log::debug!(
            "Regenerated surface: {}x{} units, {}x{} segments, {} vertices (epoch {})",
            plane.width,
            plane.height,
            plane.width_segments,
            plane.height_segments,
            self.mesh.vertex_count(),
            self.epoch
        );
    }

    /// Run one simulation step
    ///
    /// # Arguments
    /// * `dt_s` - Wall-clock seconds since the previous tick (drives fades only)
    /// * `ray` - Pointer ray for this frame, if the pointer has a valid position
    ///
    /// # Returns
    /// * The triangle under the pointer, if any
    pub fn tick(&mut self, dt_s: f32, ray: Option<&Ray>) -> Option<Hit> {
        self.time += self.params.time_step;
        self.mesh.apply_wave(self.time, &self.params);
        self.vertices_dirty = true;

        let hit = ray.and_then(|ray| self.mesh.intersect(ray));
        if let Some(hit) = &hit {
            self.highlighter.on_hit(hit.face, self.epoch);
        }

        if self
            .highlighter
            .advance(dt_s, self.epoch, &mut self.mesh.colors)
        {
            self.vertices_dirty = true;
        }

        hit
    }

    /// Report and clear pending uploads
    pub fn take_upload(&mut self) -> Upload {
        let upload = if self.geometry_dirty {
            Upload::Geometry
        } else if self.vertices_dirty {
            Upload::Vertices
        } else {
            Upload::Clean
        };
        self.geometry_dirty = false;
        self.vertices_dirty = false;
        upload
    }

    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn active_fades(&self) -> usize {
        self.highlighter.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use rand::SeedableRng;

    fn animator(plane: PlaneParams) -> SurfaceAnimator {
        SurfaceAnimator::new(
            plane,
            SurfaceParams::default(),
            StdRng::seed_from_u64(2024),
        )
    }

    fn center_ray() -> Ray {
        Ray::new(DVec3::new(0.0, 0.0, 50.0), DVec3::NEG_Z).unwrap()
    }

    #[test]
    fn test_three_ticks_end_to_end() {
        let mut anim = animator(PlaneParams::default());
        assert_eq!(anim.mesh().vertex_count(), 2601);

        for _ in 0..3 {
            anim.tick(0.016, None);
        }

        assert!((anim.time() - 0.03).abs() < 1e-12);

        let mesh = anim.mesh();
        let expected_x = mesh.baseline[0].x + (0.03 + mesh.phases[0].x).cos() * 0.01;
        assert!((mesh.positions[0].x - expected_x).abs() < 1e-9);
    }

    #[test]
    fn test_tick_matches_closed_form_for_every_vertex() {
        let mut anim = animator(PlaneParams {
            width_segments: 8,
            height_segments: 5,
            ..PlaneParams::default()
        });

        for _ in 0..7 {
            anim.tick(0.5, None);
        }

        let t = anim.time();
        let mesh = anim.mesh();
        for i in 0..mesh.vertex_count() {
            let base = mesh.baseline[i];
            let phase = mesh.phases[i];
            let expected = base
                + DVec3::new((t + phase.x).cos() * 0.01, (t + phase.y).sin() * 0.001, 0.0);
            assert!((mesh.positions[i] - expected).abs().max_element() < 1e-9);
        }
    }

    #[test]
    fn test_time_step_ignores_frame_duration() {
        let mut fast = animator(PlaneParams::default());
        let mut slow = animator(PlaneParams::default());

        fast.tick(0.001, None);
        slow.tick(0.5, None);

        assert_eq!(fast.time(), slow.time());
        assert_eq!(fast.mesh().positions, slow.mesh().positions);
    }

    #[test]
    fn test_regenerate_twice_same_params() {
        let plane = PlaneParams::default();
        let mut anim = animator(plane);

        anim.regenerate(plane);
        let first_count = anim.mesh().vertex_count();
        anim.regenerate(plane);
        let mesh = anim.mesh();

        assert_eq!(first_count, mesh.vertex_count());
        assert_eq!(mesh.baseline.len(), mesh.positions.len());
        assert_eq!(mesh.phases.len(), mesh.positions.len());
        assert_eq!(mesh.colors.len(), mesh.positions.len());
        assert_eq!(anim.epoch(), 2);
    }

    #[test]
    fn test_regenerate_with_new_dimensions() {
        let mut anim = animator(PlaneParams::default());
        anim.regenerate(PlaneParams {
            width: 10.0,
            height: 20.0,
            width_segments: 3,
            height_segments: 4,
        });

        assert_eq!(anim.mesh().vertex_count(), 20);
        assert_eq!(anim.mesh().indices.len(), 3 * 4 * 6);
        assert_eq!(anim.take_upload(), Upload::Geometry);
    }

    #[test]
    fn test_miss_leaves_colors_unchanged() {
        let mut anim = animator(PlaneParams::default());
        let before = anim.mesh().colors.clone();

        let away = Ray::new(DVec3::new(0.0, 0.0, 50.0), DVec3::Z).unwrap();
        assert!(anim.tick(0.016, Some(&away)).is_none());
        assert!(anim.tick(0.016, None).is_none());

        assert_eq!(anim.mesh().colors, before);
        assert_eq!(anim.active_fades(), 0);
    }

    #[test]
    fn test_hit_starts_fade_on_face() {
        let mut anim = animator(PlaneParams::default());
        let base = SurfaceParams::default().base_tint;

        let hit = anim.tick(0.016, Some(&center_ray())).expect("center hit");
        assert_eq!(anim.active_fades(), 1);
        for index in hit.face {
            assert_ne!(anim.mesh().colors[index as usize], base);
        }

        // Pointer leaves: the fade keeps running to completion
        for _ in 0..100 {
            anim.tick(0.016, None);
        }
        assert_eq!(anim.active_fades(), 0);
        for index in hit.face {
            assert_eq!(anim.mesh().colors[index as usize], base);
        }
    }

    #[test]
    fn test_regeneration_drops_in_flight_fades() {
        let plane = PlaneParams::default();
        let mut anim = animator(plane);

        anim.tick(0.016, Some(&center_ray()));
        assert_eq!(anim.active_fades(), 1);

        anim.regenerate(plane);
        anim.tick(0.016, None);

        assert_eq!(anim.active_fades(), 0);
        let base = SurfaceParams::default().base_tint;
        assert!(anim.mesh().colors.iter().all(|c| *c == base));
    }

    #[test]
    fn test_upload_flags() {
        let mut anim = animator(PlaneParams::default());
        assert_eq!(anim.take_upload(), Upload::Geometry);
        assert_eq!(anim.take_upload(), Upload::Clean);

        anim.tick(0.016, None);
        assert_eq!(anim.take_upload(), Upload::Vertices);
    }
}
