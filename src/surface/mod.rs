//! Perturbed plane surface: generation, wave animation and hover fades.

mod animator;
mod highlight;
mod mesh;
mod raycast;

// Re-export public types
pub use animator::{SurfaceAnimator, Upload};
pub use highlight::HoverHighlighter;
pub use mesh::SurfaceMesh;
pub use raycast::{Hit, Ray};

use bytemuck::{Pod, Zeroable};

/// Vertex data for the surface mesh (position + color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}
