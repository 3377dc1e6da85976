//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (world units, seconds, radians)
//! - Documented ranges and meanings
//! - Type safety where possible

mod camera;
mod render;
mod surface;

// Re-export all types
pub use camera::{CameraParams, FlyAwayParams, StarfieldParams, DEFAULT_DESTINATION_URL};
pub use render::{DirectionalLight, RenderConfig};
pub use surface::{PlaneParams, SurfaceParams, SEGMENT_RANGE, SIZE_RANGE};
