//! driftplane library - Animated crumpled-plane landing scene

pub mod camera;
pub mod cli;
pub mod controls;
pub mod params;
pub mod rendering;
pub mod scene;
pub mod stars;
pub mod surface;
pub mod transition;
pub mod tween;
