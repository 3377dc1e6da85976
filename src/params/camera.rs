//! Camera, starfield and fly-away transition configuration.

/// Perspective camera setup
#[derive(Debug, Clone)]
pub struct CameraParams {
    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Initial camera position, looking down -Z
    pub position: [f32; 3],
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 1000.0,
            position: [0.0, 0.0, 50.0],
        }
    }
}

/// Backdrop point cloud
#[derive(Debug, Clone)]
pub struct StarfieldParams {
    /// Number of stars
    pub count: usize,

    /// Edge length of the cube the stars are scattered in, centred on the origin
    pub spread: f32,

    /// Rotation about X added every tick (radians)
    pub rotation_per_tick: f32,
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            count: 1000,
            spread: 2000.0,
            rotation_per_tick: 0.0005,
        }
    }
}

/// Scripted camera exit sequence
///
/// Dolly and pitch run together; the lift starts after `lift_delay_s` and
/// navigation fires when it completes.
#[derive(Debug, Clone)]
pub struct FlyAwayParams {
    /// Camera Z at the end of the dolly
    pub dolly_to_z: f32,

    /// Dolly duration (seconds)
    pub dolly_duration_s: f32,

    /// Camera pitch at the end of the tilt (radians, ~90° up)
    pub pitch_to_rad: f32,

    /// Tilt duration (seconds)
    pub pitch_duration_s: f32,

    /// Camera Y at the end of the lift
    pub lift_to_y: f32,

    /// Lift duration (seconds)
    pub lift_duration_s: f32,

    /// Delay before the lift starts (seconds)
    pub lift_delay_s: f32,

    /// Destination reported when the sequence ends
    pub destination_url: String,
}

/// Where the fly-away lands unless overridden
pub const DEFAULT_DESTINATION_URL: &str = "https://alvonjovanus.netlify.app/";

impl Default for FlyAwayParams {
    fn default() -> Self {
        Self {
            dolly_to_z: 25.0,
            dolly_duration_s: 2.0,
            pitch_to_rad: 1.57,
            pitch_duration_s: 2.0,
            lift_to_y: 1000.0,
            lift_duration_s: 1.0,
            lift_delay_s: 2.0,
            destination_url: DEFAULT_DESTINATION_URL.to_string(),
        }
    }
}
