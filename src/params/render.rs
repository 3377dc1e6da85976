//! Window and lighting configuration.

/// Directional light, shining from `direction` toward the origin
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Vector pointing from the scene toward the light
    pub direction: [f32; 3],

    /// Linear RGB color
    pub color: [f32; 3],

    /// Scalar multiplier on `color`
    pub intensity: f32,
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Window title; [`RenderConfig::window_title`] adds the prompt
    pub title: String,

    /// Key light below-front and back light behind the plane
    pub lights: [DirectionalLight; 2],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            title: "driftplane".to_string(),
            lights: [
                DirectionalLight {
                    direction: [0.0, -1.0, 1.0],
                    color: [1.0, 1.0, 1.0],
                    intensity: 1.0,
                },
                DirectionalLight {
                    direction: [0.0, 0.0, -1.0],
                    color: [1.0, 1.0, 1.0],
                    intensity: 1.0,
                },
            ],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }

    /// Title bar text, standing in for the landing page's call to action
    ///
    /// # Arguments
    /// * `leaving_for` - Destination once the fly-away has started
    pub fn window_title(&self, leaving_for: Option<&str>) -> String {
        match leaving_for {
            Some(url) => format!("{} | leaving for {}", self.title, url),
            None => format!("{} | press Enter to fly away", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title_prompts_then_names_destination() {
        let config = RenderConfig::default();

        assert_eq!(config.window_title(None), "driftplane | press Enter to fly away");
        assert_eq!(
            config.window_title(Some("https://example.com/")),
            "driftplane | leaving for https://example.com/"
        );
    }

    #[test]
    fn test_default_aspect_ratio() {
        assert!((RenderConfig::default().aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
