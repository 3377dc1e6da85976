//! Keyboard control panel for the plane dimensions.

use crate::params::PlaneParams;

/// Width/height change per key press (world units)
const SIZE_STEP: f64 = 10.0;

/// Segment-count change per key press
const SEGMENT_STEP: i64 = 1;

/// Adjustable plane field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneField {
    Width,
    Height,
    WidthSegments,
    HeightSegments,
}

impl PlaneField {
    fn next(self) -> Self {
        match self {
            PlaneField::Width => PlaneField::Height,
            PlaneField::Height => PlaneField::WidthSegments,
            PlaneField::WidthSegments => PlaneField::HeightSegments,
            PlaneField::HeightSegments => PlaneField::Width,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaneField::Width => "width",
            PlaneField::Height => "height",
            PlaneField::WidthSegments => "widthSegments",
            PlaneField::HeightSegments => "heightSegments",
        }
    }
}

/// Selected field plus the current (always clamped) values
#[derive(Debug, Clone)]
pub struct ControlPanel {
    params: PlaneParams,
    selected: PlaneField,
}

impl ControlPanel {
    pub fn new(params: PlaneParams) -> Self {
        Self {
            params: params.clamped(),
            selected: PlaneField::Width,
        }
    }

    pub fn params(&self) -> PlaneParams {
        self.params
    }

    pub fn selected(&self) -> PlaneField {
        self.selected
    }

    /// Move the selection to the next field
    pub fn select_next(&mut self) -> PlaneField {
        self.selected = self.selected.next();
        self.selected
    }

    /// Nudge the selected field by `steps` increments.
    ///
    /// Returns the new parameters only when a value actually changed, so a
    /// press at a range edge does not trigger a regeneration.
    pub fn adjust(&mut self, steps: i32) -> Option<PlaneParams> {
        let mut next = self.params;
        match self.selected {
            PlaneField::Width => next.width += SIZE_STEP * steps as f64,
            PlaneField::Height => next.height += SIZE_STEP * steps as f64,
            PlaneField::WidthSegments => {
                next.width_segments = step_segments(next.width_segments, steps)
            }
            PlaneField::HeightSegments => {
                next.height_segments = step_segments(next.height_segments, steps)
            }
        }

        let next = next.clamped();
        if next == self.params {
            return None;
        }
        self.params = next;
        Some(next)
    }

    /// Current value of the selected field, for status output
    pub fn describe(&self) -> String {
        let value = match self.selected {
            PlaneField::Width => format!("{:.0}", self.params.width),
            PlaneField::Height => format!("{:.0}", self.params.height),
            PlaneField::WidthSegments => self.params.width_segments.to_string(),
            PlaneField::HeightSegments => self.params.height_segments.to_string(),
        };
        format!("{} = {}", self.selected.label(), value)
    }
}

fn step_segments(current: u32, steps: i32) -> u32 {
    let value = current as i64 + SEGMENT_STEP * steps as i64;
    value.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_cycles_all_fields() {
        let mut panel = ControlPanel::new(PlaneParams::default());
        assert_eq!(panel.selected(), PlaneField::Width);
        assert_eq!(panel.select_next(), PlaneField::Height);
        assert_eq!(panel.select_next(), PlaneField::WidthSegments);
        assert_eq!(panel.select_next(), PlaneField::HeightSegments);
        assert_eq!(panel.select_next(), PlaneField::Width);
    }

    #[test]
    fn test_adjust_width() {
        let mut panel = ControlPanel::new(PlaneParams::default());
        let params = panel.adjust(1).expect("width changed");
        assert_eq!(params.width, 410.0);
        assert_eq!(panel.describe(), "width = 410");
    }

    #[test]
    fn test_adjust_clamps_at_upper_edge() {
        let mut panel = ControlPanel::new(PlaneParams {
            width: 495.0,
            ..PlaneParams::default()
        });

        assert_eq!(panel.adjust(1).map(|p| p.width), Some(500.0));
        assert!(panel.adjust(1).is_none());
    }

    #[test]
    fn test_adjust_segments_clamps_at_lower_edge() {
        let mut panel = ControlPanel::new(PlaneParams {
            width_segments: 2,
            ..PlaneParams::default()
        });
        panel.select_next();
        panel.select_next();

        assert_eq!(panel.adjust(-1).map(|p| p.width_segments), Some(1));
        assert!(panel.adjust(-1).is_none());
        assert!(panel.adjust(-5).is_none());
        assert_eq!(panel.params().width_segments, 1);
    }

    #[test]
    fn test_new_clamps_initial_params() {
        let panel = ControlPanel::new(PlaneParams {
            height_segments: 1000,
            ..PlaneParams::default()
        });
        assert_eq!(panel.params().height_segments, 100);
    }
}
