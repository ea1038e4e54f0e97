//! Mutable render state: zoom, orientation and elapsed time.

use std::ops::ControlFlow;
use std::time::Duration;

use crate::core::Orientation;
use crate::types::{
    CubeAction, DEFAULT_ZOOM, MAX_FRAME_DT, ROTATION_RATES, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};

/// Clamp a zoom factor into `[ZOOM_MIN, ZOOM_MAX]`.
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub zoom: f64,
    pub orientation: Orientation,
    /// Seconds of animation time; drives the orbiting key light.
    pub time: f64,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            orientation: Orientation::initial(),
            time: 0.0,
        }
    }
}

impl RenderState {
    pub fn with_zoom(zoom: f64) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            ..Self::default()
        }
    }

    /// Integrate one frame of elapsed time, clamped to `MAX_FRAME_DT`.
    pub fn advance(&mut self, elapsed: Duration) {
        let dt = elapsed.as_secs_f64().min(MAX_FRAME_DT);
        self.time += dt;
        self.orientation.x += ROTATION_RATES[0] * dt;
        self.orientation.y += ROTATION_RATES[1] * dt;
        self.orientation.z += ROTATION_RATES[2] * dt;
    }

    /// Returns whether the zoom moved; it stays put at `ZOOM_MAX`.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom((self.zoom * ZOOM_STEP).min(ZOOM_MAX))
    }

    /// Returns whether the zoom moved; it stays put at `ZOOM_MIN`.
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom((self.zoom / ZOOM_STEP).max(ZOOM_MIN))
    }

    fn set_zoom(&mut self, zoom: f64) -> bool {
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Apply a user action. `Break` means the loop should stop.
    pub fn apply(&mut self, action: CubeAction) -> ControlFlow<()> {
        let changed = match action {
            CubeAction::Quit => return ControlFlow::Break(()),
            CubeAction::ZoomIn => self.zoom_in(),
            CubeAction::ZoomOut => self.zoom_out(),
        };
        if changed {
            tracing::debug!(action = action.as_str(), zoom = self.zoom, "zoom changed");
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default_pose() {
        let s = RenderState::default();
        assert_eq!(s.zoom, DEFAULT_ZOOM);
        assert_eq!(s.orientation, Orientation::new(0.7, 0.9, 0.3));
        assert_eq!(s.time, 0.0);
    }

    #[test]
    fn advance_scales_by_rates() {
        let mut s = RenderState::default();
        s.advance(Duration::from_millis(50));
        assert!((s.time - 0.05).abs() < 1e-12);
        assert!((s.orientation.x - (0.7 + 0.6 * 0.05)).abs() < 1e-12);
        assert!((s.orientation.y - (0.9 + 0.8 * 0.05)).abs() < 1e-12);
        assert!((s.orientation.z - (0.3 + 0.4 * 0.05)).abs() < 1e-12);
    }

    #[test]
    fn long_stalls_are_clamped() {
        let mut s = RenderState::default();
        s.advance(Duration::from_secs(3));
        assert!((s.time - MAX_FRAME_DT).abs() < 1e-12);
    }

    #[test]
    fn quit_breaks() {
        let mut s = RenderState::default();
        assert!(s.apply(CubeAction::Quit).is_break());
        assert!(s.apply(CubeAction::ZoomIn).is_continue());
    }

    #[test]
    fn zoom_reports_change_only_inside_limits() {
        let mut s = RenderState::with_zoom(ZOOM_MAX);
        assert!(!s.zoom_in());
        assert_eq!(s.zoom, ZOOM_MAX);
        assert!(s.zoom_out());
        assert!(s.zoom_in());
        assert!((s.zoom - ZOOM_MAX).abs() < 1e-12);

        let mut s = RenderState::with_zoom(ZOOM_MIN);
        assert!(!s.zoom_out());
        assert_eq!(s.zoom, ZOOM_MIN);
        assert!(s.zoom_in());
        assert!(s.apply(CubeAction::ZoomOut).is_continue());
        assert!((s.zoom - ZOOM_MIN).abs() < 1e-12);
    }

    #[test]
    fn with_zoom_clamps() {
        assert_eq!(RenderState::with_zoom(100.0).zoom, ZOOM_MAX);
        assert_eq!(RenderState::with_zoom(0.0).zoom, ZOOM_MIN);
        assert_eq!(RenderState::with_zoom(1.5).zoom, 1.5);
    }
}
