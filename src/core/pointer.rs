use super::constants::TILT_SENSITIVITY;
use glam::Vec2;

/// Latest pointer state shared between the input handlers and the frame loop.
///
/// Handlers are the only writers; the frame loop only reads. `tilt` is derived
/// at event time and is never reset, so the starfield keeps its last parallax
/// after the pointer leaves the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub position: Vec2,
    pub tilt: Vec2,
    pub inside: bool,
}

impl PointerSignal {
    pub fn on_move(&mut self, position: Vec2, viewport: Vec2) {
        self.position = position;
        self.tilt = tilt_for(position, viewport);
        self.inside = true;
    }

    pub fn on_leave(&mut self) {
        self.inside = false;
    }
}

#[inline]
pub fn tilt_for(position: Vec2, viewport: Vec2) -> Vec2 {
    (position - viewport * 0.5) * TILT_SENSITIVITY
}
