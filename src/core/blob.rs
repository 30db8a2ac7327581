use super::constants::{BLOB_EASE, BLOB_PARALLAX};
use glam::Vec2;

/// Eased pointer follower for the soft cursor blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobFollow {
    pub target: Vec2,
    pub current: Vec2,
    /// `None` until the pointer first moves or leaves; the page's own
    /// styling decides the initial look.
    pub visible: Option<bool>,
}

impl BlobFollow {
    /// Starts at rest in the middle of the viewport.
    pub fn centered(viewport: Vec2) -> Self {
        let center = viewport * 0.5;
        Self {
            target: center,
            current: center,
            visible: None,
        }
    }

    pub fn point_to(&mut self, pos: Vec2) {
        self.target = pos;
        self.visible = Some(true);
    }

    /// Fade out, but only once the pointer has actually been seen.
    pub fn leave(&mut self) {
        if self.visible.is_some() {
            self.visible = Some(false);
        }
    }

    /// Follow the shared pointer state for this frame.
    pub fn sync(&mut self, inside: bool, position: Vec2) {
        if inside {
            self.point_to(position);
        } else {
            self.leave();
        }
    }

    /// Ease toward the target and return the on-screen position, pushed
    /// away from the viewport center for a little parallax.
    pub fn step(&mut self, viewport: Vec2) -> Vec2 {
        self.current = self.current.lerp(self.target, BLOB_EASE);
        let offset = (self.current - viewport * 0.5) * Vec2::from(BLOB_PARALLAX);
        self.current + offset
    }

    /// Opacity to write, or `None` while the pointer is still untouched.
    pub fn opacity(&self) -> Option<&'static str> {
        self.visible.map(|v| if v { "1" } else { "0" })
    }
}

pub fn transform_css(pos: Vec2) -> String {
    format!("translate({}px, {}px) translate(-50%,-50%)", pos.x, pos.y)
}
