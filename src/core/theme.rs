/// Light/dark state of the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub light: bool,
}

impl ThemeState {
    pub fn from_preference(prefers_light: bool) -> Self {
        Self {
            light: prefers_light,
        }
    }

    /// Flip and return the new `light` value.
    pub fn toggle(&mut self) -> bool {
        self.light = !self.light;
        self.light
    }

    pub fn aria_pressed(&self) -> &'static str {
        if self.light {
            "true"
        } else {
            "false"
        }
    }
}
