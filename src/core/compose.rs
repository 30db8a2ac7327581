// Layered drawing of the starfield onto any 2D canvas.
//
// Layers are drawn in a fixed order every frame: clear, additive glows,
// star points, then proximity links.

use super::constants::*;
use super::field::StarField;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    SourceOver,
    Lighter,
}

impl Blend {
    pub fn as_str(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self { rgb, a }
    }

    /// CSS color string; alpha is clamped into [0, 1].
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        let a = if self.a.is_finite() { self.a.clamp(0.0, 1.0) } else { 0.0 };
        format!("rgba({},{},{},{})", r, g, b, a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Minimal drawing surface the compositor needs. Coordinates are logical
/// pixels; device scaling is the implementor's concern.
pub trait Canvas {
    fn clear(&mut self);
    fn set_blend(&mut self, blend: Blend);
    fn fill_radial(&mut self, center: Vec2, radius: f32, stops: &[GradientStop; 3]);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
}

impl Link {
    #[inline]
    pub fn alpha(&self) -> f32 {
        LINK_BASE_ALPHA - self.distance / LINK_FADE_DIVISOR
    }
}

pub fn glow_stops(glow: f32) -> [GradientStop; 3] {
    [
        GradientStop {
            offset: 0.0,
            color: Rgba::new(GLOW_RGB, GLOW_INNER_ALPHA * glow),
        },
        GradientStop {
            offset: GLOW_MID_STOP,
            color: Rgba::new(GLOW_RGB, GLOW_MID_ALPHA * glow),
        },
        GradientStop {
            offset: 1.0,
            color: Rgba::new(GLOW_RGB, 0.0),
        },
    ]
}

#[inline]
pub fn glow_radius(glow: f32) -> f32 {
    GLOW_BASE_RADIUS + glow * GLOW_RADIUS_RANGE
}

impl StarField {
    /// One full simulation step followed by a redraw.
    pub fn tick(&mut self, viewport: Vec2, tilt: Vec2, canvas: &mut impl Canvas) {
        self.advance(viewport, tilt);
        self.update_glow();
        self.render(canvas);
    }

    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear();
        self.draw_glows(canvas);
        self.draw_points(canvas);
        self.draw_links(canvas);
    }

    fn draw_glows(&self, canvas: &mut impl Canvas) {
        canvas.set_blend(Blend::Lighter);
        for s in &self.stars {
            // Faint glows are skipped outright; this is also how they fade out.
            if s.glow < GLOW_VISIBLE_MIN {
                continue;
            }
            canvas.fill_radial(s.effective_pos(), glow_radius(s.glow), &glow_stops(s.glow));
        }
        canvas.set_blend(Blend::SourceOver);
    }

    fn draw_points(&self, canvas: &mut impl Canvas) {
        for s in &self.stars {
            canvas.fill_disc(s.effective_pos(), s.radius, Rgba::new(STAR_RGB, s.alpha));
        }
    }

    fn draw_links(&self, canvas: &mut impl Canvas) {
        for i in 0..self.stars.len() {
            for link in self.links_from(i) {
                canvas.stroke_line(
                    self.stars[link.from].effective_pos(),
                    self.stars[link.to].effective_pos(),
                    LINK_WIDTH,
                    Rgba::new(LINK_RGB, link.alpha()),
                );
            }
        }
    }

    /// Up to `MAX_LINKS_PER_STAR` links from star `i` to later stars, in index
    /// order. First found wins, not nearest.
    pub fn links_from(&self, i: usize) -> SmallVec<[Link; MAX_LINKS_PER_STAR]> {
        let mut out = SmallVec::new();
        let Some(origin) = self.stars.get(i) else {
            return out;
        };
        let a = origin.effective_pos();
        for (j, other) in self.stars.iter().enumerate().skip(i + 1) {
            if out.len() >= MAX_LINKS_PER_STAR {
                break;
            }
            let distance = a.distance(other.effective_pos());
            if distance < BOND_RANGE {
                out.push(Link {
                    from: i,
                    to: j,
                    distance,
                });
            }
        }
        out
    }
}
