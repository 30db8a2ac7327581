// Star particles and their per-frame kinematics.
//
// The field is created once with a fixed number of stars. Each frame
// `StarField::advance` drifts and wraps positions and eases the parallax
// offsets; the glow pass lives in `glow.rs` and drawing in `compose.rs`.

use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
    /// Smoothed parallax offset, before projection.
    pub tilt: Vec2,
    /// Smoothed density glow in [0, 1].
    pub glow: f32,
    /// Neighbor count from the latest glow pass.
    pub neighbors: u32,
}

impl Star {
    /// A motionless star at `pos`, mostly useful for building fixed layouts.
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            radius: STAR_RADIUS_MIN,
            alpha: 1.0,
            ..Default::default()
        }
    }

    pub fn random(viewport: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f32>() * viewport.x, rng.gen::<f32>() * viewport.y),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * STAR_SPEED,
                (rng.gen::<f32>() - 0.5) * STAR_SPEED,
            ),
            radius: rng.gen::<f32>() * STAR_RADIUS_SPAN + STAR_RADIUS_MIN,
            alpha: rng.gen::<f32>() * STAR_ALPHA_SPAN + STAR_ALPHA_MIN,
            ..Default::default()
        }
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.radius + DEPTH_BIAS
    }

    /// Where the star is drawn and measured: base position nudged by parallax.
    #[inline]
    pub fn effective_pos(&self) -> Vec2 {
        self.pos + self.tilt * TILT_PROJECTION
    }
}

#[derive(Clone, Debug, Default)]
pub struct StarField {
    pub(crate) stars: Vec<Star>,
    // Glow pass scratch, reused across frames.
    pub(crate) effective: Vec<Vec2>,
    pub(crate) counts: Vec<u32>,
}

impl StarField {
    pub fn new(count: usize, viewport: Vec2, rng: &mut impl Rng) -> Self {
        let stars = (0..count).map(|_| Star::random(viewport, rng)).collect();
        Self::from_stars(stars)
    }

    pub fn from_stars(stars: Vec<Star>) -> Self {
        let n = stars.len();
        Self {
            stars,
            effective: Vec::with_capacity(n),
            counts: Vec::with_capacity(n),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Drift, wrap, and ease parallax offsets toward `tilt` scaled by depth.
    pub fn advance(&mut self, viewport: Vec2, tilt: Vec2) {
        for s in &mut self.stars {
            s.pos += s.vel;
            s.pos.x = wrap_axis(s.pos.x, viewport.x);
            s.pos.y = wrap_axis(s.pos.y, viewport.y);

            let target = tilt * s.depth();
            s.tilt = s.tilt.lerp(target, TILT_SMOOTHING);
        }
    }
}

/// Toroidal wrap: leaving one side by more than the margin re-enters on the
/// opposite side at the margin. Velocity is untouched.
#[inline]
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if v > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}
