/// Device-independent sizing of the drawing surface.
///
/// The backing store is `floor(size * ratio)` physical pixels while the
/// element keeps its logical CSS size; drawing uses logical coordinates under
/// a transform that is always replaced, never accumulated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f64,
    pub height: f64,
    pub ratio: f64,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            ratio: 1.0,
        }
    }
}

impl SurfaceMetrics {
    /// Missing or sub-unit ratios fall back to 1; negative or non-finite
    /// sizes collapse to 0.
    pub fn measure(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
            ratio,
        }
    }

    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.ratio).floor() as u32,
            (self.height * self.ratio).floor() as u32,
        )
    }

    /// `setTransform` arguments `[a, b, c, d, e, f]`: uniform scale by ratio.
    pub fn transform(&self) -> [f64; 6] {
        [self.ratio, 0.0, 0.0, self.ratio, 0.0, 0.0]
    }

    pub fn logical_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32, self.height as f32)
    }
}

#[inline]
fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
