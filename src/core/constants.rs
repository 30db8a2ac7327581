// Shared starfield and widget tuning constants.
//
// All smoothing factors are per-frame blend weights in (0, 1):
// new = old + (target - old) * factor.

// Field population and drift
pub const STAR_COUNT: usize = 70;
pub const STAR_SPEED: f32 = 0.25; // per-axis velocity spans [-SPEED/2, SPEED/2]
pub const STAR_RADIUS_MIN: f32 = 0.6;
pub const STAR_RADIUS_SPAN: f32 = 1.6;
pub const STAR_ALPHA_MIN: f32 = 0.3;
pub const STAR_ALPHA_SPAN: f32 = 0.7;
pub const WRAP_MARGIN: f32 = 10.0; // logical px beyond the viewport before wrapping

// Pointer parallax
pub const TILT_SENSITIVITY: f32 = 0.002; // tilt per px of pointer offset from center
pub const DEPTH_BIAS: f32 = 0.2; // depth = radius + bias
pub const TILT_SMOOTHING: f32 = 0.06;
pub const TILT_PROJECTION: f32 = 30.0; // visual exaggeration of tilt offsets

// Proximity and glow
pub const BOND_RANGE: f32 = 110.0;
pub const BOND_SATURATION: f32 = 6.0; // neighbor count that maps to full glow
pub const GLOW_SMOOTHING: f32 = 0.08;
pub const GLOW_VISIBLE_MIN: f32 = 0.02;

// Glow layer
pub const GLOW_BASE_RADIUS: f32 = 36.0;
pub const GLOW_RADIUS_RANGE: f32 = 120.0;
pub const GLOW_INNER_ALPHA: f32 = 0.06;
pub const GLOW_MID_ALPHA: f32 = 0.02;
pub const GLOW_MID_STOP: f32 = 0.45;
pub const GLOW_RGB: [u8; 3] = [57, 166, 255]; // soft blue
pub const STAR_RGB: [u8; 3] = [255, 255, 255];

// Link layer
pub const MAX_LINKS_PER_STAR: usize = 3;
pub const LINK_BASE_ALPHA: f32 = 0.55;
pub const LINK_FADE_DIVISOR: f32 = 200.0;
pub const LINK_WIDTH: f32 = 0.3;
pub const LINK_RGB: [u8; 3] = [255, 255, 255];

// Cursor blob
pub const BLOB_EASE: f32 = 0.12;
pub const BLOB_PARALLAX: [f32; 2] = [0.18, 0.12];

// Toast
pub const TOAST_DEFAULT_MS: u64 = 1400;
