pub mod blob;
pub mod compose;
pub mod constants;
pub mod field;
pub mod glow;
pub mod pointer;
pub mod surface;
pub mod theme;
pub mod toast;

pub use blob::BlobFollow;
pub use compose::{Blend, Canvas, GradientStop, Rgba};
pub use field::StarField;
pub use pointer::PointerSignal;
pub use surface::SurfaceMetrics;
pub use theme::ThemeState;
pub use toast::ToastState;
