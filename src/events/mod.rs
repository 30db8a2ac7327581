pub mod pointer;
pub mod viewport;

pub use pointer::wire_pointer_signal;
pub use viewport::wire_resize;
