/// Page wiring constants: element ids, class names and timer periods.
///
/// Simulation tuning lives in `core::constants`.
// Element ids
pub const STARS_CANVAS_ID: &str = "stars";
pub const BLOB_ID: &str = "blob";
pub const CLOCK_ID: &str = "time";
pub const THEME_TOGGLE_ID: &str = "toggleMode";
pub const TOAST_ID: &str = "toast";

// Classes and attributes
pub const LIGHT_CLASS: &str = "light";
pub const TOAST_SHOW_CLASS: &str = "show";
pub const ARIA_PRESSED: &str = "aria-pressed";

// Media queries
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// Timers
pub const CLOCK_PERIOD_MS: i32 = 30 * 1000;
