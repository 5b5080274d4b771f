//! Text glyphs for widgets and status icons.
//!
//! The bundled fonts are ASCII only, so every icon is a short uppercase tag.

/// Battery widget glyph.
pub const BATTERY: &str = "BAT";

/// Shown next to the battery glyph while charging.
pub const CHARGING: &str = "+";

/// Steps widget glyph.
pub const STEPS: &str = "STEP";

/// Heart-rate widget glyph.
pub const HEART: &str = "HR";

/// Heart-rate value while no reading is available.
pub const NO_READING: &str = "--";

/// Bluetooth connected icon.
pub const BLUETOOTH: &str = "BT";

/// Unread notification icon.
pub const NOTIFICATION: &str = "!";
