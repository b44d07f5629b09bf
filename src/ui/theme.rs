//! Color theme constants for the MathWhiz UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Active elements (spinner, progress) - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Error banner text - red
pub const COLOR_ERROR: Color = Color::Red;

/// Final-solution highlight - light blue
pub const COLOR_SOLUTION: Color = Color::LightBlue;

/// User chat turns - light blue
pub const COLOR_USER: Color = Color::LightBlue;

/// Assistant chat turns - light green
pub const COLOR_ASSISTANT: Color = Color::LightGreen;

/// Per-topic accent colors, keyed by catalog id.
pub fn topic_color(topic_id: &str) -> Color {
    match topic_id {
        "arithmetic" => Color::LightBlue,
        "algebra" => Color::LightMagenta,
        "geometry" => Color::LightGreen,
        "calculus" => Color::Magenta,
        "statistics" => Color::LightYellow,
        _ => COLOR_ACCENT,
    }
}
