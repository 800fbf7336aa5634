//! Color theme constants.

use ratatui::style::Color;

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for titles and the active nav link
pub const COLOR_ACCENT: Color = Color::Yellow;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for labels and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Field values on the detail page
pub const COLOR_VALUE: Color = Color::White;

/// Link text on the list page
pub const COLOR_LINK: Color = Color::Cyan;

/// Background of the selected list entry
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 45);

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Gray;

/// Fetch failures
pub const COLOR_ERROR: Color = Color::Red;
