//! Color theme constants.

use ratatui::style::Color;

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and the selected tab marker
pub const COLOR_ACCENT: Color = Color::White;

/// Title bar text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input fields
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// In-flight request spinner
pub const COLOR_PENDING: Color = Color::Cyan;

/// Open port, reachable API
pub const COLOR_OK: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Closed port, failures, unreachable API
pub const COLOR_ERROR: Color = Color::Red;

/// Findings flagged as threats, high severities
pub const COLOR_WARN: Color = Color::Yellow;
