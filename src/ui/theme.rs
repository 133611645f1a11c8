//! Color theme constants.

use ratatui::style::Color;

/// Header bar and highlights
pub const COLOR_PRIMARY: Color = Color::Rgb(33, 150, 243);

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Body text
pub const COLOR_TEXT: Color = Color::White;

/// Secondary text (emails, hints)
pub const COLOR_DIM: Color = Color::Gray;

/// Error panel
pub const COLOR_ERROR: Color = Color::LightRed;

/// Loading panel
pub const COLOR_LOADING: Color = Color::Yellow;
