//! Theme configuration

use iced::Color;

/// Dark theme colors
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.06, 0.09);
    pub const SURFACE: Color = Color::from_rgb(0.10, 0.11, 0.15);
    pub const BORDER: Color = Color::from_rgb(0.22, 0.24, 0.30);
    pub const PRIMARY: Color = Color::from_rgb(0.98, 0.72, 0.25);
    pub const TEXT: Color = Color::from_rgb(0.93, 0.93, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.58, 0.60, 0.66);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.40, 0.42, 0.48);
    pub const SELECTION: Color = Color::from_rgb(0.22, 0.28, 0.42);
}
