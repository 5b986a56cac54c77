//! Color themes for the clock display.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme for the clock display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Accent color used for numerals, the date line and key hints.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }

    /// Muted variant of the accent, used for the face disc.
    pub fn dim_color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Rgb(20, 60, 70),
            ColorTheme::Green => Color::Rgb(25, 65, 30),
            ColorTheme::White => Color::Rgb(60, 60, 60),
            ColorTheme::Magenta => Color::Rgb(65, 25, 60),
            ColorTheme::Yellow => Color::Rgb(70, 65, 20),
            ColorTheme::Red => Color::Rgb(70, 25, 25),
            ColorTheme::Blue => Color::Rgb(25, 35, 75),
        }
    }
}
