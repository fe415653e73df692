use ratatui::style::Color;
use scrabbleator_core::config::ThemeColorOverrides;
use tracing::warn;

/// Colors used by the widgets
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub panel: Color,
    pub fg: Color,
    pub muted: Color,

    // Semantic colors
    pub accent: Color,
    pub word: Color,
    pub points: Color,
    pub cursor: Color,
    pub busy: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox-ish, close to a felt board
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            panel: Color::Rgb(0x32, 0x30, 0x2f),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            word: Color::Rgb(0xdd, 0xc7, 0xa1),
            points: Color::Rgb(0xd8, 0xa6, 0x57),
            cursor: Color::Rgb(0xa9, 0xb6, 0x65),
            busy: Color::Rgb(0xe7, 0x8a, 0x4e),
            error: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}

impl Theme {
    /// Default theme with the configured hex colors applied
    pub fn from_overrides(overrides: &ThemeColorOverrides) -> Self {
        let mut theme = Self::default();
        apply(&mut theme.bg, overrides.bg.as_deref(), "bg");
        apply(&mut theme.fg, overrides.fg.as_deref(), "fg");
        apply(&mut theme.accent, overrides.accent.as_deref(), "accent");
        apply(&mut theme.points, overrides.points.as_deref(), "points");
        apply(&mut theme.error, overrides.error.as_deref(), "error");
        theme
    }
}

fn apply(slot: &mut Color, hex: Option<&str>, name: &str) {
    let Some(hex) = hex else { return };
    match parse_hex_color(hex) {
        Some(color) => *slot = color,
        None => warn!(color = name, value = hex, "Ignoring invalid theme color"),
    }
}

/// Parse "#RRGGBB", "RRGGBB", "#RGB" or "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => Some(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}
