//! Color palettes for the TUI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub accent: Color,
    pub link: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::site()
    }
}

impl Theme {
    /// Dark theme matching the site: near-black surfaces, cyan accent.
    pub fn site() -> Self {
        Self {
            base: Color::Rgb(10, 10, 10),       // #0a0a0a
            surface: Color::Rgb(58, 58, 58),    // #3a3a3a

            text: Color::Rgb(245, 245, 245),    // #f5f5f5
            subtext: Color::Rgb(156, 163, 175), // #9ca3af
            muted: Color::Rgb(107, 114, 128),   // #6b7280

            accent: Color::Rgb(12, 192, 223),   // #0cc0df
            link: Color::Rgb(96, 165, 250),     // #60a5fa

            success: Color::Rgb(74, 222, 128),  // #4ade80
            warning: Color::Rgb(250, 204, 21),  // #facc15
            error: Color::Rgb(248, 113, 113),   // #f87171

            border: Color::Rgb(64, 64, 64),
            border_focused: Color::Rgb(12, 192, 223),
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(30, 30, 30),

            text: Color::White,
            subtext: Color::Rgb(210, 210, 210),
            muted: Color::Rgb(160, 160, 160),

            accent: Color::Cyan,
            link: Color::LightBlue,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_site() {
        let theme = Theme::default();
        assert!(matches!(theme.accent, Color::Rgb(12, 192, 223)));
    }

    #[test]
    fn test_high_contrast_theme() {
        let theme = Theme::high_contrast();
        assert!(matches!(theme.base, Color::Black));
        assert!(matches!(theme.text, Color::White));
    }
}
