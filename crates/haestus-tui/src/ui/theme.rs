//! Styling shared by every screen.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
pub struct Palette;

impl Palette {
    // Base colors
    pub const BG: Color = Color::Rgb(10, 10, 10);
    pub const FG: Color = Color::Rgb(235, 235, 235);
    pub const DIM: Color = Color::Rgb(140, 140, 150);

    // Accent colors
    pub const ACCENT: Color = Color::Rgb(12, 192, 223);
    pub const CARD: Color = Color::Rgb(38, 38, 38);

    // Status bar colors
    pub const STATUS_BG: Color = Color::Rgb(40, 40, 44);
    pub const STATUS_KEY_BG: Color = Color::Rgb(20, 110, 130);

    // Status color
    pub const SUCCESS: Color = Color::Rgb(74, 222, 128);

    // Border colors
    pub const BORDER: Color = Color::Rgb(70, 70, 70);
    pub const BORDER_ACTIVE: Color = Color::Rgb(12, 192, 223);
}

/// Common styles used throughout the TUI.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::BG)
    }

    /// Dimmed text for secondary information.
    pub fn dim() -> Style {
        Style::default().fg(Palette::DIM).bg(Palette::BG)
    }

    /// Highlighted/selected item.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .bg(Palette::BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Palette::SUCCESS).bg(Palette::BG)
    }

    /// Title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style for the status bar.
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Palette::FG)
            .bg(Palette::STATUS_KEY_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint label style.
    pub fn key_label() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Palette::FG).bg(Palette::STATUS_BG)
    }

    /// Text being typed into an input field.
    pub fn input() -> Style {
        Style::default()
            .fg(Palette::BG)
            .bg(Palette::ACCENT)
    }

    /// Border style for inactive elements.
    pub fn border() -> Style {
        Style::default().fg(Palette::BORDER)
    }

    /// Border style for active/focused elements.
    pub fn border_active() -> Style {
        Style::default().fg(Palette::BORDER_ACTIVE)
    }
}

/// Progress bar rendering, `progress` in 0.0..=1.0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn progress_bar(progress: f32, width: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = ((progress * width as f32).round() as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Page dots for a pager, e.g. `o o * *` with the visible range filled.
pub fn page_dots(total: usize, visible: std::ops::Range<usize>) -> String {
    (0..total)
        .map(|i| if visible.contains(&i) { "*" } else { "o" })
        .collect::<Vec<_>>()
        .join(" ")
}
