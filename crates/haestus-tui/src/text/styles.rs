//! Markdown styling configuration.

use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

/// Styles for rendering markdown elements.
#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    pub h1: Style,
    pub h2: Style,
    /// H3 and deeper.
    pub h3: Style,
    pub code: Style,
    pub code_block: Style,
    pub emphasis: Style,
    pub strong: Style,
    /// Bullet and number markers.
    pub list_marker: Style,
    pub link: Style,
    pub blockquote: Style,
    pub rule: Style,
    pub text: Style,
    pub strikethrough: Style,
}

impl MarkdownStyles {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            h1: Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            h2: Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            h3: Style::default()
                .fg(theme.subtext)
                .add_modifier(Modifier::BOLD),
            code: Style::default().fg(theme.accent).bg(theme.surface),
            code_block: Style::default().fg(theme.subtext).bg(theme.surface),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            list_marker: Style::default().fg(theme.accent),
            link: Style::default()
                .fg(theme.link)
                .add_modifier(Modifier::UNDERLINED),
            blockquote: Style::default()
                .fg(theme.subtext)
                .add_modifier(Modifier::ITALIC),
            rule: Style::default().fg(theme.border),
            text: Style::default().fg(theme.text),
            strikethrough: Style::default().add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

impl Default for MarkdownStyles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_theme() {
        let styles = MarkdownStyles::from_theme(&Theme::high_contrast());
        assert!(styles.h1.add_modifier.contains(Modifier::BOLD));
        assert!(styles.h2.add_modifier.contains(Modifier::UNDERLINED));
        assert!(styles.emphasis.add_modifier.contains(Modifier::ITALIC));
    }
}
