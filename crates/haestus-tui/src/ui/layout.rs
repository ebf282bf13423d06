//! Layout helpers for the haestus TUI.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Split the terminal into section tabs, content and status bar.
pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Area a modal takes over inside the content area.
pub fn modal_area(content: Rect) -> Rect {
    content.inner(Margin::new(2, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout() {
        let (tabs, content, status) = main_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(tabs, Rect::new(0, 0, 80, 1));
        assert_eq!(content, Rect::new(0, 1, 80, 22));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_modal_area_insets_content() {
        let content = Rect::new(0, 1, 80, 22);
        assert_eq!(modal_area(content), Rect::new(2, 2, 76, 20));
    }

    #[test]
    fn test_centered_fixed_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_fixed(40, 40, area), Rect::new(0, 0, 20, 10));
    }
}
