//! Section tab bar.

use crate::ui::theme::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// A horizontal tab bar with `[n]` shortcuts.
#[derive(Debug, Clone)]
pub struct Tabs<'a> {
    titles: Vec<&'a str>,
    selected: usize,
}

impl<'a> Tabs<'a> {
    pub fn new(titles: Vec<&'a str>) -> Self {
        Self {
            titles,
            selected: 0,
        }
    }

    /// Set the selected tab index.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }
}

impl Widget for Tabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let mut spans = Vec::new();
        for (i, title) in self.titles.iter().enumerate() {
            let style = if i == self.selected {
                Styles::highlight()
            } else {
                Styles::dim()
            };
            if i > 0 {
                spans.push(Span::styled(" | ", Styles::dim()));
            }
            spans.push(Span::styled(format!("[{}] ", i + 1), style));
            spans.push(Span::styled(*title, style));
        }

        buf.set_style(area, Styles::default());
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_tabs_render() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        Tabs::new(vec!["One", "Two"]).select(1).render(area, &mut buf);
        insta::assert_snapshot!(buffer_to_string(&buf), @"[1] One | [2] Two");
    }
}
