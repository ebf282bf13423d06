//! Card stack and list views shared by the carousel sections.

use haestus_engine::Carousel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::panel;
use crate::text::truncate_to_width;
use crate::ui::theme::Styles;

/// Draw the carousel as overlapping cards, front card last.
pub(super) fn render_stack(
    carousel: &Carousel,
    title: &str,
    body: Vec<Line<'static>>,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.height < 4 || area.width < 10 {
        return;
    }
    let behind = u16::try_from(carousel.slot_count().saturating_sub(1)).unwrap_or(0);
    let cards_area = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height.saturating_sub(1),
    );
    let front = Rect::new(
        cards_area.x,
        cards_area.y,
        cards_area.width.saturating_sub(2 * behind),
        cards_area.height.saturating_sub(behind),
    );

    for depth in (1..=behind).rev() {
        let card = Rect::new(front.x + 2 * depth, front.y + depth, front.width, front.height);
        Clear.render(card, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border())
            .style(Styles::dim())
            .render(card, buf);
    }

    Clear.render(front, buf);
    Paragraph::new(body)
        .block(panel(title, true))
        .wrap(Wrap { trim: false })
        .render(front, buf);

    let position = format!(
        "<  {} / {}  >",
        carousel.position(),
        carousel.catalog_len()
    );
    let indicator = Line::from(Span::styled(position, Styles::dim())).centered();
    let bottom = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    indicator.render(bottom, buf);
}

/// Draw every catalog entry as one row, highlighting the cursor.
pub(super) fn render_list(rows: &[String], cursor: usize, area: Rect, buf: &mut Buffer) {
    let width = usize::from(area.width.saturating_sub(4));
    let height = usize::from(area.height.saturating_sub(2));
    let first = (cursor + 1).saturating_sub(height);

    let lines: Vec<Line<'static>> = rows
        .iter()
        .enumerate()
        .skip(first)
        .take(height)
        .map(|(i, row)| {
            let text = truncate_to_width(row, width);
            if i == cursor {
                Line::from(vec![
                    Span::styled("> ", Styles::highlight()),
                    Span::styled(text, Styles::highlight()),
                ])
            } else {
                Line::from(vec![Span::raw("  "), Span::styled(text, Styles::default())])
            }
        })
        .collect();

    Paragraph::new(lines)
        .block(panel("All", true))
        .render(area, buf);
}
