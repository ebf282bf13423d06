//! Process section: the engagement steps, a few at a time.

use haestus_engine::ProcessStep;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{panel, render_frame, Screen};
use crate::app::App;
use crate::ui::theme::{page_dots, Styles};
use crate::ui::widgets::KeyHint;

pub struct ProcessScreen;

impl Screen for ProcessScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let hints = vec![KeyHint::new("</>", "Browse"), KeyHint::new("?", "Help")];
        let content = render_frame(app, area, buf, hints);
        if content.height < 3 {
            return;
        }

        let window = &app.process;
        let nav = Rect::new(content.x, content.y, content.width, 1);
        if window.show_prev() {
            Line::from(Span::styled("< Prev", Styles::highlight())).render(nav, buf);
        }
        if window.show_next() {
            Line::from(Span::styled("Next >", Styles::highlight()))
                .right_aligned()
                .render(nav, buf);
        }

        let steps = app
            .catalog
            .process_steps
            .get(window.range())
            .unwrap_or_default();
        let columns_area = Rect::new(
            content.x,
            content.y + 1,
            content.width,
            content.height.saturating_sub(2),
        );
        render_columns(steps, columns_area, buf);

        let dots = Rect::new(content.x, content.y + content.height - 1, content.width, 1);
        Line::from(Span::styled(
            page_dots(window.total(), window.range()),
            Styles::dim(),
        ))
        .centered()
        .render(dots, buf);
    }
}

fn render_columns(steps: &[ProcessStep], area: Rect, buf: &mut Buffer) {
    if steps.is_empty() {
        return;
    }
    let count = u32::try_from(steps.len()).unwrap_or(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(steps.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (step, column) in steps.iter().zip(columns.iter()) {
        let mut lines = vec![
            Line::from(Span::styled(step.title.clone(), Styles::highlight())),
            Line::from(""),
            Line::from(Span::styled(step.content.clone(), Styles::default())),
            Line::from(""),
            Line::from(Span::styled("Deliverables", Styles::dim())),
        ];
        lines.extend(
            step.deliverables
                .iter()
                .map(|d| Line::from(Span::styled(format!("- {d}"), Styles::default()))),
        );
        Paragraph::new(lines)
            .block(panel(&step.phase, false))
            .wrap(Wrap { trim: true })
            .render(*column, buf);
    }
}
