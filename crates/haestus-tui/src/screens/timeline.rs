//! Timeline section: editable steps with an embedded demo table.

use haestus_engine::{Column, DemoTable, EditSession, Field, TimelineItem};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{panel, render_frame, Screen};
use crate::app::App;
use crate::text::visual_width;
use crate::ui::theme::Styles;
use crate::ui::widgets::KeyHint;

pub struct TimelineScreen;

impl Screen for TimelineScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let editing = app.timeline.session().is_editing();
        let hints = if editing {
            vec![KeyHint::new("Enter", "Save"), KeyHint::new("Esc", "Cancel")]
        } else if app.table_visible() {
            vec![
                KeyHint::new("Enter", "Collapse"),
                KeyHint::new("[ ]", "Column"),
                KeyHint::new("< >", "Move"),
                KeyHint::new("o", "Sort"),
            ]
        } else {
            vec![
                KeyHint::new("Enter", "Expand"),
                KeyHint::new("t/d/c", "Edit"),
                KeyHint::new("a", "Add"),
                KeyHint::new("?", "Help"),
            ]
        };
        let content = render_frame(app, area, buf, hints);
        if content.height < 2 {
            return;
        }

        let timeline = &app.timeline;
        let nav = Rect::new(content.x, content.y, content.width, 1);
        if timeline.show_prev() {
            Line::from(Span::styled("< Earlier", Styles::highlight())).render(nav, buf);
        }
        if timeline.show_next() {
            Line::from(Span::styled("Later >", Styles::highlight()))
                .right_aligned()
                .render(nav, buf);
        }

        let body = Rect::new(
            content.x,
            content.y + 1,
            content.width,
            content.height.saturating_sub(1),
        );
        let active = timeline
            .active()
            .and_then(|id| timeline.items().iter().position(|item| item.id == id));
        let Some(index) = active else {
            render_strip(app, body, buf);
            return;
        };

        let strip_height = u16::try_from(timeline.visible().len() + 2).unwrap_or(u16::MAX);
        let [strip, detail] =
            Layout::vertical([Constraint::Length(strip_height), Constraint::Min(3)]).areas(body);
        render_strip(app, strip, buf);
        render_step_panel(app, index, detail, buf);
    }
}

/// The windowed list of steps, one row each.
fn render_strip(app: &App, area: Rect, buf: &mut Buffer) {
    let timeline = &app.timeline;
    let mut lines = Vec::new();
    for (i, item) in timeline.visible().iter().enumerate() {
        lines.extend(step_lines(
            item,
            i == app.timeline_cursor,
            timeline.active() == Some(item.id),
            timeline.session(),
        ));
    }
    Paragraph::new(lines)
        .block(panel("Project Timeline", true))
        .render(area, buf);
}

/// Editable detail of the active step. Drawn whether or not the step sits
/// inside the visible window.
fn render_step_panel(app: &App, index: usize, area: Rect, buf: &mut Buffer) {
    let timeline = &app.timeline;
    let Some(item) = timeline.items().get(index) else {
        return;
    };
    let session = timeline.session();

    let mut lines = vec![
        Line::from(field_span(item, Field::Date, session, Styles::dim())),
        Line::from(field_span(item, Field::Title, session, Styles::highlight())),
        Line::from(""),
        Line::from(field_span(item, Field::Content, session, Styles::default())),
    ];
    if item.has_table {
        lines.push(Line::from(""));
        lines.extend(table_lines(&app.table, app.table_focus));
    }

    let title = format!("Step {} of {}", index + 1, timeline.items().len());
    Paragraph::new(lines)
        .block(panel(&title, false))
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

/// Text of one field, or the draft with a cursor when it is under edit.
fn field_span(
    item: &TimelineItem,
    field: Field,
    session: &EditSession,
    style: Style,
) -> Span<'static> {
    let target = session.target();
    match session.draft() {
        Some(draft) if target.is_some_and(|t| t.id == item.id && t.field == field) => {
            Span::styled(format!("{draft}_"), Styles::input())
        }
        _ => Span::styled(item.field(field).to_string(), style),
    }
}

fn step_lines(
    item: &TimelineItem,
    focused: bool,
    expanded: bool,
    session: &EditSession,
) -> Vec<Line<'static>> {
    let marker = if focused {
        Span::styled("> ", Styles::highlight())
    } else {
        Span::raw("  ")
    };
    let bullet = if expanded { "● " } else { "○ " };
    let title_style = if expanded || focused {
        Styles::highlight()
    } else {
        Styles::default()
    };

    let mut lines = vec![Line::from(vec![
        marker,
        Span::styled(bullet, Styles::highlight()),
        field_span(item, Field::Date, session, Styles::dim()),
        Span::raw("  "),
        field_span(item, Field::Title, session, title_style),
    ])];

    let editing_content = session
        .target()
        .is_some_and(|t| t.id == item.id && t.field == Field::Content);
    if editing_content && !expanded {
        lines.push(Line::from(vec![
            Span::raw("    "),
            field_span(item, Field::Content, session, Styles::default()),
        ]));
    }
    lines
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(visual_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn header_label(table: &DemoTable, column: Column) -> String {
    match table.sort() {
        Some(sort) if sort.column == column => {
            let arrow = if sort.descending { "↓" } else { "↑" };
            format!("{} {arrow}", column.header())
        }
        _ => column.header().to_string(),
    }
}

/// The demo table as text rows, focused column highlighted.
fn table_lines(table: &DemoTable, focus: usize) -> Vec<Line<'static>> {
    let columns = table.columns();
    let rows = table.sorted_rows();
    let headers: Vec<String> = columns.iter().map(|c| header_label(table, *c)).collect();
    let widths: Vec<usize> = columns
        .iter()
        .zip(&headers)
        .map(|(column, header)| {
            rows.iter()
                .map(|row| visual_width(&row.cell(*column)))
                .chain(std::iter::once(visual_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut header_spans = vec![Span::raw("    ")];
    for (i, header) in headers.iter().enumerate() {
        let style = if i == focus {
            Styles::input()
        } else {
            Styles::title()
        };
        header_spans.push(Span::styled(pad(header, widths[i]), style));
        header_spans.push(Span::raw("  "));
    }

    let mut lines = vec![Line::from(header_spans)];
    for row in rows {
        let mut spans = vec![Span::raw("    ")];
        for (column, width) in columns.iter().zip(&widths) {
            spans.push(Span::styled(pad(&row.cell(*column), *width), Styles::default()));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Section;
    use crate::event::Action;
    use crate::test_utils::{
        create_test_app_at, render_screen_to_string, render_screen_to_string_sized,
    };

    fn timeline_app() -> App {
        create_test_app_at(Section::Timeline)
    }

    #[test]
    fn test_first_window() {
        let app = timeline_app();
        let screen = render_screen_to_string(&TimelineScreen, &app);
        assert!(screen.contains("Mar 15, 2024  Project Kickoff"));
        assert!(screen.contains("Design Phase"));
        assert!(!screen.contains("Development Sprint"));
        assert!(screen.contains("Later >"));
    }

    #[test]
    fn test_expanded_step_shows_content() {
        let mut app = timeline_app();
        app.handle_action(Action::Select);
        let screen = render_screen_to_string(&TimelineScreen, &app);
        assert!(screen.contains("Initial team meeting"));
        assert!(screen.contains("● "));
    }

    #[test]
    fn test_draft_replaces_field() {
        let mut app = timeline_app();
        app.handle_action(Action::Edit(Field::Title));
        app.type_char('!');
        let screen = render_screen_to_string(&TimelineScreen, &app);
        assert!(screen.contains("Project Kickoff!_"));
        assert!(screen.contains("Cancel"));
    }

    #[test]
    fn test_table_in_design_step() {
        let mut app = timeline_app();
        app.handle_action(Action::Down);
        app.handle_action(Action::Select);
        app.handle_action(Action::Sort);
        let screen = render_screen_to_string(&TimelineScreen, &app);
        let header = screen
            .lines()
            .find(|l| l.contains("Balance"))
            .unwrap_or_default();
        assert!(header.contains("Name ↑"));
        assert!(header.contains("Location"));
        assert!(screen.contains("Wireframes"));
        assert!(screen.contains("$1,500.00"));
    }

    #[test]
    fn test_added_step_shown_outside_window() {
        let mut app = timeline_app();
        app.resize(120, 30);
        app.handle_action(Action::AddStep);
        assert_eq!(app.timeline.window().range(), 0..4);

        let screen = render_screen_to_string_sized(&TimelineScreen, &app, 120, 30);
        assert!(screen.contains("Step 5 of 5"));
        assert!(screen.contains("New Step_"));
        assert!(screen.contains("Click to edit this content."));

        app.type_char('!');
        app.commit_input();
        let screen = render_screen_to_string_sized(&TimelineScreen, &app, 120, 30);
        assert!(screen.contains("New Step!"));
        assert!(!screen.contains("New Step!_"));
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }
}
