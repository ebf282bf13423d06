//! Projects section: client work as a rotating card stack.

use haestus_engine::{ClientProject, ViewMode};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::cards::{render_list, render_stack};
use super::{panel, render_frame, Screen};
use crate::app::App;
use crate::text::wrap_text;
use crate::ui::modal_area;
use crate::ui::theme::Styles;
use crate::ui::widgets::KeyHint;

pub struct ProjectsScreen;

impl Screen for ProjectsScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let carousel = &app.projects;
        let hints = if carousel.selected().is_some() {
            vec![KeyHint::new("j/k", "Scroll"), KeyHint::new("Esc", "Close")]
        } else {
            match carousel.mode() {
                ViewMode::Stack => vec![
                    KeyHint::new("</>", "Browse"),
                    KeyHint::new("v", "List"),
                    KeyHint::new("Enter", "Details"),
                    KeyHint::new("?", "Help"),
                ],
                ViewMode::List => vec![
                    KeyHint::new("j/k", "Move"),
                    KeyHint::new("v", "Stack"),
                    KeyHint::new("Enter", "Details"),
                    KeyHint::new("?", "Help"),
                ],
            }
        };
        let content = render_frame(app, area, buf, hints);
        let projects = &app.catalog.projects;

        match carousel.mode() {
            ViewMode::Stack => {
                if let Some(project) = carousel.item(0, projects) {
                    let width = usize::from(content.width.saturating_sub(8));
                    render_stack(
                        carousel,
                        &project.category,
                        card_lines(project, width),
                        content,
                        buf,
                    );
                }
            }
            ViewMode::List => {
                let rows: Vec<String> = projects
                    .iter()
                    .map(|p| format!("{} - {}", p.title, p.company))
                    .collect();
                render_list(&rows, carousel.list_cursor(), content, buf);
            }
        }

        if let Some(project) = carousel.selected().and_then(|i| projects.get(i)) {
            render_detail(project, app.detail_scroll, content, buf);
        }
    }
}

fn card_lines(project: &ClientProject, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(project.title.clone(), Styles::highlight())),
        Line::from(Span::styled(
            format!("{} / {}", project.company, project.industry),
            Styles::dim(),
        )),
        Line::from(""),
    ];
    lines.extend(
        wrap_text(&project.description, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Styles::default()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Stack: ", Styles::dim()),
        Span::styled(project.technologies.join(", "), Styles::default()),
    ]));
    lines
}

/// Inner area of the detail modal.
pub fn detail_body(content: Rect) -> Rect {
    modal_area(content).inner(Margin::new(1, 1))
}

/// Detail modal lines for an inner width. Metadata leads so it stays in
/// view before any scrolling.
pub fn detail_lines(project: &ClientProject, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Company:   ", Styles::dim()),
            Span::styled(project.company.clone(), Styles::default()),
        ]),
        Line::from(vec![
            Span::styled("Industry:  ", Styles::dim()),
            Span::styled(project.industry.clone(), Styles::default()),
        ]),
        Line::from(vec![
            Span::styled("Category:  ", Styles::dim()),
            Span::styled(project.category.clone(), Styles::default()),
        ]),
    ];
    if let Some(link) = &project.link {
        lines.push(Line::from(vec![
            Span::styled("Visit:     ", Styles::dim()),
            Span::styled(link.clone(), Styles::highlight()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Image:     ", Styles::dim()),
        Span::styled(project.image.clone(), Styles::dim()),
    ]));
    lines.push(Line::from(""));
    lines.extend(
        wrap_text(&project.description, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Styles::default()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Technologies", Styles::title())));
    lines.extend(
        project
            .technologies
            .iter()
            .map(|t| Line::from(Span::styled(format!("  - {t}"), Styles::default()))),
    );
    lines
}

/// Largest useful scroll offset of the detail modal.
pub fn detail_max_scroll(project: &ClientProject, content: Rect) -> usize {
    let body = detail_body(content);
    detail_lines(project, usize::from(body.width))
        .len()
        .saturating_sub(usize::from(body.height))
}

fn render_detail(project: &ClientProject, scroll: usize, content: Rect, buf: &mut Buffer) {
    let area = modal_area(content);
    let body = detail_body(content);
    let lines = detail_lines(project, usize::from(body.width));
    let offset = scroll.min(detail_max_scroll(project, content));

    Clear.render(area, buf);
    Paragraph::new(lines)
        .block(panel(&project.title, true))
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
        .render(area, buf);
}
