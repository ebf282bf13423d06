//! Blog section: post carousel and the article reader.

use haestus_engine::{ArticleReader, BlogPost, ViewMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::cards::{render_list, render_stack};
use super::{panel, render_frame, Screen};
use crate::app::App;
use crate::text::{render_article, truncate_to_width, wrap_text};
use crate::ui::theme::{progress_bar, Styles};
use crate::ui::widgets::KeyHint;
use crate::ui::{main_layout, modal_area};

/// Rows above the article body: progress, "Jump to" and a spacer.
const READER_HEADER: u16 = 3;

/// Width of the reading progress bar.
const PROGRESS_WIDTH: usize = 20;

/// Where the article body goes for a terminal of size `area`.
pub fn reader_body(area: Rect) -> Rect {
    let (_, content, _) = main_layout(area);
    let inner = panel("", true).inner(modal_area(content));
    Rect {
        x: inner.x,
        y: inner.y + READER_HEADER.min(inner.height),
        width: inner.width,
        height: inner.height.saturating_sub(READER_HEADER),
    }
}

pub struct BlogScreen;

impl Screen for BlogScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let posts = &app.catalog.posts;
        let open = app
            .reader
            .as_ref()
            .zip(app.posts.selected().and_then(|i| posts.get(i)));

        let hints = if open.is_some() {
            vec![
                KeyHint::new("j/k", "Scroll"),
                KeyHint::new("1-5", "Jump"),
                KeyHint::new("s", "Share"),
                KeyHint::new("Esc", "Close"),
            ]
        } else {
            match app.posts.mode() {
                ViewMode::Stack => vec![
                    KeyHint::new("</>", "Browse"),
                    KeyHint::new("v", "List"),
                    KeyHint::new("Enter", "Read"),
                ],
                ViewMode::List => vec![
                    KeyHint::new("j/k", "Move"),
                    KeyHint::new("v", "Stack"),
                    KeyHint::new("Enter", "Read"),
                ],
            }
        };
        let content = render_frame(app, area, buf, hints);

        match app.posts.mode() {
            ViewMode::Stack => {
                if let Some(post) = app.posts.item(0, posts) {
                    let width = usize::from(content.width.saturating_sub(8));
                    let body = card_lines(post, width);
                    render_stack(&app.posts, &post.category, body, content, buf);
                }
            }
            ViewMode::List => {
                let rows: Vec<String> = posts
                    .iter()
                    .map(|p| format!("{} ({})", p.title, p.read_time))
                    .collect();
                render_list(&rows, app.posts.list_cursor(), content, buf);
            }
        }

        if let Some((reader, post)) = open {
            render_reader(app, reader, post, area, buf);
        }
    }
}

fn card_lines(post: &BlogPost, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} / {}", post.category, post.read_time),
            Styles::dim(),
        )),
        Line::from(""),
        Line::from(Span::styled(post.title.clone(), Styles::highlight())),
        Line::from(""),
    ];
    lines.extend(
        wrap_text(&post.description, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Styles::default()))),
    );
    lines
}

fn render_reader(
    app: &App,
    reader: &ArticleReader,
    post: &BlogPost,
    area: Rect,
    buf: &mut Buffer,
) {
    let (_, content, _) = main_layout(area);
    let modal = modal_area(content);
    let block = panel(&post.title, true);
    let inner = block.inner(modal);
    Clear.render(modal, buf);
    block.render(modal, buf);
    if inner.height <= READER_HEADER {
        return;
    }

    let progress = reader.progress();
    #[allow(clippy::cast_possible_truncation)]
    let bar = progress_bar((progress / 100.0) as f32, PROGRESS_WIDTH);
    let header = Rect::new(inner.x, inner.y, inner.width, 1);
    Line::from(vec![
        Span::styled(bar, Styles::highlight()),
        Span::styled(format!(" {progress:.0}%"), Styles::dim()),
    ])
    .render(header, buf);
    Line::from(Span::styled(post.read_time.clone(), Styles::dim()))
        .right_aligned()
        .render(header, buf);

    let toc = reader.toc();
    if !toc.is_empty() {
        let entries: Vec<String> = toc
            .iter()
            .enumerate()
            .map(|(i, (label, _))| format!("{} {label}", i + 1))
            .collect();
        let text = truncate_to_width(
            &format!("Jump to: {}", entries.join("  ")),
            usize::from(inner.width),
        );
        Line::from(Span::styled(text, Styles::dim()))
            .render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
    }

    let body = reader_body(area);
    let article = render_article(&post.content, usize::from(body.width), &app.theme);
    let lines: Vec<Line<'static>> = article
        .lines
        .into_iter()
        .skip(reader.scroll())
        .take(usize::from(body.height))
        .collect();
    Paragraph::new(lines).render(body, buf);
}
