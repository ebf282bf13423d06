//! Markdown rendering using pulldown-cmark.
//!
//! [`render_markdown`] turns markdown into styled ratatui lines;
//! [`render_article`] additionally wraps them and records where each
//! second-level heading landed so the reader can jump to it.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::styles::MarkdownStyles;
use super::wrap::wrap_lines;
use crate::theme::Theme;

/// Wrapped article lines plus the line index of every `##` heading.
#[derive(Debug, Clone, Default)]
pub struct RenderedArticle {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<usize>,
}

/// Render markdown text to styled, unwrapped lines.
pub fn render_markdown(input: &str, theme: &Theme) -> Vec<Line<'static>> {
    render(input, theme).lines
}

/// Render an article wrapped to `width` columns.
pub fn render_article(input: &str, width: usize, theme: &Theme) -> RenderedArticle {
    let raw = render(input, theme);
    let mut article = RenderedArticle::default();
    let mut pending = raw.anchors.iter().peekable();
    for (i, line) in raw.lines.into_iter().enumerate() {
        if pending.next_if(|anchor| **anchor == i).is_some() {
            article.anchors.push(article.lines.len());
        }
        article.lines.extend(wrap_lines(vec![line], width));
    }
    article
}

fn render(input: &str, theme: &Theme) -> RenderedArticle {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let mut renderer = MarkdownRenderer::new(MarkdownStyles::from_theme(theme));
    for event in Parser::new_ext(input, options) {
        renderer.handle_event(event);
    }
    renderer.flush_line();
    renderer.output
}

struct MarkdownRenderer {
    output: RenderedArticle,
    styles: MarkdownStyles,
    /// Active inline styles, innermost last.
    style_stack: Vec<Style>,
    current_spans: Vec<Span<'static>>,
    /// One entry per open list: the next number for ordered lists.
    lists: Vec<Option<u64>>,
    in_code_block: bool,
    in_blockquote: bool,
    pending_list_marker: Option<String>,
}

impl MarkdownRenderer {
    fn new(styles: MarkdownStyles) -> Self {
        Self {
            output: RenderedArticle::default(),
            styles,
            style_stack: Vec::new(),
            current_spans: Vec::new(),
            lists: Vec::new(),
            in_code_block: false,
            in_blockquote: false,
            pending_list_marker: None,
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_line();
                if level == HeadingLevel::H2 {
                    self.output.anchors.push(self.output.lines.len());
                }
                self.style_stack.push(self.heading_style(level));
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_line();
                self.blank_line();
                self.style_stack.pop();
            }

            Event::Start(Tag::Emphasis) => self.style_stack.push(self.styles.emphasis),
            Event::Start(Tag::Strong) => self.style_stack.push(self.styles.strong),
            Event::Start(Tag::Strikethrough) => {
                self.style_stack.push(self.styles.strikethrough);
            }
            Event::Start(Tag::Link { .. }) => self.style_stack.push(self.styles.link),
            Event::End(
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link,
            ) => {
                self.style_stack.pop();
            }

            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.blank_line();
            }

            Event::Start(Tag::List(first)) => {
                self.flush_line();
                self.lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                self.flush_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.pending_list_marker = Some(marker);
            }
            Event::End(TagEnd::Item) => self.flush_line(),

            Event::Start(Tag::BlockQuote) => {
                self.flush_line();
                self.in_blockquote = true;
            }
            Event::End(TagEnd::BlockQuote) => {
                self.flush_line();
                self.in_blockquote = false;
            }

            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                // Tight list items end at the item, not with a gap
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }

            Event::End(TagEnd::TableCell) => {
                self.current_spans
                    .push(Span::styled(" | ", self.styles.rule));
            }
            Event::End(TagEnd::TableHead | TagEnd::TableRow) => self.flush_line(),
            Event::End(TagEnd::Table) => self.blank_line(),

            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => {
                self.take_list_marker();
                self.current_spans
                    .push(Span::styled(format!("`{code}`"), self.styles.code));
            }
            Event::SoftBreak => self.add_text(" "),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.output
                    .lines
                    .push(Line::from(Span::styled("─".repeat(24), self.styles.rule)));
                self.blank_line();
            }
            Event::TaskListMarker(checked) => {
                let checkbox = if checked { "[x] " } else { "[ ] " };
                self.take_list_marker();
                self.current_spans
                    .push(Span::styled(checkbox, self.styles.list_marker));
            }

            Event::Start(
                Tag::Paragraph
                | Tag::Image { .. }
                | Tag::Table(_)
                | Tag::TableHead
                | Tag::TableRow
                | Tag::TableCell
                | Tag::FootnoteDefinition(_)
                | Tag::MetadataBlock(_)
                | Tag::HtmlBlock,
            )
            | Event::End(
                TagEnd::Image
                | TagEnd::FootnoteDefinition
                | TagEnd::MetadataBlock(_)
                | TagEnd::HtmlBlock,
            )
            | Event::Html(_)
            | Event::InlineHtml(_)
            | Event::FootnoteReference(_) => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if self.in_code_block {
            for line in text.lines() {
                self.current_spans
                    .push(Span::styled(format!("  {line}"), self.styles.code_block));
                self.flush_line();
            }
            return;
        }

        self.take_list_marker();
        if self.in_blockquote && self.current_spans.is_empty() {
            self.current_spans
                .push(Span::styled("│ ", self.styles.blockquote));
        }

        let style = self.current_style();
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    fn take_list_marker(&mut self) {
        if let Some(marker) = self.pending_list_marker.take() {
            self.current_spans
                .push(Span::styled(marker, self.styles.list_marker));
        }
    }

    fn current_style(&self) -> Style {
        let base = if self.in_blockquote {
            self.styles.blockquote
        } else {
            self.styles.text
        };
        self.style_stack.iter().fold(base, |style, s| style.patch(*s))
    }

    fn heading_style(&self, level: HeadingLevel) -> Style {
        match level {
            HeadingLevel::H1 => self.styles.h1,
            HeadingLevel::H2 => self.styles.h2,
            _ => self.styles.h3,
        }
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let spans = std::mem::take(&mut self.current_spans);
            self.output.lines.push(Line::from(spans));
        }
    }

    /// Separate blocks with one empty line, never two.
    fn blank_line(&mut self) {
        self.flush_line();
        let last_is_blank = self
            .output
            .lines
            .last()
            .is_some_and(|line| line.spans.iter().all(|s| s.content.is_empty()));
        if !self.output.lines.is_empty() && !last_is_blank {
            self.output.lines.push(Line::from(""));
        }
    }
}
