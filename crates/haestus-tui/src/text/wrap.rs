//! Word wrapping for plain and styled text.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::width::visual_width;

/// Wrap plain text to `width` columns.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Wrap styled lines to `width` columns, keeping each character's style.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let plain: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    if visual_width(&plain) <= width {
        return vec![line];
    }

    let styled: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    let mut result = Vec::new();
    let mut cursor = 0;
    for piece in textwrap::wrap(&plain, width) {
        // textwrap drops the whitespace it breaks on
        while cursor < styled.len() && !piece.starts_with(styled[cursor].0) {
            cursor += 1;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut text = String::new();
        let mut style = None;
        for c in piece.chars() {
            let Some(&(_, s)) = styled.get(cursor) else {
                break;
            };
            cursor += 1;
            if style.is_some_and(|current| current != s) {
                spans.push(Span::styled(std::mem::take(&mut text), style.unwrap_or(s)));
            }
            style = Some(s);
            text.push(c);
        }
        if !text.is_empty() {
            spans.push(Span::styled(text, style.unwrap_or_default()));
        }
        result.push(Line::from(spans));
    }
    result
}
