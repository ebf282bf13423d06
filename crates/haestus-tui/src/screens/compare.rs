//! Compare section: before/after view split by a movable divider.

use haestus_engine::ComparisonSlider;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{render_frame, Screen};
use crate::app::App;
use crate::ui::centered_fixed;
use crate::ui::theme::{Palette, Styles};
use crate::ui::widgets::KeyHint;

const BEFORE_LABEL: &str = "BEFORE";
const AFTER_LABEL: &str = "AFTER";

/// The region the pointer drives the divider over.
pub fn slider_view(content: Rect) -> Rect {
    Rect {
        x: content.x + 2,
        y: content.y + 2,
        width: content.width.saturating_sub(4),
        height: content.height.saturating_sub(3),
    }
}

/// Column of the divider inside a view `width` columns wide.
fn divider_column(slider: &ComparisonSlider, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let fraction = f64::from(slider.position()) / 100.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let column = (fraction * f64::from(width)).round() as u16;
    column.min(width - 1)
}

pub struct CompareScreen;

impl Screen for CompareScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let slider = &app.slider;
        let hints = if slider.is_open() {
            vec![
                KeyHint::new("</>", "Move"),
                KeyHint::new("Space", if slider.is_locked() { "Unlock" } else { "Lock" }),
                KeyHint::new("Esc", "Close"),
            ]
        } else {
            vec![KeyHint::new("Enter", "Compare"), KeyHint::new("?", "Help")]
        };
        let content = render_frame(app, area, buf, hints);

        if slider.is_open() {
            render_comparison(slider, content, buf);
        } else {
            render_teaser(content, buf);
        }
    }
}

fn render_teaser(content: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled("Before & After Comparison", Styles::title())).centered(),
        Line::from(""),
        Line::from(Span::styled(
            "See how a design refresh changes the same page.",
            Styles::dim(),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to see the difference",
            Styles::highlight(),
        ))
        .centered(),
    ];
    let area = centered_fixed(content.width, 5, content);
    Paragraph::new(lines).render(area, buf);
}

fn render_comparison(slider: &ComparisonSlider, content: Rect, buf: &mut Buffer) {
    let view = slider_view(content);
    if view.width < 2 || view.height == 0 {
        return;
    }

    let caption = Line::from(Span::styled(slider.caption(), Styles::dim())).centered();
    caption.render(Rect::new(content.x, content.y, content.width, 1), buf);

    let split = divider_column(slider, view.width);
    let labels = Rect::new(view.x, content.y + 1, view.width, 1);
    Line::from(Span::styled(BEFORE_LABEL, Styles::dim())).render(labels, buf);
    Line::from(Span::styled(AFTER_LABEL, Styles::highlight()))
        .right_aligned()
        .render(labels, buf);

    let before = Style::default().fg(Palette::DIM).bg(Palette::CARD);
    let after = Style::default().fg(Palette::BG).bg(Palette::ACCENT);
    let divider = if slider.is_locked() {
        Styles::highlight()
    } else {
        Styles::default()
    };

    for row in 0..view.height {
        let y = view.y + row;
        for column in 0..view.width {
            let x = view.x + column;
            let (symbol, style) = match column.cmp(&split) {
                std::cmp::Ordering::Less => (mockup_cell(row, column, false), before),
                std::cmp::Ordering::Equal => ("│", divider),
                std::cmp::Ordering::Greater => (mockup_cell(row, column, true), after),
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }

    let percent = format!("{:.0}%", slider.position());
    let footer = Rect::new(content.x, view.y + view.height, content.width, 1);
    Line::from(Span::styled(percent, Styles::dim()))
        .centered()
        .render(footer, buf);
}

/// A rough page sketch: a header bar, then text rows. The refreshed side
/// draws solid blocks where the old side has dotted ones.
fn mockup_cell(row: u16, column: u16, refreshed: bool) -> &'static str {
    let inked = match row {
        1 => true,
        r if r >= 3 && r % 2 == 1 => column % 12 < 9,
        _ => false,
    };
    match (inked, refreshed) {
        (false, _) => " ",
        (true, false) => "░",
        (true, true) => "█",
    }
}
