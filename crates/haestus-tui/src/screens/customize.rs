//! Customize section: gradient hero preview plus the picker panel.

use haestus_engine::gradient::CHANNELS;
use haestus_engine::{Channel, CustomizerTab};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{panel, render_frame, Screen};
use crate::app::App;
use crate::text::truncate_to_width;
use crate::theme::{gradient_color, hsl_color};
use crate::ui::theme::Styles;
use crate::ui::widgets::KeyHint;

pub struct CustomizeScreen;

impl Screen for CustomizeScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        let hints = if app.input.is_some() {
            vec![KeyHint::new("Enter", "Apply"), KeyHint::new("Esc", "Cancel")]
        } else if app.customizer.is_open() {
            vec![
                KeyHint::new("</>", "Tab"),
                KeyHint::new("j/k", "Move"),
                KeyHint::new("Enter", "Choose"),
                KeyHint::new("Esc", "Close"),
            ]
        } else {
            vec![KeyHint::new("Space", "Customize"), KeyHint::new("?", "Help")]
        };
        let content = render_frame(app, area, buf, hints);

        if app.customizer.is_open() {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(content);
            render_preview(app, chunks[0], buf);
            render_picker(app, chunks[1], buf);
        } else {
            render_preview(app, content, buf);
        }
    }
}

fn font_name(app: &App) -> String {
    let value = app.customizer.font();
    app.catalog
        .fonts
        .iter()
        .find(|f| f.value == value)
        .map_or_else(|| value.replace('_', " "), |f| f.name.clone())
}

fn channel_label(channel: Channel) -> String {
    match channel {
        Channel::Background => "Background".to_string(),
        Channel::Gradient(i) => format!("Stop {}", i + 1),
    }
}

/// Gradient band with the hero copy centered over it.
fn render_preview(app: &App, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let colors = app.customizer.colors();
    let span = f32::from(area.width.saturating_sub(1).max(1));
    for column in 0..area.width {
        let color = gradient_color(&colors, f32::from(column) / span);
        for row in 0..area.height {
            if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                cell.set_symbol(" ").set_bg(color);
            }
        }
    }

    let ink = hsl_color(colors.color_back);
    let text = app.customizer.text();
    let mut lines: Vec<Line<'static>> = text
        .heading
        .lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(ink).add_modifier(Modifier::BOLD),
            ))
            .centered()
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(text.subheading.clone(), Style::default().fg(ink))).centered(),
    );
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            format!("Font: {}", font_name(app)),
            Style::default().fg(ink).add_modifier(Modifier::ITALIC),
        ))
        .centered(),
    );

    let height = u16::try_from(lines.len()).unwrap_or(area.height).min(area.height);
    let top = area.y + (area.height - height) / 2;
    for (line, y) in lines.iter().zip(top..top + height) {
        line.render(Rect::new(area.x, y, area.width, 1), buf);
    }
}

fn render_picker(app: &App, area: Rect, buf: &mut Buffer) {
    let block = panel("Customize", true);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height < 3 {
        return;
    }

    let current = app.customizer.tab();
    let mut tabs = Vec::new();
    for tab in CustomizerTab::ALL {
        let style = if tab == current {
            Styles::input()
        } else {
            Styles::dim()
        };
        tabs.push(Span::styled(format!(" {} ", tab.title()), style));
    }
    Line::from(tabs).render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

    let reserved = if app.input.is_some() { 3 } else { 2 };
    let list = Rect::new(
        inner.x,
        inner.y + 2,
        inner.width,
        inner.height.saturating_sub(reserved),
    );
    let width = usize::from(list.width.saturating_sub(4));
    let rows = picker_rows(app, width);
    let height = usize::from(list.height);
    let cursor = app.customizer.cursor();
    let first = (cursor + 1).saturating_sub(height);

    let lines: Vec<Line<'static>> = rows
        .into_iter()
        .enumerate()
        .skip(first)
        .take(height)
        .map(|(i, mut spans)| {
            let marker = if i == cursor {
                Span::styled("> ", Styles::highlight())
            } else {
                Span::raw("  ")
            };
            spans.insert(0, marker);
            Line::from(spans)
        })
        .collect();
    Paragraph::new(lines).render(list, buf);

    if let Some(input) = &app.input {
        let y = inner.y + inner.height - 1;
        let text = truncate_to_width(&format!("{}_", input.buffer), usize::from(inner.width));
        Line::from(Span::styled(text, Styles::input()))
            .render(Rect::new(inner.x, y, inner.width, 1), buf);
    }
}

/// Rows of the active tab, without the cursor column.
fn picker_rows(app: &App, width: usize) -> Vec<Vec<Span<'static>>> {
    let customizer = &app.customizer;
    match customizer.tab() {
        CustomizerTab::Presets => {
            let active = customizer.active_preset(&app.catalog.presets);
            app.catalog
                .presets
                .iter()
                .enumerate()
                .map(|(i, preset)| {
                    let check = if active == Some(i) { "✓ " } else { "  " };
                    vec![
                        Span::styled(check, Styles::success()),
                        Span::styled(truncate_to_width(&preset.name, width), Styles::default()),
                    ]
                })
                .collect()
        }
        CustomizerTab::Custom => {
            let colors = customizer.colors();
            CHANNELS
                .iter()
                .filter_map(|channel| colors.get(*channel).map(|hsl| (*channel, hsl)))
                .map(|(channel, hsl)| {
                    vec![
                        Span::styled("  ", Style::default().bg(hsl_color(hsl))),
                        Span::raw(" "),
                        Span::styled(format!("{:<11}", channel_label(channel)), Styles::default()),
                        Span::styled(hsl.to_hex(), Styles::dim()),
                    ]
                })
                .collect()
        }
        CustomizerTab::Fonts => app
            .catalog
            .fonts
            .iter()
            .map(|font| {
                let check = if font.value == customizer.font() { "✓ " } else { "  " };
                vec![
                    Span::styled(check, Styles::success()),
                    Span::styled(truncate_to_width(&font.name, width), Styles::default()),
                ]
            })
            .collect(),
        CustomizerTab::Text => {
            let text = customizer.text();
            vec![
                vec![
                    Span::styled("Heading: ", Styles::dim()),
                    Span::styled(
                        truncate_to_width(&text.heading.replace('\n', " "), width),
                        Styles::default(),
                    ),
                ],
                vec![
                    Span::styled("Sub: ", Styles::dim()),
                    Span::styled(truncate_to_width(&text.subheading, width), Styles::default()),
                ],
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Section;
    use crate::event::Action;
    use crate::test_utils::{create_test_app_at, render_screen_to_string};
    use ratatui::style::Color;

    fn customize_app() -> App {
        create_test_app_at(Section::Customize)
    }

    #[test]
    fn test_preview_shows_copy_and_font() {
        let app = customize_app();
        let screen = render_screen_to_string(&CustomizeScreen, &app);
        assert!(screen.contains("Your Brand,"));
        assert!(screen.contains("Amplified"));
        assert!(screen.contains("Built to ship, not to pilot"));
        assert!(screen.contains("Font: Instrument Serif"));
    }

    #[test]
    fn test_preview_paints_gradient() {
        let app = customize_app();
        let area = Rect::new(0, 0, 11, 3);
        let mut buf = Buffer::empty(area);
        render_preview(&app, area, &mut buf);
        let colors = app.customizer.colors();
        assert_eq!(buf[(0, 0)].bg, gradient_color(&colors, 0.0));
        assert_eq!(buf[(10, 2)].bg, gradient_color(&colors, 1.0));
        assert_ne!(buf[(0, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_picker_marks_active_preset() {
        let mut app = customize_app();
        app.handle_action(Action::Toggle);
        let screen = render_screen_to_string(&CustomizeScreen, &app);
        assert!(screen.contains("Presets"));
        assert!(screen.contains("> ✓ Ocean"));
    }

    #[test]
    fn test_custom_tab_lists_channels() {
        let mut app = customize_app();
        app.handle_action(Action::Toggle);
        app.handle_action(Action::Right);
        let screen = render_screen_to_string(&CustomizeScreen, &app);
        assert!(screen.contains("Background"));
        assert!(screen.contains("Stop 3"));
        assert!(screen.contains("#000000"));
    }

    #[test]
    fn test_input_line_while_typing() {
        let mut app = customize_app();
        app.handle_action(Action::Toggle);
        app.handle_action(Action::Left);
        app.handle_action(Action::Select);
        let screen = render_screen_to_string(&CustomizeScreen, &app);
        assert!(screen.contains("Your Brand, Amplified_"));
        assert!(screen.contains("Apply"));
    }
}
