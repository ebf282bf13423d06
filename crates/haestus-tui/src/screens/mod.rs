//! Screen definitions for the haestus TUI.

pub mod blog;
mod cards;
pub mod compare;
pub mod customize;
pub mod process;
pub mod projects;
pub mod timeline;

use crate::app::{App, Section};
use crate::ui::theme::Styles;
use crate::ui::widgets::{KeyHint, StatusBar, Tabs};
use crate::ui::{centered_fixed, main_layout};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the screen of the current section, plus the help overlay.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    match app.section {
        Section::Projects => projects::ProjectsScreen.render(app, area, buf),
        Section::Process => process::ProcessScreen.render(app, area, buf),
        Section::Timeline => timeline::TimelineScreen.render(app, area, buf),
        Section::Compare => compare::CompareScreen.render(app, area, buf),
        Section::Customize => customize::CustomizeScreen.render(app, area, buf),
        Section::Blog => blog::BlogScreen.render(app, area, buf),
    }

    if app.show_help {
        render_help_overlay(area, buf);
    }
}

/// Draw the section tabs and the status bar; returns the content area.
fn render_frame(app: &App, area: Rect, buf: &mut Buffer, hints: Vec<KeyHint>) -> Rect {
    let (tabs_area, content, status_area) = main_layout(area);
    buf.set_style(area, Styles::default());

    let titles = Section::ALL.iter().map(|s| s.title()).collect();
    Tabs::new(titles)
        .select(app.section.index())
        .render(tabs_area, buf);

    let mut status_bar = StatusBar::new(app.section.title()).hints(hints);
    if let Some(notification) = &app.notification {
        status_bar = status_bar.right(notification);
    }
    status_bar.render(status_area, buf);

    content
}

/// Bordered block used for panels and modals.
fn panel(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_active()
        } else {
            Styles::border()
        })
        .style(Styles::default())
}

const HELP_LEFT: &str = r"
  Sections
    Tab/S-Tab   Next/prev section
    1-6         Jump to section
  Browsing
    Left/Right  Previous/next
    v           Stack or list view
    Enter       Open / expand
    Up/Down     Scroll details
    Esc         Close / cancel
  Timeline
    t d c       Edit title/date/text
    a           Add step
    [ ]         Focus column
    < > o       Move / sort column

    q Quit      ? Toggle help
";

const HELP_RIGHT: &str = r"
  Reader
    Up/Down     Scroll
    PgUp/PgDn   Page
    Home / g    Back to top
    1-5         Jump to heading
    s           Share article link
  Compare
    Enter       Open comparison
    Left/Right  Move divider
    Space       Lock / unlock
  Customize
    Space       Open picker
    Left/Right  Switch tab
    Up/Down     Move cursor
    Enter / e   Apply / enter value
";

/// Render the help overlay.
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let width = 76.min(area.width.saturating_sub(4));
    let height = 20.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .style(Styles::default());
    let inner = block.inner(overlay_area);
    block.render(overlay_area, buf);

    let [left, right] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(inner);
    Paragraph::new(HELP_LEFT)
        .style(Styles::default())
        .render(left, buf);
    Paragraph::new(HELP_RIGHT)
        .style(Styles::default())
        .render(right, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, create_test_app, TEST_HEIGHT, TEST_WIDTH};

    fn render(app: &App) -> String {
        let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_app(app, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_tab_bar() {
        let app = create_test_app();
        let screen = render(&app);
        let first = screen.lines().next().unwrap_or_default();
        insta::assert_snapshot!(first, @"[1] Work | [2] Process | [3] Timeline | [4] Compare | [5] Customize | [6] Blog");
    }

    #[test]
    fn test_help_overlay() {
        let mut app = create_test_app();
        app.show_help = true;
        let screen = render(&app);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Share article link"));
        assert!(screen.contains("Add step"));
    }

    #[test]
    fn test_help_overlay_lists_every_section_key() {
        let mut app = create_test_app();
        app.show_help = true;
        let screen = render(&app);
        for key in [
            "PgUp/PgDn",
            "Home / g",
            "Jump to heading",
            "Lock / unlock",
            "Open picker",
            "Enter / e",
            "< > o",
            "Toggle help",
        ] {
            assert!(screen.contains(key), "help is missing {key}");
        }
    }

    #[test]
    fn test_notification_in_status_bar() {
        let mut app = create_test_app();
        app.set_notification("Link copied to clipboard!");
        let screen = render(&app);
        let last = screen.lines().last().unwrap_or_default();
        assert!(last.starts_with(" Work "));
        assert!(last.ends_with("Link copied to clipboard!"));
    }
}
