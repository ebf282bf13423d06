//! Test utilities for haestus-tui rendering tests.
//!
//! Helpers for building a test app over the bundled catalog, rendering
//! screens into a buffer, and flattening buffers to text.

use crate::app::{App, Section};
use crate::screens::Screen as ScreenTrait;
use haestus_engine::{Clipboard, ShareError};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use std::sync::{Arc, Mutex};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT)
}

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app over the bundled catalog.
pub fn create_test_app() -> App {
    App::new_for_test()
}

/// Create a test app showing a specific section.
pub fn create_test_app_at(section: Section) -> App {
    let mut app = App::new_for_test();
    app.section = section;
    app
}

/// In-memory clipboard. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    copied: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    /// Everything copied so far, oldest first.
    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ShareError> {
        self.copied
            .lock()
            .map_err(|e| ShareError::Failed(e.to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// Trailing spaces are trimmed from every line.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a screen to a buffer and return it as a string.
pub fn render_screen_to_string<S: ScreenTrait>(screen: &S, app: &App) -> String {
    render_screen_to_string_sized(screen, app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render a screen with custom dimensions.
pub fn render_screen_to_string_sized<S: ScreenTrait>(
    screen: &S,
    app: &App,
    width: u16,
    height: u16,
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    screen.render(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.section, Section::Projects);
        assert_eq!(app.area, Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
        assert_eq!(app.catalog.projects.len(), 5);
    }

    #[test]
    fn test_create_test_app_at() {
        let app = create_test_app_at(Section::Blog);
        assert_eq!(app.section, Section::Blog);
    }

    #[test]
    fn test_memory_clipboard_shares_history() {
        let clipboard = MemoryClipboard::default();
        let mut handle = clipboard.clone();
        handle.copy("https://example.com").unwrap();
        assert_eq!(clipboard.copied(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }
}
