//! haestus-tui: Terminal showcase for the haestus site sections
//!
//! This crate provides the interactive layer over `haestus-engine`:
//! - Project and blog carousels with a detail modal and article reader
//! - Paged process strip and the editable demo timeline with its table
//! - Before/after comparison slider and the gradient customizer
//! - Markdown rendering and gradient colors for the terminal

mod app;
mod clipboard;
mod event;
mod screens;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
mod ui;

pub use app::{App, Section};
pub use clipboard::SystemClipboard;
pub use event::{Action, Event, EventHandler};
pub use haestus_engine;
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use haestus_engine::{SiteCatalog, SiteConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Instant;
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit.
pub async fn run_tui(
    config: SiteConfig,
    catalog: SiteCatalog,
    theme: Theme,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = config.tick_rate();
    let mut app = App::new(config, catalog, Box::new(SystemClipboard::new()))?;
    app.theme = theme;

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);
    info!(width = size.width, height = size.height, "tui started");

    let mut events = EventHandler::new(tick_rate);
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            screens::render_app(app, area, frame.buffer_mut());
        })?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if app.is_typing() && handle_typing_key(app, key) {
                        continue;
                    }
                    let action = event::key_to_action(key);
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.wheel(-1, Instant::now()),
                    MouseEventKind::ScrollDown => app.wheel(1, Instant::now()),
                    MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                        app.pointer_moved(mouse.column);
                    }
                    MouseEventKind::Down(MouseButton::Left) => app.pointer_down(mouse.column),
                    MouseEventKind::Up(MouseButton::Left) => app.pointer_up(mouse.column),
                    _ => {}
                },
                Event::Tick => app.tick(Instant::now()),
                Event::Resize(width, height) => app.resize(width, height),
            }
        }

        if app.should_quit {
            info!("tui exiting");
            break;
        }
    }

    Ok(())
}

/// Route a key to the text field being edited.
/// Returns true if the key was consumed.
fn handle_typing_key(app: &mut App, key: KeyEvent) -> bool {
    // Let the action handler deal with Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Enter => {
            app.commit_input();
            true
        }
        KeyCode::Esc => {
            app.cancel_input();
            true
        }
        KeyCode::Char(c) => {
            app.type_char(c);
            true
        }
        KeyCode::Backspace => {
            app.type_backspace();
            true
        }
        _ => false,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use haestus_engine::Field;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_typing_consumes_printable_keys() {
        let mut app = App::new_for_test();
        app.section = Section::Timeline;
        app.handle_action(Action::Edit(Field::Title));

        // 'q' would quit outside a text field
        assert!(handle_typing_key(&mut app, key(KeyCode::Char('q'))));
        assert!(!app.should_quit);
        assert!(handle_typing_key(&mut app, key(KeyCode::Enter)));
        assert_eq!(
            app.timeline.items().first().map(|i| i.title.as_str()),
            Some("Project Kickoffq")
        );
    }

    #[test]
    fn test_typing_leaves_ctrl_and_tab_alone() {
        let mut app = App::new_for_test();
        app.section = Section::Timeline;
        app.handle_action(Action::Edit(Field::Date));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_typing_key(&mut app, ctrl_c));
        assert!(!handle_typing_key(&mut app, key(KeyCode::Tab)));
        assert!(handle_typing_key(&mut app, key(KeyCode::Esc)));
        assert!(!app.is_typing());
    }
}
