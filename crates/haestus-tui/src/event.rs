//! Event handling for the haestus TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use haestus_engine::{Direction, Field};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm polling blocks, so it gets its own thread
        std::thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    let event = match evt {
                        CrosstermEvent::Key(key) => Some(Event::Key(key)),
                        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                        _ => None,
                    };
                    if let Some(e) = event {
                        if tx_clone.send(e).is_err() {
                            break;
                        }
                    }
                }
            } else if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    Back,
    Select,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Top,
    NextTab,
    PrevTab,
    Tab(usize),
    /// Switch a carousel between stack and list view.
    ToggleView,
    /// Space: lock the slider, open the customizer.
    Toggle,
    Share,
    AddStep,
    Edit(Field),
    /// Enter a value in the customizer.
    EnterValue,
    FocusColumn(Direction),
    MoveColumn(Direction),
    Sort,
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::Back,
        KeyCode::Enter => Action::Select,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Action::Top,
        KeyCode::BackTab => Action::PrevTab,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::PrevTab
            } else {
                Action::NextTab
            }
        }
        KeyCode::Char(c @ '1'..='6') => Action::Tab(c as usize - '1' as usize),
        KeyCode::Char('v') => Action::ToggleView,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('s') => Action::Share,
        KeyCode::Char('a') => Action::AddStep,
        KeyCode::Char('t') => Action::Edit(Field::Title),
        KeyCode::Char('d') => Action::Edit(Field::Date),
        KeyCode::Char('c') => Action::Edit(Field::Content),
        KeyCode::Char('e') => Action::EnterValue,
        KeyCode::Char('[') => Action::FocusColumn(Direction::Prev),
        KeyCode::Char(']') => Action::FocusColumn(Direction::Next),
        KeyCode::Char('<') => Action::MoveColumn(Direction::Prev),
        KeyCode::Char('>') => Action::MoveColumn(Direction::Next),
        KeyCode::Char('o') => Action::Sort,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(event), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Char('c'))), Action::Edit(Field::Content));
    }

    #[test]
    fn test_digits_select_sections() {
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::Tab(0));
        assert_eq!(key_to_action(key(KeyCode::Char('6'))), Action::Tab(5));
        assert_eq!(key_to_action(key(KeyCode::Char('7'))), Action::None);
    }

    #[test]
    fn test_tab_directions() {
        assert_eq!(key_to_action(key(KeyCode::Tab)), Action::NextTab);
        assert_eq!(key_to_action(key(KeyCode::BackTab)), Action::PrevTab);
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_to_action(shift_tab), Action::PrevTab);
    }

    #[test]
    fn test_column_keys() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('<'))),
            Action::MoveColumn(Direction::Prev)
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char(']'))),
            Action::FocusColumn(Direction::Next)
        );
    }
}
