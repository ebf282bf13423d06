//! Editable demo timeline.
//!
//! Owns the timeline items together with the pager that decides which of
//! them are on screen, the single edit session, and the expanded step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::editor::{EditError, EditSession, EditTarget, Field};
use crate::pager::{Direction, SlidingWindow, ViewportClass};

/// Title given to freshly added steps.
pub const NEW_STEP_TITLE: &str = "New Step";

/// Body given to freshly added steps.
pub const NEW_STEP_CONTENT: &str = "Click to edit this content.";

/// One step of the demo timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub id: u64,
    pub date: String,
    pub title: String,
    pub content: String,
    /// Whether the expanded step embeds the demo table.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub has_table: bool,
}

impl TimelineItem {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Date => &mut self.date,
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
        }
    }
}

/// Format a date the way new steps show it, e.g. `Apr 5, 2024`.
pub fn format_step_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Timeline items plus paging, expansion and edit state.
#[derive(Debug, Clone)]
pub struct EditableTimeline {
    items: Vec<TimelineItem>,
    window: SlidingWindow,
    session: EditSession,
    active: Option<u64>,
}

impl EditableTimeline {
    pub fn new(items: Vec<TimelineItem>, class: ViewportClass) -> Self {
        let window = SlidingWindow::new(items.len(), class);
        Self {
            items,
            window,
            session: EditSession::default(),
            active: None,
        }
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&TimelineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn active(&self) -> Option<u64> {
        self.active
    }

    /// Items inside the pager window.
    pub fn visible(&self) -> &[TimelineItem] {
        &self.items[self.window.range()]
    }

    pub fn show_prev(&self) -> bool {
        self.window.show_prev()
    }

    pub fn show_next(&self) -> bool {
        self.window.show_next()
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.window.navigate(direction)
    }

    pub fn set_viewport(&mut self, class: ViewportClass) {
        self.window.set_class(class);
    }

    /// Expand a step, or collapse it if already expanded. Ignored while editing.
    pub fn toggle_step(&mut self, id: u64) {
        if self.session.is_editing() {
            return;
        }
        self.active = if self.active == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Open one field of an item for editing.
    pub fn start_edit(&mut self, id: u64, field: Field) -> Result<(), EditError> {
        let initial = self
            .get(id)
            .map(|item| item.field(field).to_string())
            .ok_or(EditError::UnknownItem(id))?;
        self.session.start(EditTarget::new(id, field), &initial)
    }

    /// Write the draft into its field. Returns the edited target, if any.
    pub fn save_edit(&mut self) -> Option<EditTarget> {
        let (target, text) = self.session.commit()?;
        let item = self.items.iter_mut().find(|i| i.id == target.id)?;
        *item.field_mut(target.field) = text;
        debug!(id = target.id, field = %target.field, "edit saved");
        Some(target)
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Append a placeholder step dated `today`, bring it into view, expand
    /// it and open its title for editing. Returns the new id.
    pub fn add_step(&mut self, today: NaiveDate) -> u64 {
        let id = self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        self.items.push(TimelineItem {
            id,
            date: format_step_date(today),
            title: NEW_STEP_TITLE.to_string(),
            content: NEW_STEP_CONTENT.to_string(),
            has_table: false,
        });
        self.window.on_append();
        self.active = Some(id);

        self.session.restart(EditTarget::new(id, Field::Title), NEW_STEP_TITLE);
        info!(id, "timeline step added");
        id
    }
}
