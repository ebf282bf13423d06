//! Single-field inline edit session.
//!
//! At most one field of one item is under edit at any time. Starting a
//! second edit while one is open is rejected; the caller must commit or
//! cancel first.

use std::fmt;

/// Editable fields of a timeline item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Title,
    Content,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Title => write!(f, "title"),
            Self::Content => write!(f, "content"),
        }
    }
}

/// The field being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditTarget {
    pub id: u64,
    pub field: Field,
}

impl EditTarget {
    pub const fn new(id: u64, field: Field) -> Self {
        Self { id, field }
    }
}

/// Errors from edit operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("already editing the {} of item {}", .0.field, .0.id)]
    AlreadyEditing(EditTarget),

    #[error("no timeline item with id {0}")]
    UnknownItem(u64),
}

/// Edit state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { target: EditTarget, draft: String },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn target(&self) -> Option<EditTarget> {
        match self {
            Self::Idle => None,
            Self::Editing { target, .. } => Some(*target),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Pending text buffer, if editing.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Enter edit mode with the field's current text as the draft.
    pub fn start(&mut self, target: EditTarget, initial: &str) -> Result<(), EditError> {
        if let Some(current) = self.target() {
            return Err(EditError::AlreadyEditing(current));
        }
        tracing::debug!(id = target.id, field = %target.field, "edit started");
        *self = Self::Editing {
            target,
            draft: initial.to_string(),
        };
        Ok(())
    }

    /// Drop any edit in flight and open `target` instead.
    pub fn restart(&mut self, target: EditTarget, initial: &str) {
        if let Some(current) = self.target() {
            tracing::debug!(id = current.id, field = %current.field, "edit superseded");
        }
        tracing::debug!(id = target.id, field = %target.field, "edit started");
        *self = Self::Editing {
            target,
            draft: initial.to_string(),
        };
    }

    pub fn insert(&mut self, c: char) {
        if let Some(draft) = self.draft_mut() {
            draft.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(draft) = self.draft_mut() {
            draft.pop();
        }
    }

    /// Finish the edit, handing back the target and the final text.
    pub fn commit(&mut self) -> Option<(EditTarget, String)> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Editing { target, draft } => Some((target, draft)),
        }
    }

    /// Drop the draft without applying it.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_commit() {
        let mut session = EditSession::default();
        let target = EditTarget::new(2, Field::Title);
        session.start(target, "Design").unwrap();
        assert!(session.is_editing());
        assert_eq!(session.draft(), Some("Design"));

        session.insert('!');
        assert_eq!(session.commit(), Some((target, "Design!".to_string())));
        assert_eq!(session, EditSession::Idle);
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut session = EditSession::default();
        let first = EditTarget::new(1, Field::Title);
        session.start(first, "A").unwrap();
        session.insert('b');

        let err = session
            .start(EditTarget::new(2, Field::Content), "B")
            .unwrap_err();
        assert_eq!(err, EditError::AlreadyEditing(first));
        assert_eq!(err.to_string(), "already editing the title of item 1");

        // First edit is untouched
        assert_eq!(session.target(), Some(first));
        assert_eq!(session.draft(), Some("Ab"));
    }

    #[test]
    fn test_restart_replaces_open_edit() {
        let mut session = EditSession::default();
        session.start(EditTarget::new(1, Field::Title), "A").unwrap();
        session.insert('b');

        let next = EditTarget::new(5, Field::Title);
        session.restart(next, "New Step");
        assert_eq!(session.target(), Some(next));
        assert_eq!(session.draft(), Some("New Step"));

        session.cancel();
        session.restart(next, "Again");
        assert_eq!(session.draft(), Some("Again"));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut session = EditSession::default();
        session.start(EditTarget::new(1, Field::Date), "Jan").unwrap();
        session.backspace();
        session.cancel();
        assert!(!session.is_editing());
        assert_eq!(session.commit(), None);
    }

    #[test]
    fn test_idle_operations_are_noops() {
        let mut session = EditSession::default();
        session.insert('x');
        session.backspace();
        session.cancel();
        assert_eq!(session.commit(), None);
        assert!(session.draft_mut().is_none());
        assert_eq!(session.target(), None);
    }
}
