//! System clipboard for the share fallback.

use haestus_engine::{Clipboard, ShareError};

/// Clipboard backed by the desktop session. Headless terminals have none,
/// in which case every copy reports [`ShareError::Unavailable`].
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!(error = %e, "system clipboard unavailable");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ShareError> {
        let clipboard = self
            .inner
            .as_mut()
            .ok_or_else(|| ShareError::Unavailable("no system clipboard".into()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ShareError::Failed(e.to_string()))
    }
}
