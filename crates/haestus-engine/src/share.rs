//! Share an article, falling back to the clipboard.
//!
//! Sharing is best effort. Failures are logged and reported as an outcome,
//! never as an error the caller has to handle.

use tracing::{debug, warn};

use crate::catalog::BlogPost;

/// Message shown after the link was copied instead of shared.
pub const COPIED_MESSAGE: &str = "Link copied to clipboard!";

/// What to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// Request for sharing a blog article.
    pub fn for_post(base_url: &str, post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            text: format!("Check out this article: {}", post.title),
            url: article_url(base_url, post),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    #[error("share cancelled")]
    Cancelled,

    #[error("share target unavailable: {0}")]
    Unavailable(String),

    #[error("share failed: {0}")]
    Failed(String),
}

/// A native share facility.
pub trait ShareTarget {
    fn share(&mut self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// A system clipboard.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ShareError>;
}

/// How a share attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Cancelled,
    Failed,
}

impl ShareOutcome {
    /// Notification text for the outcome, if any should be shown.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Copied => Some(COPIED_MESSAGE),
            Self::Shared => Some("Shared"),
            Self::Cancelled | Self::Failed => None,
        }
    }
}

/// Share through `native` when present, otherwise copy the URL.
///
/// A native failure other than cancellation also falls back to the
/// clipboard. Clipboard failures are swallowed.
pub fn share_or_copy(
    native: Option<&mut dyn ShareTarget>,
    clipboard: &mut dyn Clipboard,
    request: &ShareRequest,
) -> ShareOutcome {
    if let Some(target) = native {
        match target.share(request) {
            Ok(()) => {
                debug!(url = %request.url, "shared article");
                return ShareOutcome::Shared;
            }
            Err(ShareError::Cancelled) => {
                debug!("share cancelled by user");
                return ShareOutcome::Cancelled;
            }
            Err(e) => warn!(error = %e, "native share failed, copying link instead"),
        }
    }

    match clipboard.copy(&request.url) {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "could not copy link to clipboard");
            ShareOutcome::Failed
        }
    }
}

/// Shareable link to an article: `{base}/#blog-{id}`.
pub fn article_url(base_url: &str, post: &BlogPost) -> String {
    format!("{}/#blog-{}", base_url.trim_end_matches('/'), post.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        copied: Vec<String>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Unavailable("no display".into()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    struct FakeTarget {
        result: fn() -> Result<(), ShareError>,
        calls: usize,
    }

    impl ShareTarget for FakeTarget {
        fn share(&mut self, _request: &ShareRequest) -> Result<(), ShareError> {
            self.calls += 1;
            (self.result)()
        }
    }

    fn post() -> BlogPost {
        BlogPost {
            id: 2,
            title: "The Hidden Cost".into(),
            description: String::new(),
            category: "AI Strategy".into(),
            read_time: "12 min read".into(),
            image: String::new(),
            content: String::new(),
        }
    }

    fn request() -> ShareRequest {
        ShareRequest::for_post("https://haestus.dev", &post())
    }

    #[test]
    fn test_article_url() {
        assert_eq!(article_url("https://haestus.dev", &post()), "https://haestus.dev/#blog-2");
        assert_eq!(article_url("https://haestus.dev/", &post()), "https://haestus.dev/#blog-2");
    }

    #[test]
    fn test_request_for_post() {
        let req = request();
        assert_eq!(req.title, "The Hidden Cost");
        assert_eq!(req.text, "Check out this article: The Hidden Cost");
    }

    #[test]
    fn test_no_native_copies() {
        let mut clipboard = FakeClipboard::default();
        let outcome = share_or_copy(None, &mut clipboard, &request());
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.copied, vec!["https://haestus.dev/#blog-2"]);
        assert_eq!(outcome.message(), Some(COPIED_MESSAGE));
    }

    #[test]
    fn test_native_success() {
        let mut clipboard = FakeClipboard::default();
        let mut target = FakeTarget {
            result: || Ok(()),
            calls: 0,
        };
        let outcome = share_or_copy(Some(&mut target), &mut clipboard, &request());
        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(target.calls, 1);
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn test_cancel_copies_nothing() {
        let mut clipboard = FakeClipboard::default();
        let mut target = FakeTarget {
            result: || Err(ShareError::Cancelled),
            calls: 0,
        };
        let outcome = share_or_copy(Some(&mut target), &mut clipboard, &request());
        assert_eq!(outcome, ShareOutcome::Cancelled);
        assert!(clipboard.copied.is_empty());
        assert_eq!(outcome.message(), None);
    }

    #[test]
    fn test_native_failure_falls_back() {
        let mut clipboard = FakeClipboard::default();
        let mut target = FakeTarget {
            result: || Err(ShareError::Failed("boom".into())),
            calls: 0,
        };
        let outcome = share_or_copy(Some(&mut target), &mut clipboard, &request());
        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(clipboard.copied.len(), 1);
    }

    #[test]
    fn test_clipboard_failure_is_swallowed() {
        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };
        let outcome = share_or_copy(None, &mut clipboard, &request());
        assert_eq!(outcome, ShareOutcome::Failed);
    }
}
