//! Scroll state and table of contents for the article reader.

use regex::Regex;

/// Labels longer than this are cut in the "Jump to" bar.
const TOC_LABEL_MAX: usize = 25;

/// The "Jump to" bar shows at most this many headings.
const TOC_MAX_ENTRIES: usize = 5;

/// A second-level heading and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub line: usize,
}

/// Reader over one article, measured in lines.
#[derive(Debug, Clone)]
pub struct ArticleReader {
    headings: Vec<Heading>,
    total_lines: usize,
    viewport: usize,
    scroll: usize,
}

impl ArticleReader {
    /// Build from markdown. Line positions start out as source lines; call
    /// [`ArticleReader::set_layout`] once the content has been rendered.
    pub fn new(content: &str) -> Self {
        let headings = match Regex::new(r"^## (.+)$") {
            Ok(re) => content
                .lines()
                .enumerate()
                .filter_map(|(line, text)| {
                    re.captures(text).map(|c| Heading {
                        title: c[1].trim().to_string(),
                        line,
                    })
                })
                .collect(),
            Err(_) => Vec::new(),
        };
        Self {
            headings,
            total_lines: content.lines().count(),
            viewport: 0,
            scroll: 0,
        }
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Replace line positions with rendered ones. `anchors` gives the
    /// rendered line of each heading in order; missing entries keep
    /// their source position.
    pub fn set_layout(&mut self, total_lines: usize, anchors: &[usize]) {
        self.total_lines = total_lines;
        for (heading, line) in self.headings.iter_mut().zip(anchors) {
            heading.line = *line;
        }
        self.clamp();
    }

    /// Number of lines visible at once.
    pub fn set_viewport(&mut self, height: usize) {
        self.viewport = height;
        self.clamp();
    }

    fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport)
    }

    fn clamp(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.clamp();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump so the heading is at the top. Unknown titles are ignored.
    pub fn scroll_to_heading(&mut self, title: &str) {
        if let Some(heading) = self.headings.iter().find(|h| h.title == title) {
            self.scroll = heading.line;
            self.clamp();
        }
    }

    /// Percent of the article scrolled past, 0 to 100. Content that fits
    /// in the viewport counts as fully read.
    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max == 0 {
            return 100.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.scroll as f64 / max as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    /// Entries of the "Jump to" bar. Only shown for articles with more
    /// than two headings.
    pub fn toc(&self) -> Vec<(String, &Heading)> {
        if self.headings.len() <= 2 {
            return Vec::new();
        }
        self.headings
            .iter()
            .take(TOC_MAX_ENTRIES)
            .map(|h| (toc_label(&h.title), h))
            .collect()
    }
}

fn toc_label(title: &str) -> String {
    if title.chars().count() > TOC_LABEL_MAX {
        let cut: String = title.chars().take(TOC_LABEL_MAX).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}
