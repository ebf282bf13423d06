//! Fixed-width sliding window over a sequence.
//!
//! Used by both timeline strips to decide which slice of steps to show.
//! The window width depends only on the viewport class and moves one step
//! at a time, never wrapping.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Coarse viewport width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Number of items visible at once for this class.
    pub const fn window_size(self) -> usize {
        match self {
            Self::Mobile => 1,
            Self::Tablet => 2,
            Self::Desktop => 4,
        }
    }
}

/// Window width per viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizes {
    pub mobile: usize,
    pub tablet: usize,
    pub desktop: usize,
}

impl WindowSizes {
    /// Editable demo timeline: 1, 2 and 4 steps.
    pub const DEMO: Self = Self {
        mobile: ViewportClass::Mobile.window_size(),
        tablet: ViewportClass::Tablet.window_size(),
        desktop: ViewportClass::Desktop.window_size(),
    };

    /// Process strip: 2, 3 and 4 steps.
    pub const PROCESS: Self = Self {
        mobile: 2,
        tablet: 3,
        desktop: 4,
    };

    pub const fn get(self, class: ViewportClass) -> usize {
        match class {
            ViewportClass::Mobile => self.mobile,
            ViewportClass::Tablet => self.tablet,
            ViewportClass::Desktop => self.desktop,
        }
    }
}

impl Default for WindowSizes {
    fn default() -> Self {
        Self::DEMO
    }
}

/// Width thresholds separating the viewport classes (inclusive upper bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    #[serde(default = "default_mobile_max")]
    pub mobile_max: u16,
    #[serde(default = "default_tablet_max")]
    pub tablet_max: u16,
}

fn default_mobile_max() -> u16 {
    60
}

fn default_tablet_max() -> u16 {
    100
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: default_mobile_max(),
            tablet_max: default_tablet_max(),
        }
    }
}

impl Breakpoints {
    /// The CSS pixel breakpoints of the web layout.
    pub const fn css() -> Self {
        Self {
            mobile_max: 640,
            tablet_max: 1024,
        }
    }

    pub fn classify(&self, width: u16) -> ViewportClass {
        if width <= self.mobile_max {
            ViewportClass::Mobile
        } else if width <= self.tablet_max {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// A `[start, end)` window of fixed width over `total` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingWindow {
    start: usize,
    end: usize,
    total: usize,
    class: ViewportClass,
    sizes: WindowSizes,
}

impl SlidingWindow {
    /// Window at the beginning of the sequence, with the demo timeline's widths.
    pub fn new(total: usize, class: ViewportClass) -> Self {
        Self::with_sizes(total, class, WindowSizes::default())
    }

    pub fn with_sizes(total: usize, class: ViewportClass, sizes: WindowSizes) -> Self {
        let mut window = Self {
            start: 0,
            end: 0,
            total,
            class,
            sizes,
        };
        window.reset();
        window
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    /// Full width for the current class.
    pub fn size(&self) -> usize {
        self.sizes.get(self.class)
    }

    /// Width of the window. Shorter than the class size only when there
    /// are fewer items than that.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Index range to slice the underlying sequence with.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the window can move back.
    pub fn show_prev(&self) -> bool {
        self.start > 0
    }

    /// Whether the window can move forward.
    pub fn show_next(&self) -> bool {
        self.end < self.total
    }

    /// Change viewport class. The window always returns to the start,
    /// even when the class is unchanged.
    pub fn set_class(&mut self, class: ViewportClass) {
        self.class = class;
        self.reset();
    }

    /// Shift both bounds by one. Returns whether the window moved.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Prev if self.show_prev() => {
                self.start -= 1;
                self.end -= 1;
                true
            }
            Direction::Next if self.show_next() => {
                self.start += 1;
                self.end += 1;
                true
            }
            _ => false,
        }
    }

    /// Record one appended item and bring it into view where the layout
    /// asks for it: a single-item window jumps to the new item, a
    /// two-item window shows the last two. The wide layout stays put,
    /// only growing if it was narrower than its class allows.
    pub fn on_append(&mut self) {
        let old_len = self.total;
        self.total += 1;
        match self.size() {
            1 => {
                self.start = old_len;
                self.end = old_len + 1;
            }
            2 if old_len >= 2 => {
                self.start = old_len - 1;
                self.end = old_len + 1;
            }
            size => {
                self.end = (self.start + size).min(self.total);
            }
        }
    }

    fn reset(&mut self) {
        self.start = 0;
        self.end = self.size().min(self.total);
    }
}
