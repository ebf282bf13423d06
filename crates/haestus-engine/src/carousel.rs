//! Bounded rotating window over a content catalog.
//!
//! A carousel keeps a small queue of display slots. Each slot points at a
//! catalog entry by index, always reduced modulo the catalog length, so the
//! queue can rotate forever without going out of bounds. Transitions start
//! a cooldown during which further transitions are ignored; the cooldown is
//! a deadline checked against the caller's clock rather than a timer.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default minimum gap between two accepted wheel inputs.
pub const DEFAULT_WHEEL_THROTTLE: Duration = Duration::from_millis(350);

/// Default length of the post-transition cooldown.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(450);

/// One visible card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Unique for the lifetime of the carousel; new slots always get a fresh id.
    pub id: u64,
    /// Index into the catalog, in `0..catalog_len`.
    pub content: usize,
}

/// Timing knobs for transitions and wheel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub wheel_throttle: Duration,
    pub cooldown: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            wheel_throttle: DEFAULT_WHEEL_THROTTLE,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Errors from building a carousel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel catalog is empty")]
    EmptyCatalog,

    #[error("carousel needs at least one slot")]
    NoSlots,
}

/// Drops inputs that arrive too soon after the last accepted one.
#[derive(Debug, Clone)]
pub struct WheelThrottle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl WheelThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Returns true and records `now` if the input should be handled.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.window {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}

/// Stacked cards or a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Stack,
    List,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Stack => Self::List,
            Self::List => Self::Stack,
        }
    }
}

/// Rotating queue of slots over a catalog of `catalog_len` entries.
#[derive(Debug, Clone)]
pub struct Carousel {
    slots: VecDeque<Slot>,
    catalog_len: usize,
    next_id: u64,
    busy_until: Option<Instant>,
    timing: CarouselTiming,
    throttle: WheelThrottle,
    mode: ViewMode,
    list_cursor: usize,
    /// Catalog index shown in the detail modal.
    selected: Option<usize>,
}

impl Carousel {
    pub fn new(
        catalog_len: usize,
        slot_count: usize,
        timing: CarouselTiming,
    ) -> Result<Self, CarouselError> {
        if catalog_len == 0 {
            return Err(CarouselError::EmptyCatalog);
        }
        if slot_count == 0 {
            return Err(CarouselError::NoSlots);
        }
        let slots = (0..slot_count)
            .zip(1u64..)
            .map(|(i, id)| Slot {
                id,
                content: i % catalog_len,
            })
            .collect::<VecDeque<_>>();
        let next_id = slots.back().map_or(1, |s| s.id + 1);
        Ok(Self {
            slots,
            catalog_len,
            next_id,
            busy_until: None,
            timing,
            throttle: WheelThrottle::new(timing.wheel_throttle),
            mode: ViewMode::default(),
            list_cursor: 0,
            selected: None,
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog_len
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    pub fn is_busy(&self, now: Instant) -> bool {
        self.busy_until.is_some_and(|until| now < until)
    }

    /// Clear the cooldown once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.busy_until.is_some() && !self.is_busy(now) {
            self.busy_until = None;
        }
    }

    /// Advance by one. Returns whether a transition happened.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.is_busy(now) {
            return false;
        }
        let Some(last) = self.slots.back().map(|s| s.content) else {
            return false;
        };
        self.slots.pop_front();
        let slot = Slot {
            id: self.fresh_id(),
            content: (last + 1) % self.catalog_len,
        };
        self.slots.push_back(slot);
        self.begin_cooldown(now);
        debug!(current = self.current(), "carousel advanced");
        true
    }

    /// Retreat by one. Returns whether a transition happened.
    pub fn previous(&mut self, now: Instant) -> bool {
        if self.is_busy(now) {
            return false;
        }
        let Some(first) = self.slots.front().map(|s| s.content) else {
            return false;
        };
        let slot = Slot {
            id: self.fresh_id(),
            content: (first + self.catalog_len - 1) % self.catalog_len,
        };
        self.slots.push_front(slot);
        self.slots.pop_back();
        self.begin_cooldown(now);
        debug!(current = self.current(), "carousel retreated");
        true
    }

    /// Route a wheel delta through the throttle. Positive advances,
    /// negative retreats. Zero deltas and list mode are ignored.
    pub fn wheel(&mut self, delta: i32, now: Instant) -> bool {
        if delta == 0 || self.mode == ViewMode::List {
            return false;
        }
        if !self.throttle.accept(now) {
            return false;
        }
        if delta > 0 {
            self.next(now)
        } else {
            self.previous(now)
        }
    }

    /// Catalog index of the front card.
    pub fn current(&self) -> usize {
        self.slots.front().map_or(0, |s| s.content % self.catalog_len)
    }

    /// 1-based position of the front card for an "N / M" indicator.
    pub fn position(&self) -> usize {
        self.current() + 1
    }

    /// Resolve a slot to its catalog entry.
    pub fn item<'a, T>(&self, slot_index: usize, catalog: &'a [T]) -> Option<&'a T> {
        if catalog.is_empty() {
            return None;
        }
        let slot = self.slots.get(slot_index)?;
        catalog.get(slot.content % catalog.len())
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.list_cursor = self.current();
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    /// Move the list cursor, clamped to the catalog.
    pub fn move_list_cursor(&mut self, delta: isize) {
        let max = self.catalog_len - 1;
        self.list_cursor = self.list_cursor.saturating_add_signed(delta).min(max);
    }

    /// Open the detail modal for a catalog index.
    pub fn open(&mut self, index: usize) {
        self.selected = Some(index % self.catalog_len);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn fresh_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn begin_cooldown(&mut self, now: Instant) {
        self.busy_until = Some(now + self.timing.cooldown);
    }
}
