//! Before/after comparison slider.

/// Divider state of the comparison view. `position` is a percentage of
/// the view width covered by the "before" side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSlider {
    position: f32,
    locked: bool,
    dragging: bool,
    open: bool,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self {
            position: 50.0,
            locked: false,
            dragging: false,
            open: false,
        }
    }
}

impl ComparisonSlider {
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.dragging = false;
    }

    /// Hint line shown above the view.
    pub fn caption(&self) -> &'static str {
        if self.locked {
            "Drag to compare - Click to unlock"
        } else {
            "Hover to compare - Click to lock"
        }
    }

    /// Pointer at `x` within a view `width` wide. Follows the pointer
    /// unless locked, and while locked only when dragging.
    pub fn hover(&mut self, x: f32, width: f32) {
        if width <= 0.0 || (self.locked && !self.dragging) {
            return;
        }
        self.set_position(x / width * 100.0);
    }

    /// Pointer pressed. Dragging only starts on a locked divider.
    pub fn press(&mut self) {
        if self.locked {
            self.dragging = true;
        }
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Lock the divider in place.
    pub fn click(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
        self.dragging = false;
    }

    pub fn toggle_lock(&mut self) {
        if self.locked {
            self.unlock();
        } else {
            self.click();
        }
    }

    /// Keyboard movement by `delta` percentage points. Works regardless of lock.
    pub fn nudge(&mut self, delta: f32) {
        self.set_position(self.position + delta);
    }

    fn set_position(&mut self, value: f32) {
        if value.is_finite() {
            self.position = value.clamp(0.0, 100.0);
        }
    }
}
