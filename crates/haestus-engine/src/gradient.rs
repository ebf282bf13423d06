//! Gradient color model and the customization widget state.
//!
//! [`GradientColors`] is a value type: every edit produces a new value
//! rather than mutating the current one.

use serde::{Deserialize, Serialize};

use crate::color::{hex_to_hsl, Hsl};

/// Three gradient stops plus a background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientColors {
    pub colors: [Hsl; 3],
    pub color_back: Hsl,
}

/// Which color of a [`GradientColors`] an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Background,
    /// Gradient stop index; values past 2 are ignored.
    Gradient(usize),
}

/// A named gradient preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTemplate {
    pub name: String,
    pub colors: GradientColors,
}

/// A selectable display font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontOption {
    pub name: String,
    pub value: String,
}

/// Editable hero copy shown over the gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoText {
    pub heading: String,
    pub subheading: String,
}

impl Default for DemoText {
    fn default() -> Self {
        Self {
            heading: "Your Brand,\nAmplified".into(),
            subheading: "Built to ship, not to pilot".into(),
        }
    }
}

impl GradientColors {
    pub const fn new(colors: [Hsl; 3], color_back: Hsl) -> Self {
        Self { colors, color_back }
    }

    /// Return a copy with one channel replaced by a `#rrggbb` value.
    ///
    /// Malformed hex becomes black, matching [`hex_to_hsl`].
    #[must_use]
    pub fn with_channel(&self, channel: Channel, hex: &str) -> Self {
        let value = hex_to_hsl(hex).parse().unwrap_or_default();
        self.with_hsl(channel, value)
    }

    /// Return a copy with one channel replaced.
    #[must_use]
    pub fn with_hsl(&self, channel: Channel, value: Hsl) -> Self {
        let mut next = *self;
        match channel {
            Channel::Background => next.color_back = value,
            Channel::Gradient(i) => {
                if let Some(slot) = next.colors.get_mut(i) {
                    *slot = value;
                }
            }
        }
        next
    }

    /// Color currently held by a channel.
    pub fn get(&self, channel: Channel) -> Option<Hsl> {
        match channel {
            Channel::Background => Some(self.color_back),
            Channel::Gradient(i) => self.colors.get(i).copied(),
        }
    }

    /// A preset is active when its gradient stops match; the background is ignored.
    pub fn matches_preset(&self, template: &ColorTemplate) -> bool {
        self.colors == template.colors.colors
    }
}

/// Tabs of the customization panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomizerTab {
    #[default]
    Presets,
    Custom,
    Fonts,
    Text,
}

impl CustomizerTab {
    pub const ALL: [Self; 4] = [Self::Presets, Self::Custom, Self::Fonts, Self::Text];

    pub fn title(self) -> &'static str {
        match self {
            Self::Presets => "Presets",
            Self::Custom => "Custom",
            Self::Fonts => "Fonts",
            Self::Text => "Text",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// The channels in the order the custom tab lists them.
pub const CHANNELS: [Channel; 4] = [
    Channel::Background,
    Channel::Gradient(0),
    Channel::Gradient(1),
    Channel::Gradient(2),
];

/// State behind the "Customize" color/font/text picker.
#[derive(Debug, Clone)]
pub struct Customizer {
    colors: GradientColors,
    font: String,
    text: DemoText,
    open: bool,
    tab: CustomizerTab,
    /// Row under the cursor in the active tab.
    cursor: usize,
}

impl Customizer {
    /// Start from the first preset and font, or black/empty if the lists are empty.
    pub fn new(templates: &[ColorTemplate], fonts: &[FontOption]) -> Self {
        let colors = templates.first().map_or(
            GradientColors::new([Hsl::default(); 3], Hsl::default()),
            |t| t.colors,
        );
        let font = fonts.first().map(|f| f.value.clone()).unwrap_or_default();
        Self {
            colors,
            font,
            text: DemoText::default(),
            open: false,
            tab: CustomizerTab::default(),
            cursor: 0,
        }
    }

    pub fn colors(&self) -> GradientColors {
        self.colors
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn text(&self) -> &DemoText {
        &self.text
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn tab(&self) -> CustomizerTab {
        self.tab
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn set_tab(&mut self, tab: CustomizerTab) {
        if self.tab != tab {
            self.tab = tab;
            self.cursor = 0;
        }
    }

    /// Move the cursor within a list of `len` rows, clamped.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let max = len - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Replace the colors wholesale with a preset.
    pub fn apply_preset(&mut self, template: &ColorTemplate) {
        tracing::debug!(preset = %template.name, "applying gradient preset");
        self.colors = template.colors;
    }

    /// Replace one channel from a picker hex value.
    pub fn set_channel_hex(&mut self, channel: Channel, hex: &str) {
        self.colors = self.colors.with_channel(channel, hex);
    }

    pub fn apply_font(&mut self, font: &FontOption) {
        self.font.clone_from(&font.value);
    }

    pub fn set_heading(&mut self, heading: impl Into<String>) {
        self.text.heading = heading.into();
    }

    pub fn set_subheading(&mut self, subheading: impl Into<String>) {
        self.text.subheading = subheading.into();
    }

    /// Index of the preset matching the current colors, if any.
    pub fn active_preset(&self, templates: &[ColorTemplate]) -> Option<usize> {
        templates.iter().position(|t| self.colors.matches_preset(t))
    }
}
