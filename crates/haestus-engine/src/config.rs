//! Configuration for the haestus showcase.
//!
//! Everything here is optional: a missing file gives the defaults, and
//! missing fields fall back individually.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::carousel::CarouselTiming;
use crate::pager::Breakpoints;

/// Environment variable overriding [`SiteConfig::base_url`].
pub const SITE_URL_ENV: &str = "HAESTUS_SITE_URL";

/// Config file location relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".haestus/config.json";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL used when building shareable links.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Carousel transition timing.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Terminal column widths separating the viewport classes.
    #[serde(default)]
    pub breakpoints: Breakpoints,

    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Content catalog to use instead of the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://haestus.dev".into()
}

fn default_tick_rate_ms() -> u64 {
    100
}

/// Carousel timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Wheel inputs closer together than this are dropped.
    #[serde(default = "default_wheel_throttle_ms")]
    pub wheel_throttle_ms: u64,

    /// Transitions are ignored for this long after one starts.
    #[serde(default = "default_transition_cooldown_ms")]
    pub transition_cooldown_ms: u64,
}

fn default_wheel_throttle_ms() -> u64 {
    350
}

fn default_transition_cooldown_ms() -> u64 {
    450
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            wheel_throttle_ms: default_wheel_throttle_ms(),
            transition_cooldown_ms: default_transition_cooldown_ms(),
        }
    }
}

impl TimingConfig {
    pub fn carousel(&self) -> CarouselTiming {
        CarouselTiming {
            wheel_throttle: Duration::from_millis(self.wheel_throttle_ms),
            cooldown: Duration::from_millis(self.transition_cooldown_ms),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timing: TimingConfig::default(),
            breakpoints: Breakpoints::default(),
            tick_rate_ms: default_tick_rate_ms(),
            catalog_path: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration, using defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Apply `HAESTUS_SITE_URL` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_site_url(std::env::var(SITE_URL_ENV).ok());
    }

    /// Override the base URL when a non-empty value is given.
    pub fn apply_site_url(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
