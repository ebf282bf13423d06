//! haestus-engine: Headless logic behind the haestus showcase
//!
//! This crate holds everything that does not draw:
//! - Color conversion and the gradient customizer
//! - Sliding-window pager and rotating carousel
//! - Inline editing of the demo timeline and its table
//! - Content catalog, share fallback, comparison slider, article reader
//! - Configuration

pub mod carousel;
pub mod catalog;
pub mod color;
pub mod config;
pub mod editor;
pub mod gradient;
pub mod pager;
pub mod reader;
pub mod share;
pub mod slider;
pub mod table;
pub mod timeline;

// Re-export commonly used types
pub use carousel::{Carousel, CarouselError, CarouselTiming, Slot, ViewMode, WheelThrottle};
pub use catalog::{BlogPost, CatalogError, ClientProject, ProcessStep, SiteCatalog};
pub use color::{hex_to_hsl, hsl_to_hex, ColorParseError, Hsl, Rgb};
pub use config::{ConfigError, SiteConfig, TimingConfig};
pub use editor::{EditError, EditSession, EditTarget, Field};
pub use gradient::{
    Channel, ColorTemplate, Customizer, CustomizerTab, DemoText, FontOption, GradientColors,
};
pub use pager::{Breakpoints, Direction, SlidingWindow, ViewportClass, WindowSizes};
pub use reader::{ArticleReader, Heading};
pub use share::{
    article_url, share_or_copy, Clipboard, ShareError, ShareOutcome, ShareRequest, ShareTarget,
};
pub use slider::ComparisonSlider;
pub use table::{format_balance, Column, DemoTable, Row, Sort, Status};
pub use timeline::{EditableTimeline, TimelineItem};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
