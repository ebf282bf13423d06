//! Reusable widgets for the haestus TUI.

mod status_bar;
mod tabs;

pub use status_bar::{KeyHint, StatusBar};
pub use tabs::Tabs;
