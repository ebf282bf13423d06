//! UI building blocks for the haestus TUI.

pub mod layout;
pub mod theme;
pub mod widgets;

pub use layout::*;
