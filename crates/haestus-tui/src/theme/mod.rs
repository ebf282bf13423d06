//! Theme components for the TUI.
//!
//! - [`Theme`] - Color palette (site dark / high contrast)
//! - [`hsl_color`], [`gradient_color`] - Terminal colors for the gradient model

mod colors;
mod gradient;

pub use colors::Theme;
pub use gradient::{gradient_color, hsl_color};
