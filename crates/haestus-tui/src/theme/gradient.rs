//! Terminal colors for the gradient model.

use haestus_engine::{GradientColors, Hsl, Rgb};
use ratatui::style::Color;

pub fn hsl_color(hsl: Hsl) -> Color {
    let Rgb { r, g, b } = hsl.to_rgb();
    Color::Rgb(r, g, b)
}

/// Color at `t` (0.0 left, 1.0 right) of a three-stop linear gradient.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gradient_color(colors: &GradientColors, t: f32) -> Color {
    let stops = colors.colors.map(Hsl::to_rgb);
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let (from, to, local) = if t <= 0.5 {
        (stops[0], stops[1], t * 2.0)
    } else {
        (stops[1], stops[2], (t - 0.5) * 2.0)
    };
    let mix = |a: u8, b: u8| -> u8 {
        (f32::from(a) + (f32::from(b) - f32::from(a)) * local).round() as u8
    };
    Color::Rgb(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
}
