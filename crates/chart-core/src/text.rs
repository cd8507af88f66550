// File: crates/chart-core/src/text.rs
// Summary: Font style and the text-measurement seam consumed by the layout painters.

use serde::{Deserialize, Serialize};

use crate::geometry::RectI32;
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    pub size: f32,
    pub color: Color,
    /// Prefer monospaced/tabular-number families (axis labels).
    pub mono_numeric: bool,
}

impl FontStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self { size: size.max(1.0), color, mono_numeric: false }
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new(12.0, Color::rgb(20, 20, 30))
    }
}

/// Measures rendered text. Only consistency matters to layout, not exact glyph metrics.
pub trait TextMeasurer {
    /// Bounding box of `text` rotated by `rotation` radians, anchored at the origin.
    fn measure_text(&self, text: &str, rotation: f32, font: &FontStyle) -> RectI32;
}

/// Deterministic measurer: every glyph is `0.6 em` wide and a line is `1.2 em` tall.
///
/// Used for headless layout and tests, where platform font variance is unwanted.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn measure_text(&self, text: &str, rotation: f32, font: &FontStyle) -> RectI32 {
        let chars = text.chars().count() as f32;
        let w = chars * font.size * 3.0 / 5.0;
        let h = font.size * 6.0 / 5.0;
        let (w, h) = rotated_extent(w, h, rotation);
        RectI32::from_ltwh(0, 0, snap_ceil(w), snap_ceil(h))
    }
}

// Trig noise (cos(pi/2) is not exactly 0) must not add a pixel.
fn snap_ceil(v: f32) -> i32 {
    (v - 1e-3).ceil().max(0.0) as i32
}

/// Axis-aligned extent of a `w` x `h` box rotated by `rotation` radians.
pub fn rotated_extent(w: f32, h: f32, rotation: f32) -> (f32, f32) {
    if rotation == 0.0 {
        return (w, h);
    }
    let (sin, cos) = rotation.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    (w * cos + h * sin, w * sin + h * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_swaps_extent() {
        let font = FontStyle::new(10.0, Color::default());
        let flat = ApproxTextMeasurer.measure_text("abcd", 0.0, &font);
        let turned = ApproxTextMeasurer.measure_text("abcd", std::f32::consts::FRAC_PI_2, &font);
        assert_eq!((flat.width(), flat.height()), (24, 12));
        assert_eq!((turned.width(), turned.height()), (12, 24));
    }
}
