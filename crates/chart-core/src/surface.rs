// File: crates/chart-core/src/surface.rs
// Summary: Drawing-primitive seam (fill, stroke, text) plus a recording display list.
// Notes:
// - Coordinates are absolute (root canvas space); `Canvas` translates before calling in.
// - Backends (see chart-render-skia) replay a `Recorder` into PNG/SVG.

use serde::{Deserialize, Serialize};

use crate::geometry::RectI32;
use crate::text::FontStyle;
use crate::theme::Color;

/// A low-level drawing sink.
pub trait Surface {
    fn fill_rect(&mut self, rect: RectI32, color: Color);
    /// Stroke an open polyline through `points`.
    fn stroke_path(&mut self, points: &[(f32, f32)], color: Color, width: f32);
    /// Draw `text` with its top-left corner at `(x, y)`, rotated by `rotation` radians around it.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &FontStyle, rotation: f32);
}

/// One recorded primitive, in root canvas coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect { rect: RectI32, color: Color },
    StrokePath { points: Vec<(f32, f32)>, color: Color, width: f32 },
    Text { text: String, x: f32, y: f32, font: FontStyle, rotation: f32 },
}

/// Records every primitive in draw order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }
    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Text commands only, handy for asserting on labels.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn fill_rect(&mut self, rect: RectI32, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
    fn stroke_path(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::StrokePath { points: points.to_vec(), color, width });
    }
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &FontStyle, rotation: f32) {
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, font: font.clone(), rotation });
    }
}

/// Discards everything; backs dry-run canvases.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn fill_rect(&mut self, _rect: RectI32, _color: Color) {}
    fn stroke_path(&mut self, _points: &[(f32, f32)], _color: Color, _width: f32) {}
    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32, _font: &FontStyle, _rotation: f32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_list_survives_json() {
        let mut rec = Recorder::new();
        rec.fill_rect(RectI32::from_ltwh(0, 0, 4, 2), Color::rgb(10, 20, 30));
        rec.stroke_path(&[(0.0, 0.0), (3.0, 1.5)], Color::rgb(1, 2, 3), 2.0);
        rec.draw_text("Mon", 1.0, 2.0, &FontStyle::default(), 0.0);

        let json = serde_json::to_string(rec.commands()).unwrap();
        assert!(json.contains(r#""op":"fill_rect""#));
        let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec.commands());
    }
}
