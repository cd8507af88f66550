// File: crates/chart-render-skia/src/text.rs
// Summary: Skia textlayout shaper; measures text for layout and paints it during replay.

use chart_core::text::rotated_extent;
use chart_core::{FontStyle, RectI32, TextMeasurer};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(to_skia_color(font.color));
        if font.mono_numeric {
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &FontStyle) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its top-left corner at `(x, y)`, rotated by `rotation` radians.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &FontStyle, rotation: f32) {
        let paragraph = self.layout(text, font);
        if rotation == 0.0 {
            paragraph.paint(canvas, (x, y));
            return;
        }
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(rotation.to_degrees(), None);
        paragraph.paint(canvas, (0.0, 0.0));
        canvas.restore();
    }
}

impl TextMeasurer for TextShaper {
    fn measure_text(&self, text: &str, rotation: f32, font: &FontStyle) -> RectI32 {
        let p = self.layout(text, font);
        let (w, h) = rotated_extent(p.longest_line(), p.height(), rotation);
        RectI32::from_ltwh(0, 0, w.ceil() as i32, h.ceil() as i32)
    }
}
