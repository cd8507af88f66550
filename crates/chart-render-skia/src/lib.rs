// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia backend. Replays chart-core display lists onto CPU raster (PNG) or SVG canvases.

use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use chart_core::{Color, DrawCommand};
use skia_safe as skia;
use tracing::debug;

pub mod text;

pub use text::TextShaper;

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    shaper: Rc<TextShaper>,
    draw_text: bool,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: Rc::new(TextShaper::new()), draw_text: true }
    }

    /// Skip text commands; keeps pixel snapshots free of font differences across platforms.
    pub fn without_text(mut self) -> Self {
        self.draw_text = false;
        self
    }

    /// Shaper to hand to the layout canvas so measurement matches what gets painted.
    pub fn shaper(&self) -> Rc<TextShaper> {
        self.shaper.clone()
    }

    /// Encode `commands` as a `width` x `height` PNG.
    pub fn render_png(&self, commands: &[DrawCommand], width: i32, height: i32) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        self.replay(canvas, commands);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        debug!(bytes = data.as_bytes().len(), commands = commands.len(), "png encoded");
        Ok(data.as_bytes().to_vec())
    }

    /// Serialize `commands` as an SVG document.
    pub fn render_svg(&self, commands: &[DrawCommand], width: i32, height: i32) -> Result<String> {
        let canvas = skia::svg::Canvas::new(skia::Rect::from_iwh(width, height), None);
        self.replay(&canvas, commands);
        let data = canvas.end();
        let svg = String::from_utf8(data.as_bytes().to_vec()).context("svg output is not utf-8")?;
        debug!(bytes = svg.len(), commands = commands.len(), "svg written");
        Ok(svg)
    }

    fn replay(&self, canvas: &skia::Canvas, commands: &[DrawCommand]) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);

        for cmd in commands {
            match cmd {
                DrawCommand::FillRect { rect, color } => {
                    fill.set_color(to_skia_color(*color));
                    let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                    canvas.draw_rect(r, &fill);
                }
                DrawCommand::StrokePath { points, color, width } => {
                    let Some((&first, rest)) = points.split_first() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to(first);
                    for &p in rest {
                        path.line_to(p);
                    }
                    stroke.set_color(to_skia_color(*color));
                    stroke.set_stroke_width(*width);
                    canvas.draw_path(&path, &stroke);
                }
                DrawCommand::Text { text, x, y, font, rotation } => {
                    if self.draw_text {
                        self.shaper.draw(canvas, text, *x, *y, font, *rotation);
                    }
                }
            }
        }
    }
}

/// PNG bytes for a recorded display list, text included.
pub fn render_png(commands: &[DrawCommand], width: i32, height: i32) -> Result<Vec<u8>> {
    SkiaRenderer::new().render_png(commands, width, height)
}

/// SVG document for a recorded display list, text included.
pub fn render_svg(commands: &[DrawCommand], width: i32, height: i32) -> Result<String> {
    SkiaRenderer::new().render_svg(commands, width, height)
}
