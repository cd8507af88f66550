// File: crates/chart-core/src/canvas.rs
// Summary: Canvas = a drawing box inside a shared surface, plus theme, format, and text metrics.
// Notes:
// - Children are cheap clones with a different box; they share the parent's sink.
// - Canvases are single-threaded (`Rc`); build one per render call.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::RectI32;
use crate::surface::{NullSurface, Recorder, Surface};
use crate::text::{FontStyle, TextMeasurer};
use crate::theme::{Color, Theme};
use crate::types::{Insets, OutputFormat};

/// Produces axis label text from a numeric value.
pub type ValueFormatter = Rc<dyn Fn(f64) -> String>;

/// How a child canvas derives its box from the parent's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildBox {
    /// Parent box shrunk by the given padding.
    Padding(Insets),
    /// Explicit box, relative to the parent's top-left corner.
    Bounds(RectI32),
}

#[derive(Clone)]
pub struct Canvas {
    width: i32,
    height: i32,
    bounds: RectI32,
    theme: Rc<Theme>,
    format: OutputFormat,
    measurer: Rc<dyn TextMeasurer>,
    surface: Rc<RefCell<dyn Surface>>,
    formatter: ValueFormatter,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &(self.width, self.height))
            .field("bounds", &self.bounds)
            .field("theme", &self.theme.name)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Root canvas covering the whole `width` x `height` output.
    pub fn new(
        width: i32,
        height: i32,
        theme: Theme,
        format: OutputFormat,
        measurer: Rc<dyn TextMeasurer>,
        surface: Rc<RefCell<dyn Surface>>,
    ) -> Self {
        Self {
            width,
            height,
            bounds: RectI32::from_ltwh(0, 0, width.max(0), height.max(0)),
            theme: Rc::new(theme),
            format,
            measurer,
            surface,
            formatter: Rc::new(format_value),
        }
    }

    /// Root canvas drawing into a fresh `Recorder`, returned alongside.
    pub fn recording(
        width: i32,
        height: i32,
        theme: Theme,
        format: OutputFormat,
        measurer: Rc<dyn TextMeasurer>,
    ) -> (Self, Rc<RefCell<Recorder>>) {
        let recorder = Rc::new(RefCell::new(Recorder::new()));
        let canvas = Self::new(width, height, theme, format, measurer, recorder.clone());
        (canvas, recorder)
    }

    pub fn with_value_formatter(mut self, formatter: impl Fn(f64) -> String + 'static) -> Self {
        self.formatter = Rc::new(formatter);
        self
    }

    pub fn with_theme(mut self, theme: Rc<Theme>) -> Self {
        self.theme = theme;
        self
    }

    /// Box in root coordinates.
    pub fn bounds(&self) -> RectI32 { self.bounds }
    pub fn width(&self) -> i32 { self.bounds.width() }
    pub fn height(&self) -> i32 { self.bounds.height() }
    pub fn theme(&self) -> &Rc<Theme> { &self.theme }
    pub fn value_formatter(&self) -> ValueFormatter { self.formatter.clone() }

    pub fn child(&self, child: ChildBox) -> Canvas {
        let bounds = match child {
            ChildBox::Padding(insets) => self.bounds.inset(&insets),
            ChildBox::Bounds(rect) => {
                let r = rect.translate(self.bounds.left, self.bounds.top);
                RectI32::from_ltrb(r.left, r.top, r.right.max(r.left), r.bottom.max(r.top))
            }
        };
        Canvas { bounds, ..self.clone() }
    }

    /// Same box and metrics, but drawing is discarded. Used to measure before committing.
    pub fn dry_run(&self) -> Canvas {
        Canvas { surface: Rc::new(RefCell::new(NullSurface)), ..self.clone() }
    }

    pub fn measure_text(&self, text: &str, rotation: f32, font: &FontStyle) -> RectI32 {
        self.measurer.measure_text(text, rotation, font)
    }

    /// Fill a rectangle given in local coordinates.
    pub fn fill_rect(&self, rect: RectI32, color: Color) {
        let abs = rect.translate(self.bounds.left, self.bounds.top);
        self.surface.borrow_mut().fill_rect(abs, color);
    }

    /// Fill the whole box.
    pub fn fill_background(&self, color: Color) {
        self.surface.borrow_mut().fill_rect(self.bounds, color);
    }

    pub fn line(&self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color, width: f32) {
        self.polyline(&[(x1 as f32, y1 as f32), (x2 as f32, y2 as f32)], color, width);
    }

    pub fn polyline(&self, points: &[(f32, f32)], color: Color, width: f32) {
        let (dx, dy) = (self.bounds.left as f32, self.bounds.top as f32);
        let abs: Vec<(f32, f32)> = points.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
        self.surface.borrow_mut().stroke_path(&abs, color, width);
    }

    /// Text with its top-left corner at local `(x, y)`.
    pub fn text(&self, text: &str, x: i32, y: i32, font: &FontStyle, rotation: f32) {
        let (ax, ay) = ((x + self.bounds.left) as f32, (y + self.bounds.top) as f32);
        self.surface.borrow_mut().draw_text(text, ax, ay, font, rotation);
    }
}

/// Default label formatter: integers without decimals, otherwise up to two decimals.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let v = value as i64;
        return v.to_string();
    }
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
