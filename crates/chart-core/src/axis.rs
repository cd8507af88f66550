// File: crates/chart-core/src/axis.rs
// Summary: Axis options and painters. Painters draw on the strip they are given and
//          report how much room they used (y: width, x: height).

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::range::AxisRange;
use crate::text::FontStyle;

pub const TICK_LENGTH: i32 = 5;
/// Space between tick end and label.
pub const LABEL_GAP: i32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XAxisOption {
    pub show: Option<bool>,
    /// Category labels; empty generates `1..=n` from the longest series.
    pub labels: Vec<String>,
    pub font: Option<FontStyle>,
    /// Label rotation in degrees.
    pub label_rotation: f32,
    /// Labels sit between ticks (true) or on them (false).
    pub boundary_gap: Option<bool>,
    pub min_height: Option<i32>,
    /// Label count when the x axis carries values (reversed charts).
    pub label_count: Option<usize>,
}

impl XAxisOption {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, ..Self::default() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YAxisOption {
    pub show: Option<bool>,
    /// Defaults to left for the first axis, right for the second.
    pub position: Option<AxisPosition>,
    /// Category labels, used when the chart is reversed.
    pub labels: Vec<String>,
    /// Explicit lower bound; widens the data extent and disables padding below.
    pub min: Option<f64>,
    /// Explicit upper bound; widens the data extent and disables padding above.
    pub max: Option<f64>,
    pub label_count: Option<usize>,
    /// Scales the friendly-range padding bands; 0 disables padding.
    pub padding_scale: Option<f64>,
    pub font: Option<FontStyle>,
    /// Horizontal guide lines across the plot at each tick.
    pub split_line: Option<bool>,
}

impl YAxisOption {
    pub fn position_or(&self, index: usize) -> AxisPosition {
        self.position.unwrap_or(if index == 0 { AxisPosition::Left } else { AxisPosition::Right })
    }
}

// Pixel position of every label along the axis. Category labels with a boundary gap sit
// in the middle of their slot; everything else sits on a boundary.
fn label_anchors(range: &AxisRange) -> Vec<(&str, i32)> {
    let bounds = range.auto_divide();
    let centered = range.is_category() && range.labels().len() == range.divide_count();
    range
        .labels()
        .iter()
        .enumerate()
        .filter_map(|(i, label)| {
            let at = if centered {
                (*bounds.get(i)? + *bounds.get(i + 1)?) / 2
            } else {
                *bounds.get(i)?
            };
            Some((label.as_str(), at))
        })
        .collect()
}

/// Draw a vertical axis against the left or right edge of `canvas` (sized to the plot
/// height) and return its width. `index` picks the default side.
pub fn render_y_axis(canvas: &Canvas, range: &AxisRange, opt: &YAxisOption, index: usize) -> i32 {
    if opt.show == Some(false) {
        return 0;
    }
    let theme = canvas.theme();
    let font = opt.font.clone().unwrap_or_else(|| theme.axis_font());
    let anchors = label_anchors(range);
    let sizes: Vec<_> = anchors.iter().map(|(l, _)| canvas.measure_text(l, 0.0, &font)).collect();
    let label_w = sizes.iter().map(|r| r.width()).max().unwrap_or(0);
    let width = label_w + LABEL_GAP + TICK_LENGTH;

    let (w, h) = (canvas.width(), canvas.height());
    let left_side = opt.position_or(index) == AxisPosition::Left;
    let axis_x = if left_side { width } else { w - width };
    let tick_dir = if left_side { -TICK_LENGTH } else { TICK_LENGTH };

    if opt.split_line.unwrap_or(index == 0) {
        let (from, to) = if left_side { (axis_x, w) } else { (0, axis_x) };
        for b in range.auto_divide().into_iter().skip(1) {
            canvas.line(from, h - b, to, h - b, theme.split_line, 1.0);
        }
    }
    canvas.line(axis_x, 0, axis_x, h, theme.axis_line, 1.0);

    for ((label, at), size) in anchors.iter().zip(&sizes) {
        let y = h - at;
        canvas.line(axis_x, y, axis_x + tick_dir, y, theme.axis_line, 1.0);
        let x = if left_side {
            axis_x - TICK_LENGTH - LABEL_GAP - size.width()
        } else {
            axis_x + TICK_LENGTH + LABEL_GAP
        };
        canvas.text(label, x, y - size.height() / 2, &font, 0.0);
    }
    width
}

/// Draw the horizontal axis along the top of `canvas` (the strip below the plot) and
/// return the strip height it needs.
pub fn render_x_axis(canvas: &Canvas, range: &AxisRange, opt: &XAxisOption) -> i32 {
    if opt.show == Some(false) {
        return 0;
    }
    let theme = canvas.theme();
    let font = opt.font.clone().unwrap_or_else(|| theme.axis_font());
    let rotation = opt.label_rotation.to_radians();
    let anchors = label_anchors(range);
    let sizes: Vec<_> = anchors.iter().map(|(l, _)| canvas.measure_text(l, rotation, &font)).collect();
    let label_h = sizes.iter().map(|r| r.height()).max().unwrap_or(0);
    let height = (label_h + TICK_LENGTH + LABEL_GAP).max(opt.min_height.unwrap_or(0));

    canvas.line(0, 0, canvas.width(), 0, theme.axis_line, 1.0);
    for b in range.auto_divide() {
        canvas.line(b, 0, b, TICK_LENGTH, theme.axis_line, 1.0);
    }
    for ((label, at), size) in anchors.iter().zip(&sizes) {
        canvas.text(label, at - size.width() / 2, TICK_LENGTH + LABEL_GAP, &font, rotation);
    }
    height
}
