// File: crates/chart-core/src/chart.rs
// Summary: Caller-facing render options and their resolution into a fully-populated copy.
// Notes:
// - Resolution never mutates the caller's options; layout works on the resolved copy.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::axis::{XAxisOption, YAxisOption};
use crate::canvas::Canvas;
use crate::error::{LayoutError, LayoutResult};
use crate::legend::{LegendOption, DEFAULT_LEGEND_PADDING, DEFAULT_SYMBOL_SIZE};
use crate::series::Series;
use crate::surface::Recorder;
use crate::text::TextMeasurer;
use crate::theme::Theme;
use crate::title::TitleOption;
use crate::types::{Insets, OutputFormat, DEFAULT_PADDING, HEIGHT, WIDTH};

/// Most y axes a chart may carry.
pub const MAX_Y_AXES: usize = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Overrides the canvas theme when set.
    pub theme: Option<Theme>,
    pub padding: Option<Insets>,
    pub series: Vec<Series>,
    pub x_axis: XAxisOption,
    pub y_axes: Vec<YAxisOption>,
    pub title: TitleOption,
    pub legend: LegendOption,
    /// Series values stack; axis extents cover per-index sums.
    pub stack_series: bool,
    /// Horizontal-bar layout: x carries values, y carries categories.
    pub axis_reversed: bool,
    /// The caller already painted the background.
    pub background_filled: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: None,
            padding: None,
            series: Vec::new(),
            x_axis: XAxisOption::default(),
            y_axes: Vec::new(),
            title: TitleOption::default(),
            legend: LegendOption::default(),
            stack_series: false,
            axis_reversed: false,
            background_filled: false,
        }
    }
}

impl RenderOptions {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series, ..Self::default() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Root canvas of `width` x `height` drawing into a fresh recorder.
    pub fn recording_canvas(
        &self,
        measurer: Rc<dyn TextMeasurer>,
        format: OutputFormat,
    ) -> (Canvas, Rc<RefCell<Recorder>>) {
        let theme = self.theme.clone().unwrap_or_default();
        Canvas::recording(self.width, self.height, theme, format, measurer)
    }
}

/// Options with every default applied. Only layout sees this.
#[derive(Clone, Debug, Default)]
pub(crate) struct ResolvedOptions {
    pub theme: Rc<Theme>,
    pub padding: Insets,
    pub series: Vec<Series>,
    pub x_axis: XAxisOption,
    /// One or two axes, indexed like `Series::y_axis_index`.
    pub y_axes: Vec<YAxisOption>,
    pub title: TitleOption,
    pub legend: LegendOption,
    pub stack_series: bool,
    pub axis_reversed: bool,
    pub background_filled: bool,
}

/// Reject axis configurations layout cannot honour.
pub(crate) fn validate_axes(opts: &RenderOptions) -> LayoutResult<usize> {
    let referenced = opts.series.iter().map(|s| s.y_axis_index + 1).max().unwrap_or(0);
    let count = opts.y_axes.len().max(referenced).max(1);
    if count > MAX_Y_AXES {
        return Err(LayoutError::InvalidAxis(format!(
            "{count} y axes requested, at most {MAX_Y_AXES} are supported"
        )));
    }
    if opts.axis_reversed && count > 1 {
        return Err(LayoutError::InvalidAxis(
            "reversed charts support a single y axis".to_string(),
        ));
    }
    Ok(count)
}

/// Fill every unset option from the theme (caller's theme first, then the canvas's).
/// `axis_count` comes from `validate_axes`.
pub(crate) fn resolve(canvas: &Canvas, opts: &RenderOptions, axis_count: usize) -> ResolvedOptions {
    let theme = match &opts.theme {
        Some(t) => Rc::new(t.clone()),
        None => canvas.theme().clone(),
    };

    let mut title = opts.title.clone();
    title.show.get_or_insert(true);
    title.font.get_or_insert_with(|| theme.title_font());
    title.subtext_font.get_or_insert_with(|| theme.subtitle_font());

    let mut legend = opts.legend.clone();
    legend.show.get_or_insert(true);
    legend.overlay_chart.get_or_insert(false);
    legend.font.get_or_insert_with(|| theme.legend_font());
    legend.padding.get_or_insert(DEFAULT_LEGEND_PADDING);
    legend.symbol_size.get_or_insert(DEFAULT_SYMBOL_SIZE);

    let mut x_axis = opts.x_axis.clone();
    x_axis.show.get_or_insert(true);
    x_axis.font.get_or_insert_with(|| theme.axis_font());
    x_axis.boundary_gap.get_or_insert(true);
    x_axis.min_height.get_or_insert(theme.x_axis_min_height);

    let mut y_axes = opts.y_axes.clone();
    y_axes.resize_with(axis_count, YAxisOption::default);
    for (i, axis) in y_axes.iter_mut().enumerate() {
        axis.show.get_or_insert(true);
        axis.position = Some(axis.position_or(i));
        axis.font.get_or_insert_with(|| theme.axis_font());
        axis.split_line.get_or_insert(i == 0);
    }

    ResolvedOptions {
        theme,
        padding: opts.padding.unwrap_or(DEFAULT_PADDING),
        series: opts.series.clone(),
        x_axis,
        y_axes,
        title,
        legend,
        stack_series: opts.stack_series,
        axis_reversed: opts.axis_reversed,
        background_filled: opts.background_filled,
    }
}
