// File: crates/chart-core/src/layout.rs
// Summary: Layout orchestrator. Runs an ordered table of stages that reserve title, legend,
//          and axis space on a canvas and hand back the plot area plus axis ranges.
// Notes:
// - Every stage lists the state it reads and writes; `run_layout` checks in debug builds
//   that each read was written by an earlier stage.
// - Boxes in the result are relative to the padded working canvas.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::axis::{render_x_axis, render_y_axis, AxisPosition};
use crate::canvas::{Canvas, ChildBox};
use crate::chart::{resolve, validate_axes, RenderOptions, ResolvedOptions};
use crate::error::LayoutResult;
use crate::geometry::RectI32;
use crate::legend::{measure_legend, reconcile_series_names, render_legend, Orientation};
use crate::range::{compute_axis_range, default_label_count, AxisRange};
use crate::series::{max_len, min_max, Series};
use crate::title::render_title;
use crate::types::Insets;

/// Vertical gap between a bottom legend and a title stacked above it.
pub const LEGEND_TITLE_GAP: i32 = 10;
/// Padding scale applied to y axes of series carrying mark points.
pub const MARK_POINT_PADDING_SCALE: f64 = 2.5;
/// Below this width or height the x-axis minimum height is ignored.
pub const SMALL_CANVAS: i32 = 100;
/// Pixels per label when a y axis picks its own label count.
pub const Y_LABEL_SPACING: i32 = 50;
/// Pixels per label when a value x axis picks its own label count.
pub const X_LABEL_SPACING: i32 = 80;

/// Output of a layout pass.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Area left for the series renderers.
    pub plot: Canvas,
    /// Ranges keyed by y-axis index.
    pub y_axis_ranges: BTreeMap<usize, AxisRange>,
    pub x_axis_range: AxisRange,
    /// Series after legend reconciliation, in render order.
    pub series: Vec<Series>,
    pub title_box: Option<RectI32>,
    pub legend_box: Option<RectI32>,
}

/// Pieces of `LayoutState` a stage may depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    AxisCount,
    Options,
    Working,
    LegendBox,
    TitleBox,
    Stacked,
    Reserved,
    Content,
    XAxisHeight,
    YRanges,
    AxisWidths,
    XRange,
    Plot,
}

pub struct Stage {
    pub name: &'static str,
    pub reads: &'static [Field],
    pub writes: &'static [Field],
    run: fn(&mut LayoutState<'_>) -> LayoutResult<()>,
}

use Field::*;

const STAGES: &[Stage] = &[
    Stage { name: "validate_axes", reads: &[], writes: &[AxisCount], run: validate_stage },
    Stage { name: "resolve_options", reads: &[AxisCount], writes: &[Options], run: resolve_stage },
    Stage { name: "mark_point_padding", reads: &[Options], writes: &[Options], run: mark_point_stage },
    Stage { name: "background", reads: &[Options], writes: &[Working], run: background_stage },
    Stage { name: "reconcile_legend", reads: &[Options], writes: &[Options], run: reconcile_stage },
    Stage { name: "measure_legend", reads: &[Options, Working], writes: &[LegendBox], run: measure_legend_stage },
    Stage {
        name: "render_title",
        reads: &[Options, Working, LegendBox],
        writes: &[TitleBox, Stacked],
        run: title_stage,
    },
    Stage {
        name: "render_legend",
        reads: &[Options, Working, TitleBox, Stacked],
        writes: &[LegendBox],
        run: legend_stage,
    },
    Stage {
        name: "reserve_legend",
        reads: &[Options, Working, LegendBox, Stacked],
        writes: &[Reserved],
        run: reserve_legend_stage,
    },
    Stage {
        name: "reserve_title",
        reads: &[Working, TitleBox, Reserved],
        writes: &[Reserved, Content],
        run: reserve_title_stage,
    },
    Stage { name: "measure_x_axis", reads: &[Options, Working, Content], writes: &[XAxisHeight], run: measure_x_stage },
    Stage {
        name: "y_axis_ranges",
        reads: &[Options, Content, XAxisHeight],
        writes: &[YRanges],
        run: y_ranges_stage,
    },
    Stage {
        name: "render_y_axes",
        reads: &[Options, Content, XAxisHeight, YRanges],
        writes: &[AxisWidths],
        run: y_axes_stage,
    },
    Stage {
        name: "render_x_axis",
        reads: &[Options, Content, XAxisHeight, AxisWidths],
        writes: &[XRange],
        run: x_axis_stage,
    },
    Stage { name: "plot_area", reads: &[Content, XAxisHeight, AxisWidths], writes: &[Plot], run: plot_stage },
];

/// The stage table, in execution order.
pub fn stages() -> &'static [Stage] {
    STAGES
}

pub struct LayoutState<'a> {
    root: &'a Canvas,
    input: &'a RenderOptions,
    axis_count: usize,
    opts: ResolvedOptions,
    working: Canvas,
    legend_box: Option<RectI32>,
    title_box: Option<RectI32>,
    stacked: bool,
    reserved_top: i32,
    reserved_bottom: i32,
    content: Canvas,
    x_axis_height: i32,
    y_ranges: BTreeMap<usize, AxisRange>,
    left_width: i32,
    right_width: i32,
    x_range: AxisRange,
    plot: Canvas,
}

impl<'a> LayoutState<'a> {
    fn new(root: &'a Canvas, input: &'a RenderOptions) -> Self {
        Self {
            root,
            input,
            axis_count: 1,
            opts: ResolvedOptions::default(),
            working: root.clone(),
            legend_box: None,
            title_box: None,
            stacked: false,
            reserved_top: 0,
            reserved_bottom: 0,
            content: root.clone(),
            x_axis_height: 0,
            y_ranges: BTreeMap::new(),
            left_width: 0,
            right_width: 0,
            x_range: AxisRange::category(Vec::new(), 0, true),
            plot: root.clone(),
        }
    }
}

/// Lay out title, legend, and axes on `canvas` and return the plot area.
///
/// Draws onto `canvas`'s surface as it goes. The first error aborts the pass; `options`
/// is never modified.
pub fn run_layout(canvas: &Canvas, options: &RenderOptions) -> LayoutResult<RenderResult> {
    let mut state = LayoutState::new(canvas, options);
    let mut written: Vec<Field> = Vec::new();
    for stage in STAGES {
        debug_assert!(
            stage.reads.iter().all(|f| written.contains(f)),
            "stage {} reads state no earlier stage wrote",
            stage.name
        );
        debug!(stage = stage.name, "layout stage");
        (stage.run)(&mut state)?;
        written.extend_from_slice(stage.writes);
    }
    Ok(RenderResult {
        plot: state.plot,
        y_axis_ranges: state.y_ranges,
        x_axis_range: state.x_range,
        series: state.opts.series,
        title_box: state.title_box,
        legend_box: state.legend_box,
    })
}

fn validate_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    s.axis_count = validate_axes(s.input)?;
    Ok(())
}

fn resolve_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    s.opts = resolve(s.root, s.input, s.axis_count);
    Ok(())
}

fn mark_point_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let opts = &mut s.opts;
    for (i, axis) in opts.y_axes.iter_mut().enumerate() {
        let marked = opts.series.iter().any(|se| se.y_axis_index == i && !se.mark_points.is_empty());
        if marked && axis.padding_scale.is_none() {
            axis.padding_scale = Some(MARK_POINT_PADDING_SCALE);
        }
    }
    Ok(())
}

fn background_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let theme = s.opts.theme.clone();
    if !s.opts.background_filled {
        s.root.fill_background(theme.background);
    }
    s.working = s.root.child(ChildBox::Padding(s.opts.padding)).with_theme(theme);
    Ok(())
}

fn reconcile_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let opts = &mut s.opts;
    reconcile_series_names(&mut opts.series, &mut opts.legend.names);
    Ok(())
}

fn measure_legend_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    s.legend_box = measure_legend(&s.working, &s.opts.legend)?;
    trace!(legend = ?s.legend_box, "legend measured");
    Ok(())
}

fn title_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let legend = &s.opts.legend;
    let title = &s.opts.title;
    let stack_height = match s.legend_box {
        Some(b) if legend.offset.is_bottom() && title.offset.is_bottom() && !legend.is_overlay() => Some(b.height()),
        _ => None,
    };
    s.stacked = stack_height.is_some() && title.is_visible();
    // The shrunk canvas keeps the working origin, so the box needs no translation.
    s.title_box = match stack_height {
        Some(h) if s.stacked => {
            let above = s.working.child(ChildBox::Padding(Insets::bottom(h + LEGEND_TITLE_GAP)));
            render_title(&above, title)?
        }
        _ => render_title(&s.working, title)?,
    };
    Ok(())
}

fn legend_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    if let (Some(legend), Some(title)) = (s.legend_box, s.title_box) {
        if !s.stacked && legend.overlaps(&title) && s.opts.legend.offset.top_is_symbolic() {
            trace!(from = legend.top, to = title.bottom, "legend moved below title");
            s.opts.legend.offset.top = title.bottom.to_string();
        }
    }
    s.legend_box = render_legend(&s.working, &s.opts.legend)?;
    Ok(())
}

fn in_upper_half(rect: &RectI32, height: i32) -> bool {
    rect.top + rect.height() / 2 < height / 2
}

fn reserve_legend_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let legend = &s.opts.legend;
    let height = s.working.height();
    s.reserved_top = 0;
    s.reserved_bottom = 0;
    if let Some(b) = s.legend_box {
        if legend.orientation == Orientation::Horizontal && !legend.is_overlay() {
            if in_upper_half(&b, height) {
                s.reserved_top = b.bottom;
            } else if !s.stacked {
                s.reserved_bottom = height - b.top;
            }
        }
    }
    Ok(())
}

fn reserve_title_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let height = s.working.height();
    if let Some(t) = s.title_box {
        if in_upper_half(&t, height) {
            s.reserved_top = s.reserved_top.max(t.bottom);
        } else {
            s.reserved_bottom = s.reserved_bottom.max(height - t.top);
        }
    }
    trace!(top = s.reserved_top, bottom = s.reserved_bottom, "space reserved");
    s.content = s
        .working
        .child(ChildBox::Padding(Insets::new(0, 0, s.reserved_top, s.reserved_bottom)));
    Ok(())
}

fn category_labels(explicit: &[String], series: &[Series]) -> Vec<String> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    (1..=max_len(series)).map(|i| i.to_string()).collect()
}

// Horizontal range for an x axis `width` pixels wide.
fn x_range_for(opts: &ResolvedOptions, canvas: &Canvas, width: i32) -> AxisRange {
    if opts.axis_reversed {
        let (lo, hi) = min_max(&opts.series, 0, opts.stack_series).unwrap_or((0.0, 0.0));
        let count = opts.x_axis.label_count.unwrap_or_else(|| default_label_count(width, X_LABEL_SPACING));
        compute_axis_range(canvas, width, count, lo, hi, 1.0, 1.0)
    } else {
        let labels = category_labels(&opts.x_axis.labels, &opts.series);
        AxisRange::category(labels, width, opts.x_axis.boundary_gap.unwrap_or(true))
    }
}

fn measure_x_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    if s.working.width() < SMALL_CANVAS || s.working.height() < SMALL_CANVAS {
        s.opts.x_axis.min_height = Some(0);
    }
    let probe = s.content.dry_run();
    let range = x_range_for(&s.opts, &probe, probe.width());
    s.x_axis_height = render_x_axis(&probe, &range, &s.opts.x_axis);
    trace!(height = s.x_axis_height, "x axis measured");
    Ok(())
}

fn y_ranges_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let opts = &s.opts;
    let height = (s.content.height() - s.x_axis_height).max(0);
    s.y_ranges.clear();

    if opts.axis_reversed {
        let labels = category_labels(&opts.y_axes[0].labels, &opts.series);
        s.y_ranges.insert(0, AxisRange::category(labels, height, true));
        return Ok(());
    }

    // Value axes share one tick grid.
    let counts: Vec<usize> = opts
        .y_axes
        .iter()
        .map(|a| a.label_count.unwrap_or_else(|| default_label_count(height, Y_LABEL_SPACING)))
        .collect();
    let shared = counts.iter().copied().max().unwrap_or(2);

    for (i, axis) in opts.y_axes.iter().enumerate() {
        let fallback = axis.min.or(axis.max).unwrap_or(0.0);
        let (mut lo, mut hi) = min_max(&opts.series, i, opts.stack_series).unwrap_or((fallback, fallback));
        let scale = axis.padding_scale.unwrap_or(1.0);
        let (mut min_scale, mut max_scale) = (scale, scale);
        if let Some(min) = axis.min {
            lo = lo.min(min);
            min_scale = 0.0;
        }
        if let Some(max) = axis.max {
            hi = hi.max(max);
            max_scale = 0.0;
        }
        let count = if opts.y_axes.len() > 1 { shared } else { counts[i] };
        let range = compute_axis_range(&s.content, height, count, lo, hi, min_scale, max_scale);
        trace!(axis = i, min = range.min(), max = range.max(), "y range resolved");
        s.y_ranges.insert(i, range);
    }
    Ok(())
}

fn y_axes_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    s.left_width = 0;
    s.right_width = 0;
    for (i, axis) in s.opts.y_axes.iter().enumerate().rev() {
        let Some(range) = s.y_ranges.get(&i) else { continue };
        let strip = s.content.child(ChildBox::Padding(Insets::new(
            s.left_width,
            s.right_width,
            0,
            s.x_axis_height,
        )));
        let width = render_y_axis(&strip, range, axis, i);
        match axis.position_or(i) {
            AxisPosition::Left => s.left_width += width,
            AxisPosition::Right => s.right_width += width,
        }
    }
    Ok(())
}

fn x_axis_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    let strip = s.content.child(ChildBox::Padding(Insets::new(
        s.left_width,
        s.right_width,
        s.content.height() - s.x_axis_height,
        0,
    )));
    s.x_range = x_range_for(&s.opts, &strip, strip.width());
    render_x_axis(&strip, &s.x_range, &s.opts.x_axis);
    Ok(())
}

fn plot_stage(s: &mut LayoutState<'_>) -> LayoutResult<()> {
    s.plot = s.content.child(ChildBox::Padding(Insets::new(
        s.left_width,
        s.right_width,
        0,
        s.x_axis_height,
    )));
    trace!(plot = ?s.plot.bounds(), "plot area");
    Ok(())
}
