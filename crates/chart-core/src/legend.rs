// File: crates/chart-core/src/legend.rs
// Summary: Legend options, series-name reconciliation, and the legend painter (measure + render).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::canvas::Canvas;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::RectI32;
use crate::offset::{OffsetOption, Position};
use crate::series::Series;
use crate::text::FontStyle;
use crate::types::Insets;

/// Gap between a swatch and its label.
const SWATCH_GAP: i32 = 4;
/// Gap between neighbouring legend items.
const ITEM_GAP: i32 = 10;
/// Gap between wrapped rows.
const ROW_GAP: i32 = 5;

pub const DEFAULT_LEGEND_PADDING: Insets = Insets::uniform(5);
pub const DEFAULT_SYMBOL_SIZE: i32 = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOption {
    pub show: Option<bool>,
    /// Legend entries, in display order. Empty adopts the series names.
    pub names: Vec<String>,
    /// Defaults to `center` / `top`.
    pub offset: OffsetOption,
    pub orientation: Orientation,
    /// Draw over the plot instead of reserving space for it.
    pub overlay_chart: Option<bool>,
    pub font: Option<FontStyle>,
    pub padding: Option<Insets>,
    pub symbol_size: Option<i32>,
}

impl LegendOption {
    pub fn new(names: Vec<String>) -> Self {
        Self { names, ..Self::default() }
    }

    pub fn with_offset(mut self, left: impl Into<String>, top: impl Into<String>) -> Self {
        self.offset = OffsetOption::new(left, top);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.show != Some(false) && !self.names.is_empty()
    }

    pub fn is_overlay(&self) -> bool {
        self.overlay_chart.unwrap_or(false)
    }
}

/// Make legend entries and series correspond positionally.
///
/// - No legend names: the legend adopts the (non-empty) series names.
/// - Legend names covering every series and no series named yet: series take the names.
/// - Otherwise, when names disagree: series are stably reordered to legend order; series
///   whose name the legend does not list go last.
pub fn reconcile_series_names(series: &mut [Series], names: &mut Vec<String>) {
    if names.is_empty() {
        *names = series.iter().filter(|s| s.has_name()).map(|s| s.name.clone()).collect();
        return;
    }
    if names.len() < series.len() {
        return;
    }
    if series.iter().all(|s| !s.has_name()) {
        for (s, name) in series.iter_mut().zip(names.iter()) {
            s.name = name.clone();
        }
        return;
    }
    let consistent = series.iter().zip(names.iter()).all(|(s, n)| &s.name == n);
    if !consistent {
        let order: HashMap<&str, usize> = names.iter().enumerate().map(|(i, n)| (n.as_str(), i)).collect();
        series.sort_by_key(|s| order.get(s.name.as_str()).copied().unwrap_or(usize::MAX));
    }
}

/// Legend box on `canvas` without drawing anything. `None` when the legend is hidden.
pub fn measure_legend(canvas: &Canvas, opt: &LegendOption) -> LayoutResult<Option<RectI32>> {
    paint_legend(&canvas.dry_run(), opt)
}

/// Draw the legend and return its box (canvas-local).
pub fn render_legend(canvas: &Canvas, opt: &LegendOption) -> LayoutResult<Option<RectI32>> {
    let rect = paint_legend(canvas, opt)?;
    trace!(?rect, "legend rendered");
    Ok(rect)
}

struct Item {
    x: i32,
    y: i32,
    text_h: i32,
    height: i32,
}

fn paint_legend(canvas: &Canvas, opt: &LegendOption) -> LayoutResult<Option<RectI32>> {
    if !opt.is_visible() {
        return Ok(None);
    }
    let theme = canvas.theme();
    let font = opt.font.clone().unwrap_or_else(|| theme.legend_font());
    let padding = opt.padding.unwrap_or(DEFAULT_LEGEND_PADDING);
    let symbol = opt.symbol_size.unwrap_or(DEFAULT_SYMBOL_SIZE).max(1);
    let available = (canvas.width() - padding.hsum()).max(0);

    // Lay items out relative to the content origin.
    let mut items = Vec::with_capacity(opt.names.len());
    let (mut x, mut y, mut row_h, mut content_w) = (0, 0, 0, 0);
    for name in &opt.names {
        let text = canvas.measure_text(name, 0.0, &font);
        let item_w = symbol + SWATCH_GAP + text.width();
        let item_h = text.height().max(symbol);
        let wrap = match opt.orientation {
            Orientation::Vertical => !items.is_empty(),
            Orientation::Horizontal => x > 0 && x + item_w > available,
        };
        if wrap {
            y += row_h + ROW_GAP;
            x = 0;
            row_h = 0;
        }
        items.push(Item { x, y, text_h: text.height(), height: item_h });
        content_w = content_w.max(x + item_w);
        row_h = row_h.max(item_h);
        x += item_w + ITEM_GAP;
    }
    let content_h = y + row_h;
    let box_w = content_w + padding.hsum();
    let box_h = content_h + padding.vsum();

    let left = opt
        .offset
        .horizontal(Position::Center)
        .map_err(LayoutError::LegendPosition)?
        .resolve(canvas.width(), box_w);
    let top = opt
        .offset
        .vertical(Position::Start)
        .map_err(LayoutError::LegendPosition)?
        .resolve(canvas.height(), box_h);

    let origin_x = left + padding.left;
    let origin_y = top + padding.top;
    for (i, (name, item)) in opt.names.iter().zip(&items).enumerate() {
        let swatch_h = (symbol / 2).max(2);
        let swatch_y = origin_y + item.y + (item.height - swatch_h) / 2;
        canvas.fill_rect(
            RectI32::from_ltwh(origin_x + item.x, swatch_y, symbol, swatch_h),
            theme.series_color(i),
        );
        let text_x = origin_x + item.x + symbol + SWATCH_GAP;
        let text_y = origin_y + item.y + (item.height - item.text_h) / 2;
        canvas.text(name, text_x, text_y, &font, 0.0);
    }

    Ok(Some(RectI32::from_ltwh(left, top, box_w, box_h)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_adopts_series_names() {
        let mut series = vec![Series::named("a", vec![]), Series::new(vec![]), Series::named("c", vec![])];
        let mut names = Vec::new();
        reconcile_series_names(&mut series, &mut names);
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn short_legend_leaves_series_alone() {
        let mut series = vec![Series::named("x", vec![]), Series::named("y", vec![])];
        let mut names = vec!["y".to_string()];
        reconcile_series_names(&mut series, &mut names);
        assert_eq!(series[0].name, "x");
    }
}
