// File: crates/chart-core/src/range.rs
// Summary: Human-friendly axis bounds (pad_range / friendly_round) and the AxisRange value->pixel map.
// Notes:
// - Padding is measured in "span increments": 1% of the raw data span.
// - Candidate order is part of the contract (0, then 1/2/5 x 10^e; larger magnitudes first
//   when rounding); changing it changes which bound is chosen for ambiguous inputs.

use crate::canvas::Canvas;
use crate::geometry::clamp;

/// Minimum padding below the data, in span increments (scaled by the min padding scale).
pub const MIN_PADDING_PERCENT_MIN: f64 = 0.0;
/// Maximum padding below the data, in span increments.
pub const MIN_PADDING_PERCENT_MAX: f64 = 20.0;
/// Minimum padding above the data; keeps the top of the plot from touching the max point.
pub const MAX_PADDING_PERCENT_MIN: f64 = 5.0;
/// Maximum padding above the data.
pub const MAX_PADDING_PERCENT_MAX: f64 = 20.0;
/// Half-width of the range produced for zero-span data.
pub const ZERO_SPAN_ADJUSTMENT: f64 = 1.0;

/// Upper bound on axis labels picked automatically.
pub const MAX_DEFAULT_LABEL_COUNT: usize = 10;

/// Pad `[min, max]` to friendly bounds for an axis showing `label_count` labels.
///
/// Returns `(min, max)` unchanged when both scales are `<= 0`. Otherwise the result never
/// shrinks the input interval.
pub fn pad_range(label_count: usize, min: f64, max: f64, min_padding_scale: f64, max_padding_scale: f64) -> (f64, f64) {
    if min_padding_scale <= 0.0 && max_padding_scale <= 0.0 {
        return (min, max);
    }
    let min_lo = MIN_PADDING_PERCENT_MIN * min_padding_scale;
    let min_hi = MIN_PADDING_PERCENT_MAX * min_padding_scale;
    let max_lo = MAX_PADDING_PERCENT_MIN * max_padding_scale;
    let max_hi = MAX_PADDING_PERCENT_MAX * max_padding_scale;

    let span = max - min;
    let span_increment = span * 0.01;

    let mut min_result = min;
    let mut min_multiplier = 0.0;
    if min_padding_scale > 0.0 && span_increment > 0.0 {
        let (found, multiplier) = friendly_min(min, span_increment, min_lo, min_hi)
            .unwrap_or_else(|| friendly_round(min, span_increment, min_lo, min_lo, min_hi, false));
        min_result = clamp(snap(found), min - span_increment * min_hi, min);
        min_multiplier = multiplier;
    }

    if min_result == max {
        return if min_result == 0.0 {
            (0.0, ZERO_SPAN_ADJUSTMENT * 2.0)
        } else {
            (min_result - ZERO_SPAN_ADJUSTMENT, min_result + ZERO_SPAN_ADJUSTMENT)
        };
    }

    if max_padding_scale <= 0.0 {
        return (min_result, max);
    }
    if (-10.0..10.0).contains(&max) {
        return (min_result, max.ceil() + 1.0);
    }

    // Align the max to a friendly label interval; padding above mirrors the padding below
    // when that is larger than the configured minimum.
    let intervals = (label_count.max(2) - 1) as f64;
    let interval = (max - min_result) / intervals;
    let interval_increment = span_increment / intervals;
    let default_multiplier = min_multiplier.max(max_lo);
    let (rounded, _) = friendly_round(interval, interval_increment, default_multiplier, max_lo, max_hi, true);
    let max_result = clamp(snap(min_result + rounded * intervals), max, max + span_increment * max_hi);
    (min_result, max_result)
}

/// Search `0, 1, 10, ..., 2, 20, ..., 5, 50, ...` (negated for negative data) for a bound
/// below `min` whose padding lies within `[lo, hi]` span increments.
fn friendly_min(min: f64, span_increment: f64, lo: f64, hi: f64) -> Option<(f64, f64)> {
    for multiple in [1.0, 2.0, 5.0] {
        let multiple = if min < 0.0 { -multiple } else { multiple };
        // exponent -1 stands for the candidate zero
        for exponent in -1..=5 {
            let candidate = if exponent < 0 { 0.0 } else { multiple * 10f64.powi(exponent) };
            if candidate > min {
                continue;
            }
            let padding = (min - candidate) / span_increment;
            if padding >= lo && padding <= hi {
                return Some((candidate, padding));
            }
        }
    }
    None
}

/// Round `value` away from the data (up when `round_up`) to a friendly number.
///
/// Returns the rounded value and the multiple of `increment` it moved by. Candidates are
/// tried from the largest order of magnitude of `value` down to tens, nine adjustments
/// each; the first whose multiplier lies strictly inside `(min_multiplier, max_multiplier)`
/// wins. When none fits and a whole unit fits inside the padding budget, the nearest whole
/// number beyond the default padding is used; otherwise `value` moves by exactly
/// `default_multiplier` increments.
pub fn friendly_round(
    value: f64,
    increment: f64,
    default_multiplier: f64,
    min_multiplier: f64,
    max_multiplier: f64,
    round_up: bool,
) -> (f64, f64) {
    let abs = value.abs();
    let offset = increment * default_multiplier;
    if increment > 0.0 && abs > 0.0 && abs.is_finite() {
        // Moving up from a negative value shrinks its magnitude.
        let away_from_zero = round_up == (value >= 0.0);
        let top = abs.log10().floor() as i32;
        for exponent in (1..=top).rev() {
            let magnitude = 10f64.powi(exponent);
            for adjustment in 0..9 {
                let steps = if away_from_zero {
                    (abs / magnitude).ceil() + adjustment as f64
                } else {
                    (abs / magnitude).floor() - adjustment as f64
                };
                let candidate = if value < 0.0 { -steps * magnitude } else { steps * magnitude };
                let multiplier = (candidate - value).abs() / increment;
                if multiplier >= max_multiplier {
                    break;
                }
                if multiplier > min_multiplier {
                    return (candidate, multiplier);
                }
            }
        }

        if increment * max_multiplier >= 1.0 {
            let candidate = if round_up { (value + offset).ceil() } else { (value - offset).floor() };
            let multiplier = (candidate - value).abs() / increment;
            if multiplier < max_multiplier {
                return (candidate, multiplier);
            }
        }
    }
    let fallback = if round_up { value + offset } else { value - offset };
    (fallback, default_multiplier)
}

// Drop accumulated float error (0.1 * 3 and friends) so bounds land on the intended value.
fn snap(v: f64) -> f64 {
    let s = (v * 1e9).round() / 1e9;
    if s.is_finite() { s } else { v }
}

/// Label count for an axis spanning `pixel_size` when labels want `spacing` pixels each.
pub fn default_label_count(pixel_size: i32, spacing: i32) -> usize {
    let per = (pixel_size.max(0) / spacing.max(1)) as usize + 1;
    per.clamp(2, MAX_DEFAULT_LABEL_COUNT)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeKind {
    Value,
    Category,
}

/// Immutable mapping between a data interval and a pixel span.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisRange {
    kind: RangeKind,
    min: f64,
    max: f64,
    divide_count: usize,
    size: i32,
    labels: Vec<String>,
}

impl AxisRange {
    /// Value axis over `[min, max]` split into `divide_count` intervals.
    /// Tick labels are produced once with `formatter`.
    pub fn value(min: f64, max: f64, divide_count: usize, size: i32, formatter: &dyn Fn(f64) -> String) -> Self {
        let divide_count = divide_count.max(1);
        let mut range = Self { kind: RangeKind::Value, min, max, divide_count, size, labels: Vec::new() };
        range.labels = range.values().into_iter().map(formatter).collect();
        range
    }

    /// Category axis. With `boundary_gap` every label owns a slot; without it labels sit on
    /// the slot boundaries. An empty label list still yields one division.
    pub fn category(labels: Vec<String>, size: i32, boundary_gap: bool) -> Self {
        let n = labels.len();
        let divide_count = if boundary_gap { n } else { n.saturating_sub(1) }.max(1);
        Self { kind: RangeKind::Category, min: 0.0, max: divide_count as f64, divide_count, size, labels }
    }

    pub fn kind(&self) -> RangeKind { self.kind }
    pub fn is_category(&self) -> bool { self.kind == RangeKind::Category }
    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
    pub fn divide_count(&self) -> usize { self.divide_count }
    pub fn size(&self) -> i32 { self.size }
    pub fn labels(&self) -> &[String] { &self.labels }

    /// Pixel offset of `value` from the range's min end.
    pub fn height_of(&self, value: f64) -> i32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0;
        }
        ((value - self.min) / span * self.size as f64) as i32
    }

    /// Complement of `height_of`: offset from the max end (screen y for vertical axes).
    pub fn rest_height_of(&self, value: f64) -> i32 {
        self.size - self.height_of(value)
    }

    /// `divide_count + 1` evenly spaced pixel boundaries; the last one is exactly `size`.
    pub fn auto_divide(&self) -> Vec<i32> {
        let unit = self.size as f64 / self.divide_count as f64;
        (0..=self.divide_count)
            .map(|i| if i == self.divide_count { self.size } else { (i as f64 * unit) as i32 })
            .collect()
    }

    /// Tick values of a value axis, min to max. Category axes return slot indices.
    pub fn values(&self) -> Vec<f64> {
        let step = (self.max - self.min) / self.divide_count as f64;
        (0..=self.divide_count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Padded value range for an axis of `pixel_size` pixels showing `divide_count` labels.
///
/// Label text comes from the canvas's value formatter. The result always has `max > min`.
pub fn compute_axis_range(
    canvas: &Canvas,
    pixel_size: i32,
    divide_count: usize,
    min: f64,
    max: f64,
    min_padding_scale: f64,
    max_padding_scale: f64,
) -> AxisRange {
    let label_count = divide_count.max(2);
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let (lo, hi) = pad_range(label_count, min, max, min_padding_scale, max_padding_scale);
    let hi = if hi > lo { hi } else { lo + ZERO_SPAN_ADJUSTMENT };
    let formatter = canvas.value_formatter();
    AxisRange::value(lo, hi, label_count - 1, pixel_size, &*formatter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friendly_min_prefers_zero_then_ones() {
        // zero is 5.26 increments below 1.0 on a span of 19
        assert_eq!(friendly_min(1.0, 0.19, 0.0, 20.0), Some((0.0, 1.0 / 0.19)));
        // 1000 beats 2000/5000 because multiples of 1 are tried first
        assert_eq!(friendly_min(1003.0, 1.0, 0.0, 20.0).map(|r| r.0), Some(1000.0));
        // negative data walks the negated candidates: -1, -10, -100, then -2, -20
        assert_eq!(friendly_min(-20.0, 0.1, 0.0, 20.0).map(|r| r.0), Some(-20.0));
    }

    #[test]
    fn friendly_min_gives_up_outside_band() {
        assert_eq!(friendly_min(1050.0, 0.5, 0.0, 20.0), None);
    }

    #[test]
    fn snap_removes_float_noise() {
        assert_eq!(snap(0.1 * 3.0), 0.3);
        assert_eq!(snap(2.3333333333333335 * 9.0), 21.0);
    }
}
