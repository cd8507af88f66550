// File: crates/chart-core/src/series.rs
// Summary: Series model (named value lists bound to a y-axis) and extent scanning.

use serde::{Deserialize, Serialize};

/// Annotated callout drawn next to a series point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkPoint {
    Max,
    Min,
    Average,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    /// Empty means unset; the legend may assign one.
    pub name: String,
    pub values: Vec<f64>,
    /// Which y-axis (0 or 1) the series is measured against.
    pub y_axis_index: usize,
    pub mark_points: Vec<MarkPoint>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, ..Self::default() }
    }

    pub fn named(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: name.into(), values, ..Self::default() }
    }

    pub fn with_y_axis(mut self, index: usize) -> Self {
        self.y_axis_index = index;
        self
    }

    pub fn with_mark_points(mut self, marks: Vec<MarkPoint>) -> Self {
        self.mark_points = marks;
        self
    }

    pub fn has_name(&self) -> bool { !self.name.is_empty() }
}

/// Extent of the finite values of every series bound to `axis_index`.
///
/// With `stacked`, per-index sums also count (so the max covers the stack top).
/// Returns `None` when no finite value exists.
pub fn min_max(series: &[Series], axis_index: usize, stacked: bool) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut sums: Vec<f64> = Vec::new();
    for s in series.iter().filter(|s| s.y_axis_index == axis_index) {
        for (i, &v) in s.values.iter().enumerate() {
            if !v.is_finite() {
                continue;
            }
            lo = lo.min(v);
            hi = hi.max(v);
            if stacked {
                if sums.len() <= i {
                    sums.resize(i + 1, 0.0);
                }
                sums[i] += v;
            }
        }
    }
    for &s in &sums {
        lo = lo.min(s);
        hi = hi.max(s);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

/// Longest value list; rows shorter than this are simply shorter, not errors.
pub fn max_len(series: &[Series]) -> usize {
    series.iter().map(|s| s.values.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_extent_covers_sums() {
        let series = vec![Series::new(vec![1.0, 2.0, 3.0]), Series::new(vec![4.0, 5.0])];
        assert_eq!(min_max(&series, 0, false), Some((1.0, 5.0)));
        assert_eq!(min_max(&series, 0, true), Some((1.0, 7.0)));
    }

    #[test]
    fn extent_ignores_other_axes_and_nan() {
        let series = vec![
            Series::new(vec![f64::NAN, 2.0]),
            Series::new(vec![100.0]).with_y_axis(1),
        ];
        assert_eq!(min_max(&series, 0, false), Some((2.0, 2.0)));
        assert_eq!(min_max(&series, 1, false), Some((100.0, 100.0)));
        assert_eq!(min_max(&series, 2, false), None);
    }
}
