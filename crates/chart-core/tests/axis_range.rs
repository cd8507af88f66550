// File: crates/chart-core/tests/axis_range.rs
// Purpose: AxisRange pixel mapping, division, labels, and compute_axis_range wiring.

use std::rc::Rc;

use chart_core::canvas::format_value;
use chart_core::{compute_axis_range, ApproxTextMeasurer, AxisRange, Canvas, OutputFormat, RangeKind, Theme};

fn canvas() -> Canvas {
    Canvas::recording(400, 300, Theme::light(), OutputFormat::Png, Rc::new(ApproxTextMeasurer)).0
}

#[test]
fn value_range_maps_values_to_pixels() {
    let r = AxisRange::value(0.0, 100.0, 4, 400, &format_value);
    assert_eq!(r.kind(), RangeKind::Value);
    assert_eq!(r.values(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(r.labels(), ["0", "25", "50", "75", "100"]);
    assert_eq!(r.height_of(50.0), 200);
    assert_eq!(r.rest_height_of(25.0), 300);
    assert_eq!(r.auto_divide(), vec![0, 100, 200, 300, 400]);
}

#[test]
fn last_boundary_is_exact_size() {
    let r = AxisRange::value(0.0, 1.0, 3, 100, &format_value);
    let b = r.auto_divide();
    assert_eq!(b.len(), 4);
    assert_eq!(b, vec![0, 33, 66, 100]);
}

#[test]
fn category_divisions_follow_boundary_gap() {
    let labels: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(AxisRange::category(labels.clone(), 300, true).divide_count(), 3);
    assert_eq!(AxisRange::category(labels.clone(), 300, false).divide_count(), 2);
    let empty = AxisRange::category(Vec::new(), 300, true);
    assert_eq!(empty.divide_count(), 1);
    assert!(empty.max() > empty.min());
    assert!(AxisRange::category(labels, 300, true).is_category());
}

#[test]
fn compute_axis_range_pads_and_uses_canvas_formatter() {
    let c = canvas().with_value_formatter(|v| format!("{v:.1}"));
    let r = compute_axis_range(&c, 400, 5, 0.0, 10.0, 1.0, 1.0);
    assert_eq!((r.min(), r.max()), (0.0, 10.5));
    assert_eq!(r.divide_count(), 4);
    assert_eq!(r.size(), 400);
    assert_eq!(r.labels().first().map(String::as_str), Some("0.0"));
    assert_eq!(r.labels().last().map(String::as_str), Some("10.5"));
}

#[test]
fn compute_axis_range_accepts_swapped_bounds() {
    let c = canvas();
    let a = compute_axis_range(&c, 400, 5, 0.0, 10.0, 1.0, 1.0);
    let b = compute_axis_range(&c, 400, 5, 10.0, 0.0, 1.0, 1.0);
    assert_eq!(a, b);
}

#[test]
fn compute_axis_range_keeps_max_above_min() {
    let r = compute_axis_range(&canvas(), 100, 2, 3.0, 3.0, 0.0, 0.0);
    assert_eq!((r.min(), r.max()), (3.0, 4.0));
    // label counts below two are raised to two
    let r = compute_axis_range(&canvas(), 100, 0, 0.0, 50.0, 1.0, 1.0);
    assert_eq!(r.divide_count(), 1);
}
