// File: crates/chart-core/tests/range_padding.rs
// Purpose: Pin friendly range padding on known inputs, boundaries, and fallbacks.

use approx::assert_abs_diff_eq;
use chart_core::range::MAX_PADDING_PERCENT_MIN;
use chart_core::{friendly_round, pad_range};

#[test]
fn pads_zero_based_data() {
    assert_eq!(pad_range(10, 0.0, 10.0, 1.0, 1.0), (0.0, 10.5));
}

#[test]
fn min_snaps_to_zero_and_max_to_interval_grid() {
    let (lo, hi) = pad_range(10, 1.0, 20.0, 1.0, 1.0);
    assert_eq!(lo, 0.0);
    assert_abs_diff_eq!(hi, 21.0, epsilon = 1e-9);
}

#[test]
fn negative_data_uses_negated_candidates() {
    assert_eq!(pad_range(10, -20.0, -10.0, 1.0, 1.0), (-20.0, -9.0));
}

#[test]
fn small_max_boundary() {
    // 9.5 takes the small-number path: ceil + 1
    assert_eq!(pad_range(10, 0.0, 9.5, 1.0, 1.0), (0.0, 11.0));
    // 10 is already in the general path
    assert_eq!(pad_range(10, 0.0, 10.0, 1.0, 1.0).1, 10.5);
    // -10 is still small on the negative side
    assert_eq!(pad_range(10, -20.0, -10.0, 1.0, 1.0).1, -9.0);
}

#[test]
fn large_negative_max_gets_full_headroom() {
    // span 4444: the max side must move by at least 5 span increments
    let (lo, hi) = pad_range(10, -4567.0, -123.0, 1.0, 1.0);
    assert_eq!((lo, hi), (-5000.0, 400.0));
    assert!(hi - -123.0 >= 4444.0 * 0.01 * MAX_PADDING_PERCENT_MIN);
    // just past the boundary the general path applies
    assert_ne!(pad_range(10, -20.0, -10.5, 1.0, 1.0).1, -9.0);
}

#[test]
fn zero_span_widens_by_one_each_side() {
    assert_eq!(pad_range(5, 5.0, 5.0, 1.0, 1.0), (4.0, 6.0));
    assert_eq!(pad_range(5, -3.0, -3.0, 1.0, 1.0), (-4.0, -2.0));
    assert_eq!(pad_range(5, 0.0, 0.0, 1.0, 1.0), (0.0, 2.0));
}

#[test]
fn disabled_padding_returns_input() {
    assert_eq!(pad_range(5, 3.3, 7.7, 0.0, 0.0), (3.3, 7.7));
    assert_eq!(pad_range(5, 3.3, 7.7, -1.0, 0.0), (3.3, 7.7));
}

#[test]
fn max_side_disabled_keeps_max() {
    assert_eq!(pad_range(10, 1.0, 20.0, 1.0, 0.0), (0.0, 20.0));
}

#[test]
fn candidate_order_prefers_powers_of_ten() {
    // zero is too far below; 1000 is the first multiple-of-one candidate in band
    assert_eq!(pad_range(10, 1003.0, 1100.0, 1.0, 1.0).0, 1000.0);
}

#[test]
fn falls_back_to_rounding_when_no_candidate_fits() {
    // nothing from {0, 1, 2, 5} x 10^e lies within 20 increments below 2050,
    // so the min rounds down by tens and the max lands on a whole number
    let (lo, hi) = pad_range(10, 2050.0, 2150.0, 1.0, 1.0);
    assert_abs_diff_eq!(lo, 2040.0, epsilon = 1e-9);
    assert_abs_diff_eq!(hi, 2166.0, epsilon = 1e-9);
}

#[test]
fn friendly_round_is_a_fixed_point() {
    let (once, moved) = friendly_round(187.0, 1.0, 0.0, -1.0, 20.0, true);
    assert_eq!(once, 200.0);
    assert_abs_diff_eq!(moved, 13.0, epsilon = 1e-9);
    let (twice, moved_again) = friendly_round(once, 1.0, 0.0, -1.0, 20.0, true);
    assert_eq!(twice, once);
    assert_eq!(moved_again, 0.0);
}

#[test]
fn friendly_round_respects_sign() {
    // rounding a negative value up moves toward zero
    let (v, _) = friendly_round(-187.0, 1.0, 0.0, 0.0, 20.0, true);
    assert_eq!(v, -180.0);
    // rounding it down moves away from zero
    let (v, _) = friendly_round(-187.0, 1.0, 0.0, 0.0, 20.0, false);
    assert_eq!(v, -200.0);
}

#[test]
fn friendly_round_skips_zero_and_flat_inputs() {
    assert_eq!(friendly_round(0.0, 1.0, 3.0, 0.0, 20.0, true), (3.0, 3.0));
    assert_eq!(friendly_round(42.0, 0.0, 3.0, 0.0, 20.0, false), (42.0, 3.0));
}
