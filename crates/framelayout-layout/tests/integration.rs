//! Integration tests for framelayout-layout.
//!
//! These tests drive full layout passes through the public API and check
//! the properties every pass must hold.

use framelayout_core::{Axis, EdgeInsets, LayoutError, Size, ViewId};
use framelayout_layout::{
    arrange, compute_sizes, resolve, Alignment, Arrangement, ConstraintStatus, DistributionPolicy,
    Element, LayoutConfig, LayoutPass, Rounding, EPSILON,
};
use proptest::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

fn element(id: u64, min_w: f32, max_w: f32) -> Element {
    Element::builder()
        .view(ViewId::from_raw(id))
        .width(min_w, max_w)
        .build()
        .expect("valid bounds")
}

fn open(id: u64) -> Element {
    Element::new(ViewId::from_raw(id))
}

fn row(width: f32) -> LayoutPass {
    LayoutPass::new(Axis::Horizontal, Size::new(width, 20.0))
}

fn widths(elements: &[Element]) -> Vec<f32> {
    elements
        .iter()
        .map(|e| e.computed_width().expect("resolved"))
        .collect()
}

// =============================================================================
// Worked Examples
// =============================================================================

#[test]
fn test_three_open_elements_share_100() {
    let mut elements = vec![open(1), open(2), open(3)];
    let report = resolve(&mut elements, &row(100.0)).expect("valid pass");
    assert!(report.is_satisfied());
    assert_eq!(widths(&elements), vec![34.0, 33.0, 33.0]);
}

#[test]
fn test_fixed_and_flexible_element() {
    let mut elements = vec![element(1, 50.0, 50.0), element(2, 10.0, 100.0)];
    resolve(&mut elements, &row(120.0)).expect("valid pass");
    assert_eq!(widths(&elements), vec![50.0, 70.0]);
}

#[test]
fn test_overfull_row_reports_unsatisfiable() {
    let mut elements = vec![element(1, 80.0, 80.0), element(2, 80.0, 80.0)];
    let report = resolve(&mut elements, &row(100.0)).expect("overflow is not an error");
    assert_eq!(
        report.main.status,
        ConstraintStatus::Unsatisfiable {
            required: 160.0,
            available: 100.0
        }
    );
    assert_eq!(widths(&elements), vec![80.0, 80.0]);
}

#[test]
fn test_zero_elements_succeeds() {
    let mut elements: Vec<Element> = Vec::new();
    let report = resolve(&mut elements, &row(100.0)).expect("valid pass");
    assert_eq!(report.resolved, 0);
}

#[test]
fn test_negative_extent_aborts_without_mutation() {
    let mut elements = vec![open(1), open(2)];
    let err = resolve(&mut elements, &row(-1.0)).unwrap_err();
    assert_eq!(err, LayoutError::NegativeExtent(-1.0));
    assert!(elements.iter().all(|e| !e.is_resolved()));
}

#[test]
fn test_spacing_and_padding_consume_extent() {
    let mut elements = vec![open(1), open(2), open(3)];
    let pass = row(100.0)
        .spacing(5.0)
        .padding(EdgeInsets::symmetric(10.0, 0.0));
    resolve(&mut elements, &pass).expect("valid pass");
    let total: f32 = widths(&elements).iter().sum();
    assert_eq!(total + 2.0 * 5.0 + 20.0, 100.0);
    assert_eq!(widths(&elements), vec![24.0, 23.0, 23.0]);
}

#[test]
fn test_proportional_grows_by_weight() {
    let mut elements = vec![open(1), open(2)];
    elements[0].set_weight(Some(1.0)).expect("valid weight");
    elements[1].set_weight(Some(2.0)).expect("valid weight");
    let pass = row(90.0).policy(DistributionPolicy::Proportional);
    resolve(&mut elements, &pass).expect("valid pass");
    assert_eq!(widths(&elements), vec![30.0, 60.0]);
}

#[test]
fn test_compute_then_arrange_frames() {
    let elements = vec![element(1, 10.0, 30.0), open(2)];
    let config = LayoutConfig::new(Axis::Horizontal)
        .with_spacing(4.0)
        .with_arrangement(Arrangement::new(Alignment::Start, Alignment::Center));
    let pass = config.pass(Size::new(104.0, 20.0));
    let (sizes, _) = compute_sizes(&elements, &pass).expect("valid pass");
    let frames = arrange(&sizes, &pass, config.arrangement);
    assert_eq!(frames[0].x, 0.0);
    assert_eq!(frames[0].width, 30.0);
    assert_eq!(frames[1].x, 34.0);
    assert_eq!(frames[1].width, 70.0);
    assert_eq!(frames[1].max_x(), 104.0);
}

#[test]
fn test_fractional_rounding_keeps_fractions() {
    let mut elements = vec![open(1), open(2), open(3)];
    let pass = row(100.0).rounding(Rounding::Fractional);
    resolve(&mut elements, &pass).expect("valid pass");
    for w in widths(&elements) {
        assert!((w - 100.0 / 3.0).abs() < 0.001);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn policy_strategy() -> impl Strategy<Value = DistributionPolicy> {
    prop_oneof![
        Just(DistributionPolicy::Equal),
        Just(DistributionPolicy::Proportional),
        Just(DistributionPolicy::PackMinimum),
    ]
}

fn rounding_strategy() -> impl Strategy<Value = Rounding> {
    prop_oneof![Just(Rounding::Pixel), Just(Rounding::Fractional)]
}

/// (min, max) pairs where max may be unbounded.
fn bound_strategy() -> impl Strategy<Value = (f32, f32)> {
    (0.0f32..200.0, prop::option::of(0.0f32..300.0))
        .prop_map(|(min, span)| (min, span.map_or(f32::INFINITY, |s| min + s)))
}

fn elements_strategy() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec((bound_strategy(), bound_strategy()), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, ((min_w, max_w), (min_h, max_h)))| {
                Element::builder()
                    .view(ViewId::from_raw(i as u64))
                    .width(min_w, max_w)
                    .height(min_h, max_h)
                    .build()
                    .expect("generated bounds are valid")
            })
            .collect()
    })
}

/// Whole-unit elements whose minimums fit and whose maximums can absorb the
/// space, for exact consumption checks.
fn fitting_row_strategy() -> impl Strategy<Value = (Vec<Element>, f32)> {
    prop::collection::vec((0u16..50, 0u16..100), 1..8).prop_flat_map(|pairs| {
        let mins: u32 = pairs.iter().map(|(min, _)| u32::from(*min)).sum();
        let maxs: u32 = pairs.iter().map(|(min, span)| u32::from(*min + *span)).sum();
        let elements: Vec<Element> = pairs
            .iter()
            .enumerate()
            .map(|(i, (min, span))| {
                element(i as u64, f32::from(*min), f32::from(*min + *span))
            })
            .collect();
        (Just(elements), mins..=maxs).prop_map(|(e, usable)| (e, usable as f32))
    })
}

/// Bounds on a 1/8 grid with a usable extent between the summed minimums and
/// the summed maximums. Eighths keep the generated inputs exact in `f32`.
fn fractional_row_strategy() -> impl Strategy<Value = (Vec<Element>, f32)> {
    prop::collection::vec((0u16..160, 0u16..240), 1..7).prop_flat_map(|pairs| {
        let room: u32 = pairs.iter().map(|(_, span)| u32::from(*span)).sum();
        let mins: u32 = pairs.iter().map(|(min, _)| u32::from(*min)).sum();
        let elements: Vec<Element> = pairs
            .iter()
            .enumerate()
            .map(|(i, (min, span))| {
                let min = f32::from(*min) / 8.0;
                element(i as u64, min, min + f32::from(*span) / 8.0)
            })
            .collect();
        (Just(elements), 0..=room).prop_map(move |(e, extra)| (e, (mins + extra) as f32 / 8.0))
    })
}

proptest! {
    #[test]
    fn prop_computed_sizes_respect_bounds(
        mut elements in elements_strategy(),
        width in 0.0f32..2000.0,
        height in 0.0f32..500.0,
        spacing in 0.0f32..20.0,
        policy in policy_strategy(),
        rounding in rounding_strategy(),
    ) {
        let pass = LayoutPass::new(Axis::Horizontal, Size::new(width, height))
            .spacing(spacing)
            .policy(policy)
            .rounding(rounding);
        resolve(&mut elements, &pass).unwrap();
        for e in &elements {
            let size = e.computed_size().unwrap();
            prop_assert!(e.bounds().contains(size), "{size:?} outside {:?}", e.bounds());
        }
    }

    #[test]
    fn prop_exact_consumption_in_pixels(
        (mut elements, usable) in fitting_row_strategy(),
        spacing in 0u8..10,
        padding in 0u8..10,
        policy in prop_oneof![Just(DistributionPolicy::Equal), Just(DistributionPolicy::Proportional)],
    ) {
        let spacing = f32::from(spacing);
        let padding = f32::from(padding);
        let n = elements.len() as f32;
        let available = usable + spacing * (n - 1.0) + 2.0 * padding;
        let pass = row(available)
            .spacing(spacing)
            .padding(EdgeInsets::symmetric(padding, 0.0))
            .policy(policy);
        let report = resolve(&mut elements, &pass).unwrap();
        let total: f32 = widths(&elements).iter().sum();
        prop_assert!(report.main.status.is_satisfied());
        prop_assert_eq!(total + spacing * (n - 1.0) + 2.0 * padding, available);
    }

    #[test]
    fn prop_consumption_within_epsilon_when_fractional(
        (mut elements, usable) in fractional_row_strategy(),
        spacing in 0u8..40,
        padding in 0u8..40,
        policy in prop_oneof![Just(DistributionPolicy::Equal), Just(DistributionPolicy::Proportional)],
    ) {
        let spacing = f32::from(spacing) / 8.0;
        let padding = f32::from(padding) / 8.0;
        let gaps = spacing * (elements.len() - 1) as f32;
        let available = usable + gaps + 2.0 * padding;
        let pass = row(available)
            .spacing(spacing)
            .padding(EdgeInsets::symmetric(padding, 0.0))
            .policy(policy)
            .rounding(Rounding::Fractional);
        let report = resolve(&mut elements, &pass).unwrap();
        prop_assert!(report.main.status.is_satisfied());

        let total: f64 = widths(&elements).iter().map(|&w| f64::from(w)).sum::<f64>()
            + f64::from(gaps)
            + 2.0 * f64::from(padding);
        let drift = (total - f64::from(available)).abs();
        prop_assert!(drift < f64::from(EPSILON), "drift {drift}");
    }

    #[test]
    fn prop_fitting_fractional_minimums_stay_satisfied_in_pixels(
        (mut elements, usable) in fractional_row_strategy(),
        policy in policy_strategy(),
    ) {
        let pass = row(usable).policy(policy);
        let report = resolve(&mut elements, &pass).unwrap();
        prop_assert!(report.main.status.is_satisfied(), "{:?}", report.main.status);
        for e in &elements {
            let width = e.computed_width().unwrap();
            prop_assert!(width >= e.min_width() && width <= e.max_width());
        }
    }

    #[test]
    fn prop_pack_minimum_keeps_minimums(
        mut elements in elements_strategy(),
        width in 0.0f32..2000.0,
    ) {
        let pass = row(width)
            .policy(DistributionPolicy::PackMinimum)
            .rounding(Rounding::Fractional);
        resolve(&mut elements, &pass).unwrap();
        for e in &elements {
            prop_assert_eq!(e.computed_width().unwrap(), e.min_width());
        }
    }

    #[test]
    fn prop_equal_shares_for_unbounded(count in 1usize..10, width in 0.0f32..2000.0) {
        let mut elements: Vec<Element> = (0..count as u64).map(open).collect();
        let pass = row(width).rounding(Rounding::Fractional);
        resolve(&mut elements, &pass).unwrap();
        let expected = width / count as f32;
        for w in widths(&elements) {
            prop_assert!((w - expected).abs() < 0.01);
        }
    }

    #[test]
    fn prop_overflow_pins_minimums(
        mins in prop::collection::vec(10.0f32..100.0, 2..6),
        shortfall in 1.0f32..9.0,
    ) {
        let sum: f32 = mins.iter().sum();
        let mut elements: Vec<Element> = mins
            .iter()
            .enumerate()
            .map(|(i, &m)| element(i as u64, m, m + 50.0))
            .collect();
        let pass = row(sum - shortfall).rounding(Rounding::Fractional);
        let report = resolve(&mut elements, &pass).unwrap();
        prop_assert!(!report.main.status.is_satisfied());
        for (e, m) in elements.iter().zip(&mins) {
            prop_assert_eq!(e.computed_width().unwrap(), *m);
        }
    }

    #[test]
    fn prop_resolve_is_idempotent(
        mut elements in elements_strategy(),
        width in 0.0f32..2000.0,
        policy in policy_strategy(),
        rounding in rounding_strategy(),
    ) {
        let pass = row(width).policy(policy).rounding(rounding);
        resolve(&mut elements, &pass).unwrap();
        let first: Vec<_> = elements.iter().map(Element::computed_size).collect();
        resolve(&mut elements, &pass).unwrap();
        let second: Vec<_> = elements.iter().map(Element::computed_size).collect();
        prop_assert_eq!(first, second);
    }
}
