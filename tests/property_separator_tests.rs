use proptest::prelude::*;
use window_axis::api::CacheKey;
use window_axis::core::{
    AxisMargin, AxisWindow, CandidateRange, EMPTY_WINDOW_NAME, LabelFootprint, SeparatorRequest, StrideWindow,
    WindowCatalog, calculate_separator_indices, supported_separator_count,
};

fn catalog() -> WindowCatalog {
    WindowCatalog::new()
        .with_window(StrideWindow::new("day", 1, 12.0).expect("day"))
        .with_window(StrideWindow::new("week", 7, 40.0).expect("week"))
        .with_window(StrideWindow::new("month", 30, 60.0).expect("month"))
        .with_window(StrideWindow::new("year", 365, 60.0).expect("year"))
}

fn footprint_strategy() -> impl Strategy<Value = LabelFootprint> {
    (
        0.0f64..200.0,
        0.0f64..50.0,
        0.0f64..40.0,
        0.0f64..40.0,
        0.0f64..20.0,
        0.0f64..20.0,
    )
        .prop_map(|(taken_width, taken_height, left, right, top, bottom)| LabelFootprint {
            taken_width,
            taken_height,
            left,
            right,
            top,
            bottom,
        })
}

proptest! {
    #[test]
    fn selected_window_fits_its_supported_count(
        low in -5_000.0f64..5_000.0,
        span in 0.0f64..3_000.0,
        width in 0.0f64..4_000.0,
        clean_factor in 0.5f64..4.0
    ) {
        let request = SeparatorRequest {
            visible_low: low,
            visible_high: low + span,
            available_width_px: width,
            unit: 1.0,
            evaluates_unit_width: false,
            clean_factor,
        };
        let catalog = catalog();
        let selection = calculate_separator_indices(&catalog, &request);

        if selection.window.name() == EMPTY_WINDOW_NAME {
            prop_assert!(selection.indices.is_empty());
        } else {
            let supported = supported_separator_count(
                width,
                selection.window.minimum_separator_width(),
                clean_factor,
            );
            prop_assert!(selection.indices.len() as f64 <= supported);
            prop_assert!(selection.indices.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(selection.indices.iter().all(|index| *index >= low.floor()));
        }
    }

    #[test]
    fn stride_tick_count_bound_matches_narrowed_ticks(
        start in -1_000_000i64..1_000_000,
        span in 0i64..5_000,
        stride in 1i64..400
    ) {
        let window = StrideWindow::new("stride", stride, 10.0).expect("stride");
        let range = CandidateRange::new(start, start + span);
        let ticks = window.try_narrow(range).map_or(0, |ticks| ticks.len());
        prop_assert_eq!(window.minimum_tick_count(range), ticks as u64);
    }

    #[test]
    fn selection_is_deterministic(
        low in -1_000.0f64..1_000.0,
        span in 0.0f64..2_000.0,
        width in 1.0f64..3_000.0
    ) {
        let request = SeparatorRequest {
            visible_low: low,
            visible_high: low + span,
            available_width_px: width,
            unit: 1.0,
            evaluates_unit_width: false,
            clean_factor: 1.0,
        };
        let catalog = catalog();
        let first = calculate_separator_indices(&catalog, &request);
        let second = calculate_separator_indices(&catalog, &request);
        prop_assert_eq!(first.window.name(), second.window.name());
        prop_assert_eq!(first.indices, second.indices);
    }

    #[test]
    fn jitter_below_half_tolerance_shares_a_key(
        base in -10_000i32..10_000,
        jitter_ratio in -0.49f64..0.49
    ) {
        let tolerance = 0.1;
        let index = f64::from(base);
        let jittered = index + jitter_ratio * tolerance;
        prop_assert_eq!(
            CacheKey::quantize(index, tolerance),
            CacheKey::quantize(jittered, tolerance)
        );
    }

    #[test]
    fn indices_more_than_tolerance_apart_get_distinct_keys(
        index in -10_000.0f64..10_000.0,
        gap_ratio in 1.01f64..50.0
    ) {
        let tolerance = 0.1;
        prop_assert_ne!(
            CacheKey::quantize(index, tolerance),
            CacheKey::quantize(index + gap_ratio * tolerance, tolerance)
        );
    }

    #[test]
    fn margin_accumulation_is_order_independent(
        footprints in prop::collection::vec(footprint_strategy(), 0..24)
    ) {
        let forward = AxisMargin::from_footprints(footprints.iter().copied());
        let backward = AxisMargin::from_footprints(footprints.iter().rev().copied());
        prop_assert_eq!(forward, backward);
    }
}
