use window_axis::core::{
    CandidateRange, CustomWindow, EMPTY_WINDOW_NAME, SeparatorRequest, StrideWindow, WindowCatalog,
    calculate_separator_indices, supported_separator_count,
};

fn request(low: f64, high: f64, width: f64, clean_factor: f64) -> SeparatorRequest {
    SeparatorRequest {
        visible_low: low,
        visible_high: high,
        available_width_px: width,
        unit: 1.0,
        evaluates_unit_width: false,
        clean_factor,
    }
}

fn week_then_day() -> WindowCatalog {
    WindowCatalog::new()
        .with_window(StrideWindow::new("week", 7, 40.0).expect("week"))
        .with_window(StrideWindow::new("day", 1, 10.0).expect("day"))
}

#[test]
fn week_is_selected_when_days_do_not_fit() {
    let selection = calculate_separator_indices(&week_then_day(), &request(0.0, 30.0, 200.0, 1.0));

    assert_eq!(selection.window.name(), "week");
    assert_eq!(selection.indices, vec![0.0, 7.0, 14.0, 21.0, 28.0]);
    assert_eq!(selection.supported_count, 5.0);
}

#[test]
fn day_is_rejected_at_twenty_supported_separators() {
    let catalog =
        WindowCatalog::new().with_window(StrideWindow::new("day", 1, 10.0).expect("day"));
    let selection = calculate_separator_indices(&catalog, &request(0.0, 30.0, 200.0, 1.0));

    assert_eq!(supported_separator_count(200.0, 10.0, 1.0), 20.0);
    assert_eq!(selection.window.name(), EMPTY_WINDOW_NAME);
    assert!(selection.indices.is_empty());
    assert_eq!(selection.supported_count, 20.0);
    assert_eq!(selection.magnitude, 10.0);
}

#[test]
fn finer_window_declared_first_wins_when_it_fits() {
    let catalog = WindowCatalog::new()
        .with_window(StrideWindow::new("day", 1, 10.0).expect("day"))
        .with_window(StrideWindow::new("week", 7, 40.0).expect("week"));
    let selection = calculate_separator_indices(&catalog, &request(0.0, 30.0, 400.0, 1.0));

    assert_eq!(selection.window.name(), "day");
    assert_eq!(selection.indices.len(), 30);
}

#[test]
fn clean_factor_spreads_separators_out() {
    let catalog = WindowCatalog::new()
        .with_window(StrideWindow::new("day", 1, 10.0).expect("day"))
        .with_window(StrideWindow::new("week", 7, 40.0).expect("week"));

    let dense = calculate_separator_indices(&catalog, &request(0.0, 30.0, 400.0, 1.0));
    let clean = calculate_separator_indices(&catalog, &request(0.0, 30.0, 400.0, 2.0));

    assert_eq!(dense.window.name(), "day");
    assert_eq!(clean.window.name(), "week");
}

#[test]
fn empty_catalog_always_yields_empty_window() {
    let catalog = WindowCatalog::new();
    for (low, high, width) in [(0.0, 30.0, 200.0), (-100.0, 100.0, 5000.0), (3.0, 4.0, 1.0)] {
        let selection = calculate_separator_indices(&catalog, &request(low, high, width, 1.0));
        assert_eq!(selection.window.name(), EMPTY_WINDOW_NAME);
        assert!(selection.indices.is_empty());
    }
}

#[test]
fn range_with_fewer_than_two_candidates_is_empty() {
    let selection = calculate_separator_indices(&week_then_day(), &request(5.0, 5.5, 10_000.0, 1.0));
    assert_eq!(selection.window.name(), EMPTY_WINDOW_NAME);
    assert!(selection.indices.is_empty());
    assert_eq!(selection.magnitude, 0.0);
}

#[test]
fn zero_width_chart_fits_nothing_without_panicking() {
    let selection = calculate_separator_indices(&week_then_day(), &request(0.0, 30.0, 0.0, 1.0));
    assert_eq!(selection.window.name(), EMPTY_WINDOW_NAME);
    assert_eq!(selection.supported_count, 0.0);
    assert_eq!(selection.magnitude, 0.0);
}

#[test]
fn trailing_unit_is_reserved_when_evaluated() {
    let catalog =
        WindowCatalog::new().with_window(StrideWindow::new("day", 1, 1.0).expect("day"));
    let mut req = request(0.0, 10.0, 1_000.0, 1.0);
    req.evaluates_unit_width = true;
    req.unit = 1.0;

    let selection = calculate_separator_indices(&catalog, &req);
    assert_eq!(selection.indices.last().copied(), Some(8.0));
}

#[test]
fn rejecting_window_is_skipped_in_favor_of_the_next() {
    let catalog = WindowCatalog::new()
        .with_window(CustomWindow::new("never", 1.0, |_: CandidateRange| None).expect("never"))
        .with_window(StrideWindow::new("day", 1, 1.0).expect("day"));
    let selection = calculate_separator_indices(&catalog, &request(0.0, 4.0, 100.0, 1.0));

    assert_eq!(selection.window.name(), "day");
    assert_eq!(selection.indices, vec![0.0, 1.0, 2.0, 3.0]);
}
