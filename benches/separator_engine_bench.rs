use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use window_axis::api::{WindowAxis, WindowAxisConfig};
use window_axis::core::{
    AxisExtent, AxisOrientation, ChartContext, DateAxisBase, PeriodUnit, SeparatorRequest,
    Viewport, calculate_separator_indices, standard_calendar_catalog,
};
use window_axis::render::NullSurface;

fn daily_base() -> DateAxisBase {
    let initial = Utc
        .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .expect("valid date");
    DateAxisBase::new(initial, PeriodUnit::Days)
}

fn bench_calendar_selection_five_years(c: &mut Criterion) {
    let catalog = standard_calendar_catalog(daily_base());
    let request = SeparatorRequest {
        visible_low: 0.0,
        visible_high: 5.0 * 365.0,
        available_width_px: 1920.0,
        unit: 1.0,
        evaluates_unit_width: false,
        clean_factor: 3.0,
    };

    c.bench_function("calendar_selection_five_years", |b| {
        b.iter(|| calculate_separator_indices(black_box(&catalog), black_box(&request)))
    });
}

fn bench_prepare_chart_scrolling(c: &mut Criterion) {
    let chart = ChartContext::new(Viewport::new(1920, 1080), AxisOrientation::X);
    let mut axis: WindowAxis = WindowAxis::new(
        WindowAxisConfig::default(),
        standard_calendar_catalog(daily_base()),
    )
    .expect("valid axis");
    let mut surface = NullSurface::default();
    let mut offset = 0.0;

    c.bench_function("prepare_chart_scrolling_quarter", |b| {
        b.iter(|| {
            offset = (offset + 1.0) % 365.0;
            let extent = AxisExtent::new(offset, offset + 90.0);
            let _ = axis
                .prepare_chart(black_box(extent), &chart, &mut surface)
                .expect("pass");
            surface.last_labels.clear();
        })
    });
}

criterion_group!(
    benches,
    bench_calendar_selection_five_years,
    bench_prepare_chart_scrolling
);
criterion_main!(benches);
