pub mod calendar;
pub mod custom_window;
pub mod margin;
pub mod separator_calculator;
pub mod types;
pub mod window;

pub use calendar::{
    CalendarGranularity, CalendarWindow, DateAxisBase, PeriodUnit, standard_calendar_catalog,
};
pub use custom_window::{CustomWindow, HeaderFn, LabelFormatterFn, NarrowFn, StrideWindow};
pub use margin::{AxisMargin, LabelFootprint};
pub use separator_calculator::{
    SeparatorRequest, SeparatorSelection, calculate_separator_indices, candidate_range,
    magnitude_from_supported_count, supported_separator_count,
};
pub use types::{AxisExtent, AxisOrientation, ChartContext, Viewport};
pub use window::{
    AxisWindow, CandidateRange, EMPTY_WINDOW_NAME, EmptyWindow, SharedWindow, WindowCatalog,
    empty_window,
};
