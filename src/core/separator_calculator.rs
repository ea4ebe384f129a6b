use tracing::trace;

use super::window::{CandidateRange, SharedWindow, WindowCatalog, empty_window};

/// Layout inputs for one separator computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorRequest {
    pub visible_low: f64,
    pub visible_high: f64,
    pub available_width_px: f64,
    /// Width of one unit on the axis; trimmed from the top when `evaluates_unit_width`.
    pub unit: f64,
    pub evaluates_unit_width: bool,
    /// Density multiplier applied to every window's minimum width (>1 spreads ticks out).
    pub clean_factor: f64,
}

/// Outcome of one separator computation.
#[derive(Debug, Clone)]
pub struct SeparatorSelection {
    pub window: SharedWindow,
    pub indices: Vec<f64>,
    /// Separator budget computed for the last window that narrowed the range.
    pub supported_count: f64,
    pub magnitude: f64,
}

impl SeparatorSelection {
    fn empty(supported_count: f64) -> Self {
        Self {
            window: empty_window(),
            indices: Vec::new(),
            supported_count,
            magnitude: magnitude_from_supported_count(supported_count),
        }
    }
}

/// Integer candidate positions `[floor(low), floor(high - adj))`.
///
/// Bounds beyond the `i64` range saturate; non-finite bounds give an empty range.
#[must_use]
pub fn candidate_range(request: &SeparatorRequest) -> CandidateRange {
    let adjustment = if request.evaluates_unit_width {
        request.unit
    } else {
        0.0
    };
    let start = request.visible_low.floor();
    let end = (request.visible_high - adjustment).floor();
    if !start.is_finite() || !end.is_finite() || end <= start {
        return CandidateRange::new(0, 0);
    }
    CandidateRange::new(start as i64, end as i64)
}

/// Rounded number of separators of `minimum_separator_width` that fit in `available_width_px`.
#[must_use]
pub fn supported_separator_count(
    available_width_px: f64,
    minimum_separator_width: f64,
    clean_factor: f64,
) -> f64 {
    let denominator = minimum_separator_width * clean_factor;
    if !available_width_px.is_finite() || !denominator.is_finite() || denominator <= 0.0 {
        return 0.0;
    }
    (available_width_px / denominator).round()
}

/// Order-of-ten of the separator budget; 0 when nothing fits.
#[must_use]
pub fn magnitude_from_supported_count(supported_count: f64) -> f64 {
    if !supported_count.is_finite() || supported_count <= 0.0 {
        return 0.0;
    }
    10f64.powi(supported_count.log10().floor() as i32)
}

/// Picks the first catalog window that accepts the range and fits the width.
///
/// Falls back to the empty window when the range has fewer than two candidate
/// positions or no window fits.
#[must_use]
pub fn calculate_separator_indices(
    catalog: &WindowCatalog,
    request: &SeparatorRequest,
) -> SeparatorSelection {
    let range = candidate_range(request);
    if range.len() < 2 {
        return SeparatorSelection::empty(0.0);
    }

    let mut supported_count = 0.0;
    for window in catalog.iter() {
        let supported = supported_separator_count(
            request.available_width_px,
            window.minimum_separator_width(),
            request.clean_factor,
        );
        let minimum_ticks = window.minimum_tick_count(range);
        if minimum_ticks as f64 > supported {
            supported_count = supported;
            trace!(
                window = window.name(),
                minimum_ticks,
                supported_count,
                "window cannot fit available width"
            );
            continue;
        }

        let Some(indices) = window.try_narrow(range) else {
            trace!(window = window.name(), "window rejected range");
            continue;
        };

        supported_count = supported;
        if supported_count < indices.len() as f64 {
            trace!(
                window = window.name(),
                required = indices.len(),
                supported_count,
                "window too dense for available width"
            );
            continue;
        }

        return SeparatorSelection {
            window: window.clone(),
            indices,
            supported_count,
            magnitude: magnitude_from_supported_count(supported_count),
        };
    }

    SeparatorSelection::empty(supported_count)
}
