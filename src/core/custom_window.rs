use std::fmt;
use std::sync::Arc;

use crate::error::{AxisError, AxisResult};

use super::window::{AxisWindow, CandidateRange};

pub type NarrowFn = Arc<dyn Fn(CandidateRange) -> Option<Vec<f64>> + Send + Sync + 'static>;
pub type HeaderFn = Arc<dyn Fn(f64) -> bool + Send + Sync + 'static>;
pub type LabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

fn validate_separator_width(width: f64) -> AxisResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(AxisError::InvalidData(
            "minimum separator width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(crate) fn format_integer_label(index: f64) -> String {
    if !index.is_finite() {
        return "nan".to_owned();
    }
    // `+ 0.0` folds negative zero so `-0.4` prints as `0`.
    format!("{:.0}", index.round() + 0.0)
}

fn is_multiple_of(index: f64, stride: i64) -> bool {
    if !index.is_finite() {
        return false;
    }
    (index.round() as i64).rem_euclid(stride) == 0
}

/// First multiple of `stride` inside `range`.
fn first_multiple_in(range: CandidateRange, stride: i64) -> Option<i64> {
    let offset = range.start.rem_euclid(stride);
    let first = if offset == 0 {
        range.start
    } else {
        range.start.checked_add(stride - offset)?
    };
    range.contains(first).then_some(first)
}

/// Numeric window keeping the positions that are multiples of `stride`.
///
/// A stride of 1 accepts every candidate; a stride of 7 over day ordinals
/// yields weekly ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct StrideWindow {
    name: String,
    stride: i64,
    minimum_separator_width: f64,
    header_stride: Option<i64>,
}

impl StrideWindow {
    pub fn new(
        name: impl Into<String>,
        stride: i64,
        minimum_separator_width: f64,
    ) -> AxisResult<Self> {
        if stride <= 0 {
            return Err(AxisError::InvalidData(
                "stride window step must be > 0".to_owned(),
            ));
        }
        validate_separator_width(minimum_separator_width)?;
        Ok(Self {
            name: name.into(),
            stride,
            minimum_separator_width,
            header_stride: None,
        })
    }

    /// Flags every multiple of `header_stride` as a header tick.
    pub fn with_header_stride(mut self, header_stride: i64) -> AxisResult<Self> {
        if header_stride <= 0 {
            return Err(AxisError::InvalidData(
                "header stride must be > 0".to_owned(),
            ));
        }
        self.header_stride = Some(header_stride);
        Ok(self)
    }

    #[must_use]
    pub fn stride(&self) -> i64 {
        self.stride
    }
}

impl AxisWindow for StrideWindow {
    fn name(&self) -> &str {
        &self.name
    }

    fn minimum_separator_width(&self) -> f64 {
        self.minimum_separator_width
    }

    fn try_narrow(&self, range: CandidateRange) -> Option<Vec<f64>> {
        let first = first_multiple_in(range, self.stride)?;
        let step = usize::try_from(self.stride).ok()?;
        Some(
            (first..range.end)
                .step_by(step)
                .map(|position| position as f64)
                .collect(),
        )
    }

    fn minimum_tick_count(&self, range: CandidateRange) -> u64 {
        match first_multiple_in(range, self.stride) {
            Some(first) => {
                let span = i128::from(range.end) - 1 - i128::from(first);
                (span / i128::from(self.stride) + 1) as u64
            }
            None => 0,
        }
    }

    fn is_header(&self, index: f64) -> bool {
        self.header_stride
            .is_some_and(|header_stride| is_multiple_of(index, header_stride))
    }

    fn format_label(&self, index: f64) -> String {
        format_integer_label(index)
    }
}

/// Window assembled from caller-provided functions.
#[derive(Clone)]
pub struct CustomWindow {
    name: String,
    minimum_separator_width: f64,
    narrow: NarrowFn,
    header: Option<HeaderFn>,
    formatter: Option<LabelFormatterFn>,
}

impl CustomWindow {
    pub fn new(
        name: impl Into<String>,
        minimum_separator_width: f64,
        narrow: impl Fn(CandidateRange) -> Option<Vec<f64>> + Send + Sync + 'static,
    ) -> AxisResult<Self> {
        validate_separator_width(minimum_separator_width)?;
        Ok(Self {
            name: name.into(),
            minimum_separator_width,
            narrow: Arc::new(narrow),
            header: None,
            formatter: None,
        })
    }

    #[must_use]
    pub fn with_header(mut self, header: impl Fn(f64) -> bool + Send + Sync + 'static) -> Self {
        self.header = Some(Arc::new(header));
        self
    }

    #[must_use]
    pub fn with_formatter(
        mut self,
        formatter: impl Fn(f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }
}

impl fmt::Debug for CustomWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomWindow")
            .field("name", &self.name)
            .field("minimum_separator_width", &self.minimum_separator_width)
            .field("has_header", &self.header.is_some())
            .field("has_formatter", &self.formatter.is_some())
            .finish()
    }
}

impl AxisWindow for CustomWindow {
    fn name(&self) -> &str {
        &self.name
    }

    fn minimum_separator_width(&self) -> f64 {
        self.minimum_separator_width
    }

    fn try_narrow(&self, range: CandidateRange) -> Option<Vec<f64>> {
        (self.narrow)(range)
    }

    fn is_header(&self, index: f64) -> bool {
        self.header.as_ref().is_some_and(|header| header(index))
    }

    fn format_label(&self, index: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter(index),
            None => format_integer_label(index),
        }
    }
}
