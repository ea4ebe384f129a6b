//! Calendar windows for date axes.
//!
//! A date axis maps integer indices to instants as
//! `initial + index * period`. Each [`CalendarWindow`] keeps the indices that
//! fall on its own boundary (midnights, first of month, ...) and labels them
//! with `chrono` format patterns.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::window::{AxisWindow, CandidateRange, WindowCatalog};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Spacing between two consecutive indices of a date axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl PeriodUnit {
    #[must_use]
    pub const fn millis(self) -> i64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => MILLIS_PER_SECOND,
            Self::Minutes => MILLIS_PER_MINUTE,
            Self::Hours => MILLIS_PER_HOUR,
            Self::Days => MILLIS_PER_DAY,
        }
    }
}

/// Origin and period used to turn axis indices into instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateAxisBase {
    pub initial: DateTime<Utc>,
    pub period: PeriodUnit,
}

impl DateAxisBase {
    #[must_use]
    pub fn new(initial: DateTime<Utc>, period: PeriodUnit) -> Self {
        Self { initial, period }
    }

    /// Instant at `index`, or `None` when it is not finite or overflows the calendar.
    #[must_use]
    pub fn datetime_at(self, index: f64) -> Option<DateTime<Utc>> {
        if !index.is_finite() {
            return None;
        }
        let offset_millis = (index * self.period.millis() as f64).round();
        if !offset_millis.is_finite() || offset_millis.abs() > (i64::MAX / 2) as f64 {
            return None;
        }
        let delta = TimeDelta::try_milliseconds(offset_millis as i64)?;
        self.initial.checked_add_signed(delta)
    }

    /// Instant at integer `position`.
    #[must_use]
    pub fn datetime_at_position(self, position: i64) -> Option<DateTime<Utc>> {
        let offset_millis = position.checked_mul(self.period.millis())?;
        let delta = TimeDelta::try_milliseconds(offset_millis)?;
        self.initial.checked_add_signed(delta)
    }

    /// Integer position landing exactly on `instant`, if any.
    #[must_use]
    pub fn position_of(self, instant: DateTime<Utc>) -> Option<i64> {
        let offset_millis = (instant - self.initial).num_milliseconds();
        let position = offset_millis.div_euclid(self.period.millis());
        (self.datetime_at_position(position)? == instant).then_some(position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarGranularity {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl CalendarGranularity {
    /// Fine-to-coarse order used by [`standard_calendar_catalog`].
    pub const ALL: [Self; 9] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::Year,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Shortest length of one unit; month-like units use their minimum.
    #[must_use]
    pub const fn nominal_millis(self) -> i64 {
        match self {
            Self::Millisecond => 1,
            Self::Second => MILLIS_PER_SECOND,
            Self::Minute => MILLIS_PER_MINUTE,
            Self::Hour => MILLIS_PER_HOUR,
            Self::Day => MILLIS_PER_DAY,
            Self::Week => 7 * MILLIS_PER_DAY,
            Self::Month => 28 * MILLIS_PER_DAY,
            Self::Quarter => 89 * MILLIS_PER_DAY,
            Self::Year => 365 * MILLIS_PER_DAY,
        }
    }

    #[must_use]
    pub const fn default_minimum_separator_width(self) -> f64 {
        match self {
            Self::Millisecond => 90.0,
            Self::Second => 70.0,
            Self::Minute | Self::Hour => 60.0,
            Self::Day => 30.0,
            Self::Week => 60.0,
            Self::Month => 45.0,
            Self::Quarter => 55.0,
            Self::Year => 45.0,
        }
    }

    /// Longest length of one unit; a span this long always holds a boundary.
    const fn maximum_millis(self) -> i64 {
        match self {
            Self::Month => 31 * MILLIS_PER_DAY,
            Self::Quarter => 92 * MILLIS_PER_DAY,
            Self::Year => 366 * MILLIS_PER_DAY,
            _ => self.nominal_millis(),
        }
    }

    /// Latest boundary at or before `dt`.
    fn floor(self, dt: DateTime<Utc>, week_start: Weekday) -> Option<DateTime<Utc>> {
        match self {
            Self::Millisecond | Self::Second | Self::Minute | Self::Hour | Self::Day => {
                let unit = self.nominal_millis();
                DateTime::from_timestamp_millis(dt.timestamp_millis().div_euclid(unit) * unit)
            }
            Self::Week => {
                let midnight = Self::Day.floor(dt, week_start)?;
                let days_back = (7 + midnight.weekday().num_days_from_monday()
                    - week_start.num_days_from_monday())
                    % 7;
                midnight.checked_sub_signed(TimeDelta::try_days(i64::from(days_back))?)
            }
            Self::Month | Self::Quarter | Self::Year => {
                let month0 = match self {
                    Self::Month => dt.month0(),
                    Self::Quarter => dt.month0() - dt.month0() % 3,
                    _ => 0,
                };
                NaiveDate::from_ymd_opt(dt.year(), month0 + 1, 1)?
                    .and_hms_opt(0, 0, 0)
                    .map(|start| start.and_utc())
            }
        }
    }

    fn next_boundary(self, dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Month => dt.checked_add_months(Months::new(1)),
            Self::Quarter => dt.checked_add_months(Months::new(3)),
            Self::Year => dt.checked_add_months(Months::new(12)),
            _ => dt.checked_add_signed(TimeDelta::try_milliseconds(self.nominal_millis())?),
        }
    }

    fn first_boundary_at_or_after(
        self,
        dt: DateTime<Utc>,
        week_start: Weekday,
    ) -> Option<DateTime<Utc>> {
        let floor = self.floor(dt, week_start)?;
        if floor < dt {
            self.next_boundary(floor)
        } else {
            Some(floor)
        }
    }

    fn is_header(self, dt: DateTime<Utc>) -> bool {
        match self {
            Self::Millisecond => dt.nanosecond() == 0,
            Self::Second => dt.second() == 0,
            Self::Minute => dt.minute() == 0,
            Self::Hour => dt.hour() == 0,
            Self::Day => dt.day() == 1,
            Self::Week => dt.day() <= 7,
            Self::Month | Self::Quarter => dt.month() == 1,
            Self::Year => dt.year() % 10 == 0,
        }
    }

    fn format(self, dt: DateTime<Utc>, header: bool) -> String {
        let pattern = match (self, header) {
            (Self::Millisecond, false) => "%H:%M:%S%.3f",
            (Self::Millisecond, true) | (Self::Second, _) => "%H:%M:%S",
            (Self::Minute, _) | (Self::Hour, false) => "%H:%M",
            (Self::Hour, true) | (Self::Week, _) => "%b %d",
            (Self::Day, false) => "%d",
            (Self::Day, true) | (Self::Month, false) => "%b",
            (Self::Month, true) | (Self::Year, _) => "%Y",
            (Self::Quarter, _) => {
                let quarter = dt.month0() / 3 + 1;
                return if header {
                    format!("Q{quarter} {}", dt.year())
                } else {
                    format!("Q{quarter}")
                };
            }
        };
        dt.format(pattern).to_string()
    }
}

/// Calendar-aligned window over a [`DateAxisBase`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarWindow {
    granularity: CalendarGranularity,
    base: DateAxisBase,
    minimum_separator_width: f64,
    week_start: Weekday,
}

impl CalendarWindow {
    #[must_use]
    pub fn new(granularity: CalendarGranularity, base: DateAxisBase) -> Self {
        Self {
            granularity,
            base,
            minimum_separator_width: granularity.default_minimum_separator_width(),
            week_start: Weekday::Mon,
        }
    }

    pub fn with_minimum_separator_width(mut self, width: f64) -> AxisResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(AxisError::InvalidData(
                "minimum separator width must be finite and > 0".to_owned(),
            ));
        }
        self.minimum_separator_width = width;
        Ok(self)
    }

    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    #[must_use]
    pub fn granularity(&self) -> CalendarGranularity {
        self.granularity
    }

    #[must_use]
    pub fn base(&self) -> DateAxisBase {
        self.base
    }

    /// First boundary and last instant of `range` when the boundaries land on
    /// axis positions.
    ///
    /// Every period divides a day, so either all boundaries of the window are
    /// positions or none are; checking the first one decides for the whole run.
    fn aligned_span(&self, range: CandidateRange) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        // A window finer than the axis period would just relabel every index.
        if self.granularity.nominal_millis() < self.base.period.millis() || range.is_empty() {
            return None;
        }
        let first = self.base.datetime_at_position(range.start)?;
        let last = self.base.datetime_at_position(range.end - 1)?;
        let boundary = self
            .granularity
            .first_boundary_at_or_after(first, self.week_start)?;
        if boundary > last {
            return None;
        }
        self.base.position_of(boundary)?;
        Some((boundary, last))
    }
}

impl AxisWindow for CalendarWindow {
    fn name(&self) -> &str {
        self.granularity.name()
    }

    fn minimum_separator_width(&self) -> f64 {
        self.minimum_separator_width
    }

    fn try_narrow(&self, range: CandidateRange) -> Option<Vec<f64>> {
        let (mut boundary, last) = self.aligned_span(range)?;
        let mut narrowed = Vec::new();
        while boundary <= last {
            if let Some(position) = self.base.position_of(boundary) {
                narrowed.push(position as f64);
            }
            match self.granularity.next_boundary(boundary) {
                Some(next) => boundary = next,
                None => break,
            }
        }
        (!narrowed.is_empty()).then_some(narrowed)
    }

    fn minimum_tick_count(&self, range: CandidateRange) -> u64 {
        self.aligned_span(range).map_or(0, |(first, last)| {
            let span_millis = (last - first).num_milliseconds();
            (span_millis / self.granularity.maximum_millis()) as u64 + 1
        })
    }

    fn is_header(&self, index: f64) -> bool {
        self.base
            .datetime_at(index)
            .is_some_and(|dt| self.granularity.is_header(dt))
    }

    fn format_label(&self, index: f64) -> String {
        match self.base.datetime_at(index) {
            Some(dt) => self.granularity.format(dt, self.granularity.is_header(dt)),
            None => String::new(),
        }
    }
}

/// Every calendar granularity, finest first, over `base`.
#[must_use]
pub fn standard_calendar_catalog(base: DateAxisBase) -> WindowCatalog {
    CalendarGranularity::ALL
        .into_iter()
        .fold(WindowCatalog::new(), |catalog, granularity| {
            catalog.with_window(CalendarWindow::new(granularity, base))
        })
}
