use std::fmt;
use std::sync::{Arc, LazyLock};

use smallvec::SmallVec;

/// Half-open run of integer candidate positions `start..end`.
///
/// Windows step over their own boundaries inside the run instead of testing
/// every position, so the run may be far wider than any tick list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateRange {
    pub start: i64,
    pub end: i64,
}

impl CandidateRange {
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> u64 {
        if self.end <= self.start {
            return 0;
        }
        (i128::from(self.end) - i128::from(self.start)) as u64
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub fn contains(self, position: i64) -> bool {
        self.start <= position && position < self.end
    }

    /// Every position as an axis index. Materializes the whole run.
    pub fn positions(self) -> impl Iterator<Item = f64> {
        (self.start..self.end).map(|position| position as f64)
    }
}

/// Granularity strategy for a non-uniform axis scale (days, weeks, months...).
///
/// Implementations must be pure: the engine may call any method several times
/// per redraw and expects identical answers for identical inputs.
pub trait AxisWindow: fmt::Debug + Send + Sync {
    /// Stable identity of the granularity, e.g. `"month"`.
    fn name(&self) -> &str;

    /// Minimum pixel width one separator of this window needs. Must be positive.
    fn minimum_separator_width(&self) -> f64;

    /// Narrows the candidate positions of `range` to this window's ticks.
    ///
    /// Returns `None` when the granularity cannot be represented over `range`.
    fn try_narrow(&self, range: CandidateRange) -> Option<Vec<f64>>;

    /// Lower bound on the number of ticks `try_narrow` yields over `range`.
    ///
    /// Lets the calculator skip a window that cannot fit without narrowing it.
    fn minimum_tick_count(&self, _range: CandidateRange) -> u64 {
        0
    }

    /// Whether `index` starts a higher-level grouping (e.g. the first day of a month).
    fn is_header(&self, index: f64) -> bool;

    fn format_label(&self, index: f64) -> String;
}

pub type SharedWindow = Arc<dyn AxisWindow>;

pub const EMPTY_WINDOW_NAME: &str = "empty";

/// Placeholder selected when no catalog entry fits: yields no ticks and no labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyWindow;

impl AxisWindow for EmptyWindow {
    fn name(&self) -> &str {
        EMPTY_WINDOW_NAME
    }

    fn minimum_separator_width(&self) -> f64 {
        1.0
    }

    fn try_narrow(&self, _range: CandidateRange) -> Option<Vec<f64>> {
        Some(Vec::new())
    }

    fn is_header(&self, _index: f64) -> bool {
        false
    }

    fn format_label(&self, _index: f64) -> String {
        String::new()
    }
}

static EMPTY_WINDOW: LazyLock<SharedWindow> = LazyLock::new(|| Arc::new(EmptyWindow));

/// Shared empty window; every call returns the same allocation.
#[must_use]
pub fn empty_window() -> SharedWindow {
    Arc::clone(&EMPTY_WINDOW)
}

/// Ordered window candidates; earlier entries win ties.
#[derive(Clone, Default)]
pub struct WindowCatalog {
    windows: SmallVec<[SharedWindow; 8]>,
}

impl WindowCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_window(mut self, window: impl AxisWindow + 'static) -> Self {
        self.windows.push(Arc::new(window));
        self
    }

    #[must_use]
    pub fn with_shared(mut self, window: SharedWindow) -> Self {
        self.windows.push(window);
        self
    }

    pub fn push(&mut self, window: SharedWindow) {
        self.windows.push(window);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedWindow> {
        self.windows.iter()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.windows.iter().map(|window| window.name()).collect()
    }
}

impl FromIterator<SharedWindow> for WindowCatalog {
    fn from_iter<T: IntoIterator<Item = SharedWindow>>(iter: T) -> Self {
        Self {
            windows: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for WindowCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
