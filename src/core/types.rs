use serde::{Deserialize, Serialize};

/// Pixel size of the chart control hosting the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Direction the axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    X,
    Y,
}

/// Visible numeric range of the axis for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub bot_limit: f64,
    pub top_limit: f64,
}

impl AxisExtent {
    #[must_use]
    pub fn new(bot_limit: f64, top_limit: f64) -> Self {
        Self {
            bot_limit,
            top_limit,
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.top_limit - self.bot_limit
    }

    /// Returns `true` when the extent is too small to hold any separator for `step`.
    #[must_use]
    pub fn is_degenerate(self, step: f64) -> bool {
        // NaN spans land here too.
        !(self.span().abs() > step * 0.01)
    }
}

/// Layout-supplied handle passed to the rendering surface with every separator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartContext {
    pub viewport: Viewport,
    pub orientation: AxisOrientation,
}

impl ChartContext {
    #[must_use]
    pub fn new(viewport: Viewport, orientation: AxisOrientation) -> Self {
        Self {
            viewport,
            orientation,
        }
    }

    /// Pixel length available to separators along the axis direction.
    #[must_use]
    pub fn available_length_px(self) -> f64 {
        match self.orientation {
            AxisOrientation::X => f64::from(self.viewport.width),
            AxisOrientation::Y => f64::from(self.viewport.height),
        }
    }
}
