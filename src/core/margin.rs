use serde::{Deserialize, Serialize};

/// Pixel footprint of one rendered separator label, as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelFootprint {
    pub taken_width: f64,
    pub taken_height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Space an axis asks the layout pass to reserve for its labels.
///
/// Every side is a running maximum over the footprints folded into it, so the
/// result never depends on the order separators were drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisMargin {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl AxisMargin {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }

    pub fn accumulate(&mut self, footprint: LabelFootprint) {
        self.width = max_finite(self.width, footprint.taken_width);
        self.height = max_finite(self.height, footprint.taken_height);
        self.left = max_finite(self.left, footprint.left);
        self.right = max_finite(self.right, footprint.right);
        self.top = max_finite(self.top, footprint.top);
        self.bottom = max_finite(self.bottom, footprint.bottom);
    }

    #[must_use]
    pub fn from_footprints(footprints: impl IntoIterator<Item = LabelFootprint>) -> Self {
        let mut margin = Self::default();
        for footprint in footprints {
            margin.accumulate(footprint);
        }
        margin
    }
}

fn max_finite(current: f64, candidate: f64) -> f64 {
    if candidate.is_finite() && candidate > current {
        candidate
    } else {
        current
    }
}
