//! Drawable form of one axis separator.
//!
//! A [`SeparatorMark`] is a tick leaving the axis line plus the box its label
//! occupies beyond the tick, both in axis pixel space with rows growing
//! downwards. How a mark is painted depends only on its [`MarkEmphasis`].

use crate::core::{AxisOrientation, LabelFootprint};
use crate::error::{AxisError, AxisResult};

/// Whether a separator opens a higher-level group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkEmphasis {
    Regular,
    Header,
}

impl MarkEmphasis {
    #[must_use]
    pub const fn from_header(is_header: bool) -> Self {
        if is_header {
            Self::Header
        } else {
            Self::Regular
        }
    }
}

/// Paint and size of the marks at one emphasis level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkInk {
    /// Straight RGBA, every channel in `0..=1`.
    pub rgba: [f64; 4],
    pub tick_length_px: f64,
    pub font_size_px: f64,
}

impl MarkInk {
    pub fn validate(self) -> AxisResult<()> {
        if self
            .rgba
            .iter()
            .any(|channel| !channel.is_finite() || !(0.0..=1.0).contains(channel))
        {
            return Err(AxisError::InvalidData(
                "mark color channels must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.tick_length_px.is_finite() || self.tick_length_px < 0.0 {
            return Err(AxisError::InvalidData(
                "tick length must be finite and >= 0".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Pixel rectangle taken by a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl LabelBox {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Strict overlap; boxes that only touch do not collide.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// One separator laid out along an axis of some pixel length.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatorMark {
    pub value: f64,
    pub emphasis: MarkEmphasis,
    pub orientation: AxisOrientation,
    /// Tick position along the axis; on vertical axes row 0 is the top value.
    pub offset_px: f64,
    pub tick_length_px: f64,
    pub label: String,
    pub label_box: LabelBox,
}

impl SeparatorMark {
    /// Lays out a mark whose tick sits `offset_px` along the axis.
    ///
    /// Horizontal axes center the label under the tick; vertical axes put it
    /// right of the tick, centered on the tick row.
    #[must_use]
    pub fn layout(
        value: f64,
        label: String,
        emphasis: MarkEmphasis,
        orientation: AxisOrientation,
        offset_px: f64,
        ink: MarkInk,
        label_gap_px: f64,
    ) -> Self {
        let label_width = estimate_label_width_px(&label, ink.font_size_px);
        let label_start = ink.tick_length_px + label_gap_px;
        let label_box = match orientation {
            AxisOrientation::X => LabelBox {
                left: offset_px - label_width / 2.0,
                top: label_start,
                right: offset_px + label_width / 2.0,
                bottom: label_start + ink.font_size_px,
            },
            AxisOrientation::Y => LabelBox {
                left: label_start,
                top: offset_px - ink.font_size_px / 2.0,
                right: label_start + label_width,
                bottom: offset_px + ink.font_size_px / 2.0,
            },
        };
        Self {
            value,
            emphasis,
            orientation,
            offset_px,
            tick_length_px: ink.tick_length_px,
            label,
            label_box,
        }
    }

    /// Tick endpoints `(x1, y1, x2, y2)`, starting on the axis line.
    #[must_use]
    pub fn tick_segment(&self) -> (f64, f64, f64, f64) {
        match self.orientation {
            AxisOrientation::X => (self.offset_px, 0.0, self.offset_px, self.tick_length_px),
            AxisOrientation::Y => (0.0, self.offset_px, self.tick_length_px, self.offset_px),
        }
    }

    /// Room the label needs across the axis and past either end of an axis
    /// `length_px` long.
    #[must_use]
    pub fn footprint(&self, length_px: f64) -> LabelFootprint {
        let label = self.label_box;
        match self.orientation {
            AxisOrientation::X => LabelFootprint {
                taken_width: label.width(),
                taken_height: label.bottom,
                left: (-label.left).max(0.0),
                right: (label.right - length_px).max(0.0),
                top: 0.0,
                bottom: label.bottom,
            },
            AxisOrientation::Y => LabelFootprint {
                taken_width: label.right,
                taken_height: label.height(),
                left: 0.0,
                right: label.right,
                top: (-label.top).max(0.0),
                bottom: (label.bottom - length_px).max(0.0),
            },
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        let label = self.label_box;
        let finite = [
            self.offset_px,
            self.tick_length_px,
            label.left,
            label.top,
            label.right,
            label.bottom,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !finite {
            return Err(AxisError::InvalidData(format!(
                "separator mark at {} has non-finite geometry",
                self.value
            )));
        }
        Ok(())
    }
}

/// Backend-independent label width: digits and capitals are wide, separators
/// narrow, never less than one em for a non-empty label.
#[must_use]
pub fn estimate_label_width_px(label: &str, font_size_px: f64) -> f64 {
    if label.is_empty() {
        return 0.0;
    }
    let ems: f64 = label
        .chars()
        .map(|ch| match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' | ' ' => 0.34,
            'A'..='Z' => 0.68,
            _ => 0.56,
        })
        .sum();
    ems.max(1.0) * font_size_px
}
