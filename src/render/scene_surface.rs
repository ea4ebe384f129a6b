use crate::api::SeparatorElement;
use crate::core::{AxisExtent, AxisOrientation, ChartContext, LabelFootprint};
use crate::error::{AxisError, AxisResult};
use crate::render::{MarkEmphasis, MarkInk, SeparatorMark, SeparatorSurface};

/// Inks for regular and header separators plus shared spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatorStyle {
    pub regular: MarkInk,
    pub header: MarkInk,
    /// Gap between the tick end and the label box.
    pub label_gap_px: f64,
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self {
            regular: MarkInk {
                rgba: [0.30, 0.32, 0.36, 1.0],
                tick_length_px: 5.0,
                font_size_px: 11.0,
            },
            header: MarkInk {
                rgba: [0.10, 0.11, 0.13, 1.0],
                tick_length_px: 8.0,
                font_size_px: 12.0,
            },
            label_gap_px: 3.0,
        }
    }
}

impl SeparatorStyle {
    #[must_use]
    pub fn ink(&self, emphasis: MarkEmphasis) -> MarkInk {
        match emphasis {
            MarkEmphasis::Regular => self.regular,
            MarkEmphasis::Header => self.header,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        self.regular.validate()?;
        self.header.validate()?;
        if !self.label_gap_px.is_finite() || self.label_gap_px < 0.0 {
            return Err(AxisError::InvalidData(
                "label gap must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Surface that lays every separator out as a [`SeparatorMark`].
///
/// Ticks are placed by projecting the separator value over the visible
/// extent onto the chart's axis length. Label sizes are estimated from the
/// text, so layouts are deterministic and need no font backend.
#[derive(Debug, Clone)]
pub struct SceneSurface {
    extent: AxisExtent,
    style: SeparatorStyle,
    created_marks: usize,
    updated_marks: usize,
    released_marks: usize,
}

fn checked_extent(extent: AxisExtent) -> AxisResult<AxisExtent> {
    let span = extent.span();
    if !extent.bot_limit.is_finite() || !span.is_finite() || span == 0.0 {
        return Err(AxisError::InvalidData(format!(
            "scene extent must be finite and non-empty, got [{}, {}]",
            extent.bot_limit, extent.top_limit
        )));
    }
    Ok(extent)
}

impl SceneSurface {
    pub fn new(extent: AxisExtent, style: SeparatorStyle) -> AxisResult<Self> {
        style.validate()?;
        Ok(Self {
            extent: checked_extent(extent)?,
            style,
            created_marks: 0,
            updated_marks: 0,
            released_marks: 0,
        })
    }

    /// Follows the visible extent before the next pass.
    pub fn set_extent(&mut self, extent: AxisExtent) -> AxisResult<()> {
        self.extent = checked_extent(extent)?;
        Ok(())
    }

    #[must_use]
    pub fn extent(&self) -> AxisExtent {
        self.extent
    }

    #[must_use]
    pub fn style(&self) -> SeparatorStyle {
        self.style
    }

    #[must_use]
    pub fn created_marks(&self) -> usize {
        self.created_marks
    }

    #[must_use]
    pub fn updated_marks(&self) -> usize {
        self.updated_marks
    }

    #[must_use]
    pub fn released_marks(&self) -> usize {
        self.released_marks
    }

    /// Pixel offset of `value` along an axis `length_px` long.
    ///
    /// Vertical axes count rows from the top, so the top limit maps to 0.
    pub fn offset_px(
        &self,
        value: f64,
        orientation: AxisOrientation,
        length_px: f64,
    ) -> AxisResult<f64> {
        if !value.is_finite() {
            return Err(AxisError::InvalidData(format!(
                "separator value must be finite, got {value}"
            )));
        }
        if !length_px.is_finite() || length_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "axis length must be finite and > 0".to_owned(),
            ));
        }
        let along = (value - self.extent.bot_limit) / self.extent.span() * length_px;
        Ok(match orientation {
            AxisOrientation::X => along,
            AxisOrientation::Y => length_px - along,
        })
    }

    /// Validated marks of `elements`, ordered along the axis.
    pub fn marks<'a>(
        &self,
        elements: impl IntoIterator<Item = &'a SeparatorElement<SeparatorMark>>,
    ) -> AxisResult<Vec<&'a SeparatorMark>> {
        let mut marks: Vec<&SeparatorMark> = elements
            .into_iter()
            .filter_map(|element| element.visual.as_ref())
            .collect();
        for mark in &marks {
            mark.validate()?;
        }
        marks.sort_by(|a, b| a.offset_px.total_cmp(&b.offset_px));
        Ok(marks)
    }

    /// Pairs of neighbouring marks whose labels overlap.
    #[must_use]
    pub fn label_collisions(marks: &[&SeparatorMark]) -> usize {
        marks
            .windows(2)
            .filter(|pair| pair[0].label_box.overlaps(pair[1].label_box))
            .count()
    }
}

impl SeparatorSurface for SceneSurface {
    type Visual = SeparatorMark;

    fn render_separator(
        &mut self,
        element: &mut SeparatorElement<SeparatorMark>,
        chart: &ChartContext,
    ) -> AxisResult<LabelFootprint> {
        let length = chart.available_length_px();
        let offset = self.offset_px(element.value, chart.orientation, length)?;
        let emphasis = MarkEmphasis::from_header(element.is_header);
        let mark = SeparatorMark::layout(
            element.value,
            element.label.clone(),
            emphasis,
            chart.orientation,
            offset,
            self.style.ink(emphasis),
            self.style.label_gap_px,
        );
        mark.validate()?;
        let footprint = mark.footprint(length);

        if element.visual.replace(mark).is_some() {
            self.updated_marks += 1;
        } else {
            self.created_marks += 1;
        }
        Ok(footprint)
    }

    fn release_separator(&mut self, element: SeparatorElement<SeparatorMark>) {
        if element.visual.is_some() {
            self.released_marks += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SceneSurface, SeparatorStyle};
    use crate::core::{AxisExtent, AxisOrientation};

    #[test]
    fn projects_values_across_the_extent() {
        let surface = SceneSurface::new(AxisExtent::new(10.0, 110.0), SeparatorStyle::default())
            .expect("valid surface");
        assert_eq!(
            surface.offset_px(60.0, AxisOrientation::X, 1000.0).expect("px"),
            500.0
        );
        assert_eq!(
            surface.offset_px(110.0, AxisOrientation::Y, 400.0).expect("px"),
            0.0
        );
        assert_eq!(
            surface.offset_px(10.0, AxisOrientation::Y, 400.0).expect("px"),
            400.0
        );
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let style = SeparatorStyle::default();
        assert!(SceneSurface::new(AxisExtent::new(1.0, 1.0), style).is_err());
        assert!(SceneSurface::new(AxisExtent::new(f64::NAN, 1.0), style).is_err());

        let mut surface = SceneSurface::new(AxisExtent::new(0.0, 1.0), style).expect("valid");
        assert!(surface.offset_px(0.5, AxisOrientation::X, 0.0).is_err());
        assert!(surface.offset_px(f64::NAN, AxisOrientation::X, 10.0).is_err());
        assert!(surface.set_extent(AxisExtent::new(2.0, 2.0)).is_err());
        assert_eq!(surface.extent(), AxisExtent::new(0.0, 1.0));

        let mut bad_style = style;
        bad_style.label_gap_px = -1.0;
        assert!(SceneSurface::new(AxisExtent::new(0.0, 1.0), bad_style).is_err());
    }
}
