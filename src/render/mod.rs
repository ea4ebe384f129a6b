mod mark;
mod null_surface;
mod scene_surface;

pub use mark::{LabelBox, MarkEmphasis, MarkInk, SeparatorMark, estimate_label_width_px};
pub use null_surface::NullSurface;
pub use scene_surface::{SceneSurface, SeparatorStyle};

use crate::api::SeparatorElement;
use crate::core::{ChartContext, LabelFootprint};
use crate::error::AxisResult;

/// Contract implemented by anything that draws axis separators.
///
/// The axis owns the elements and their visuals; a surface creates or updates
/// `element.visual` on render and tears it down on release.
pub trait SeparatorSurface {
    type Visual;

    /// Draws `element` (its `value`, `label` and `is_header` are already set)
    /// and reports the pixel footprint of its label.
    fn render_separator(
        &mut self,
        element: &mut SeparatorElement<Self::Visual>,
        chart: &ChartContext,
    ) -> AxisResult<LabelFootprint>;

    /// Called once for every element that dropped out of the axis.
    fn release_separator(&mut self, element: SeparatorElement<Self::Visual>);
}
