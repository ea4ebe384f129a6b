use crate::api::SeparatorElement;
use crate::core::{ChartContext, LabelFootprint};
use crate::error::AxisResult;
use crate::render::SeparatorSurface;

/// Headless surface used by tests and layout-only passes.
///
/// Every separator reports the same configured footprint; render and release
/// calls are counted so callers can check what a pass did.
#[derive(Debug, Clone, Default)]
pub struct NullSurface {
    pub footprint: LabelFootprint,
    pub rendered: usize,
    pub released: usize,
    pub last_labels: Vec<String>,
}

impl NullSurface {
    #[must_use]
    pub fn with_footprint(footprint: LabelFootprint) -> Self {
        Self {
            footprint,
            ..Self::default()
        }
    }
}

impl SeparatorSurface for NullSurface {
    type Visual = ();

    fn render_separator(
        &mut self,
        element: &mut SeparatorElement<()>,
        _chart: &ChartContext,
    ) -> AxisResult<LabelFootprint> {
        element.visual.get_or_insert(());
        self.rendered += 1;
        self.last_labels.push(element.label.clone());
        Ok(self.footprint)
    }

    fn release_separator(&mut self, _element: SeparatorElement<()>) {
        self.released += 1;
    }
}
