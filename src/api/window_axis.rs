use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::core::{
    AxisExtent, AxisMargin, ChartContext, SeparatorRequest, SeparatorSelection, SharedWindow,
    WindowCatalog, calculate_separator_indices, empty_window,
};
use crate::error::{AxisError, AxisResult};
use crate::render::SeparatorSurface;

use super::separator_cache::{
    CacheKey, SeparationState, SeparatorCache, SeparatorCacheStats, SeparatorElement,
};
use super::WindowAxisConfig;

/// Result of one [`WindowAxis::prepare_chart`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPreparation {
    /// Space the layout pass should reserve for this axis' labels.
    pub margin: AxisMargin,
    /// Name of the window selected for this pass.
    pub window: String,
    /// `true` when the selected window differs from the previous pass.
    pub window_changed: bool,
    pub separator_count: usize,
    pub created: usize,
    pub kept: usize,
    pub removed: usize,
    /// Unit override when configured, otherwise the computed magnitude.
    pub effective_magnitude: f64,
    pub generation: u64,
    /// `true` when the pass was a no-op (degenerate extent or hidden labels).
    pub skipped: bool,
}

impl AxisPreparation {
    fn skipped(window: &SharedWindow, generation: u64) -> Self {
        Self {
            margin: AxisMargin::default(),
            window: window.name().to_owned(),
            window_changed: false,
            separator_count: 0,
            created: 0,
            kept: 0,
            removed: 0,
            effective_magnitude: 0.0,
            generation,
            skipped: true,
        }
    }
}

/// Cartesian axis whose separators come from a catalog of windows.
///
/// All state is per axis instance and is only mutated from the layout pass;
/// `V` is the visual object type of the surface that draws the separators.
#[derive(Debug)]
pub struct WindowAxis<V = ()> {
    config: WindowAxisConfig,
    catalog: WindowCatalog,
    cache: SeparatorCache<V>,
    selected_window: SharedWindow,
    magnitude: f64,
    step: f64,
    last_extent: Option<AxisExtent>,
}

impl<V> WindowAxis<V> {
    pub fn new(config: WindowAxisConfig, catalog: WindowCatalog) -> AxisResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            cache: SeparatorCache::new(),
            selected_window: empty_window(),
            magnitude: 0.0,
            step: 1.0,
            last_extent: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> WindowAxisConfig {
        self.config
    }

    pub fn set_config(&mut self, config: WindowAxisConfig) -> AxisResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn catalog(&self) -> &WindowCatalog {
        &self.catalog
    }

    /// Replaces the window catalog; takes effect on the next pass.
    pub fn set_catalog(&mut self, catalog: WindowCatalog) {
        self.catalog = catalog;
    }

    #[must_use]
    pub fn selected_window(&self) -> &SharedWindow {
        &self.selected_window
    }

    /// Order-of-ten separator budget from the last computation, 0 when nothing fit.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Always 1 on a windowed axis: ticks are positions, not multiples of a step.
    #[must_use]
    pub fn nominal_step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.cache.generation()
    }

    #[must_use]
    pub fn last_extent(&self) -> Option<AxisExtent> {
        self.last_extent
    }

    #[must_use]
    pub fn cache_stats(&self) -> SeparatorCacheStats {
        self.cache.stats()
    }

    /// Cached separator elements, in first-drawn order.
    pub fn elements(&self) -> impl Iterator<Item = &SeparatorElement<V>> {
        self.cache.iter()
    }

    /// Picks the window and separator positions for `extent`.
    ///
    /// Updates the selected window, the magnitude and the nominal step.
    pub fn calculate_separator_indices(
        &mut self,
        extent: AxisExtent,
        available_width_px: f64,
        unit: f64,
    ) -> AxisResult<SeparatorSelection> {
        if let Some(step) = self.config.step {
            warn!(step, "fixed step configured on a window axis");
            return Err(AxisError::FixedStepNotSupported { step });
        }

        let request = SeparatorRequest {
            visible_low: extent.bot_limit,
            visible_high: extent.top_limit,
            available_width_px,
            unit,
            evaluates_unit_width: self.config.evaluates_unit_width,
            clean_factor: self.config.clean_factor,
        };
        let selection = calculate_separator_indices(&self.catalog, &request);

        self.step = 1.0;
        self.magnitude = selection.magnitude;
        self.selected_window = selection.window.clone();
        Ok(selection)
    }

    /// Runs one redraw of the axis and returns the label margin it needs.
    ///
    /// Separators are resolved through the cache so elements whose key survives
    /// keep their visual; elements that dropped out are released through
    /// `surface` and evicted before returning.
    pub fn prepare_chart<S>(
        &mut self,
        extent: AxisExtent,
        chart: &ChartContext,
        surface: &mut S,
    ) -> AxisResult<AxisPreparation>
    where
        S: SeparatorSurface<Visual = V>,
    {
        if let Some(step) = self.config.step {
            return Err(AxisError::FixedStepNotSupported { step });
        }
        if chart.orientation != self.config.orientation {
            return Err(AxisError::OrientationMismatch {
                axis: self.config.orientation,
                chart: chart.orientation,
            });
        }
        if !self.config.show_labels || extent.is_degenerate(self.step) {
            trace!(
                bot_limit = extent.bot_limit,
                top_limit = extent.top_limit,
                show_labels = self.config.show_labels,
                "skip window axis pass"
            );
            return Ok(AxisPreparation::skipped(
                &self.selected_window,
                self.cache.generation(),
            ));
        }

        let generation = self.cache.begin_pass();
        let tolerance = self.step / 10.0;
        let unit = self.config.unit.unwrap_or(1.0);
        let previous_window = Arc::clone(&self.selected_window);

        let mut selection =
            self.calculate_separator_indices(extent, chart.available_length_px(), unit)?;
        selection.indices.sort_by(f64::total_cmp);

        let window = selection.window;
        let window_changed = !Arc::ptr_eq(&window, &previous_window);
        if window_changed {
            debug!(
                from = previous_window.name(),
                to = window.name(),
                supported_count = selection.supported_count,
                "window axis selection changed"
            );
        }

        let first_pass = self.last_extent.is_none();
        let mut margin = AxisMargin::default();
        for index in selection.indices.iter().copied() {
            let key = CacheKey::quantize(index, tolerance);
            let (element, is_new) = self.cache.resolve(key);
            element.value = index;
            element.is_header = window.is_header(index);
            element.label = window.format_label(index);
            // Keys can repeat within a pass; the state follows the inserting pass.
            element.state = if first_pass || element.created_in(generation) {
                SeparationState::InitialAdd
            } else {
                SeparationState::Keep
            };
            trace!(
                index,
                key = key.value(),
                is_new,
                is_header = element.is_header,
                "resolve separator"
            );

            let footprint = surface.render_separator(element, chart)?;
            margin.accumulate(footprint);
        }

        let (created, kept) = self
            .cache
            .iter()
            .filter(|element| element.generation == generation)
            .fold((0, 0), |(created, kept), element| {
                if element.created_in(generation) {
                    (created + 1, kept)
                } else {
                    (created, kept + 1)
                }
            });

        let stale = self.cache.evict_stale();
        let removed = stale.len();
        for element in stale {
            surface.release_separator(element);
        }
        self.last_extent = Some(extent);

        let effective_magnitude = self.config.unit.unwrap_or(self.magnitude);
        debug!(
            window = window.name(),
            generation,
            separators = selection.indices.len(),
            created,
            kept,
            removed,
            "window axis pass complete"
        );

        Ok(AxisPreparation {
            margin,
            window: window.name().to_owned(),
            window_changed,
            separator_count: selection.indices.len(),
            created,
            kept,
            removed,
            effective_magnitude,
            generation,
            skipped: false,
        })
    }

    /// Releases every cached separator and forgets the previous extent.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: SeparatorSurface<Visual = V>,
    {
        for element in self.cache.clear() {
            surface.release_separator(element);
        }
        self.last_extent = None;
        self.selected_window = empty_window();
    }
}
