//! window-axis: separator engine for charts with non-uniform (windowed) axes.
//!
//! Given a catalog of candidate windows (days, weeks, months...), the engine
//! picks the finest granularity that fits the available pixel width, computes
//! the tick positions, and reuses separator elements across redraws through a
//! generation-stamped cache.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisPreparation, WindowAxis, WindowAxisConfig};
pub use error::{AxisError, AxisResult};
