mod axis_config;
mod json_contract;
mod separator_cache;
mod window_axis;

pub use axis_config::WindowAxisConfig;
pub use json_contract::{WINDOW_AXIS_CONFIG_JSON_SCHEMA_V1, WindowAxisConfigJsonContractV1};
pub use separator_cache::{
    CacheKey, SeparationState, SeparatorCache, SeparatorCacheStats, SeparatorElement,
};
pub use window_axis::{AxisPreparation, WindowAxis};
