use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

use super::WindowAxisConfig;

pub const WINDOW_AXIS_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowAxisConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: WindowAxisConfig,
}

impl WindowAxisConfig {
    pub fn to_json_contract_v1_pretty(self) -> AxisResult<String> {
        let payload = WindowAxisConfigJsonContractV1 {
            schema_version: WINDOW_AXIS_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidConfig(format!("failed to parse config json: {e}")))?;

        let config = if value.get("schema_version").is_some() {
            let payload: WindowAxisConfigJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| {
                    AxisError::InvalidConfig(format!("failed to parse config contract: {e}"))
                })?;
            if payload.schema_version != WINDOW_AXIS_CONFIG_JSON_SCHEMA_V1 {
                return Err(AxisError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| AxisError::InvalidConfig(format!("failed to parse config: {e}")))?
        };

        config.validate()?;
        Ok(config)
    }
}
