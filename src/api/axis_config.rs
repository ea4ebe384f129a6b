use serde::{Deserialize, Serialize};

use crate::core::AxisOrientation;
use crate::error::{AxisError, AxisResult};

/// Layout-facing configuration of a windowed axis.
///
/// This type is serializable so host applications can persist axis setup next
/// to the rest of their chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowAxisConfig {
    #[serde(default = "default_orientation")]
    pub orientation: AxisOrientation,
    #[serde(default = "default_show_labels")]
    pub show_labels: bool,
    /// Multiplier on every window's minimum separator width.
    #[serde(default = "default_clean_factor")]
    pub clean_factor: f64,
    /// Explicit unit override; wins over the computed magnitude when set.
    #[serde(default)]
    pub unit: Option<f64>,
    /// Reserve one trailing unit at the top of the range (bar-like series).
    #[serde(default)]
    pub evaluates_unit_width: bool,
    /// Fixed separator step. Windowed axes pick their own ticks, so this must stay unset.
    #[serde(default)]
    pub step: Option<f64>,
}

impl Default for WindowAxisConfig {
    fn default() -> Self {
        Self {
            orientation: default_orientation(),
            show_labels: default_show_labels(),
            clean_factor: default_clean_factor(),
            unit: None,
            evaluates_unit_width: false,
            step: None,
        }
    }
}

impl WindowAxisConfig {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    #[must_use]
    pub fn with_clean_factor(mut self, clean_factor: f64) -> Self {
        self.clean_factor = clean_factor;
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: Option<f64>) -> Self {
        self.unit = unit;
        self
    }

    #[must_use]
    pub fn with_evaluates_unit_width(mut self, evaluates_unit_width: bool) -> Self {
        self.evaluates_unit_width = evaluates_unit_width;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: Option<f64>) -> Self {
        self.step = step;
        self
    }

    pub fn validate(self) -> AxisResult<()> {
        if let Some(step) = self.step {
            return Err(AxisError::FixedStepNotSupported { step });
        }
        if !self.clean_factor.is_finite() || self.clean_factor <= 0.0 {
            return Err(AxisError::InvalidConfig(
                "clean factor must be finite and > 0".to_owned(),
            ));
        }
        if self
            .unit
            .is_some_and(|unit| !unit.is_finite() || unit <= 0.0)
        {
            return Err(AxisError::InvalidConfig(
                "unit override must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| AxisError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_orientation() -> AxisOrientation {
    AxisOrientation::X
}

fn default_show_labels() -> bool {
    true
}

fn default_clean_factor() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::WindowAxisConfig;
    use crate::core::AxisOrientation;
    use crate::error::AxisError;

    #[test]
    fn defaults_are_valid() {
        let config = WindowAxisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.clean_factor, 3.0);
        assert!(config.show_labels);
        assert_eq!(config.orientation, AxisOrientation::X);
    }

    #[test]
    fn fixed_step_is_a_contract_violation() {
        let config = WindowAxisConfig::default().with_step(Some(2.0));
        assert!(matches!(
            config.validate(),
            Err(AxisError::FixedStepNotSupported { step }) if step == 2.0
        ));
    }

    #[test]
    fn invalid_clean_factor_and_unit_are_rejected() {
        assert!(
            WindowAxisConfig::default()
                .with_clean_factor(0.0)
                .validate()
                .is_err()
        );
        assert!(
            WindowAxisConfig::default()
                .with_unit(Some(f64::NAN))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = WindowAxisConfig::from_json_str(r#"{"show_labels": false}"#).expect("parse");
        assert!(!config.show_labels);
        assert_eq!(config.clean_factor, 3.0);
        assert_eq!(config.step, None);
    }

    #[test]
    fn json_with_fixed_step_is_rejected() {
        assert!(WindowAxisConfig::from_json_str(r#"{"step": 1.0}"#).is_err());
        assert!(WindowAxisConfig::from_json_str("not json").is_err());
    }
}
