use thiserror::Error;

use crate::core::AxisOrientation;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    /// Windowed axes choose their own separators; a caller-supplied step is a contract violation.
    #[error("window axis separators require an unset step, got step={step}")]
    FixedStepNotSupported { step: f64 },

    #[error("axis configured as {axis:?} was driven by a {chart:?} chart context")]
    OrientationMismatch {
        axis: AxisOrientation,
        chart: AxisOrientation,
    },

    #[error("invalid axis config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
