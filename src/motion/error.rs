use thiserror::Error;

/// Rejected motion configuration. Raised by the validated constructors so a
/// bad literal in a theme table is caught where it is written, not mid-frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("keyframes need at least two stops, got {0}")]
    TooFewStops(usize),

    #[error("keyframe input has {input} stops but output has {output}")]
    StopCountMismatch { input: usize, output: usize },

    #[error("keyframe input must be strictly increasing (stop {index})")]
    UnsortedStops { index: usize },

    #[error("damping ratio {ratio:.2} is below {min:.2}; the spring would overshoot")]
    Underdamped { ratio: f64, min: f64 },
}

pub type Result<T> = std::result::Result<T, MotionError>;

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MotionError::NotFinite { field, value })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(MotionError::Negative { field, value });
    }
    Ok(value)
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(MotionError::NotPositive { field, value });
    }
    Ok(value)
}
