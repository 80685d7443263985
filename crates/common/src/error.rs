/// Errors raised while validating configuration at construction time.
///
/// Invalid configuration fails fast at startup; nothing in the per-frame
/// path returns these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("{name} must be > 0, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("pitch bound {value} must lie strictly inside (-pi/2, pi/2)")]
    PitchOutOfRange { value: f32 },
}

/// Check that `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { name, value });
    }
    Ok(())
}

pub fn require_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { name, value });
    }
    Ok(())
}

/// Check that `min <= max` and both are finite.
pub fn require_range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    require_finite(name, min)?;
    require_finite(name, max)?;
    if min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}
