use thiserror::Error;

/// Reasons a set of model parameters is rejected by [`FilterParams::validate`].
///
/// [`FilterParams::validate`]: crate::config::FilterParams::validate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} is a variance and must not be negative, got {value}")]
    NegativeVariance { name: &'static str, value: f64 },

    #[error("measurement coefficient is zero, the first measurement cannot be inverted")]
    DegenerateMeasurement,
}
