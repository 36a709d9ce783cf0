use crate::{
    DEFAULT_CONTROL, DEFAULT_MEASUREMENT, DEFAULT_TRANSITION, engine::noise::NoiseSpec,
    error::ParamError,
};

/// Model of a scalar linear system.
///
/// x_(n+1) = a*x + b*u + w, w ~ N(0, process_noise)
/// y = c*x + v, v ~ N(0, measurement_noise)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub process_noise: NoiseSpec,
    pub measurement_noise: NoiseSpec,
}

impl FilterParams {
    /// Random-walk model: the state persists unchanged and is observed directly.
    pub const fn new(process_noise: f64, measurement_noise: f64) -> Self {
        FilterParams {
            a: DEFAULT_TRANSITION,
            b: DEFAULT_CONTROL,
            c: DEFAULT_MEASUREMENT,
            process_noise: NoiseSpec::new(process_noise),
            measurement_noise: NoiseSpec::new(measurement_noise),
        }
    }

    pub const fn with_transition(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub const fn with_control(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    pub const fn with_measurement(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Checks the parameters describe a usable model. The filter itself never
    /// calls this; it is for callers that want to reject bad input up front.
    pub fn validate(&self) -> Result<(), ParamError> {
        let r = self.process_noise.variance();
        let q = self.measurement_noise.variance();

        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c), ("r", r), ("q", q)] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name, value });
            }
        }

        for (name, value) in [("r", r), ("q", q)] {
            if value < 0.0 {
                return Err(ParamError::NegativeVariance { name, value });
            }
        }

        if self.c == 0.0 {
            return Err(ParamError::DegenerateMeasurement);
        }

        Ok(())
    }
}
