use log::{debug, trace, warn};

use crate::{config::FilterParams, error::ParamError, estimators::Filter};

/// One-dimensional linear Kalman filter.
///
/// Nothing is known about the signal until the first measurement arrives, so
/// the estimate is seeded from that measurement alone. Every later call runs a
/// predict step through the model followed by a correction against the new
/// measurement.
#[derive(Clone, Debug)]
pub struct ScalarKalmanFilter {
    // x_(n+1) = Ax+Bu+w, w ~ N(0, r)
    // y = Cx + v, v ~ N(0, q)
    params: FilterParams,

    // None until the first measurement
    state: Option<Gaussian>,
}

impl ScalarKalmanFilter {
    /// Filter for a signal that persists between steps and is observed directly.
    pub fn new(process_noise: f64, measurement_noise: f64) -> Self {
        Self::from_params(FilterParams::new(process_noise, measurement_noise))
    }

    pub fn with_model(process_noise: f64, measurement_noise: f64, a: f64, b: f64, c: f64) -> Self {
        Self::from_params(
            FilterParams::new(process_noise, measurement_noise)
                .with_transition(a)
                .with_control(b)
                .with_measurement(c),
        )
    }

    /// Builds a filter without checking the parameters. Degenerate models
    /// produce NaN or infinite estimates rather than an error.
    pub fn from_params(params: FilterParams) -> Self {
        ScalarKalmanFilter {
            params,
            state: None,
        }
    }

    pub fn try_from_params(params: FilterParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self::from_params(params))
    }

    /// Filters a measurement with no control input.
    pub fn step(&mut self, measurement: f64) -> f64 {
        self.step_with_control(measurement, 0.0)
    }

    /// Filters a measurement, applying `u` through the control coefficient
    /// during the predict step. The control input is ignored on the very first
    /// call since there is no prior state to drive.
    pub fn step_with_control(&mut self, measurement: f64, u: f64) -> f64 {
        let FilterParams { a, b, c, .. } = self.params;
        let r = self.params.process_noise.variance();
        let q = self.params.measurement_noise.variance();

        let next = match self.state {
            None => {
                let seeded = Gaussian::new(measurement / c, q / (c * c));
                debug!(
                    "seeded estimate {} (variance {}) from first measurement {}",
                    seeded.mean, seeded.variance, measurement
                );
                seeded
            }
            Some(prior) => {
                let predicted = Gaussian::new(a * prior.mean + b * u, a * prior.variance * a + r);
                let gain = predicted.variance * c / (c * predicted.variance * c + q);
                let corrected = Gaussian::new(
                    predicted.mean + gain * (measurement - c * predicted.mean),
                    predicted.variance - gain * c * predicted.variance,
                );
                trace!(
                    "predicted {} (variance {}), gain {}, corrected to {} (variance {})",
                    predicted.mean, predicted.variance, gain, corrected.mean, corrected.variance
                );

                if prior.mean.is_finite() && !corrected.mean.is_finite() {
                    warn!(
                        "estimate became {} after measurement {} (gain {}), later estimates will not recover",
                        corrected.mean, measurement, gain
                    );
                }
                corrected
            }
        };

        self.state = Some(next);
        next.mean
    }

    /// Runs every measurement through [`Self::step`] and collects the estimates.
    pub fn filter_all<I>(&mut self, measurements: I) -> Vec<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        measurements.into_iter().map(|m| self.step(m)).collect()
    }

    /// The estimate returned by the most recent step.
    pub fn last_estimate(&self) -> Option<f64> {
        self.state.map(|s| s.mean)
    }

    pub fn covariance(&self) -> Option<f64> {
        self.state.map(|s| s.variance)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    pub fn measurement_noise(&self) -> f64 {
        self.params.measurement_noise.variance()
    }

    pub fn process_noise(&self) -> f64 {
        self.params.process_noise.variance()
    }

    /// Takes effect from the next step.
    pub fn set_measurement_noise(&mut self, noise: f64) {
        debug!(
            "measurement noise {} -> {}",
            self.params.measurement_noise.variance(),
            noise
        );
        self.params.measurement_noise = noise.into();
    }

    /// Takes effect from the next step.
    pub fn set_process_noise(&mut self, noise: f64) {
        debug!(
            "process noise {} -> {}",
            self.params.process_noise.variance(),
            noise
        );
        self.params.process_noise = noise.into();
    }
}

impl Filter for ScalarKalmanFilter {
    fn filter(&mut self, measurement: f64, u: f64) -> f64 {
        self.step_with_control(measurement, u)
    }

    fn state(&self) -> Option<f64> {
        self.last_estimate()
    }

    fn covariance(&self) -> Option<f64> {
        ScalarKalmanFilter::covariance(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Gaussian {
    mean: f64,
    variance: f64,
}

impl Gaussian {
    fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }
}
