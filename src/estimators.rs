pub mod kalman;

pub trait Filter {
    /// Performs both the predict and update steps, returning the new estimate.
    fn filter(&mut self, measurement: f64, u: f64) -> f64;

    /// Returns the current state estimate, if any measurement has been seen.
    fn state(&self) -> Option<f64>;

    /// Returns the current estimate-error variance.
    fn covariance(&self) -> Option<f64>;
}
