/// Variance of a zero-mean Gaussian noise source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseSpec {
    variance: f64,
}

impl NoiseSpec {
    pub const fn new(variance: f64) -> Self {
        NoiseSpec { variance }
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn sigma(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl From<f64> for NoiseSpec {
    fn from(variance: f64) -> Self {
        NoiseSpec::new(variance)
    }
}
