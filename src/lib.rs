pub mod config;
pub mod engine;
pub mod error;
pub mod estimators;

pub use config::FilterParams;
pub use error::ParamError;
pub use estimators::{Filter, kalman::ScalarKalmanFilter};

// x_(n+1) = x, y = x unless the caller says otherwise
pub const DEFAULT_TRANSITION: f64 = 1.0;
pub const DEFAULT_CONTROL: f64 = 0.0;
pub const DEFAULT_MEASUREMENT: f64 = 1.0;
