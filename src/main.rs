use log::info;
use scalar_kalman::{FilterParams, ScalarKalmanFilter};

const PROCESS_NOISE: f64 = 0.008;
const MEASUREMENT_NOISE: f64 = 0.1;
const CONTROL_INPUT: f64 = 0.2;
const SAMPLES: [f64; 9] = [66.0, 64.0, 63.0, 63.0, 63.0, 66.0, 65.0, 67.0, 58.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("random walk, r={} q={}", PROCESS_NOISE, MEASUREMENT_NOISE);
    let mut filter = ScalarKalmanFilter::new(PROCESS_NOISE, MEASUREMENT_NOISE);
    for x in SAMPLES {
        info!("input {:.2}, filtered {:.3}", x, filter.step(x));
    }

    let params = FilterParams::new(PROCESS_NOISE, MEASUREMENT_NOISE).with_control(1.0);
    info!("with control input u={}, {:?}", CONTROL_INPUT, params);
    let mut filter = ScalarKalmanFilter::try_from_params(params)?;
    for x in SAMPLES {
        info!(
            "input {:.2}, filtered {:.3}",
            x,
            filter.step_with_control(x, CONTROL_INPUT)
        );
    }

    Ok(())
}
