use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use decayscore::math::curve::curve::DecayCurve;
use decayscore::model::decaymodel::DecayModel;

const DEFAULT_DAYS: f64 = 2.0;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let days = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<f64>() {
            Ok(days) => days,
            Err(err) => {
                error!(arg = arg.as_str(), %err, "days must be a number");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_DAYS
    };

    let current = DecayModel::default();
    let pld = match DecayModel::booking_piecewise_linear() {
        Ok(model) => model,
        Err(err) => {
            error!(%err, "failed to build booking decay curve");
            return ExitCode::FAILURE;
        }
    };

    println!("current decay {}", current.evaluate(days));
    println!("new decay {}", pld.evaluate(days));
    ExitCode::SUCCESS
}
