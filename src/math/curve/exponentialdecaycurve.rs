use tracing::{
    debug,
    warn
};

use crate::decayerror::DecayError;
use crate::math::curve::curve::DecayCurve;

/// 單一錨點決定的指數衰減：`clamp(e^(factor·t), min_value, 1)`，
/// 其中 `factor = ln(anchor_value) / anchor_time`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecayCurve {
    factor: f64,
    min_value: f64
}

impl ExponentialDecayCurve {
    pub fn new(anchor_time: f64, anchor_value: f64) -> Result<ExponentialDecayCurve, DecayError> {
        Self::with_min_constraint(anchor_time, anchor_value, 0.0)
    }

    pub fn with_min_constraint(anchor_time: f64,
                               anchor_value: f64,
                               min_constraint: f64) -> Result<ExponentialDecayCurve, DecayError> {
        if !(anchor_time.is_finite() && anchor_time > 0.0) {
            warn!(anchor_time, "rejected exponential decay anchor time");
            return Err(DecayError::invalid_argument(
                format!("anchor time must be finite and positive, got {}", anchor_time)));
        }
        if !(anchor_value > 0.0 && anchor_value <= 1.0) {
            warn!(anchor_value, "rejected exponential decay anchor value");
            return Err(DecayError::invalid_argument(
                format!("anchor value must lie in (0, 1], got {}", anchor_value)));
        }
        if !(0.0..=1.0).contains(&min_constraint) {
            warn!(min_constraint, "rejected exponential decay floor");
            return Err(DecayError::invalid_argument(
                format!("min constraint must lie in [0, 1], got {}", min_constraint)));
        }

        let factor = anchor_value.ln() / anchor_time;
        if !factor.is_finite() {
            warn!(anchor_time, anchor_value, "rejected exponential decay with overflowing factor");
            return Err(DecayError::invalid_argument(
                format!("decay factor ln({}) / {} is not finite", anchor_value, anchor_time)));
        }
        debug!(factor, min_value = min_constraint, "built exponential decay curve");
        Ok(ExponentialDecayCurve { factor, min_value: min_constraint })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }
}

impl DecayCurve for ExponentialDecayCurve {
    fn evaluate(&self, t: f64) -> f64 {
        (self.factor * t).exp().clamp(self.min_value, 1.0)
    }
}
