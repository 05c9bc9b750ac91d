use tracing::warn;

use crate::decayerror::DecayError;
use crate::math::curve::curve::DecayCurve;

pub const DEFAULT_DAILY_RATE: f64 = 0.001;

/// 沿用的固定速率衰減：`e^(-rate·days)`。
///
/// 定義域為整數日，`t` 的小數部分一律向零截斷。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRateDecay {
    rate: f64
}

impl ConstantRateDecay {
    pub fn new(rate: f64) -> Result<ConstantRateDecay, DecayError> {
        if !(rate.is_finite() && rate >= 0.0) {
            warn!(rate, "rejected constant decay rate");
            return Err(DecayError::invalid_argument(
                format!("decay rate must be finite and non-negative, got {}", rate)));
        }
        Ok(ConstantRateDecay { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Default for ConstantRateDecay {
    fn default() -> ConstantRateDecay {
        ConstantRateDecay { rate: DEFAULT_DAILY_RATE }
    }
}

impl DecayCurve for ConstantRateDecay {
    fn evaluate(&self, t: f64) -> f64 {
        (-self.rate * t.trunc()).exp()
    }
}
