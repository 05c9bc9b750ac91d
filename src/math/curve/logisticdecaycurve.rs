use tracing::{
    debug,
    warn
};

use crate::anchor::{
    inverse_logit,
    logit,
    Anchor,
    LOGIT_NEAR_ONE,
    LOGIT_NEAR_ZERO
};
use crate::decayerror::DecayError;
use crate::math::curve::curve::DecayCurve;

pub const DEFAULT_MAX_TIME: f64 = 9999.0;

// ─────────────────────────────────────────────────────────────────────────────
// LogisticDecayCurve
// ─────────────────────────────────────────────────────────────────────────────
//
// 錨點 (t, y) 先轉到 logit 空間 x = ln(1/y - 1)，在 x 上做分段線性內插，
// 再以 y = 1 / (1 + e^x) 轉回：
//
//   [ (0, -11.5) ] ++ 使用者錨點 ++ [ (max_time, 11.5) ]
//
// 兩端的合成錨點分別代表 0.99999 與 0.00001，使 evaluate(0) ≈ 1、
// evaluate(max_time) ≈ 0。
//
// 使用者錨點不排序，依傳入順序插入；因此 t 必須已嚴格遞增，
// 否則建構失敗。

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticDecayCurve {
    anchors: Vec<Anchor>,
    max_time: f64
}

impl LogisticDecayCurve {
    pub fn new(anchors: &[Anchor]) -> Result<LogisticDecayCurve, DecayError> {
        Self::with_max_time(DEFAULT_MAX_TIME, anchors)
    }

    pub fn with_max_time(max_time: f64, anchors: &[Anchor]) -> Result<LogisticDecayCurve, DecayError> {
        if anchors.is_empty() {
            warn!("rejected logistic decay curve without anchors");
            return Err(DecayError::invalid_argument("logistic decay requires at least one anchor"));
        }
        if !(max_time.is_finite() && max_time > 0.0) {
            warn!(max_time, "rejected logistic decay max time");
            return Err(DecayError::invalid_argument(
                format!("max time must be finite and positive, got {}", max_time)));
        }

        let mut curve_anchors = Vec::with_capacity(anchors.len() + 2);
        curve_anchors.push(Anchor::new(0.0, LOGIT_NEAR_ONE, 1.0));
        for anchor in anchors {
            curve_anchors.push(Self::to_logit_space(anchor)?);
        }
        curve_anchors.push(Anchor::new(max_time, LOGIT_NEAR_ZERO, 0.0));

        if let Some(pair) = curve_anchors.windows(2).find(|pair| pair[0].t() >= pair[1].t()) {
            warn!(lhs = pair[0].t(), rhs = pair[1].t(), "rejected logistic decay anchor order");
            return Err(DecayError::invalid_argument(format!(
                "anchor times must be strictly increasing within (0, {}), found {} followed by {}",
                max_time, pair[0].t(), pair[1].t())));
        }

        debug!(anchors = anchors.len(), max_time, "built logistic decay curve");
        Ok(LogisticDecayCurve { anchors: curve_anchors, max_time })
    }

    fn to_logit_space(anchor: &Anchor) -> Result<Anchor, DecayError> {
        if !anchor.t().is_finite() {
            return Err(DecayError::invalid_argument(
                format!("anchor time must be finite, got {}", anchor.t())));
        }
        if anchor.x() != 0.0 {
            return if anchor.x().is_finite() {
                Ok(*anchor)
            } else {
                Err(DecayError::invalid_argument(
                    format!("anchor logit must be finite, got {}", anchor.x())))
            };
        }
        if !(anchor.y() > 0.0 && anchor.y() < 1.0) {
            warn!(t = anchor.t(), y = anchor.y(), "rejected logistic decay anchor score");
            return Err(DecayError::invalid_argument(
                format!("anchor score at t = {} must lie in (0, 1), got {}", anchor.t(), anchor.y())));
        }
        Ok(anchor.with_x(logit(anchor.y())))
    }

    /// 含兩端合成錨點
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }
}

impl DecayCurve for LogisticDecayCurve {
    fn evaluate(&self, t: f64) -> f64 {
        let time = t.min(self.max_time);
        let last = self.anchors.len() - 1;
        let i = self.anchors[1..]
            .iter()
            .position(|anchor| time <= anchor.t())
            .map_or(last, |p| p + 1);

        let lo = &self.anchors[i - 1];
        let hi = &self.anchors[i];
        let x = lo.x() + (time - lo.t()) / (hi.t() - lo.t()) * (hi.x() - lo.x());
        inverse_logit(x)
    }
}
