use crate::anchor::Anchor;
use crate::decayerror::DecayError;
use crate::math::curve::curve::DecayCurve;
use crate::math::curve::exponentialdecaycurve::ExponentialDecayCurve;
use crate::math::curve::logisticdecaycurve::LogisticDecayCurve;
use crate::math::curve::piecewiselineardecaycurve::PiecewiseLinearDecayCurve;
use crate::model::constantratedecay::ConstantRateDecay;

/// 所有已知的 decay 模型。
///
/// 呼叫方明確選擇模型並自行持有，取代以字串比對選擇演算法。
#[derive(Debug, Clone, PartialEq)]
pub enum DecayModel {
    Baseline(ConstantRateDecay),
    Exponential(ExponentialDecayCurve),
    Logistic(LogisticDecayCurve),
    PiecewiseLinear(PiecewiseLinearDecayCurve)
}

impl DecayModel {
    /// 訂房用的分段線性衰減：第 1、2、7、8 天分別為 0.95、0.9、0.3、0.01
    pub fn booking_piecewise_linear() -> Result<DecayModel, DecayError> {
        let curve = PiecewiseLinearDecayCurve::new(&[
            Anchor::point(1.0, 0.95),
            Anchor::point(2.0, 0.9),
            Anchor::point(7.0, 0.3),
            Anchor::point(8.0, 0.01)
        ])?;
        Ok(DecayModel::PiecewiseLinear(curve))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DecayModel::Baseline(_) => "baseline",
            DecayModel::Exponential(_) => "exponential",
            DecayModel::Logistic(_) => "logistic",
            DecayModel::PiecewiseLinear(_) => "piecewise_linear"
        }
    }
}

impl Default for DecayModel {
    fn default() -> DecayModel {
        DecayModel::Baseline(ConstantRateDecay::default())
    }
}

impl DecayCurve for DecayModel {
    fn evaluate(&self, t: f64) -> f64 {
        match self {
            DecayModel::Baseline(curve) => curve.evaluate(t),
            DecayModel::Exponential(curve) => curve.evaluate(t),
            DecayModel::Logistic(curve) => curve.evaluate(t),
            DecayModel::PiecewiseLinear(curve) => curve.evaluate(t)
        }
    }
}

impl From<ConstantRateDecay> for DecayModel {
    fn from(curve: ConstantRateDecay) -> DecayModel {
        DecayModel::Baseline(curve)
    }
}

impl From<ExponentialDecayCurve> for DecayModel {
    fn from(curve: ExponentialDecayCurve) -> DecayModel {
        DecayModel::Exponential(curve)
    }
}

impl From<LogisticDecayCurve> for DecayModel {
    fn from(curve: LogisticDecayCurve) -> DecayModel {
        DecayModel::Logistic(curve)
    }
}

impl From<PiecewiseLinearDecayCurve> for DecayModel {
    fn from(curve: PiecewiseLinearDecayCurve) -> DecayModel {
        DecayModel::PiecewiseLinear(curve)
    }
}
