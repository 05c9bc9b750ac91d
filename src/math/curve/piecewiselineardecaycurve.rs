use tracing::{
    debug,
    warn
};

use crate::anchor::Anchor;
use crate::decayerror::DecayError;
use crate::math::curve::curve::DecayCurve;
use crate::math::curve::linearfunction::PiecewiseRange;

/// 以 `x` 為定義域、依序連接錨點的分段線性衰減。
///
/// 建構步驟：
///   1. 若第一個錨點（排序前）不在 `x = 0`，補上 `(0, 1)`
///   2. 依 `x` 遞增排序
///   3. 相鄰兩錨點之間建立一段 `[lo.x, hi.x]` 的直線
///   4. 最後一個錨點之後以 `[last.x, +∞)` 維持常數外插
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinearDecayCurve {
    ranges: Vec<PiecewiseRange>
}

impl PiecewiseLinearDecayCurve {
    pub fn new(anchors: &[Anchor]) -> Result<PiecewiseLinearDecayCurve, DecayError> {
        let first = anchors.first().ok_or_else(|| {
            warn!("rejected piecewise linear decay curve without anchors");
            DecayError::invalid_argument("piecewise linear decay requires at least one anchor")
        })?;
        if let Some(anchor) = anchors.iter().find(|a| !(a.x().is_finite() && a.y().is_finite())) {
            warn!(x = anchor.x(), y = anchor.y(), "rejected piecewise linear decay anchor");
            return Err(DecayError::invalid_argument(
                format!("anchor ({}, {}) must have finite coordinates", anchor.x(), anchor.y())));
        }

        let mut points = Vec::with_capacity(anchors.len() + 1);
        if first.x() != 0.0 {
            points.push(Anchor::point(0.0, 1.0));
        }
        points.extend_from_slice(anchors);
        points.sort_by(|a, b| a.x().total_cmp(&b.x()));

        if let Some(pair) = points.windows(2).find(|pair| pair[0].x() == pair[1].x()) {
            warn!(x = pair[0].x(), "rejected piecewise linear decay with zero-width segment");
            return Err(DecayError::NumericDegenerate(pair[0].x()));
        }

        let mut ranges = points
            .windows(2)
            .map(|pair| PiecewiseRange::between(&pair[0], &pair[1]))
            .collect::<Result<Vec<PiecewiseRange>, DecayError>>()
            .inspect_err(|err| warn!(%err, "rejected piecewise linear decay with overflowing segment"))?;
        if let Some(last) = points.last() {
            ranges.push(PiecewiseRange::flat_from(last));
        }

        debug!(ranges = ranges.len(), "built piecewise linear decay curve");
        Ok(PiecewiseLinearDecayCurve { ranges })
    }

    pub fn ranges(&self) -> &[PiecewiseRange] {
        &self.ranges
    }
}

impl DecayCurve for PiecewiseLinearDecayCurve {
    fn evaluate(&self, t: f64) -> f64 {
        self.ranges
            .iter()
            .find(|range| range.contains(t))
            .map_or(0.0, |range| range.value(t))
    }
}
