use serde::Deserialize;

/// logit(0.99999)，代表「實質上為 1」
pub const LOGIT_NEAR_ONE: f64 = -11.5;
/// logit(0.00001)，代表「實質上為 0」
pub const LOGIT_NEAR_ZERO: f64 = 11.5;

/// 曲線建構用的錨點。
///
/// - `t`：經過時間（logistic 曲線的定義域）
/// - `x`：logistic 曲線的 logit 座標；piecewise linear 曲線則當作定義域座標
/// - `y`：期望的 decay score
///
/// logistic 曲線中 `x == 0` 表示「由 `y` 推導」。
/// JSON 中缺少的欄位一律視為 0。
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Anchor {
    t: f64,
    x: f64,
    y: f64
}

impl Anchor {
    pub fn new(t: f64, x: f64, y: f64) -> Anchor {
        Anchor { t, x, y }
    }

    /// logistic 錨點：`x` 留空，建構時由 `y` 推導
    pub fn at_time(t: f64, y: f64) -> Anchor {
        Anchor { t, x: 0.0, y }
    }

    /// logistic 錨點：直接指定 logit 座標
    pub fn with_logit(t: f64, x: f64) -> Anchor {
        Anchor { t, x, y: inverse_logit(x) }
    }

    /// piecewise linear 錨點
    pub fn point(x: f64, y: f64) -> Anchor {
        Anchor { t: 0.0, x, y }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// 以 `x` 為定義域計算兩錨點連線的斜率
    pub fn slope(lhs: &Anchor, rhs: &Anchor) -> f64 {
        (rhs.y - lhs.y) / (rhs.x - lhs.x)
    }

    pub(crate) fn with_x(self, x: f64) -> Anchor {
        Anchor { x, ..self }
    }
}

/// `x = ln(1/y - 1)`
pub fn logit(y: f64) -> f64 {
    (1.0 / y - 1.0).ln()
}

/// `y = 1 / (1 + e^x)`
pub fn inverse_logit(x: f64) -> f64 {
    1.0 / (1.0 + x.exp())
}
