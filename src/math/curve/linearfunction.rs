use crate::anchor::Anchor;
use crate::decayerror::DecayError;

/// `y = m·x + c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFunction {
    m: f64,
    c: f64
}

impl LinearFunction {
    pub fn new(m: f64, c: f64) -> LinearFunction {
        LinearFunction { m, c }
    }

    pub fn constant(c: f64) -> LinearFunction {
        LinearFunction { m: 0.0, c }
    }

    /// 通過兩錨點的直線；呼叫方須保證 `lhs.x() != rhs.x()`
    pub fn through(lhs: &Anchor, rhs: &Anchor) -> LinearFunction {
        let m = Anchor::slope(lhs, rhs);
        LinearFunction { m, c: lhs.y() - m * lhs.x() }
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn compute(&self, x: f64) -> f64 {
        f64::mul_add(self.m, x, self.c)
    }
}

/// 閉區間 `[lower, upper]` 上的一段線性函數。
///
/// 端點上直接回傳錨點的 `y`，使相鄰兩段恰好在錨點相接。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseRange {
    lower: f64,
    upper: f64,
    lower_y: f64,
    upper_y: f64,
    function: LinearFunction
}

impl PiecewiseRange {
    /// `lhs.x() == rhs.x()` 或間距過小使直線係數溢位時回傳 `NumericDegenerate`
    pub fn between(lhs: &Anchor, rhs: &Anchor) -> Result<PiecewiseRange, DecayError> {
        let function = LinearFunction::through(lhs, rhs);
        if !(function.m().is_finite() && function.c().is_finite()) {
            return Err(DecayError::NumericDegenerate(lhs.x()));
        }
        Ok(PiecewiseRange {
            lower: lhs.x(),
            upper: rhs.x(),
            lower_y: lhs.y(),
            upper_y: rhs.y(),
            function
        })
    }

    /// `[anchor.x, +∞)` 上維持 `anchor.y`
    pub fn flat_from(anchor: &Anchor) -> PiecewiseRange {
        PiecewiseRange {
            lower: anchor.x(),
            upper: f64::INFINITY,
            lower_y: anchor.y(),
            upper_y: anchor.y(),
            function: LinearFunction::constant(anchor.y())
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn function(&self) -> &LinearFunction {
        &self.function
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    pub fn value(&self, x: f64) -> f64 {
        if x == self.lower {
            self.lower_y
        } else if x == self.upper {
            self.upper_y
        } else {
            self.function.compute(x)
        }
    }
}
