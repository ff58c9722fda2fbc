use crate::{Real, RealConstants, RealConverter};

impl Real for f64 {
    fn is_valid(&self) -> bool {
        f64::is_finite(*self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        f64::min(self, other)
    }
}

impl RealConstants for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn two() -> Self {
        2.0
    }

    fn half() -> Self {
        0.5
    }

    fn pi() -> Self {
        std::f64::consts::PI
    }

    fn epsilon() -> Self {
        f64::EPSILON
    }

    fn max_value() -> Self {
        f64::MAX
    }

    fn en1() -> Self {
        0.1
    }

    fn en2() -> Self {
        0.01
    }

    fn en3() -> Self {
        0.001
    }
}

impl RealConverter for f64 {
    fn from_i32(value: i32) -> Self {
        value as f64
    }

    fn from_f32(value: f32) -> Self {
        value as f64
    }

    fn to_f32(self) -> f32 {
        self as f32
    }
}
