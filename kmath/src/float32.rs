use crate::{Real, RealConstants, RealConverter};

impl Real for f32 {
    fn is_valid(&self) -> bool {
        f32::is_finite(*self)
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }

    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    fn sin(self) -> Self {
        f32::sin(self)
    }

    fn cos(self) -> Self {
        f32::cos(self)
    }

    fn max(self, other: Self) -> Self {
        f32::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        f32::min(self, other)
    }
}

impl RealConstants for f32 {
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
        std::f32::consts::PI
    }

    fn epsilon() -> Self {
        f32::EPSILON
    }

    fn max_value() -> Self {
        f32::MAX
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

impl RealConverter for f32 {
    fn from_i32(value: i32) -> Self {
        value as f32
    }

    fn from_f32(value: f32) -> Self {
        value
    }

    fn to_f32(self) -> f32 {
        self
    }
}
