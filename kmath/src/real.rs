use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait Real:
    'static
    + Debug
    + Copy
    + Clone
    + Default
    + RealConstants
    + RealConverter
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + PartialOrd
{
    fn is_valid(&self) -> bool;

    fn abs(self) -> Self;

    fn sqrt(self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    fn max(self, other: Self) -> Self;

    fn min(self, other: Self) -> Self;

    fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

pub trait RealConstants {
    fn zero() -> Self;

    fn one() -> Self;

    fn two() -> Self;

    fn half() -> Self;

    fn pi() -> Self;

    fn epsilon() -> Self;

    fn max_value() -> Self;

    fn en1() -> Self;

    fn en2() -> Self;

    fn en3() -> Self;
}

pub trait RealConverter {
    fn from_i32(value: i32) -> Self;

    fn from_f32(value: f32) -> Self;

    fn to_f32(self) -> f32;
}
