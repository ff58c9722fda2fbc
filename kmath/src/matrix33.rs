use crate::{Multiply, Real, Vector3};

/// Column-major 3x3 matrix: `ex`, `ey` and `ez` are the columns.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix33<T> {
    pub ex: Vector3<T>,
    pub ey: Vector3<T>,
    pub ez: Vector3<T>,
}

impl<T: Real> Matrix33<T> {
    pub fn new(ex: Vector3<T>, ey: Vector3<T>, ez: Vector3<T>) -> Matrix33<T> {
        Matrix33 { ex, ey, ez }
    }

    pub fn zero() -> Matrix33<T> {
        Matrix33 {
            ex: Vector3::zero(),
            ey: Vector3::zero(),
            ez: Vector3::zero(),
        }
    }

    pub fn identity() -> Matrix33<T> {
        Matrix33::diagonal(T::one(), T::one(), T::one())
    }

    pub fn diagonal(x: T, y: T, z: T) -> Matrix33<T> {
        Matrix33 {
            ex: Vector3::new(x, T::zero(), T::zero()),
            ey: Vector3::new(T::zero(), y, T::zero()),
            ez: Vector3::new(T::zero(), T::zero(), z),
        }
    }
}

impl<T: Real> Multiply<Vector3<T>> for Matrix33<T> {
    type Output = Vector3<T>;

    fn multiply(self, rhs: Vector3<T>) -> Self::Output {
        self.ex * rhs.x + self.ey * rhs.y + self.ez * rhs.z
    }
}
