use crate::{CrossTrait, Multiply, Real, TransposeMultiply, Vector3};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Real> Quaternion<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Quaternion<T> {
        Quaternion { x, y, z, w }
    }

    pub fn identity() -> Quaternion<T> {
        Quaternion {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            w: T::one(),
        }
    }

    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Quaternion<T> {
        let axis = axis.normalize();
        let half = angle * T::half();
        let s = half.sin();
        Quaternion {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    pub fn length(&self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn normalize(&self) -> Quaternion<T> {
        let len = self.length();
        if len >= T::epsilon() {
            let inv_length = T::one() / len;
            Quaternion {
                x: self.x * inv_length,
                y: self.y * inv_length,
                z: self.z * inv_length,
                w: self.w * inv_length,
            }
        } else {
            Quaternion::identity()
        }
    }

    pub fn conjugate(&self) -> Quaternion<T> {
        Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid() && self.z.is_valid() && self.w.is_valid()
    }
}

impl<T: Real> Default for Quaternion<T> {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl<T: Real> Multiply<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    // v' = v + 2w(u x v) + 2u x (u x v), with u the vector part.
    fn multiply(self, rhs: Vector3<T>) -> Self::Output {
        let u = Vector3::new(self.x, self.y, self.z);
        let t = u.cross(rhs) * T::two();
        rhs + t * self.w + u.cross(t)
    }
}

impl<T: Real> TransposeMultiply<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    fn transpose_multiply(self, rhs: Vector3<T>) -> Self::Output {
        self.conjugate().multiply(rhs)
    }
}

impl<T: Real> Multiply<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    fn multiply(self, rhs: Quaternion<T>) -> Self::Output {
        let a = self;
        let b = rhs;
        Quaternion {
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        }
    }
}
