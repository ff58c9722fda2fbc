use crate::{Multiply, Quaternion, Real, TransposeMultiply, Vector3};

#[derive(Debug, Copy, Clone)]
pub struct Transform<T> {
    pub p: Vector3<T>,
    pub q: Quaternion<T>,
}

impl<T: Real> Default for Transform<T> {
    fn default() -> Self {
        Transform::identity()
    }
}

impl<T: Real> Transform<T> {
    pub fn new(position: Vector3<T>, orientation: Quaternion<T>) -> Transform<T> {
        Transform {
            p: position,
            q: orientation,
        }
    }

    pub fn identity() -> Transform<T> {
        Transform {
            p: Vector3::zero(),
            q: Quaternion::identity(),
        }
    }
}

impl<T: Real> Multiply<Vector3<T>> for Transform<T> {
    type Output = Vector3<T>;

    fn multiply(self, rhs: Vector3<T>) -> Self::Output {
        self.q.multiply(rhs) + self.p
    }
}

impl<T: Real> TransposeMultiply<Vector3<T>> for Transform<T> {
    type Output = Vector3<T>;

    fn transpose_multiply(self, rhs: Vector3<T>) -> Self::Output {
        self.q.transpose_multiply(rhs - self.p)
    }
}

impl<T: Real> Multiply<Transform<T>> for Transform<T> {
    type Output = Transform<T>;

    fn multiply(self, rhs: Transform<T>) -> Self::Output {
        let a = self;
        let b = rhs;
        Transform {
            p: a.q.multiply(b.p) + a.p,
            q: a.q.multiply(b.q),
        }
    }
}

impl<T: Real> TransposeMultiply<Transform<T>> for Transform<T> {
    type Output = Transform<T>;

    fn transpose_multiply(self, rhs: Transform<T>) -> Self::Output {
        let a = self;
        let b = rhs;
        Transform {
            p: a.q.transpose_multiply(b.p - a.p),
            q: a.q.conjugate().multiply(b.q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_roundtrip() {
        let xf = Transform::new(
            Vector3::new(1.0f64, -2.0, 0.5),
            Quaternion::from_axis_angle(Vector3::new(0.0, 1.0, 0.0), 1.1),
        );
        let p = Vector3::new(3.0, 4.0, -5.0);
        let back = xf.transpose_multiply(xf.multiply(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-12);
    }

    #[test]
    fn composition_matches_sequential_application() {
        let a = Transform::new(
            Vector3::new(1.0f64, 0.0, 0.0),
            Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 0.4),
        );
        let b = Transform::new(
            Vector3::new(0.0, 2.0, 0.0),
            Quaternion::from_axis_angle(Vector3::new(1.0, 0.0, 0.0), -0.9),
        );
        let p = Vector3::new(0.7, -0.3, 1.9);
        let composed = a.multiply(b).multiply(p);
        let sequential = a.multiply(b.multiply(p));
        assert_relative_eq!(composed.x, sequential.x, epsilon = 1e-12);
        assert_relative_eq!(composed.y, sequential.y, epsilon = 1e-12);
        assert_relative_eq!(composed.z, sequential.z, epsilon = 1e-12);
    }
}
