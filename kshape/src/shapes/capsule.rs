use crate::shapes::{Shape, ShapeType};
use kmath::{Matrix33, Real, Vector3, AABB};
use std::any::Any;
use std::mem;

/// Capsule aligned with the local Y axis: the core hull is the inner
/// segment between the two hemisphere centers, and the radius is the
/// margin. `height` is the distance between those centers.
pub struct Capsule<T> {
    radius: T,
    half_height: T,
}

impl<T: Real> Capsule<T> {
    pub fn new(radius: T, height: T) -> Capsule<T> {
        assert!(radius > T::zero());
        assert!(height > T::zero());
        Capsule {
            radius,
            half_height: height * T::half(),
        }
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn height(&self) -> T {
        self.half_height * T::two()
    }

    pub fn half_height(&self) -> T {
        self.half_height
    }
}

impl<T: Real> Shape<T> for Capsule<T> {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Capsule
    }

    // Like the sphere, the whole rounding is the radius.
    fn margin(&self) -> T {
        self.radius
    }

    fn size_in_bytes(&self) -> usize {
        mem::size_of::<Capsule<T>>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_shape(&self) -> Box<dyn Shape<T>> {
        Box::new(Capsule {
            radius: self.radius,
            half_height: self.half_height,
        })
    }

    fn local_support_point_without_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        let y = if direction.y < T::zero() {
            -self.half_height
        } else {
            self.half_height
        };
        Vector3::new(T::zero(), y, T::zero())
    }

    fn local_bounds(&self) -> AABB<T> {
        let axial = self.half_height + self.radius;
        AABB::new(
            Vector3::new(-self.radius, -axial, -self.radius),
            Vector3::new(self.radius, axial, self.radius),
        )
    }

    fn local_inertia_tensor(&self, mass: T) -> Matrix33<T> {
        // Composite of the inner cylinder and the two hemispherical
        // caps (Game Engine Gems vol. 1).
        let height = self.half_height * T::two();
        let radius_square = self.radius * self.radius;
        let height_square = height * height;
        let radius_square_double = radius_square + radius_square;
        let divisor = T::from_i32(4) * self.radius + T::from_i32(3) * height;
        let factor1 = T::two() * self.radius / divisor;
        let factor2 = T::from_i32(3) * height / divisor;
        let quarter = T::one() / T::from_i32(4);
        let sum1 = T::two() / T::from_i32(5) * radius_square_double;
        let sum2 = T::from_i32(3) / T::from_i32(4) * height * self.radius + T::half() * height_square;
        let sum3 = quarter * radius_square + T::one() / T::from_i32(12) * height_square;
        let transverse = factor1 * mass * (sum1 + sum2) + factor2 * mass * sum3;
        let axial = factor1 * mass * sum1 + factor2 * mass * quarter * radius_square_double;
        Matrix33::diagonal(transverse, axial, transverse)
    }

    fn is_equal_to(&self, other: &dyn Shape<T>) -> bool {
        match other.as_any().downcast_ref::<Capsule<T>>() {
            Some(other) => self.radius == other.radius && self.half_height == other.half_height,
            None => false,
        }
    }
}
