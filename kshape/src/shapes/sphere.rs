use crate::shapes::{Shape, ShapeType};
use kmath::{Matrix33, Real, Vector3, AABB};
use std::any::Any;
use std::mem;

pub struct Sphere<T> {
    radius: T,
}

impl<T: Real> Sphere<T> {
    pub fn new(radius: T) -> Sphere<T> {
        assert!(radius > T::zero());
        Sphere { radius }
    }

    pub fn radius(&self) -> T {
        self.radius
    }
}

impl<T: Real> Shape<T> for Sphere<T> {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Sphere
    }

    // A sphere is all rounding: the core hull degenerates to the center
    // and the surface radius rides entirely on the margin.
    fn margin(&self) -> T {
        self.radius
    }

    fn size_in_bytes(&self) -> usize {
        mem::size_of::<Sphere<T>>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_shape(&self) -> Box<dyn Shape<T>> {
        Box::new(Sphere {
            radius: self.radius,
        })
    }

    fn local_support_point_without_margin(&self, _direction: &Vector3<T>) -> Vector3<T> {
        Vector3::zero()
    }

    fn local_bounds(&self) -> AABB<T> {
        let extent = Vector3::new(self.radius, self.radius, self.radius);
        AABB::new(-extent, extent)
    }

    fn local_inertia_tensor(&self, mass: T) -> Matrix33<T> {
        let diag = T::two() / T::from_i32(5) * mass * self.radius * self.radius;
        Matrix33::diagonal(diag, diag, diag)
    }

    fn is_equal_to(&self, other: &dyn Shape<T>) -> bool {
        match other.as_any().downcast_ref::<Sphere<T>>() {
            Some(other) => self.radius == other.radius,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn support_lies_on_surface() {
        let sphere = Sphere::new(2.0f32);
        let support = sphere.local_support_point_with_margin(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(support, Vector3::new(2.0, 0.0, 0.0));

        let support = sphere.local_support_point_with_margin(&Vector3::new(1.0, -2.0, 2.0));
        assert_relative_eq!(support.length(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn core_support_is_the_center() {
        let sphere = Sphere::new(0.75f32);
        let support = sphere.local_support_point_without_margin(&Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(support, Vector3::zero());
    }

    #[test]
    fn zero_direction_returns_the_center() {
        let sphere = Sphere::new(1.5f32);
        let support = sphere.local_support_point_with_margin(&Vector3::zero());
        assert_eq!(support, Vector3::zero());
    }

    #[test]
    fn inertia_is_two_fifths_mass_radius_squared() {
        let sphere = Sphere::new(2.0f32);
        let tensor = sphere.local_inertia_tensor(10.0);
        assert_relative_eq!(tensor.ex.x, 16.0, epsilon = 1e-5);
        assert_relative_eq!(tensor.ey.y, 16.0, epsilon = 1e-5);
        assert_relative_eq!(tensor.ez.z, 16.0, epsilon = 1e-5);
        assert_eq!(tensor.ex.y, 0.0);
        assert_eq!(tensor.ey.z, 0.0);
    }

    #[test]
    fn bounds_are_a_radius_cube() {
        let sphere = Sphere::new(1.25f32);
        let bounds = sphere.local_bounds();
        assert_eq!(bounds.lower_bound, Vector3::new(-1.25, -1.25, -1.25));
        assert_eq!(bounds.upper_bound, Vector3::new(1.25, 1.25, 1.25));
    }

    #[test]
    #[should_panic]
    fn zero_radius_is_rejected() {
        Sphere::new(0.0f32);
    }
}
