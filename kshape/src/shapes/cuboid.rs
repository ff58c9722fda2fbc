use crate::settings;
use crate::shapes::{Shape, ShapeType};
use kmath::{Matrix33, Real, Vector3, AABB};
use std::any::Any;
use std::mem;

/// Axis-aligned box described by its half extents.
pub struct Cuboid<T> {
    half_extents: Vector3<T>,
    margin: T,
}

impl<T: Real> Cuboid<T> {
    pub fn new(half_extents: Vector3<T>) -> Cuboid<T> {
        Self::with_margin(half_extents, settings::default_margin())
    }

    pub fn with_margin(half_extents: Vector3<T>, margin: T) -> Cuboid<T> {
        assert!(half_extents.x > T::zero());
        assert!(half_extents.y > T::zero());
        assert!(half_extents.z > T::zero());
        assert!(margin >= T::zero());
        Cuboid {
            half_extents,
            margin,
        }
    }

    pub fn half_extents(&self) -> Vector3<T> {
        self.half_extents
    }
}

impl<T: Real> Shape<T> for Cuboid<T> {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn margin(&self) -> T {
        self.margin
    }

    fn size_in_bytes(&self) -> usize {
        mem::size_of::<Cuboid<T>>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_shape(&self) -> Box<dyn Shape<T>> {
        Box::new(Cuboid {
            half_extents: self.half_extents,
            margin: self.margin,
        })
    }

    fn local_support_point_without_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        let e = self.half_extents;
        Vector3::new(
            if direction.x < T::zero() { -e.x } else { e.x },
            if direction.y < T::zero() { -e.y } else { e.y },
            if direction.z < T::zero() { -e.z } else { e.z },
        )
    }

    fn local_bounds(&self) -> AABB<T> {
        let extent = self.half_extents + self.margin;
        AABB::new(-extent, extent)
    }

    fn local_inertia_tensor(&self, mass: T) -> Matrix33<T> {
        // The rounded hull is what collides, so the margin-inflated
        // extents carry the mass.
        let e = self.half_extents + self.margin;
        let x_square = e.x * e.x;
        let y_square = e.y * e.y;
        let z_square = e.z * e.z;
        let factor = T::one() / T::from_i32(3) * mass;
        Matrix33::diagonal(
            factor * (y_square + z_square),
            factor * (x_square + z_square),
            factor * (x_square + y_square),
        )
    }

    fn is_equal_to(&self, other: &dyn Shape<T>) -> bool {
        match other.as_any().downcast_ref::<Cuboid<T>>() {
            Some(other) => self.half_extents == other.half_extents,
            None => false,
        }
    }
}
