use crate::settings;
use crate::shapes::{Shape, ShapeType};
use kmath::{Matrix33, Real, Vector3, AABB};
use std::any::Any;
use std::mem;

/// Solid cylinder aligned with the local Y axis, caps at
/// `-half_height` and `+half_height`.
pub struct Cylinder<T> {
    radius: T,
    half_height: T,
    margin: T,
}

impl<T: Real> Cylinder<T> {
    pub fn new(radius: T, height: T) -> Cylinder<T> {
        Self::with_margin(radius, height, settings::default_margin())
    }

    pub fn with_margin(radius: T, height: T, margin: T) -> Cylinder<T> {
        assert!(radius > T::zero());
        assert!(height > T::zero());
        assert!(margin >= T::zero());
        Cylinder {
            radius,
            half_height: height * T::half(),
            margin,
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

impl<T: Real> Shape<T> for Cylinder<T> {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }

    fn margin(&self) -> T {
        self.margin
    }

    fn size_in_bytes(&self) -> usize {
        mem::size_of::<Cylinder<T>>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_shape(&self) -> Box<dyn Shape<T>> {
        Box::new(Cylinder {
            radius: self.radius,
            half_height: self.half_height,
            margin: self.margin,
        })
    }

    fn local_support_point_without_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        let v = *direction;
        let planar = (v.x * v.x + v.z * v.z).sqrt();
        // Zero planar component lands on the cap axis point.
        let scale = if planar > T::epsilon() {
            self.radius / planar
        } else {
            T::zero()
        };
        let y = if v.y < T::zero() {
            -self.half_height
        } else {
            self.half_height
        };
        Vector3::new(v.x * scale, y, v.z * scale)
    }

    fn local_bounds(&self) -> AABB<T> {
        let planar = self.radius + self.margin;
        let axial = self.half_height + self.margin;
        AABB::new(
            Vector3::new(-planar, -axial, -planar),
            Vector3::new(planar, axial, planar),
        )
    }

    fn local_inertia_tensor(&self, mass: T) -> Matrix33<T> {
        let height = self.half_height * T::two();
        let r_square = self.radius * self.radius;
        let h_square = height * height;
        let transverse =
            T::one() / T::from_i32(12) * mass * (T::from_i32(3) * r_square + h_square);
        let axial = T::half() * mass * r_square;
        Matrix33::diagonal(transverse, axial, transverse)
    }

    fn is_equal_to(&self, other: &dyn Shape<T>) -> bool {
        match other.as_any().downcast_ref::<Cylinder<T>>() {
            Some(other) => self.radius == other.radius && self.half_height == other.half_height,
            None => false,
        }
    }
}
