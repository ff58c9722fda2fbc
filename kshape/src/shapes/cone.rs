use crate::settings;
use crate::shapes::{Shape, ShapeType};
use kmath::{Matrix33, Real, Vector3, AABB};
use std::any::Any;
use std::mem;

/// Solid cone aligned with the local Y axis: apex at `+half_height`,
/// base circle of `radius` at `-half_height`.
pub struct Cone<T> {
    radius: T,
    half_height: T,
    // Sine of the half angle at the apex, cached at construction.
    sin_theta: T,
    margin: T,
}

impl<T: Real> Cone<T> {
    pub fn new(radius: T, height: T) -> Cone<T> {
        Self::with_margin(radius, height, settings::default_margin())
    }

    pub fn with_margin(radius: T, height: T, margin: T) -> Cone<T> {
        assert!(radius > T::zero());
        assert!(height > T::zero());
        assert!(margin >= T::zero());
        let sin_theta = radius / (radius * radius + height * height).sqrt();
        Cone {
            radius,
            half_height: height * T::half(),
            sin_theta,
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

impl<T: Real> Shape<T> for Cone<T> {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Cone
    }

    fn margin(&self) -> T {
        self.margin
    }

    fn size_in_bytes(&self) -> usize {
        mem::size_of::<Cone<T>>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_shape(&self) -> Box<dyn Shape<T>> {
        Box::new(Cone {
            radius: self.radius,
            half_height: self.half_height,
            sin_theta: self.sin_theta,
            margin: self.margin,
        })
    }

    fn local_support_point_without_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        let v = *direction;
        let length = v.length();

        // The apex wins whenever the direction is steeper than the side
        // surface (dy/|d| > sin(theta)). A degenerate direction resolves
        // to the apex as well.
        if length <= T::epsilon() || v.y > self.sin_theta * length {
            return Vector3::new(T::zero(), self.half_height, T::zero());
        }

        let planar = (v.x * v.x + v.z * v.z).sqrt();
        if planar > T::epsilon() {
            // Farthest point on the base rim, along the planar projection.
            let scale = self.radius / planar;
            Vector3::new(v.x * scale, -self.half_height, v.z * scale)
        } else {
            // Straight down: the middle of the base circle.
            Vector3::new(T::zero(), -self.half_height, T::zero())
        }
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
        // Solid cone about its geometric center, half height squared in
        // the transverse term: I = 3/20 m r^2 + 3/80 m h^2.
        let r_square = self.radius * self.radius;
        let hh_square = self.half_height * self.half_height;
        let transverse = T::from_i32(3) / T::from_i32(20) * mass * (r_square + hh_square);
        let axial = T::from_i32(3) / T::from_i32(10) * mass * r_square;
        Matrix33::diagonal(transverse, axial, transverse)
    }

    fn is_equal_to(&self, other: &dyn Shape<T>) -> bool {
        match other.as_any().downcast_ref::<Cone<T>>() {
            Some(other) => self.radius == other.radius && self.half_height == other.half_height,
            None => false,
        }
    }
}
