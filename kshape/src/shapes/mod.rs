use kmath::{Matrix33, Multiply, Real, Transform, Vector3, AABB};
use std::any::Any;

mod capsule;
mod cone;
mod convex_mesh;
mod cuboid;
mod cylinder;
mod sphere;

pub use capsule::Capsule;
pub use cone::Cone;
pub use convex_mesh::ConvexMesh;
pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use sphere::Sphere;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Sphere,
    Cone,
    Cuboid,
    Cylinder,
    Capsule,
    ConvexMesh,
}

/// A convex collision shape centered at its local origin. Shapes are
/// immutable once built and may be referenced by any number of proxies.
pub trait Shape<T: Real> {
    fn shape_type(&self) -> ShapeType;

    /// Rounding radius layered over the core hull. Always non-negative.
    fn margin(&self) -> T;

    /// Exact byte footprint of the concrete shape, for arena accounting.
    fn size_in_bytes(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn clone_shape(&self) -> Box<dyn Shape<T>>;

    /// Farthest point of the core (unrounded) hull along `direction`.
    /// The direction need not be unit length; a zero direction yields a
    /// deterministic axis-default point, never a fault.
    fn local_support_point_without_margin(&self, direction: &Vector3<T>) -> Vector3<T>;

    /// Farthest point of the margin-expanded hull along `direction`:
    /// the core support point advanced by `margin` along the normalized
    /// direction. A zero-length direction contributes no margin offset.
    fn local_support_point_with_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        let support = self.local_support_point_without_margin(direction);
        let length = direction.length();
        if length > T::epsilon() {
            support + *direction * (self.margin() / length)
        } else {
            support
        }
    }

    /// Axis-aligned bounds of the margin-expanded shape in local space.
    fn local_bounds(&self) -> AABB<T>;

    /// Local bounds carried through a world transform and refit.
    fn compute_world_bounds(&self, xf: &Transform<T>) -> AABB<T> {
        let local = self.local_bounds();
        let l = local.lower_bound;
        let u = local.upper_bound;
        let corners = [
            Vector3::new(l.x, l.y, l.z),
            Vector3::new(u.x, l.y, l.z),
            Vector3::new(l.x, u.y, l.z),
            Vector3::new(u.x, u.y, l.z),
            Vector3::new(l.x, l.y, u.z),
            Vector3::new(u.x, l.y, u.z),
            Vector3::new(l.x, u.y, u.z),
            Vector3::new(u.x, u.y, u.z),
        ];
        let mut lower = xf.multiply(corners[0]);
        let mut upper = lower;
        for corner in &corners[1..] {
            let p = xf.multiply(*corner);
            lower = lower.min(p);
            upper = upper.max(p);
        }
        AABB::new(lower, upper)
    }

    /// Inertia tensor of the uniform-density solid for the given total
    /// mass, diagonal in the shape's local frame.
    fn local_inertia_tensor(&self, mass: T) -> Matrix33<T>;

    /// Structural equality restricted to the same concrete kind; a kind
    /// mismatch compares as not-equal. Margins are not compared.
    fn is_equal_to(&self, other: &dyn Shape<T>) -> bool;
}
