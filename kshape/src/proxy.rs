use crate::shapes::{Shape, ShapeType};
use kmath::{Real, Transform, Vector3, AABB};

/// Opaque reference to an externally owned rigid body. The shape layer
/// never dereferences it; it only travels with the proxy so collision
/// consumers can find their way back to the body.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// Stable handle to a shape stored in a [`crate::ShapeArena`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub(crate) usize);

/// Stable handle to a proxy stored in a [`crate::ShapeArena`]. Proxy
/// identity is the handle, never the shape content.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ProxyHandle(pub(crate) usize);

/// One attachment of an immutable shape to a rigid body: the shape
/// reference, the owning body, the body-driven world transform and the
/// mass this attachment contributes to the body's composite inertia.
pub struct Proxy<T> {
    pub(crate) shape: ShapeHandle,
    pub(crate) body: BodyHandle,
    pub(crate) transform: Transform<T>,
    pub(crate) mass: T,
}

impl<T: Real> Proxy<T> {
    pub fn shape_handle(&self) -> ShapeHandle {
        self.shape
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn transform(&self) -> &Transform<T> {
        &self.transform
    }

    /// Updated by the owning body every simulation step.
    pub fn set_transform(&mut self, transform: Transform<T>) {
        self.transform = transform;
    }

    /// Fixed at attachment time.
    pub fn mass(&self) -> T {
        self.mass
    }
}

/// Read view over a proxy and the shape it references, borrowed from
/// the arena together. Support queries delegate straight to the shape
/// in local space; projecting through the stored transform is the
/// caller's business except for [`ProxyRef::world_bounds`].
pub struct ProxyRef<'a, T: Real> {
    pub(crate) proxy: &'a Proxy<T>,
    pub(crate) shape: &'a dyn Shape<T>,
}

impl<'a, T: Real> ProxyRef<'a, T> {
    pub fn shape(&self) -> &'a dyn Shape<T> {
        self.shape
    }

    pub fn shape_handle(&self) -> ShapeHandle {
        self.proxy.shape
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn body(&self) -> BodyHandle {
        self.proxy.body
    }

    pub fn transform(&self) -> &'a Transform<T> {
        &self.proxy.transform
    }

    pub fn mass(&self) -> T {
        self.proxy.mass
    }

    pub fn margin(&self) -> T {
        self.shape.margin()
    }

    pub fn local_support_point_with_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        self.shape.local_support_point_with_margin(direction)
    }

    pub fn local_support_point_without_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        self.shape.local_support_point_without_margin(direction)
    }

    pub fn world_bounds(&self) -> AABB<T> {
        self.shape.compute_world_bounds(&self.proxy.transform)
    }
}
