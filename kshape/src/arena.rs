use crate::proxy::{BodyHandle, Proxy, ProxyHandle, ProxyRef, ShapeHandle};
use crate::shapes::Shape;
use kmath::{Real, Transform};
use slab::Slab;
use std::mem;

struct ShapeEntry<T: Real> {
    shape: Box<dyn Shape<T>>,
    // Live proxies referencing this shape; the shape may not be removed
    // while this is non-zero.
    proxy_count: usize,
}

/// Owns every shape and proxy of one simulation world. Storage is
/// slab-backed so handles stay stable across removals, and the arena
/// tracks the byte footprint reported by each shape for allocation
/// accounting. One arena per world; arenas share nothing.
pub struct ShapeArena<T: Real> {
    shapes: Slab<ShapeEntry<T>>,
    proxies: Slab<Proxy<T>>,
    allocated_bytes: usize,
}

impl<T: Real> ShapeArena<T> {
    pub fn new() -> ShapeArena<T> {
        ShapeArena {
            shapes: Slab::new(),
            proxies: Slab::new(),
            allocated_bytes: 0,
        }
    }

    pub fn insert<S: Shape<T> + 'static>(&mut self, shape: S) -> ShapeHandle {
        self.allocated_bytes += shape.size_in_bytes();
        ShapeHandle(self.shapes.insert(ShapeEntry {
            shape: Box::new(shape),
            proxy_count: 0,
        }))
    }

    /// Duplicates a stored shape into a fresh arena slot.
    pub fn duplicate(&mut self, handle: ShapeHandle) -> ShapeHandle {
        let copy = self.shapes[handle.0].shape.clone_shape();
        self.allocated_bytes += copy.size_in_bytes();
        ShapeHandle(self.shapes.insert(ShapeEntry {
            shape: copy,
            proxy_count: 0,
        }))
    }

    pub fn shape(&self, handle: ShapeHandle) -> &dyn Shape<T> {
        self.shapes[handle.0].shape.as_ref()
    }

    /// Removes a shape with no remaining proxies. A proxy must never
    /// outlive its shape, so removal with live proxies is a logic error.
    pub fn remove_shape(&mut self, handle: ShapeHandle) {
        assert_eq!(
            self.shapes[handle.0].proxy_count, 0,
            "shape is still referenced by a proxy"
        );
        let entry = self.shapes.remove(handle.0);
        self.allocated_bytes -= entry.shape.size_in_bytes();
    }

    pub fn create_proxy(
        &mut self,
        shape: ShapeHandle,
        body: BodyHandle,
        transform: Transform<T>,
        mass: T,
    ) -> ProxyHandle {
        assert!(mass >= T::zero());
        self.shapes[shape.0].proxy_count += 1;
        self.allocated_bytes += mem::size_of::<Proxy<T>>();
        ProxyHandle(self.proxies.insert(Proxy {
            shape,
            body,
            transform,
            mass,
        }))
    }

    pub fn destroy_proxy(&mut self, handle: ProxyHandle) {
        let proxy = self.proxies.remove(handle.0);
        self.shapes[proxy.shape.0].proxy_count -= 1;
        self.allocated_bytes -= mem::size_of::<Proxy<T>>();
    }

    pub fn proxy(&self, handle: ProxyHandle) -> &Proxy<T> {
        &self.proxies[handle.0]
    }

    pub fn proxy_mut(&mut self, handle: ProxyHandle) -> &mut Proxy<T> {
        &mut self.proxies[handle.0]
    }

    /// Borrows a proxy together with its shape for forwarding queries.
    pub fn proxy_view(&self, handle: ProxyHandle) -> ProxyRef<'_, T> {
        let proxy = &self.proxies[handle.0];
        ProxyRef {
            proxy,
            shape: self.shapes[proxy.shape.0].shape.as_ref(),
        }
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }

    pub fn allocated_bytes(&self) -> usize {
        self.allocated_bytes
    }
}

impl<T: Real> Default for ShapeArena<T> {
    fn default() -> Self {
        ShapeArena::new()
    }
}
