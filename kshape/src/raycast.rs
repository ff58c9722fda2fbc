use kmath::{Real, Vector3};

/// World-space ray between two points. `max_fraction` clips the usable
/// span to `point1 + t * (point2 - point1)` with `t` in
/// `[0, max_fraction]`.
#[derive(Debug, Copy, Clone)]
pub struct Ray<T> {
    pub point1: Vector3<T>,
    pub point2: Vector3<T>,
    pub max_fraction: T,
}

impl<T: Real> Ray<T> {
    pub fn new(point1: Vector3<T>, point2: Vector3<T>) -> Ray<T> {
        Self::with_max_fraction(point1, point2, T::one())
    }

    pub fn with_max_fraction(point1: Vector3<T>, point2: Vector3<T>, max_fraction: T) -> Ray<T> {
        assert!(max_fraction >= T::zero());
        Ray {
            point1,
            point2,
            max_fraction,
        }
    }

    /// Shortens the ray; the clip never lengthens it.
    pub fn clip(&mut self, fraction: T) {
        self.max_fraction = self.max_fraction.min(fraction);
    }
}

/// One narrow-phase hit, reported in world space.
#[derive(Debug, Copy, Clone)]
pub struct RaycastHit<T> {
    pub world_point: Vector3<T>,
    pub world_normal: Vector3<T>,
    /// Position of the hit along the ray, in `[0, 1]`.
    pub fraction: T,
}

/// Boundary contract a narrow-phase raycaster reports hits through.
pub trait RaycastCallback<T: Real> {
    /// Returns the fraction the caster should keep casting with: a
    /// value below 1 shortens the ray for subsequent hits, a negative
    /// value stops the cast altogether.
    fn notify_raycast_hit(&mut self, hit: &RaycastHit<T>) -> T;
}

/// Applies the callback's answer for one hit to the ray being cast.
/// Returns `false` when the callback asked to stop.
pub fn process_raycast_hit<T, C>(ray: &mut Ray<T>, hit: &RaycastHit<T>, callback: &mut C) -> bool
where
    T: Real,
    C: RaycastCallback<T> + ?Sized,
{
    let fraction = callback.notify_raycast_hit(hit);
    if fraction < T::zero() {
        return false;
    }
    ray.clip(fraction);
    true
}
