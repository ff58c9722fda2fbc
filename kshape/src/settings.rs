use kmath::Real;

/// Fewest vertices accepted for a convex mesh hull (a tetrahedron).
pub const MIN_CONVEX_MESH_VERTICES: usize = 4;

/// Rounding margin applied around every core convex hull, in length
/// units: 0.04, i.e. 4cm when units are meters. Shapes smaller than
/// this should be built with an explicit smaller margin.
#[inline]
pub fn default_margin<T: Real>() -> T {
    T::en2() * T::from_i32(4)
}
