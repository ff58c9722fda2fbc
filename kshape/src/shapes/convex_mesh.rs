use crate::settings;
use crate::shapes::{Shape, ShapeType};
use kmath::{DotTrait, Matrix33, Real, Vector3, AABB};
use std::any::Any;
use std::mem;

/// Convex hull described by its vertex cloud. Vertices are assumed to
/// already form a convex set; the support scan works either way but
/// interior points are wasted work.
pub struct ConvexMesh<T> {
    vertices: Vec<Vector3<T>>,
    margin: T,
}

impl<T: Real> ConvexMesh<T> {
    pub fn new(vertices: Vec<Vector3<T>>) -> ConvexMesh<T> {
        Self::with_margin(vertices, settings::default_margin())
    }

    pub fn with_margin(vertices: Vec<Vector3<T>>, margin: T) -> ConvexMesh<T> {
        assert!(vertices.len() >= settings::MIN_CONVEX_MESH_VERTICES);
        assert!(margin >= T::zero());
        ConvexMesh { vertices, margin }
    }

    pub fn vertices(&self) -> &[Vector3<T>] {
        &self.vertices
    }
}

impl<T: Real> Shape<T> for ConvexMesh<T> {
    fn shape_type(&self) -> ShapeType {
        ShapeType::ConvexMesh
    }

    fn margin(&self) -> T {
        self.margin
    }

    fn size_in_bytes(&self) -> usize {
        mem::size_of::<ConvexMesh<T>>() + self.vertices.len() * mem::size_of::<Vector3<T>>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_shape(&self) -> Box<dyn Shape<T>> {
        Box::new(ConvexMesh {
            vertices: self.vertices.clone(),
            margin: self.margin,
        })
    }

    fn local_support_point_without_margin(&self, direction: &Vector3<T>) -> Vector3<T> {
        let mut best = self.vertices[0];
        let mut best_value = best.dot(*direction);
        for vertex in &self.vertices[1..] {
            let value = vertex.dot(*direction);
            if value > best_value {
                best = *vertex;
                best_value = value;
            }
        }
        best
    }

    fn local_bounds(&self) -> AABB<T> {
        let mut lower = self.vertices[0];
        let mut upper = lower;
        for vertex in &self.vertices[1..] {
            lower = lower.min(*vertex);
            upper = upper.max(*vertex);
        }
        AABB::new(lower - self.margin, upper + self.margin)
    }

    fn local_inertia_tensor(&self, mass: T) -> Matrix33<T> {
        // Approximated by the margin-expanded local bounds; an exact
        // hull integral is not worth it for a collision proxy.
        let e = self.local_bounds().extents();
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
        match other.as_any().downcast_ref::<ConvexMesh<T>>() {
            Some(other) => self.vertices == other.vertices,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Vec<Vector3<f32>> {
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn support_picks_the_extremal_vertex() {
        let mesh = ConvexMesh::with_margin(tetrahedron(), 0.0);
        let support = mesh.local_support_point_without_margin(&Vector3::new(0.2, 1.0, 0.1));
        assert_eq!(support, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn zero_direction_returns_the_first_vertex() {
        let mesh = ConvexMesh::with_margin(tetrahedron(), 0.0);
        let support = mesh.local_support_point_without_margin(&Vector3::zero());
        assert_eq!(support, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn bounds_wrap_the_cloud_plus_margin() {
        let mesh = ConvexMesh::with_margin(tetrahedron(), 0.5);
        let bounds = mesh.local_bounds();
        assert_eq!(bounds.lower_bound, Vector3::new(-0.5, -0.5, -0.5));
        assert_eq!(bounds.upper_bound, Vector3::new(1.5, 1.5, 1.5));
    }

    #[test]
    fn equality_compares_vertex_lists() {
        let a = ConvexMesh::with_margin(tetrahedron(), 0.0);
        let b = ConvexMesh::with_margin(tetrahedron(), 0.25);
        assert!(a.is_equal_to(&b));

        let mut vertices = tetrahedron();
        vertices[1].x = 2.0;
        let c = ConvexMesh::with_margin(vertices, 0.0);
        assert!(!a.is_equal_to(&c));
    }

    #[test]
    #[should_panic]
    fn too_few_vertices_are_rejected() {
        ConvexMesh::<f32>::new(vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ]);
    }
}
