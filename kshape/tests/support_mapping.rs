use approx::assert_relative_eq;
use kmath::{DotTrait, Vector3};
use kshape::{Capsule, Cone, ConvexMesh, Cuboid, Cylinder, Shape, Sphere};
use proptest::prelude::*;

fn shapes() -> Vec<Box<dyn Shape<f64>>> {
    vec![
        Box::new(Sphere::new(1.5)),
        Box::new(Cone::new(2.0, 3.0)),
        Box::new(Cuboid::new(Vector3::new(1.0, 2.0, 0.5))),
        Box::new(Cylinder::new(1.0, 4.0)),
        Box::new(Capsule::new(0.5, 2.0)),
        Box::new(ConvexMesh::new(vec![
            Vector3::new(-1.0, -1.0, -1.0),
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(0.0, 1.0, -0.5),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(-0.5, 0.5, 0.5),
        ])),
    ]
}

proptest! {
    #[test]
    fn margin_advances_the_core_support(
        dx in -1.0f64..1.0,
        dy in -1.0f64..1.0,
        dz in -1.0f64..1.0,
    ) {
        let d = Vector3::new(dx, dy, dz);
        prop_assume!(d.length() > 1e-3);
        let unit = d * (1.0 / d.length());

        for shape in shapes() {
            let with = shape.local_support_point_with_margin(&d);
            let without = shape.local_support_point_without_margin(&d);
            let expected = without + unit * shape.margin();
            prop_assert!((with - expected).length() < 1e-9);
        }
    }

    #[test]
    fn sphere_support_lies_on_the_surface(
        dx in -1.0f64..1.0,
        dy in -1.0f64..1.0,
        dz in -1.0f64..1.0,
        radius in 0.1f64..10.0,
    ) {
        let d = Vector3::new(dx, dy, dz);
        prop_assume!(d.length() > 1e-3);
        let sphere = Sphere::new(radius);
        let support = sphere.local_support_point_with_margin(&d);
        prop_assert!((support.length() - radius).abs() < 1e-9);
    }

    #[test]
    fn support_stays_inside_the_local_bounds(
        dx in -1.0f64..1.0,
        dy in -1.0f64..1.0,
        dz in -1.0f64..1.0,
    ) {
        let d = Vector3::new(dx, dy, dz);
        prop_assume!(d.length() > 1e-3);

        for shape in shapes() {
            let support = shape.local_support_point_with_margin(&d);
            let mut bounds = shape.local_bounds();
            // Tiny inflation to absorb rounding in the margin offset.
            bounds.lower_bound = bounds.lower_bound - 1e-9;
            bounds.upper_bound = bounds.upper_bound + 1e-9;
            prop_assert!(bounds.contains_point(&support));
        }
    }

    #[test]
    fn support_is_extremal_among_sampled_directions(
        dx in -1.0f64..1.0,
        dy in -1.0f64..1.0,
        dz in -1.0f64..1.0,
        ox in -1.0f64..1.0,
        oy in -1.0f64..1.0,
        oz in -1.0f64..1.0,
    ) {
        let d = Vector3::new(dx, dy, dz);
        let other = Vector3::new(ox, oy, oz);
        prop_assume!(d.length() > 1e-3 && other.length() > 1e-3);

        for shape in shapes() {
            let support = shape.local_support_point_with_margin(&d);
            let candidate = shape.local_support_point_with_margin(&other);
            prop_assert!(candidate.dot(d) <= support.dot(d) + 1e-9);
        }
    }

    #[test]
    fn inertia_scales_linearly_with_mass(mass in 0.1f64..100.0) {
        for shape in shapes() {
            let one = shape.local_inertia_tensor(1.0);
            let scaled = shape.local_inertia_tensor(mass);
            prop_assert!((scaled.ex.x - one.ex.x * mass).abs() < 1e-9 * mass.max(1.0));
            prop_assert!((scaled.ey.y - one.ey.y * mass).abs() < 1e-9 * mass.max(1.0));
            prop_assert!((scaled.ez.z - one.ez.z * mass).abs() < 1e-9 * mass.max(1.0));
        }
    }
}

#[test]
fn rotationally_symmetric_bounds_are_centered() {
    let shapes: Vec<Box<dyn Shape<f64>>> = vec![
        Box::new(Sphere::new(1.5)),
        Box::new(Cone::new(2.0, 3.0)),
        Box::new(Cylinder::new(1.0, 4.0)),
        Box::new(Capsule::new(0.5, 2.0)),
    ];
    for shape in shapes {
        let bounds = shape.local_bounds();
        assert_eq!(bounds.lower_bound.x, -bounds.upper_bound.x);
        assert_eq!(bounds.lower_bound.z, -bounds.upper_bound.z);
    }
}

#[test]
fn bounds_grow_monotonically_with_margin() {
    let margins = [0.0f64, 0.04, 0.1, 0.5];
    let mut previous: Option<Vector3<f64>> = None;
    for margin in margins {
        let cone = Cone::with_margin(2.0, 3.0, margin);
        let bounds = cone.local_bounds();
        let size = bounds.upper_bound - bounds.lower_bound;
        if let Some(prev) = previous {
            assert!(size.x > prev.x && size.y > prev.y && size.z > prev.z);
        }
        previous = Some(size);
    }
}

#[test]
fn inertia_tensors_are_diagonal() {
    for shape in shapes() {
        let tensor = shape.local_inertia_tensor(3.0);
        assert_eq!(tensor.ex.y, 0.0);
        assert_eq!(tensor.ex.z, 0.0);
        assert_eq!(tensor.ey.x, 0.0);
        assert_eq!(tensor.ey.z, 0.0);
        assert_eq!(tensor.ez.x, 0.0);
        assert_eq!(tensor.ez.y, 0.0);
    }
}

#[test]
fn equality_is_reflexive_and_symmetric_within_a_kind() {
    let a = Cone::new(3.0f64, 5.0);
    let b = Cone::new(3.0f64, 5.0);
    let c = Cone::new(3.0f64, 4.0);
    assert!(a.is_equal_to(&a));
    assert!(a.is_equal_to(&b));
    assert!(b.is_equal_to(&a));
    assert!(!a.is_equal_to(&c));
    assert!(!c.is_equal_to(&a));
}

#[test]
fn equality_across_kinds_is_false_and_never_panics() {
    let all = shapes();
    for (i, left) in all.iter().enumerate() {
        for (j, right) in all.iter().enumerate() {
            let equal = left.is_equal_to(right.as_ref());
            if i == j {
                assert!(equal);
            } else {
                assert!(!equal);
            }
        }
    }
}

#[test]
fn margin_does_not_affect_equality() {
    let a = Cone::with_margin(3.0f64, 5.0, 0.04);
    let b = Cone::with_margin(3.0f64, 5.0, 0.2);
    assert!(a.is_equal_to(&b));
}

#[test]
fn scenario_sphere_two() {
    let sphere = Sphere::new(2.0f64);
    let support = sphere.local_support_point_with_margin(&Vector3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(support.x, 2.0, epsilon = 1e-12);
    assert_eq!(support.y, 0.0);
    assert_eq!(support.z, 0.0);

    let tensor = sphere.local_inertia_tensor(10.0);
    assert_relative_eq!(tensor.ex.x, 16.0, epsilon = 1e-9);
    assert_relative_eq!(tensor.ey.y, 16.0, epsilon = 1e-9);
    assert_relative_eq!(tensor.ez.z, 16.0, epsilon = 1e-9);
}

#[test]
fn scenario_cone_three_by_five() {
    let cone = Cone::with_margin(3.0f64, 5.0, 0.04);
    assert_eq!(cone.half_height(), 2.5);

    let up = cone.local_support_point_without_margin(&Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(up, Vector3::new(0.0, 2.5, 0.0));
    let down = cone.local_support_point_without_margin(&Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(down, Vector3::new(0.0, -2.5, 0.0));

    let bounds = cone.local_bounds();
    assert_relative_eq!(bounds.upper_bound.x, 3.04, epsilon = 1e-12);
    assert_relative_eq!(bounds.upper_bound.y, 2.54, epsilon = 1e-12);
    assert_relative_eq!(bounds.upper_bound.z, 3.04, epsilon = 1e-12);
}
