use approx::assert_abs_diff_eq;
use clearance3d::math::{Isometry, Point, Real, Vector};
use clearance3d::query::details::{distance_sphere_cuboid, distance_sphere_cuboid_with_normal};
use clearance3d::query::{distance, InvalidPrimitiveType};
use clearance3d::shape::{Cuboid, Primitive, Sphere};

fn cube_at(x: Real, y: Real, z: Real) -> Cuboid<Real> {
    Cuboid::new(Isometry::translation(x, y, z), Vector::new(0.15, 0.15, 0.15))
}

#[test]
fn concrete_case() {
    let sphere = Sphere::new(Point::new(0.5, 0.35, 0.15), 0.1);
    let cuboid = cube_at(0.5, 0.0, 0.15);
    assert_abs_diff_eq!(
        distance_sphere_cuboid(&sphere, &cuboid),
        0.1,
        epsilon = 1.0e-12
    );

    // The binding face is mins_y (index 1), which maps to the fixed normal
    // (0, -1, 0) even though the sphere sits on the +y side of the box. This
    // pairing is part of the contract and must not be "corrected".
    let (dist, normal) = distance_sphere_cuboid_with_normal(&sphere, &cuboid);
    assert_abs_diff_eq!(dist, 0.1, epsilon = 1.0e-12);
    assert_eq!(normal, Vector::new(0.0, -1.0, 0.0));
}

#[test]
fn center_inside_box_is_negative() {
    let cuboid = Cuboid::new(Isometry::identity(), Vector::new(1.0, 1.0, 1.0));
    let sphere = Sphere::new(Point::new(0.0, 0.0, 0.0), 0.1);
    // All six face violations are -(half extent + radius); the binding one is
    // -1.1.
    assert_abs_diff_eq!(
        distance_sphere_cuboid(&sphere, &cuboid),
        -1.1,
        epsilon = 1.0e-12
    );
}

#[test]
fn fixed_normal_pairing_on_positive_x_side() {
    let cuboid = Cuboid::new(Isometry::identity(), Vector::new(1.0, 1.0, 1.0));
    let sphere = Sphere::new(Point::new(3.0, 0.0, 0.0), 0.0);

    let (dist, normal) = distance_sphere_cuboid_with_normal(&sphere, &cuboid);
    assert_abs_diff_eq!(dist, 2.0, epsilon = 1.0e-12);
    // mins_x binds, so the reported normal is the negative x axis.
    assert_eq!(normal, Vector::new(-1.0, 0.0, 0.0));
}

#[test]
fn ties_resolve_to_first_face_in_scan_order() {
    let cuboid = Cuboid::new(Isometry::identity(), Vector::new(1.0, 1.0, 1.0));
    // Equidistant from the x and y faces: mins_x and mins_y both evaluate to
    // 1; the scan picks index 0.
    let sphere = Sphere::new(Point::new(2.0, 2.0, 0.0), 0.0);

    let (dist, normal) = distance_sphere_cuboid_with_normal(&sphere, &cuboid);
    assert_abs_diff_eq!(dist, 1.0, epsilon = 1.0e-12);
    assert_eq!(normal, Vector::new(-1.0, 0.0, 0.0));
}

#[test]
fn rigid_motion_invariance() {
    let sphere = Sphere::new(Point::new(0.5, 0.35, 0.15), 0.1);
    let cuboid = cube_at(0.5, 0.0, 0.15);
    let reference = distance_sphere_cuboid(&sphere, &cuboid);

    // Translating both operands by the same shift leaves the query unchanged.
    let shift = Vector::new(-2.0, 3.5, 0.25);
    assert_abs_diff_eq!(
        distance_sphere_cuboid(&sphere.translated(&shift), &cuboid.translated(&shift)),
        reference,
        epsilon = 1.0e-12
    );

    // So does moving both through the same rigid transform.
    let motion = Isometry::new(
        Vector::new(0.3, -1.2, 2.0),
        Vector::new(0.4, 0.5, -0.3),
    );
    let moved_sphere = Sphere::new(motion * sphere.center, sphere.radius);
    let moved_cuboid = Cuboid::new(motion * cuboid.pose, cuboid.half_extents);
    assert_abs_diff_eq!(
        distance_sphere_cuboid(&moved_sphere, &moved_cuboid),
        reference,
        epsilon = 1.0e-12
    );
}

#[test]
fn dispatcher_routes_boxes_to_the_face_solver() {
    let sphere = Sphere::new(Point::new(0.5, 0.35, 0.15), 0.1);
    let cuboid = cube_at(0.5, 0.0, 0.15);
    let expected = distance_sphere_cuboid(&sphere, &cuboid);

    let sphere_first = distance(
        &Primitive::MovingSphere(sphere.clone()),
        &Primitive::Cuboid(cuboid.clone()),
    )
    .unwrap();
    let cuboid_first = distance(
        &Primitive::Cuboid(cuboid.clone()),
        &Primitive::Sphere(sphere.clone()),
    )
    .unwrap();
    assert_abs_diff_eq!(sphere_first, expected, epsilon = 1.0e-12);
    assert_abs_diff_eq!(cuboid_first, expected, epsilon = 1.0e-12);

    // A box paired with anything but a sphere has no solver.
    let capsule = Primitive::Capsule(clearance3d::shape::Capsule::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        0.1,
    ));
    assert_eq!(
        distance(&Primitive::Cuboid(cuboid.clone()), &capsule).unwrap_err(),
        InvalidPrimitiveType
    );
    assert_eq!(
        distance(
            &Primitive::Cuboid(cuboid.clone()),
            &Primitive::Cuboid(cuboid),
        )
        .unwrap_err(),
        InvalidPrimitiveType
    );
}
