//! The sphere-box face-distance solver.

use crate::math::{Vector, DIM};
use crate::shape::{Cuboid, Sphere};
use simba::simd::SimdRealField;

/// Distance between a sphere and a posed box.
///
/// The sphere center is mapped into the box's local frame, the box is inflated
/// by the sphere radius, and the most-violated of the six face half-space
/// distances is returned. This is exact while at most one local axis of the
/// center lies outside the inflated box; near edges and corners it
/// under-estimates the true distance.
pub fn distance_sphere_cuboid<T: SimdRealField>(sphere: &Sphere<T>, cuboid: &Cuboid<T>) -> T
where
    T::Element: SimdRealField,
{
    face_distances(sphere, cuboid).0
}

/// Same as [`distance_sphere_cuboid`], but also returns the outward unit
/// normal of the binding face.
///
/// The six faces are scanned in the fixed order `[mins_x, mins_y, mins_z,
/// maxs_x, maxs_y, maxs_z]` and the first face whose violation equals the
/// returned distance wins. Indices 0-2 map to the negative-axis normals and
/// indices 3-5 to the positive-axis normals; this pairing is part of the
/// query's contract and must not be reordered.
pub fn distance_sphere_cuboid_with_normal<T: SimdRealField>(
    sphere: &Sphere<T>,
    cuboid: &Cuboid<T>,
) -> (T, Vector<T>)
where
    T::Element: SimdRealField,
{
    let (dist, faces) = face_distances(sphere, cuboid);

    // First-match selection against the value actually returned (not a
    // recomputation), accumulated with mask-and-select so that symbolic
    // scalars never flow through control flow.
    // The all-false mask is built from values so the mask type stays the
    // scalar's associated one.
    let mut normal = Vector::<T>::zeros();
    let mut bound = T::zero().simd_eq(T::one());
    for (i, face) in faces.iter().enumerate() {
        let binding = face.clone().simd_eq(dist.clone()) & !bound;
        let candidate = face_normal::<T>(i);
        normal = Vector::new(
            candidate.x.clone().select(binding, normal.x.clone()),
            candidate.y.clone().select(binding, normal.y.clone()),
            candidate.z.clone().select(binding, normal.z.clone()),
        );
        bound = bound | binding;
    }

    (dist, normal)
}

/// The six signed face violations of the radius-inflated box, and their
/// lane-wise maximum.
fn face_distances<T: SimdRealField>(sphere: &Sphere<T>, cuboid: &Cuboid<T>) -> (T, [T; 6])
where
    T::Element: SimdRealField,
{
    let local = cuboid.pose.inverse_transform_point(&sphere.center);
    let inflated = cuboid.half_extents.add_scalar(sphere.radius.clone());

    let mins = &local.coords - &inflated;
    let maxs = -inflated - &local.coords;
    let faces = [
        mins.x.clone(),
        mins.y.clone(),
        mins.z.clone(),
        maxs.x.clone(),
        maxs.y.clone(),
        maxs.z.clone(),
    ];

    let mut dist = faces[0].clone();
    for face in &faces[1..] {
        dist = dist.simd_max(face.clone());
    }

    (dist, faces)
}

/// Outward unit normal of the `i`-th face: indices 0-2 map to the negative
/// axes, indices 3-5 to the positive axes.
fn face_normal<T: SimdRealField>(i: usize) -> Vector<T> {
    let mut normal = Vector::zeros();
    if i < DIM {
        normal[i] = -T::one();
    } else {
        normal[i - DIM] = T::one();
    }
    normal
}
