use crate::shape::Sphere;
use simba::simd::SimdRealField;

/// Distance between two spheres.
///
/// Negative when the spheres overlap: two coincident spheres of radius `r`
/// yield `-2r`.
#[inline]
pub fn distance_sphere_sphere<T: SimdRealField>(sphere1: &Sphere<T>, sphere2: &Sphere<T>) -> T {
    let radius_sum = sphere1.radius.clone() + sphere2.radius.clone();
    let centers = &sphere1.center - &sphere2.center;
    centers.norm_squared().simd_sqrt() - radius_sum
}
