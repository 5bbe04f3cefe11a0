use crate::query::details::{distance_segment_segment, distance_sphere_cuboid, CanonicalSegmentPair};
use crate::query::InvalidPrimitiveType;
use crate::shape::Primitive;
use simba::simd::SimdRealField;

/// Computes the minimum distance separating two primitives.
///
/// Sphere and capsule operands (moving or static) are classified into a
/// canonical segment pair and routed through the segment closest-point
/// solver; a sphere paired with a box is routed to the sphere-box face
/// solver. The result is negative when the (radius-inflated) primitives
/// overlap.
///
/// Pairs with no solver — a box paired with anything but a sphere — are
/// rejected with [`InvalidPrimitiveType`].
pub fn distance<T: SimdRealField>(
    p1: &Primitive<T>,
    p2: &Primitive<T>,
) -> Result<T, InvalidPrimitiveType>
where
    T::Element: SimdRealField,
{
    match (p1, p2) {
        (
            Primitive::Sphere(sphere) | Primitive::MovingSphere(sphere),
            Primitive::Cuboid(cuboid),
        )
        | (
            Primitive::Cuboid(cuboid),
            Primitive::Sphere(sphere) | Primitive::MovingSphere(sphere),
        ) => Ok(distance_sphere_cuboid(sphere, cuboid)),
        (Primitive::Cuboid(_), _) | (_, Primitive::Cuboid(_)) => {
            log::debug!("no distance solver for this primitive pair");
            Err(InvalidPrimitiveType)
        }
        _ => {
            let pair = CanonicalSegmentPair::from_primitives(p1, p2)?;
            Ok(distance_segment_segment(&pair))
        }
    }
}
