//! Classification of a primitive pair into a canonical segment pair.

use crate::math::Point;
use crate::query::InvalidPrimitiveType;
use crate::shape::{Capsule, Primitive, Sphere};
use na::Scalar;
use simba::simd::SimdRealField;

/// The stage at which the segment closest-point solver starts.
///
/// Spheres collapse to zero-length segments during classification, which fixes
/// the corresponding closest-point parameter to zero and lets the solver skip
/// the stages that would compute it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolveEntry {
    /// Both operands are proper segments: solve `t`, then `u`, then re-solve
    /// `t`.
    BothSegments,
    /// The second canonical segment collapsed to a point: `u = 0` is fixed and
    /// solving starts at the `t` re-solve.
    SecondDegenerate,
    /// Both canonical segments collapsed to points: `t = u = 0` are fixed and
    /// the solver jumps straight to the distance evaluation.
    BothDegenerate,
}

/// The canonical four-point description of a segment-like primitive pair.
///
/// Produced by [`CanonicalSegmentPair::from_primitives`] and consumed by
/// [`distance_segment_segment`](super::distance_segment_segment); owned
/// transiently by the query, never persisted.
#[derive(Clone, Debug)]
pub struct CanonicalSegmentPair<T: Scalar> {
    /// The first endpoint of the first canonical segment.
    pub a: Point<T>,
    /// The second endpoint of the first canonical segment.
    pub b: Point<T>,
    /// The first endpoint of the second canonical segment.
    pub c: Point<T>,
    /// The second endpoint of the second canonical segment.
    pub d: Point<T>,
    /// The sum of both primitives' radii.
    pub radius_sum: T,
    /// The stage at which the closest-point solver starts.
    pub entry: SolveEntry,
}

impl<T: SimdRealField> CanonicalSegmentPair<T> {
    /// Classifies a primitive pair into its canonical segment-pair form.
    ///
    /// The mapping is not symmetric in which operand supplies the segment
    /// endpoints: a sphere always collapses onto the `c`/`d` side, so when the
    /// first operand is the sphere the endpoints `a`/`b` come from the second
    /// operand. Moving and static variants share the same mapping. A
    /// [`Cuboid`](crate::shape::Cuboid) on either side is rejected with
    /// [`InvalidPrimitiveType`].
    pub fn from_primitives(
        p1: &Primitive<T>,
        p2: &Primitive<T>,
    ) -> Result<Self, InvalidPrimitiveType> {
        let g1 = segment_like(p1)?;
        let g2 = segment_like(p2)?;
        let radius_sum = g1.radius().clone() + g2.radius().clone();

        let pair = match (g1, g2) {
            (SegmentLike::Segment(s1), SegmentLike::Segment(s2)) => Self {
                a: s1.a.clone(),
                b: s1.b.clone(),
                c: s2.a.clone(),
                d: s2.b.clone(),
                radius_sum,
                entry: SolveEntry::BothSegments,
            },
            (SegmentLike::Segment(s1), SegmentLike::Point(c2)) => Self {
                a: s1.a.clone(),
                b: s1.b.clone(),
                c: c2.center.clone(),
                d: c2.center.clone(),
                radius_sum,
                entry: SolveEntry::SecondDegenerate,
            },
            (SegmentLike::Point(c1), SegmentLike::Segment(s2)) => Self {
                a: s2.a.clone(),
                b: s2.b.clone(),
                c: c1.center.clone(),
                d: c1.center.clone(),
                radius_sum,
                entry: SolveEntry::SecondDegenerate,
            },
            (SegmentLike::Point(c1), SegmentLike::Point(c2)) => Self {
                a: c1.center.clone(),
                b: c1.center.clone(),
                c: c2.center.clone(),
                d: c2.center.clone(),
                radius_sum,
                entry: SolveEntry::BothDegenerate,
            },
        };

        Ok(pair)
    }
}

enum SegmentLike<'a, T: Scalar> {
    Segment(&'a Capsule<T>),
    Point(&'a Sphere<T>),
}

impl<'a, T: Scalar> SegmentLike<'a, T> {
    fn radius(&self) -> &'a T {
        match self {
            SegmentLike::Segment(capsule) => &capsule.radius,
            SegmentLike::Point(sphere) => &sphere.radius,
        }
    }
}

fn segment_like<T: Scalar>(p: &Primitive<T>) -> Result<SegmentLike<'_, T>, InvalidPrimitiveType> {
    match p {
        Primitive::Capsule(capsule) | Primitive::MovingCapsule(capsule) => {
            Ok(SegmentLike::Segment(capsule))
        }
        Primitive::Sphere(sphere) | Primitive::MovingSphere(sphere) => {
            Ok(SegmentLike::Point(sphere))
        }
        Primitive::Cuboid(_) => Err(InvalidPrimitiveType),
    }
}
