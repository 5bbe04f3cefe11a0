//! Definition of the capsule primitive.

use crate::math::{Point, Vector};
use na::Scalar;
use simba::simd::SimdRealField;

/// A capsule: the volume swept by a sphere of radius `radius` moving from `a`
/// to `b`.
///
/// This is the segment-like primitive of the distance queries. A zero radius
/// reduces it to a bare line segment, and `a == b` reduces it to a sphere.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Capsule<T: Scalar> {
    /// The first endpoint of the capsule axis.
    pub a: Point<T>,
    /// The second endpoint of the capsule axis.
    pub b: Point<T>,
    /// The radius swept around the axis.
    pub radius: T,
}

impl<T: SimdRealField> Capsule<T> {
    /// Creates a new capsule from the endpoints of its axis and its radius.
    pub fn new(a: Point<T>, b: Point<T>, radius: T) -> Self {
        Self { a, b, radius }
    }

    /// This capsule translated by `shift`.
    pub fn translated(&self, shift: &Vector<T>) -> Self {
        Self::new(&self.a + shift, &self.b + shift, self.radius.clone())
    }
}
