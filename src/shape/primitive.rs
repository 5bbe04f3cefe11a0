//! The tagged union of all supported primitives.

use crate::shape::{Capsule, Cuboid, Sphere};
use na::Scalar;

/// A tagged collision primitive.
///
/// The moving variants are geometrically identical to their static
/// counterparts: the tag only records, for the caller's bookkeeping, that the
/// primitive envelopes a moving obstacle rather than a static one. Dispatch
/// never distinguishes them.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug)]
pub enum Primitive<T: Scalar> {
    /// A static sphere.
    Sphere(Sphere<T>),
    /// A sphere enveloping a moving obstacle.
    MovingSphere(Sphere<T>),
    /// A static capsule.
    Capsule(Capsule<T>),
    /// A capsule enveloping a moving obstacle.
    MovingCapsule(Capsule<T>),
    /// A box with an arbitrary rigid pose.
    Cuboid(Cuboid<T>),
}

impl<T: Scalar> Primitive<T> {
    /// Whether this primitive is tagged as enveloping a moving obstacle.
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::MovingSphere(_) | Self::MovingCapsule(_))
    }
}
