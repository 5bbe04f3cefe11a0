//! Definition of the sphere primitive.

use crate::math::{Point, Vector};
use na::Scalar;
use simba::simd::SimdRealField;

/// A sphere defined by its world-space center and its radius.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere<T: Scalar> {
    /// The center of the sphere.
    pub center: Point<T>,
    /// The radius of the sphere.
    pub radius: T,
}

impl<T: SimdRealField> Sphere<T> {
    /// Creates a new sphere from its center and radius.
    pub fn new(center: Point<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// This sphere translated by `shift`.
    pub fn translated(&self, shift: &Vector<T>) -> Self {
        Self::new(&self.center + shift, self.radius.clone())
    }
}
