//! Definition of the posed box primitive.

use crate::math::{Isometry, Vector};
use na::Translation3;
use simba::simd::SimdRealField;

/// A box with a rigid pose, axis-aligned in its own local frame.
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug)]
pub struct Cuboid<T> {
    /// The pose of the box: its local frame expressed in world coordinates.
    pub pose: Isometry<T>,
    /// The half-extents of the box along its local x, y and z axes. Each
    /// half-extent must be non-negative.
    pub half_extents: Vector<T>,
}

impl<T: SimdRealField> Cuboid<T> {
    /// Creates a new box from its pose and half-extents.
    pub fn new(pose: Isometry<T>, half_extents: Vector<T>) -> Self {
        Self { pose, half_extents }
    }

    /// This box translated by `shift`.
    pub fn translated(&self, shift: &Vector<T>) -> Self
    where
        T::Element: SimdRealField,
    {
        let pose = Translation3::from(shift.clone()) * &self.pose;
        Self::new(pose, self.half_extents.clone())
    }
}
