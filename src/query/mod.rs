//! Distance queries between collision primitives.

pub use self::distance::distance;
pub use self::error::InvalidPrimitiveType;

/// Implementation details of the `distance` function.
pub mod details {
    pub use super::distance::{
        distance_segment_segment, distance_segment_segment_with_parameters,
        distance_sphere_cuboid, distance_sphere_cuboid_with_normal, distance_sphere_sphere,
        CanonicalSegmentPair, SolveEntry,
    };
}

mod distance;
mod error;
