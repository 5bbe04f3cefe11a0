//! Implementation details of the `distance` function.

pub use self::canonical_pair::{CanonicalSegmentPair, SolveEntry};
pub use self::distance::distance;
pub use self::distance_segment_segment::{
    distance_segment_segment, distance_segment_segment_with_parameters,
};
pub use self::distance_sphere_cuboid::{
    distance_sphere_cuboid, distance_sphere_cuboid_with_normal,
};
pub use self::distance_sphere_sphere::distance_sphere_sphere;

mod canonical_pair;
mod distance;
mod distance_segment_segment;
mod distance_sphere_cuboid;
mod distance_sphere_sphere;
