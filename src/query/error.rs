/// Error indicating that a distance query involves a primitive it does not
/// support.
///
/// The segment-pair classifier only understands spheres and capsules (moving
/// or static); a [`Cuboid`](crate::shape::Cuboid) operand is rejected with
/// this error, as is any pair the top-level
/// [`distance`](crate::query::distance) dispatcher has no solver for. This is
/// the only checked failure of this crate: every query that passes
/// classification is a total, closed-form computation.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("primitive type not supported by this distance query")]
pub struct InvalidPrimitiveType;
