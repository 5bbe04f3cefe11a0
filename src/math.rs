//! Linear algebra type aliases.

use na::{Isometry3, Point3, Vector3};

/// The scalar type used for concrete (non-symbolic) evaluation.
pub type Real = f64;

/// The dimension of the ambient space.
pub const DIM: usize = 3;

/// The point type.
pub type Point<T> = Point3<T>;

/// The vector type.
pub type Vector<T> = Vector3<T>;

/// The transformation (rotation + translation) type.
pub type Isometry<T> = Isometry3<T>;
