//! Collision primitives supported by the distance queries.

pub use self::capsule::Capsule;
pub use self::cuboid::Cuboid;
pub use self::primitive::Primitive;
pub use self::sphere::Sphere;

mod capsule;
mod cuboid;
mod primitive;
mod sphere;
