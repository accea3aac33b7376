//! Geometric primitive value types.
//!
//! Each primitive is a small `Copy` value type, immutable after construction.
//! Constructors establish the invariants (unit directions, non-negative
//! radii, ordered box corners); queries rely on them without re-validation.

mod aabb;
mod line;
mod plane;
mod ray;
mod segment;
mod sphere;
mod vec2;
mod vec3;

// Re-export all types at module level
pub use aabb::{Aabb2, Aabb3};
pub use line::{Line2, Line3};
pub use plane::Plane;
pub use ray::{Ray2, Ray3};
pub use segment::{Segment2, Segment3};
pub use sphere::{Circle2, Sphere};
pub use vec2::Vec2;
pub use vec3::Vec3;
