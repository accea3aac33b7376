//! geoquery: geometric closest-point and intersection queries
//!
//! A pure function library over small geometric value types. Primitives
//! (points/vectors, lines, rays, segments, planes, spheres, boxes) are
//! immutable after construction; queries between them are total closed-form
//! functions returning self-contained result values.
//!
//! Three query shapes, each implemented per concrete primitive pair:
//! - [`query::TestIntersection`] - boolean-only intersection test
//! - [`query::FindIntersection`] - intersection points, parameters and a
//!   [`query::QueryCode`] classification
//! - [`query::ClosestPoint`] - nearest points and parameters, always defined

pub mod precision;
pub mod prim;
pub mod query;

// Re-exports for convenience
pub use prim::{
    Aabb2, Aabb3, Circle2, Line2, Line3, Plane, Ray2, Ray3, Segment2, Segment3, Sphere, Vec2, Vec3,
};
pub use query::{ClosestPoint, FindIntersection, QueryCode, TestIntersection};

/// Result type for primitive construction.
pub type Result<T> = std::result::Result<T, GeomError>;

/// Errors raised while establishing a primitive's invariants.
///
/// Queries themselves never fail; all validation happens at construction.
#[derive(Debug, thiserror::Error)]
pub enum GeomError {
    #[error("degenerate direction: length {0:e} is below resolution")]
    DegenerateDirection(f64),

    #[error("negative radius: {0}")]
    NegativeRadius(f64),

    #[error("invalid bounds on axis {axis}: min {min} exceeds max {max}")]
    InvalidBounds { axis: usize, min: f64, max: f64 },
}
