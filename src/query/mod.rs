//! Pairwise geometric queries.
//!
//! Three query shapes, each a generic trait implemented per concrete ordered
//! primitive pair (compile-time dispatch, no tag matching at runtime):
//!
//! - [`TestIntersection`]: boolean-only test, the cheapest possible check.
//! - [`FindIntersection`]: full intersection detail - point(s), parametric
//!   distance(s) and a [`QueryCode`].
//! - [`ClosestPoint`]: always defined; nearest points and parameters on each
//!   primitive.
//!
//! Not every pair implements all three shapes; the coverage is deliberately
//! selective (line-sphere has test+find but no closest-point, point-segment
//! has closest-point plus a 2D test, and so on).
//!
//! Every implementation is a pure function of its two primitive arguments:
//! no shared state, no caching, safe to invoke concurrently, and identical
//! inputs produce bit-identical results.

pub mod closest;
pub mod intersect;

pub use closest::{AabbClosest3, PairClosest3, PointClosest2, PointClosest3};
pub use intersect::{LineHit2, PlaneHit, SphereHit};

/// Classification of a query's geometric outcome.
///
/// These are ordinary expected results, not errors. The full vocabulary is
/// part of the public contract; the pairs currently shipped never produce
/// `Fail`, `Success`, `CompletelyInside` or `CompletelyOutside`, but the
/// members stay so downstream matches remain stable as coverage grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryCode {
    Fail,
    Success,
    Parallel,
    Overlapping,
    Intersecting,
    NotIntersecting,
    CompletelyInside,
    CompletelyOutside,
}

/// Boolean-only intersection test between `Self` and `Other`.
pub trait TestIntersection<Other> {
    /// Returns true if the two primitives intersect.
    fn test_intersection(&self, other: &Other) -> bool;
}

/// Intersection-detail query between `Self` and `Other`.
pub trait FindIntersection<Other> {
    /// Self-contained result value, owned by the caller.
    type Report;

    /// Computes the intersection detail.
    fn find_intersection(&self, other: &Other) -> Self::Report;
}

/// Closest-point query between `Self` and `Other`; geometrically defined for
/// every input, including degenerate configurations.
pub trait ClosestPoint<Other> {
    /// Self-contained result value, owned by the caller.
    type Report;

    /// Computes closest points and the parameters that reach them.
    fn closest_point(&self, other: &Other) -> Self::Report;
}
