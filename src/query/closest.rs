//! Closest-point queries.
//!
//! All pairs of linear primitives (line, ray, segment) reduce to the same
//! two-line derivation: with origins `o0`, `o1` and directions `d0`, `d1`,
//! let `w0 = o0 - o1` and solve the 2x2 system minimizing
//! `|P0(u0) - P1(u1)|^2`. When the system's denominator is near zero under
//! [`precision::is_zero`], the pair is parallel (or a primitive is
//! degenerate): one parameter is fixed and the other solved by projection,
//! and the result carries [`QueryCode::Parallel`] instead of NaN.
//!
//! Ray parameters are clamped to `[0, inf)` and segment parameters to
//! `[0, 1]`; after a clamp the partner parameter is re-solved against the
//! clamped value (re-projection), not clamped independently. Segment
//! parameters stay in the length-encoding convention: the segment direction
//! is not unit length, so `u = 1` is the far endpoint regardless of length.

use crate::precision;
use crate::prim::{Aabb3, Line2, Line3, Plane, Ray3, Segment3, Vec2, Vec3};
use crate::query::{ClosestPoint, QueryCode};

/// Closest point on a 2D primitive to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointClosest2 {
    /// Parametric distance along the primitive to the closest point.
    pub parameter: f64,
    /// The closest point on the primitive.
    pub closest: Vec2,
    /// Squared distance from the query point to `closest`.
    pub square_distance: f64,
}

/// Closest point on a 3D primitive to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointClosest3 {
    /// Parametric distance along the primitive to the closest point.
    /// For the plane query this is the signed distance along the normal.
    pub parameter: f64,
    /// The closest point on the primitive.
    pub closest: Vec3,
    /// Squared distance from the query point to `closest`.
    pub square_distance: f64,
}

/// Closest point on a box to a query point (no parametric distance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AabbClosest3 {
    /// The closest point on the box (the point itself when inside).
    pub closest: Vec3,
    /// Squared distance from the query point to `closest`.
    pub square_distance: f64,
}

/// Closest points between two linear primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairClosest3 {
    /// `Success` for the regular solve, `Parallel` for the degenerate path.
    pub code: QueryCode,
    /// Parametric distances on `self` and `other`, in that order.
    pub parameters: [f64; 2],
    /// Closest points on `self` and `other`, in that order.
    pub closest: [Vec3; 2],
    /// Squared distance between the two closest points.
    pub square_distance: f64,
}

// ---------------------------------------------------------------------------
// Point vs linear primitives
// ---------------------------------------------------------------------------

impl ClosestPoint<Line2> for Vec2 {
    type Report = PointClosest2;

    fn closest_point(&self, line: &Line2) -> PointClosest2 {
        let w = *self - line.origin();
        let u = w.dot(&line.direction());
        let closest = line.point_at(u);
        PointClosest2 {
            parameter: u,
            closest,
            square_distance: self.square_distance(&closest),
        }
    }
}

impl ClosestPoint<Line3> for Vec3 {
    type Report = PointClosest3;

    fn closest_point(&self, line: &Line3) -> PointClosest3 {
        let w = *self - line.origin();
        let u = w.dot(&line.direction());
        let closest = line.point_at(u);
        PointClosest3 {
            parameter: u,
            closest,
            square_distance: self.square_distance(&closest),
        }
    }
}

impl ClosestPoint<Ray3> for Vec3 {
    type Report = PointClosest3;

    fn closest_point(&self, ray: &Ray3) -> PointClosest3 {
        let w = *self - ray.origin();
        // Negative projections land on the ray origin.
        let u = w.dot(&ray.direction()).max(0.0);
        let closest = ray.point_at(u);
        PointClosest3 {
            parameter: u,
            closest,
            square_distance: self.square_distance(&closest),
        }
    }
}

impl ClosestPoint<Segment3> for Vec3 {
    type Report = PointClosest3;

    fn closest_point(&self, segment: &Segment3) -> PointClosest3 {
        let sq_len = segment.square_length();
        let u = if precision::is_zero(sq_len) {
            // Degenerate segment: everything projects to the start point.
            0.0
        } else {
            let w = *self - segment.origin();
            (w.dot(&segment.direction()) / sq_len).clamp(0.0, 1.0)
        };
        let closest = segment.point_at(u);
        PointClosest3 {
            parameter: u,
            closest,
            square_distance: self.square_distance(&closest),
        }
    }
}

impl ClosestPoint<Plane> for Vec3 {
    type Report = PointClosest3;

    fn closest_point(&self, plane: &Plane) -> PointClosest3 {
        let sd = plane.signed_distance(self);
        PointClosest3 {
            parameter: sd,
            closest: *self - plane.normal() * sd,
            square_distance: sd * sd,
        }
    }
}

impl ClosestPoint<Aabb3> for Vec3 {
    type Report = AabbClosest3;

    fn closest_point(&self, aabb: &Aabb3) -> AabbClosest3 {
        let closest = aabb.clamp(self);
        AabbClosest3 {
            closest,
            square_distance: self.square_distance(&closest),
        }
    }
}

// ---------------------------------------------------------------------------
// Linear primitive pairs
// ---------------------------------------------------------------------------

impl ClosestPoint<Line3> for Line3 {
    type Report = PairClosest3;

    fn closest_point(&self, other: &Line3) -> PairClosest3 {
        let d0 = self.direction();
        let d1 = other.direction();
        let w0 = self.origin() - other.origin();
        let b = d0.dot(&d1);
        let f = d0.dot(&w0);
        let e = d1.dot(&w0);
        // Both directions unit: denom = 1 - b^2.
        let denom = 1.0 - b * b;

        let (code, u0, u1) = if precision::is_zero(denom) {
            // Parallel: fix this line's parameter at its origin and project
            // that origin onto the other line.
            (QueryCode::Parallel, 0.0, e)
        } else {
            (QueryCode::Success, (b * e - f) / denom, (e - b * f) / denom)
        };

        let c0 = self.point_at(u0);
        let c1 = other.point_at(u1);
        PairClosest3 {
            code,
            parameters: [u0, u1],
            closest: [c0, c1],
            square_distance: c0.square_distance(&c1),
        }
    }
}

impl ClosestPoint<Line3> for Ray3 {
    type Report = PairClosest3;

    fn closest_point(&self, line: &Line3) -> PairClosest3 {
        let d0 = self.direction();
        let d1 = line.direction();
        let w0 = self.origin() - line.origin();
        let b = d0.dot(&d1);
        let f = d0.dot(&w0);
        let e = d1.dot(&w0);
        let denom = 1.0 - b * b;

        let (code, u0, u1) = if precision::is_zero(denom) {
            (QueryCode::Parallel, 0.0, e)
        } else {
            let u0 = (b * e - f) / denom;
            if u0 < 0.0 {
                // Clamp to the ray origin; the line parameter re-solves as
                // the projection of that origin.
                (QueryCode::Success, 0.0, e)
            } else {
                (QueryCode::Success, u0, (e - b * f) / denom)
            }
        };

        let c0 = self.point_at(u0);
        let c1 = line.point_at(u1);
        PairClosest3 {
            code,
            parameters: [u0, u1],
            closest: [c0, c1],
            square_distance: c0.square_distance(&c1),
        }
    }
}

impl ClosestPoint<Ray3> for Ray3 {
    type Report = PairClosest3;

    fn closest_point(&self, other: &Ray3) -> PairClosest3 {
        let d0 = self.direction();
        let d1 = other.direction();
        let w0 = self.origin() - other.origin();
        let b = d0.dot(&d1);
        let f = d0.dot(&w0);
        let e = d1.dot(&w0);
        let denom = 1.0 - b * b;

        let (code, mut u0, mut u1) = if precision::is_zero(denom) {
            (QueryCode::Parallel, 0.0, e.max(0.0))
        } else {
            (QueryCode::Success, (b * e - f) / denom, (e - b * f) / denom)
        };

        if code == QueryCode::Success {
            if u0 < 0.0 {
                // Clamp to this ray's origin, re-project on the other ray.
                u0 = 0.0;
                u1 = e;
            }
            if u1 < 0.0 {
                // Clamp to the other ray's origin, re-project here.
                u1 = 0.0;
                u0 = (-f).max(0.0);
            }
        }

        let c0 = self.point_at(u0);
        let c1 = other.point_at(u1);
        PairClosest3 {
            code,
            parameters: [u0, u1],
            closest: [c0, c1],
            square_distance: c0.square_distance(&c1),
        }
    }
}

impl ClosestPoint<Line3> for Segment3 {
    type Report = PairClosest3;

    fn closest_point(&self, line: &Line3) -> PairClosest3 {
        let ds = self.direction();
        let dl = line.direction();
        let w0 = self.origin() - line.origin();
        // Segment direction is length-encoding, so the quadratic term is its
        // squared length rather than 1.
        let a = self.square_length();
        let b = ds.dot(&dl);
        let f = ds.dot(&w0);
        let e = dl.dot(&w0);
        let denom = a - b * b;

        let (code, u0, u1) = if precision::is_zero(denom) {
            // Parallel line, or a degenerate segment; either way the start
            // point projects onto the line.
            (QueryCode::Parallel, 0.0, e)
        } else {
            let u0 = ((b * e - f) / denom).clamp(0.0, 1.0);
            // Re-project the line parameter against the clamped segment
            // parameter.
            (QueryCode::Success, u0, e + u0 * b)
        };

        let c0 = self.point_at(u0);
        let c1 = line.point_at(u1);
        PairClosest3 {
            code,
            parameters: [u0, u1],
            closest: [c0, c1],
            square_distance: c0.square_distance(&c1),
        }
    }
}

impl ClosestPoint<Ray3> for Segment3 {
    type Report = PairClosest3;

    fn closest_point(&self, ray: &Ray3) -> PairClosest3 {
        let ds = self.direction();
        let dr = ray.direction();
        let w0 = self.origin() - ray.origin();
        let a = self.square_length();
        let b = ds.dot(&dr);
        let f = ds.dot(&w0);
        let e = dr.dot(&w0);
        let denom = a - b * b;

        let (code, mut u0, mut u1) = if precision::is_zero(denom) {
            (QueryCode::Parallel, 0.0, e.max(0.0))
        } else {
            let u0 = ((b * e - f) / denom).clamp(0.0, 1.0);
            (QueryCode::Success, u0, e + u0 * b)
        };

        if code == QueryCode::Success && u1 < 0.0 {
            // Clamp to the ray origin and re-solve the segment parameter
            // against it. `a` is nonzero here: a zero-length segment would
            // have taken the parallel branch.
            u1 = 0.0;
            u0 = (-f / a).clamp(0.0, 1.0);
        }

        let c0 = self.point_at(u0);
        let c1 = ray.point_at(u1);
        PairClosest3 {
            code,
            parameters: [u0, u1],
            closest: [c0, c1],
            square_distance: c0.square_distance(&c1),
        }
    }
}
