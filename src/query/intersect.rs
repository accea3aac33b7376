//! Intersection queries: boolean tests and full intersection finds.
//!
//! Linear-vs-plane pairs solve `u` from
//! `normal . (origin + u * direction) + offset = 0`; a near-zero denominator
//! under [`precision::is_zero`] means the primitive is parallel to the plane
//! and the origin's signed distance decides `Overlapping` vs
//! `NotIntersecting`. Line-sphere substitutes the parametric form into the
//! sphere's implicit equation and works off the quadratic discriminant. The
//! 2D pairs use the perpendicular dot product instead of a 2x2 solve.

use crate::precision;
use crate::prim::{Aabb2, Aabb3, Circle2, Line2, Line3, Plane, Ray3, Segment2, Segment3, Sphere, Vec2, Vec3};
use crate::query::{FindIntersection, QueryCode, TestIntersection};

/// Intersection of a linear primitive with a plane.
///
/// On `NotIntersecting` for rays and segments the parameter is clamped to
/// the nearest domain boundary and `point` evaluates there; on the parallel
/// branches the parameter is 0 and `point` is the primitive's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneHit {
    pub code: QueryCode,
    /// Parametric distance along the linear primitive.
    pub parameter: f64,
    /// The intersection point, or the clamped/origin point per `code`.
    pub point: Vec3,
}

/// Intersection of a line with a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereHit {
    pub code: QueryCode,
    /// Number of intersection points: 0, 1 (tangent) or 2.
    pub count: usize,
    /// Parametric distances, ordered `parameters[0] <= parameters[1]`.
    /// Only the first `count` entries are meaningful.
    pub parameters: [f64; 2],
    /// Intersection points matching `parameters`.
    pub points: [Vec3; 2],
}

/// Intersection of a 2D segment with a 2D line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHit2 {
    pub code: QueryCode,
    /// Parameters on the segment and on the line, in that order. On
    /// `NotIntersecting` with a nonzero denominator these still locate the
    /// crossing of the underlying lines.
    pub parameters: [f64; 2],
    /// The segment's carrier line evaluated at `parameters[0]`.
    pub point: Vec2,
}

// ---------------------------------------------------------------------------
// Linear primitives vs plane
// ---------------------------------------------------------------------------

impl TestIntersection<Plane> for Line3 {
    fn test_intersection(&self, plane: &Plane) -> bool {
        let denom = plane.normal().dot(&self.direction());
        // Non-parallel lines always cross; parallel ones only when coplanar.
        !precision::is_zero(denom) || precision::is_zero(plane.signed_distance(&self.origin()))
    }
}

impl FindIntersection<Plane> for Line3 {
    type Report = PlaneHit;

    fn find_intersection(&self, plane: &Plane) -> PlaneHit {
        let denom = plane.normal().dot(&self.direction());
        let dist = plane.signed_distance(&self.origin());
        if precision::is_zero(denom) {
            let code = if precision::is_zero(dist) {
                QueryCode::Overlapping
            } else {
                QueryCode::NotIntersecting
            };
            return PlaneHit { code, parameter: 0.0, point: self.origin() };
        }
        let u = -dist / denom;
        PlaneHit {
            code: QueryCode::Intersecting,
            parameter: u,
            point: self.point_at(u),
        }
    }
}

impl FindIntersection<Plane> for Ray3 {
    type Report = PlaneHit;

    fn find_intersection(&self, plane: &Plane) -> PlaneHit {
        let denom = plane.normal().dot(&self.direction());
        let dist = plane.signed_distance(&self.origin());
        if precision::is_zero(denom) {
            let code = if precision::is_zero(dist) {
                QueryCode::Overlapping
            } else {
                QueryCode::NotIntersecting
            };
            return PlaneHit { code, parameter: 0.0, point: self.origin() };
        }
        let u = -dist / denom;
        if u < 0.0 {
            // Crossing lies behind the ray origin.
            return PlaneHit {
                code: QueryCode::NotIntersecting,
                parameter: 0.0,
                point: self.origin(),
            };
        }
        PlaneHit {
            code: QueryCode::Intersecting,
            parameter: u,
            point: self.point_at(u),
        }
    }
}

impl FindIntersection<Plane> for Segment3 {
    type Report = PlaneHit;

    fn find_intersection(&self, plane: &Plane) -> PlaneHit {
        // The segment direction is length-encoding, so `u` is already in the
        // [0, 1] domain without renormalization.
        let denom = plane.normal().dot(&self.direction());
        let dist = plane.signed_distance(&self.origin());
        if precision::is_zero(denom) {
            let code = if precision::is_zero(dist) {
                QueryCode::Overlapping
            } else {
                QueryCode::NotIntersecting
            };
            return PlaneHit { code, parameter: 0.0, point: self.origin() };
        }
        let u = -dist / denom;
        if !precision::is_in_range(0.0, 1.0, u) {
            let clamped = u.clamp(0.0, 1.0);
            return PlaneHit {
                code: QueryCode::NotIntersecting,
                parameter: clamped,
                point: self.point_at(clamped),
            };
        }
        PlaneHit {
            code: QueryCode::Intersecting,
            parameter: u,
            point: self.point_at(u),
        }
    }
}

// ---------------------------------------------------------------------------
// Line vs sphere
// ---------------------------------------------------------------------------

impl TestIntersection<Sphere> for Line3 {
    fn test_intersection(&self, sphere: &Sphere) -> bool {
        // Discriminant sign only; no roots computed. With a unit direction
        // the quadratic is u^2 + qb*u + qc = 0.
        let w0 = self.origin() - sphere.center();
        let qb = 2.0 * w0.dot(&self.direction());
        let qc = w0.square_length() - sphere.radius() * sphere.radius();
        qb * qb * 0.25 >= qc
    }
}

impl FindIntersection<Sphere> for Line3 {
    type Report = SphereHit;

    fn find_intersection(&self, sphere: &Sphere) -> SphereHit {
        let w0 = self.origin() - sphere.center();
        let qb = 2.0 * w0.dot(&self.direction());
        let qc = w0.square_length() - sphere.radius() * sphere.radius();
        let disc = qb * qb * 0.25 - qc;

        if disc < 0.0 {
            return SphereHit {
                code: QueryCode::NotIntersecting,
                count: 0,
                parameters: [0.0, 0.0],
                points: [self.origin(); 2],
            };
        }

        let mid = -qb * 0.5;
        if precision::is_zero(disc) {
            // Tangent: one double root.
            let p = self.point_at(mid);
            return SphereHit {
                code: QueryCode::Intersecting,
                count: 1,
                parameters: [mid, mid],
                points: [p, p],
            };
        }

        let root = disc.sqrt();
        let u0 = mid - root;
        let u1 = mid + root;
        SphereHit {
            code: QueryCode::Intersecting,
            count: 2,
            parameters: [u0, u1],
            points: [self.point_at(u0), self.point_at(u1)],
        }
    }
}

// ---------------------------------------------------------------------------
// 2D perpendicular-dot pairs
// ---------------------------------------------------------------------------

impl FindIntersection<Line2> for Segment2 {
    type Report = LineHit2;

    fn find_intersection(&self, line: &Line2) -> LineHit2 {
        let ds = self.direction();
        let dl = line.direction();
        let w = line.origin() - self.origin();
        let denom = ds.perp_dot(&dl);

        if precision::is_zero(denom) {
            // Parallel (or degenerate segment): coincident carriers iff the
            // segment origin lies on the line.
            let code = if precision::is_zero(w.perp_dot(&dl)) {
                QueryCode::Overlapping
            } else {
                QueryCode::NotIntersecting
            };
            return LineHit2 {
                code,
                parameters: [0.0, 0.0],
                point: self.origin(),
            };
        }

        let us = w.perp_dot(&dl) / denom;
        let ul = w.perp_dot(&ds) / denom;
        let code = if precision::is_in_range(0.0, 1.0, us) {
            QueryCode::Intersecting
        } else {
            QueryCode::NotIntersecting
        };
        LineHit2 {
            code,
            parameters: [us, ul],
            point: self.point_at(us),
        }
    }
}

impl TestIntersection<Segment2> for Vec2 {
    /// Point-on-segment test.
    ///
    /// Endpoint-exclusive: the projection parameter must lie strictly inside
    /// (0, 1). This follows the historical convention of this query and is
    /// deliberately inconsistent with the inclusive point-box test; callers
    /// needing closed-segment semantics should compare the closest-point
    /// distance instead.
    fn test_intersection(&self, segment: &Segment2) -> bool {
        let d = segment.direction();
        let w = *self - segment.origin();
        if !precision::is_zero(w.perp_dot(&d)) {
            return false;
        }
        let sq_len = segment.square_length();
        if precision::is_zero(sq_len) {
            // A degenerate segment has no interior.
            return false;
        }
        let u = w.dot(&d) / sq_len;
        0.0 < u && u < 1.0
    }
}

// ---------------------------------------------------------------------------
// Point containment tests
// ---------------------------------------------------------------------------

impl TestIntersection<Aabb2> for Vec2 {
    /// Boundary-inclusive, exits on the first violating axis.
    fn test_intersection(&self, aabb: &Aabb2) -> bool {
        aabb.contains(self)
    }
}

impl TestIntersection<Aabb3> for Vec3 {
    /// Boundary-inclusive, exits on the first violating axis.
    fn test_intersection(&self, aabb: &Aabb3) -> bool {
        aabb.contains(self)
    }
}

impl TestIntersection<Sphere> for Vec3 {
    /// Boundary-inclusive containment.
    fn test_intersection(&self, sphere: &Sphere) -> bool {
        sphere.contains(self)
    }
}

impl TestIntersection<Circle2> for Vec2 {
    /// Boundary-inclusive containment.
    fn test_intersection(&self, circle: &Circle2) -> bool {
        circle.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line3(o: [f64; 3], d: [f64; 3]) -> Line3 {
        Line3::new(Vec3::from(o), Vec3::from(d)).unwrap()
    }

    fn xy_plane() -> Plane {
        Plane::from_point_normal(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0)).unwrap()
    }

    #[test]
    fn test_line_plane_crossing() {
        let l = line3([0.0, 0.0, 2.0], [0.0, 0.0, -1.0]);
        let hit = l.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::Intersecting);
        assert!((hit.parameter - 2.0).abs() < 1e-10);
        assert!(hit.point.is_equal(&Vec3::zero(), 1e-10));
        assert!(l.test_intersection(&xy_plane()));
    }

    #[test]
    fn test_line_plane_parallel_off_plane() {
        let l = line3([0.0, 0.0, 1.0], [1.0, 0.0, 0.0]);
        let hit = l.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::NotIntersecting);
        assert_eq!(hit.parameter, 0.0);
        assert!(!l.test_intersection(&xy_plane()));
    }

    #[test]
    fn test_line_plane_overlapping() {
        let l = line3([3.0, -1.0, 0.0], [1.0, 1.0, 0.0]);
        let hit = l.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::Overlapping);
        assert!(l.test_intersection(&xy_plane()));
    }

    #[test]
    fn test_ray_plane_behind_origin() {
        let r = Ray3::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let hit = r.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::NotIntersecting);
        // Clamped to the ray origin.
        assert_eq!(hit.parameter, 0.0);
        assert!(hit.point.is_equal(&Vec3::new(0.0, 0.0, 1.0), 1e-10));
    }

    #[test]
    fn test_ray_plane_hits() {
        let r = Ray3::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
        let hit = r.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::Intersecting);
        assert!((hit.parameter - 3.0).abs() < 1e-10);
        assert!(hit.point.is_equal(&Vec3::new(1.0, 2.0, 0.0), 1e-10));
    }

    #[test]
    fn test_ray_plane_parallel_on_plane() {
        let r = Ray3::new(Vec3::new(1.0, 2.0, 0.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        let hit = r.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::Overlapping);
    }

    #[test]
    fn test_segment_plane_crossing() {
        let s = Segment3::from_endpoints(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 3.0));
        let hit = s.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::Intersecting);
        assert!((hit.parameter - 0.25).abs() < 1e-10);
        assert!(hit.point.is_equal(&Vec3::zero(), 1e-10));
    }

    #[test]
    fn test_segment_plane_falls_short() {
        let s = Segment3::from_endpoints(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = s.find_intersection(&xy_plane());
        assert_eq!(hit.code, QueryCode::NotIntersecting);
        // Clamped to the near endpoint.
        assert_eq!(hit.parameter, 1.0);
        assert!(hit.point.is_equal(&Vec3::new(0.0, 0.0, 1.0), 1e-10));
    }

    #[test]
    fn test_line_sphere_two_hits() {
        // The worked scenario: u0 = 3, u1 = 7.
        let l = line3([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let s = Sphere::new(Vec3::new(5.0, 0.0, 0.0), 2.0).unwrap();
        assert!(l.test_intersection(&s));
        let hit = l.find_intersection(&s);
        assert_eq!(hit.code, QueryCode::Intersecting);
        assert_eq!(hit.count, 2);
        assert!((hit.parameters[0] - 3.0).abs() < 1e-10);
        assert!((hit.parameters[1] - 7.0).abs() < 1e-10);
        assert!(hit.points[0].is_equal(&Vec3::new(3.0, 0.0, 0.0), 1e-10));
        assert!(hit.points[1].is_equal(&Vec3::new(7.0, 0.0, 0.0), 1e-10));
    }

    #[test]
    fn test_line_sphere_miss() {
        let l = line3([0.0, 5.0, 0.0], [1.0, 0.0, 0.0]);
        let s = Sphere::new(Vec3::zero(), 2.0).unwrap();
        assert!(!l.test_intersection(&s));
        let hit = l.find_intersection(&s);
        assert_eq!(hit.code, QueryCode::NotIntersecting);
        assert_eq!(hit.count, 0);
    }

    #[test]
    fn test_line_sphere_tangent() {
        let l = line3([0.0, 2.0, 0.0], [1.0, 0.0, 0.0]);
        let s = Sphere::new(Vec3::zero(), 2.0).unwrap();
        assert!(l.test_intersection(&s));
        let hit = l.find_intersection(&s);
        assert_eq!(hit.code, QueryCode::Intersecting);
        assert_eq!(hit.count, 1);
        assert!(hit.points[0].is_equal(&Vec3::new(0.0, 2.0, 0.0), 1e-10));
    }

    #[test]
    fn test_segment_line2_crossing() {
        // The worked scenario: us = 0.5, point (0.5, 0).
        let s = Segment2::from_endpoints(Vec2::zero(), Vec2::new(1.0, 0.0));
        let l = Line2::new(Vec2::new(0.5, -1.0), Vec2::new(0.0, 1.0)).unwrap();
        let hit = s.find_intersection(&l);
        assert_eq!(hit.code, QueryCode::Intersecting);
        assert!((hit.parameters[0] - 0.5).abs() < 1e-10);
        assert!((hit.parameters[1] - 1.0).abs() < 1e-10);
        assert!(hit.point.is_equal(&Vec2::new(0.5, 0.0), 1e-10));
    }

    #[test]
    fn test_segment_line2_out_of_range() {
        let s = Segment2::from_endpoints(Vec2::zero(), Vec2::new(1.0, 0.0));
        let l = Line2::new(Vec2::new(3.0, -1.0), Vec2::new(0.0, 1.0)).unwrap();
        let hit = s.find_intersection(&l);
        assert_eq!(hit.code, QueryCode::NotIntersecting);
        // Parameters still locate the carrier crossing.
        assert!((hit.parameters[0] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment_line2_parallel_disjoint() {
        let s = Segment2::from_endpoints(Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0));
        let l = Line2::new(Vec2::zero(), Vec2::new(1.0, 0.0)).unwrap();
        let hit = s.find_intersection(&l);
        assert_eq!(hit.code, QueryCode::NotIntersecting);
    }

    #[test]
    fn test_segment_line2_overlapping() {
        let s = Segment2::from_endpoints(Vec2::new(2.0, 0.0), Vec2::new(5.0, 0.0));
        let l = Line2::new(Vec2::zero(), Vec2::new(1.0, 0.0)).unwrap();
        let hit = s.find_intersection(&l);
        assert_eq!(hit.code, QueryCode::Overlapping);
    }

    #[test]
    fn test_point_segment2_interior() {
        let s = Segment2::from_endpoints(Vec2::zero(), Vec2::new(2.0, 2.0));
        assert!(Vec2::new(1.0, 1.0).test_intersection(&s));
        assert!(!Vec2::new(1.0, 1.1).test_intersection(&s));
    }

    #[test]
    fn test_point_segment2_endpoints_excluded() {
        let s = Segment2::from_endpoints(Vec2::zero(), Vec2::new(2.0, 0.0));
        assert!(!Vec2::zero().test_intersection(&s));
        assert!(!Vec2::new(2.0, 0.0).test_intersection(&s));
        assert!(Vec2::new(1.0, 0.0).test_intersection(&s));
    }

    #[test]
    fn test_point_aabb3_boundary_inclusive() {
        let b = Aabb3::new(Vec3::zero(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
        assert!(Vec3::zero().test_intersection(&b));
        assert!(Vec3::new(1.0, 1.0, 1.0).test_intersection(&b));
        assert!(!Vec3::new(1.0 + 1e-12, 0.5, 0.5).test_intersection(&b));
    }

    #[test]
    fn test_point_aabb2() {
        let b = Aabb2::new(Vec2::zero(), Vec2::new(2.0, 1.0)).unwrap();
        assert!(Vec2::new(2.0, 1.0).test_intersection(&b));
        assert!(!Vec2::new(2.0, 1.0 + 1e-12).test_intersection(&b));
    }

    #[test]
    fn test_point_sphere_and_circle() {
        let s = Sphere::new(Vec3::zero(), 1.0).unwrap();
        assert!(Vec3::new(0.0, 1.0, 0.0).test_intersection(&s));
        assert!(!Vec3::new(0.0, 1.0 + 1e-6, 0.0).test_intersection(&s));

        let c = Circle2::new(Vec2::zero(), 1.0).unwrap();
        assert!(Vec2::new(1.0, 0.0).test_intersection(&c));
        assert!(!Vec2::new(1.1, 0.0).test_intersection(&c));
    }

    #[test]
    fn test_find_intersection_idempotent() {
        let l = line3([0.3, 0.1, -0.2], [1.0, 2.0, 0.5]);
        let s = Sphere::new(Vec3::new(4.0, 3.0, 1.0), 2.5).unwrap();
        assert_eq!(l.find_intersection(&s), l.find_intersection(&s));
    }
}
