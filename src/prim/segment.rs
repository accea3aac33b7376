//! Segments in 2D and 3D space.
//!
//! A segment is stored as origin plus a direction vector whose magnitude is
//! the segment length; the direction is deliberately NOT normalized. The
//! parameter domain is `u` in [0, 1], so `point_at(0)` is the start and
//! `point_at(1)` the end, and the clamping algorithms in the query layer
//! use `square_length()` of the direction as the squared segment length.
//!
//! Degenerate (zero-length) segments are permitted; queries route them
//! through their parallel/degenerate branch.

use crate::prim::{Vec2, Vec3};

/// A segment in 2D space: origin plus length-encoding direction, `u` in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    origin: Vec2,
    direction: Vec2,
}

impl Segment2 {
    /// Creates the segment from `p0` to `p1`.
    #[inline]
    pub fn from_endpoints(p0: Vec2, p1: Vec2) -> Self {
        Self {
            origin: p0,
            direction: p1 - p0,
        }
    }

    /// Returns the start point.
    #[inline]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Returns the direction vector; its length is the segment length.
    #[inline]
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Returns the end point.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.origin + self.direction
    }

    /// Returns the segment length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction.length()
    }

    /// Returns the squared segment length.
    #[inline]
    pub const fn square_length(&self) -> f64 {
        self.direction.square_length()
    }

    /// Evaluates the segment at parameter `u`. Callers keep `u` in [0, 1];
    /// the domain is not re-checked here.
    #[inline]
    pub fn point_at(&self, u: f64) -> Vec2 {
        self.origin + self.direction * u
    }
}

/// A segment in 3D space: origin plus length-encoding direction, `u` in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment3 {
    origin: Vec3,
    direction: Vec3,
}

impl Segment3 {
    /// Creates the segment from `p0` to `p1`.
    #[inline]
    pub fn from_endpoints(p0: Vec3, p1: Vec3) -> Self {
        Self {
            origin: p0,
            direction: p1 - p0,
        }
    }

    /// Returns the start point.
    #[inline]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Returns the direction vector; its length is the segment length.
    #[inline]
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Returns the end point.
    #[inline]
    pub fn end(&self) -> Vec3 {
        self.origin + self.direction
    }

    /// Returns the segment length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction.length()
    }

    /// Returns the squared segment length.
    #[inline]
    pub const fn square_length(&self) -> f64 {
        self.direction.square_length()
    }

    /// Evaluates the segment at parameter `u`. Callers keep `u` in [0, 1];
    /// the domain is not re-checked here.
    #[inline]
    pub fn point_at(&self, u: f64) -> Vec3 {
        self.origin + self.direction * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment3_endpoints() {
        let s = Segment3::from_endpoints(Vec3::new(1.0, 0.0, 0.0), Vec3::new(4.0, 4.0, 0.0));
        assert!(s.origin().is_equal(&Vec3::new(1.0, 0.0, 0.0), 1e-10));
        assert!(s.end().is_equal(&Vec3::new(4.0, 4.0, 0.0), 1e-10));
        assert!((s.length() - 5.0).abs() < 1e-10);
        assert_eq!(s.square_length(), 25.0);
    }

    #[test]
    fn test_segment3_direction_not_normalized() {
        let s = Segment3::from_endpoints(Vec3::zero(), Vec3::new(0.0, 0.0, 3.0));
        assert!((s.direction().length() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_segment3_point_at_midpoint() {
        let s = Segment3::from_endpoints(Vec3::zero(), Vec3::new(2.0, 2.0, 2.0));
        assert!(s.point_at(0.5).is_equal(&Vec3::new(1.0, 1.0, 1.0), 1e-10));
    }

    #[test]
    fn test_segment3_degenerate_allowed() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let s = Segment3::from_endpoints(p, p);
        assert_eq!(s.square_length(), 0.0);
        assert!(s.point_at(0.7).is_equal(&p, 1e-10));
    }

    #[test]
    fn test_segment2_endpoints() {
        let s = Segment2::from_endpoints(Vec2::zero(), Vec2::new(1.0, 0.0));
        assert!(s.end().is_equal(&Vec2::new(1.0, 0.0), 1e-10));
        assert!((s.length() - 1.0).abs() < 1e-10);
    }
}
