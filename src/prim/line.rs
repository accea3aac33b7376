//! Lines in 2D and 3D space.
//!
//! A line is defined by an origin and a unit direction; it is infinite in
//! both directions, parameterized `P(u) = origin + u * direction` with
//! `u` ranging over all reals.

use crate::precision;
use crate::prim::{Vec2, Vec3};
use crate::{GeomError, Result};

/// A line in 2D space: origin plus unit direction, `u` unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    origin: Vec2,
    direction: Vec2,
}

impl Line2 {
    /// Creates a line through `origin` along `direction`.
    ///
    /// The direction is normalized here and stays normalized; there is no
    /// mutator that could break the invariant afterwards.
    pub fn new(origin: Vec2, direction: Vec2) -> Result<Self> {
        let direction = direction
            .normalized()
            .ok_or(GeomError::DegenerateDirection(direction.length()))?;
        Ok(Self { origin, direction })
    }

    /// Creates the line through two distinct points.
    pub fn from_points(p0: Vec2, p1: Vec2) -> Result<Self> {
        Self::new(p0, p1 - p0)
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Returns the unit direction.
    #[inline]
    pub const fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Evaluates the line at parameter `u` (a signed distance from the origin).
    #[inline]
    pub fn point_at(&self, u: f64) -> Vec2 {
        self.origin + self.direction * u
    }

    /// Returns true if the point lies on the line within tolerance.
    pub fn contains(&self, p: &Vec2, tolerance: f64) -> bool {
        let w = *p - self.origin;
        w.perp_dot(&self.direction).abs() <= tolerance
    }
}

/// A line in 3D space: origin plus unit direction, `u` unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line3 {
    origin: Vec3,
    direction: Vec3,
}

impl Line3 {
    /// Creates a line through `origin` along `direction`.
    ///
    /// The direction is normalized here and stays normalized; there is no
    /// mutator that could break the invariant afterwards.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self> {
        let direction = direction
            .normalized()
            .ok_or(GeomError::DegenerateDirection(direction.length()))?;
        Ok(Self { origin, direction })
    }

    /// Creates the line through two distinct points.
    pub fn from_points(p0: Vec3, p1: Vec3) -> Result<Self> {
        Self::new(p0, p1 - p0)
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Returns the unit direction.
    #[inline]
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Evaluates the line at parameter `u` (a signed distance from the origin).
    #[inline]
    pub fn point_at(&self, u: f64) -> Vec3 {
        self.origin + self.direction * u
    }

    /// Returns true if the point lies on the line within tolerance.
    pub fn contains(&self, p: &Vec3, tolerance: f64) -> bool {
        let w = *p - self.origin;
        w.cross(&self.direction).length() <= tolerance
    }

    /// Returns true if the two lines have parallel directions (equal up to
    /// sign) within angular tolerance.
    pub fn is_parallel(&self, other: &Line3) -> bool {
        self.direction.cross(&other.direction).length() <= precision::ANGULAR
    }
}
