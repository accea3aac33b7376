//! Rays in 2D and 3D space.
//!
//! Same shape as a line (origin plus unit direction), but the parameter
//! domain is restricted to `u >= 0`.

use crate::prim::{Vec2, Vec3};
use crate::{GeomError, Result};

/// A ray in 2D space: origin plus unit direction, `u >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray2 {
    origin: Vec2,
    direction: Vec2,
}

impl Ray2 {
    /// Creates a ray from `origin` along `direction` (normalized here).
    pub fn new(origin: Vec2, direction: Vec2) -> Result<Self> {
        let direction = direction
            .normalized()
            .ok_or(GeomError::DegenerateDirection(direction.length()))?;
        Ok(Self { origin, direction })
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

    /// Evaluates the ray at parameter `u`. Callers keep `u >= 0`; the domain
    /// is not re-checked here.
    #[inline]
    pub fn point_at(&self, u: f64) -> Vec2 {
        self.origin + self.direction * u
    }
}

/// A ray in 3D space: origin plus unit direction, `u >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray3 {
    origin: Vec3,
    direction: Vec3,
}

impl Ray3 {
    /// Creates a ray from `origin` along `direction` (normalized here).
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self> {
        let direction = direction
            .normalized()
            .ok_or(GeomError::DegenerateDirection(direction.length()))?;
        Ok(Self { origin, direction })
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

    /// Evaluates the ray at parameter `u`. Callers keep `u >= 0`; the domain
    /// is not re-checked here.
    #[inline]
    pub fn point_at(&self, u: f64) -> Vec3 {
        self.origin + self.direction * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray3_new_normalizes() {
        let r = Ray3::new(Vec3::zero(), Vec3::new(3.0, 0.0, 0.0)).unwrap();
        assert!((r.direction().length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray3_degenerate_direction() {
        assert!(Ray3::new(Vec3::zero(), Vec3::zero()).is_err());
    }

    #[test]
    fn test_ray3_point_at() {
        let r = Ray3::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)).unwrap();
        assert!(r.point_at(3.0).is_equal(&Vec3::new(1.0, 3.0, 0.0), 1e-10));
    }

    #[test]
    fn test_ray2_point_at() {
        let r = Ray2::new(Vec2::zero(), Vec2::new(0.0, 4.0)).unwrap();
        assert!(r.point_at(2.0).is_equal(&Vec2::new(0.0, 2.0), 1e-10));
    }
}
