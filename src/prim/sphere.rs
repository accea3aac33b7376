//! Hyperspheres: sphere in 3D, circle in 2D.

use serde::{Deserialize, Serialize};

use crate::prim::{Vec2, Vec3};
use crate::{GeomError, Result};

/// A sphere in 3D space: center plus non-negative radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
}

impl Sphere {
    /// Creates a sphere; the radius must be non-negative.
    pub fn new(center: Vec3, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeomError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Returns the center.
    #[inline]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns true if the point lies inside or on the sphere.
    #[inline]
    pub fn contains(&self, p: &Vec3) -> bool {
        p.square_distance(&self.center) <= self.radius * self.radius
    }
}

/// A circle in 2D space: center plus non-negative radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle2 {
    center: Vec2,
    radius: f64,
}

impl Circle2 {
    /// Creates a circle; the radius must be non-negative.
    pub fn new(center: Vec2, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeomError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Returns the center.
    #[inline]
    pub const fn center(&self) -> Vec2 {
        self.center
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns true if the point lies inside or on the circle.
    #[inline]
    pub fn contains(&self, p: &Vec2) -> bool {
        p.square_distance(&self.center) <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_new() {
        let s = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 2.0).unwrap();
        assert_eq!(s.radius(), 2.0);
        assert!(s.center().is_equal(&Vec3::new(1.0, 2.0, 3.0), 1e-10));
    }

    #[test]
    fn test_sphere_negative_radius() {
        assert!(Sphere::new(Vec3::zero(), -1.0).is_err());
    }

    #[test]
    fn test_sphere_contains_boundary() {
        let s = Sphere::new(Vec3::zero(), 1.0).unwrap();
        assert!(s.contains(&Vec3::new(1.0, 0.0, 0.0)));
        assert!(s.contains(&Vec3::new(0.5, 0.5, 0.0)));
        assert!(!s.contains(&Vec3::new(1.0, 0.1, 0.0)));
    }

    #[test]
    fn test_circle2_contains() {
        let c = Circle2::new(Vec2::new(1.0, 1.0), 1.0).unwrap();
        assert!(c.contains(&Vec2::new(2.0, 1.0)));
        assert!(!c.contains(&Vec2::new(2.1, 1.0)));
    }

    #[test]
    fn test_sphere_zero_radius() {
        let s = Sphere::new(Vec3::zero(), 0.0).unwrap();
        assert!(s.contains(&Vec3::zero()));
        assert!(!s.contains(&Vec3::new(1e-3, 0.0, 0.0)));
    }
}
