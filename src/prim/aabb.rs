//! Axis-aligned bounding boxes in 2D and 3D.
//!
//! Corners are ordered per axis (`min[i] <= max[i]`); containment is
//! inclusive on faces.

use serde::{Deserialize, Serialize};

use crate::prim::{Vec2, Vec3};
use crate::{GeomError, Result};

/// An axis-aligned box in 2D space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    min: Vec2,
    max: Vec2,
}

impl Aabb2 {
    /// Creates a box from ordered corners; errors if any `min[i] > max[i]`.
    pub fn new(min: Vec2, max: Vec2) -> Result<Self> {
        if min.x() > max.x() {
            return Err(GeomError::InvalidBounds { axis: 0, min: min.x(), max: max.x() });
        }
        if min.y() > max.y() {
            return Err(GeomError::InvalidBounds { axis: 1, min: min.y(), max: max.y() });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum corner.
    #[inline]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[inline]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Returns true if the point lies inside the box, faces included.
    /// Exits on the first violating axis.
    #[inline]
    pub fn contains(&self, p: &Vec2) -> bool {
        if p.x() < self.min.x() || p.x() > self.max.x() {
            return false;
        }
        if p.y() < self.min.y() || p.y() > self.max.y() {
            return false;
        }
        true
    }

    /// Returns the point of the box closest to `p` (per-axis clamp).
    #[inline]
    pub fn clamp(&self, p: &Vec2) -> Vec2 {
        Vec2::new(
            p.x().clamp(self.min.x(), self.max.x()),
            p.y().clamp(self.min.y(), self.max.y()),
        )
    }
}

/// An axis-aligned box in 3D space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    min: Vec3,
    max: Vec3,
}

impl Aabb3 {
    /// Creates a box from ordered corners; errors if any `min[i] > max[i]`.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self> {
        if min.x() > max.x() {
            return Err(GeomError::InvalidBounds { axis: 0, min: min.x(), max: max.x() });
        }
        if min.y() > max.y() {
            return Err(GeomError::InvalidBounds { axis: 1, min: min.y(), max: max.y() });
        }
        if min.z() > max.z() {
            return Err(GeomError::InvalidBounds { axis: 2, min: min.z(), max: max.z() });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum corner.
    #[inline]
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[inline]
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Returns true if the point lies inside the box, faces included.
    /// Exits on the first violating axis.
    #[inline]
    pub fn contains(&self, p: &Vec3) -> bool {
        if p.x() < self.min.x() || p.x() > self.max.x() {
            return false;
        }
        if p.y() < self.min.y() || p.y() > self.max.y() {
            return false;
        }
        if p.z() < self.min.z() || p.z() > self.max.z() {
            return false;
        }
        true
    }

    /// Returns the point of the box closest to `p` (per-axis clamp).
    #[inline]
    pub fn clamp(&self, p: &Vec3) -> Vec3 {
        Vec3::new(
            p.x().clamp(self.min.x(), self.max.x()),
            p.y().clamp(self.min.y(), self.max.y()),
            p.z().clamp(self.min.z(), self.max.z()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb3_new_invalid() {
        let r = Aabb3::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 1.0, 0.0));
        assert!(r.is_err());
    }

    #[test]
    fn test_aabb3_contains_inclusive() {
        let b = Aabb3::new(Vec3::zero(), Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert!(b.contains(&Vec3::zero()));
        assert!(b.contains(&Vec3::new(1.0, 2.0, 3.0)));
        assert!(b.contains(&Vec3::new(0.5, 1.0, 1.5)));
        assert!(!b.contains(&Vec3::new(1.0 + 1e-12, 1.0, 1.0)));
        assert!(!b.contains(&Vec3::new(0.5, -1e-12, 1.0)));
    }

    #[test]
    fn test_aabb3_clamp() {
        let b = Aabb3::new(Vec3::zero(), Vec3::new(1.0, 1.0, 1.0)).unwrap();
        let c = b.clamp(&Vec3::new(2.0, 0.5, -3.0));
        assert!(c.is_equal(&Vec3::new(1.0, 0.5, 0.0), 1e-10));
    }

    #[test]
    fn test_aabb2_contains() {
        let b = Aabb2::new(Vec2::zero(), Vec2::new(2.0, 2.0)).unwrap();
        assert!(b.contains(&Vec2::new(2.0, 2.0)));
        assert!(!b.contains(&Vec2::new(2.0, 2.0 + 1e-9)));
    }

    #[test]
    fn test_aabb2_degenerate_box() {
        // min == max is a valid (single-point) box
        let b = Aabb2::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)).unwrap();
        assert!(b.contains(&Vec2::new(1.0, 1.0)));
    }
}
