//! Plane in 3D space.
//!
//! Implicit form `normal . X + offset = 0` with a unit normal.

use crate::prim::Vec3;
use crate::{GeomError, Result};

/// A plane in 3D space: unit normal plus signed offset from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f64,
}

impl Plane {
    /// Creates a plane from the cartesian equation `normal . X + offset = 0`.
    ///
    /// The normal is normalized here and the offset rescaled accordingly, so
    /// the implicit form keeps describing the same point set.
    pub fn new(normal: Vec3, offset: f64) -> Result<Self> {
        let length = normal.length();
        let normal = normal
            .normalized()
            .ok_or(GeomError::DegenerateDirection(length))?;
        Ok(Self {
            normal,
            offset: offset / length,
        })
    }

    /// Creates the plane through `point` with the given normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Result<Self> {
        let normal = normal
            .normalized()
            .ok_or(GeomError::DegenerateDirection(normal.length()))?;
        Ok(Self {
            normal,
            offset: -normal.dot(&point),
        })
    }

    /// Returns the unit normal.
    #[inline]
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Returns the signed offset (`-normal . P` for any point P on the plane).
    #[inline]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance from the point to the plane; positive on the side the
    /// normal points into.
    #[inline]
    pub fn signed_distance(&self, p: &Vec3) -> f64 {
        self.normal.dot(p) + self.offset
    }

    /// Returns true if the point lies on the plane within tolerance.
    #[inline]
    pub fn contains(&self, p: &Vec3, tolerance: f64) -> bool {
        self.signed_distance(p).abs() <= tolerance
    }
}
