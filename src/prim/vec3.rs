//! 3D coordinate triplet.
//!
//! Doubles as point and vector; no invariant of its own. Other primitives
//! store normalized copies of it where a unit direction is required.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::precision;

/// A 3D cartesian tuple {x, y, z}, used for both points and vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    /// Creates a vector with given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector (0, 0, 0).
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Returns the X component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Computes the dot product.
    #[inline]
    pub const fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product.
    #[inline]
    pub const fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.square_length().sqrt()
    }

    /// Computes the square of the length.
    #[inline]
    pub const fn square_length(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: &Vec3) -> f64 {
        self.square_distance(other).sqrt()
    }

    /// Squared distance to another point.
    #[inline]
    pub const fn square_distance(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Returns the unit vector with this direction, or `None` if the length
    /// is below [`precision::RESOLUTION`] scale.
    pub fn normalized(&self) -> Option<Vec3> {
        let d = self.length();
        if d <= precision::RESOLUTION {
            return None;
        }
        Some(Vec3 {
            x: self.x / d,
            y: self.y / d,
            z: self.z / d,
        })
    }

    /// Returns true if both points match within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Vec3, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, other: Vec3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(v.x * self, v.y * self, v.z * self)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}
