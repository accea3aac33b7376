//! 2D coordinate pair.
//!
//! Doubles as point and vector; no invariant of its own. Other primitives
//! store normalized copies of it where a unit direction is required.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::precision;

/// A 2D cartesian tuple {x, y}, used for both points and vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    /// Creates a vector with given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector (0, 0).
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
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

    /// Computes the dot product.
    #[inline]
    pub const fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the perpendicular dot product `x0*y1 - y0*x1`.
    ///
    /// The 2D analogue of the cross product: zero for parallel vectors, and
    /// its sign gives the orientation of `other` relative to `self`.
    #[inline]
    pub const fn perp_dot(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.square_length().sqrt()
    }

    /// Computes the square of the length.
    #[inline]
    pub const fn square_length(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: &Vec2) -> f64 {
        self.square_distance(other).sqrt()
    }

    /// Squared distance to another point.
    #[inline]
    pub const fn square_distance(&self, other: &Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Returns the unit vector with this direction, or `None` if the length
    /// is below [`precision::RESOLUTION`] scale.
    pub fn normalized(&self) -> Option<Vec2> {
        let d = self.length();
        if d <= precision::RESOLUTION {
            return None;
        }
        Some(Vec2 {
            x: self.x / d,
            y: self.y / d,
        })
    }

    /// Returns true if both components match within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Vec2, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, other: Vec2) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self, v.y * self)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(arr: [f64; 2]) -> Self {
        Vec2::new(arr[0], arr[1])
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}
