use std::ops::{Add, Sub};

use crate::Vector3;

/// A position in 3D space.
///
/// Subtracting two points gives the [`Vector3`] between them; adding a
/// vector to a point moves it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The origin.
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Displacement of this point from the origin.
    #[inline]
    pub fn to_vector(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Point reached by displacing the origin by `v`.
    #[inline]
    pub fn from_vector(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        (other - self).length()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Point3) -> Vector3 {
        self.to_vector() - rhs.to_vector()
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, rhs: Vector3) -> Point3 {
        Point3::from_vector(self.to_vector() + rhs)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Point3 {
        Point3::from_vector(self.to_vector() - rhs)
    }
}
