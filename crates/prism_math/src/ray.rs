use crate::{Point3, Vector3};

/// A ray with an origin and a unit-length direction.
///
/// The direction is normalized on construction. A zero direction stays zero
/// and intersects nothing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray from `origin` heading toward `target`.
    pub fn towards(origin: Point3, target: Point3) -> Self {
        Self::new(origin, target - origin)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Point3::ORIGIN, Vector3::new(0.0, 3.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        assert!(ray.direction.abs_diff_eq(Vector3::new(0.0, 0.6, 0.8), 1e-12));
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::ORIGIN, Vector3::X);

        assert_eq!(ray.at(0.0), Point3::ORIGIN);
        assert_eq!(ray.at(2.0), Point3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_towards() {
        let ray = Ray::towards(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 4.0));
        assert!(ray.direction.abs_diff_eq(Vector3::Z, 1e-12));
    }

    #[test]
    fn test_zero_direction() {
        let ray = Ray::new(Point3::ORIGIN, Vector3::ZERO);
        assert_eq!(ray.direction, Vector3::ZERO);
    }
}
