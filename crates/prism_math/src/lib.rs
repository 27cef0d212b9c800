//! Prism math - vectors, points, colors and rays for the ray tracer.
//!
//! Directions are plain [`Vector3`] values (glam's `DVec3`). Positions use
//! the distinct [`Point3`] type so a point can't be passed where a direction
//! is expected. Normalizing a zero-length vector yields the zero vector
//! (`normalize_or_zero`), never NaN.

// Re-export glam for convenience
pub use glam::DVec3;

mod color;
mod interval;
mod point;
mod ray;

pub use color::{Color, ColorError};
pub use interval::Interval;
pub use point::Point3;
pub use ray::Ray;

/// A direction or displacement in 3D space.
pub type Vector3 = DVec3;

/// Minimum accepted hit distance and offset for secondary ray origins.
pub const EPSILON: f64 = 1e-4;

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vector3, n: Vector3) -> Vector3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Vector3::new(1.0, -2.0, -2.0);
        assert_eq!(v.length(), 3.0);
    }

    #[test]
    fn test_vector_addition() {
        let a = Vector3::new(1.0, -2.0, -2.0);
        let b = Vector3::new(3.0, 6.0, 9.0);
        let c = Vector3::new(0.0, 4.5, 2.0);

        assert_eq!(a + b, Vector3::new(4.0, 4.0, 7.0));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn test_vector_scaling() {
        let v = Vector3::new(1.0, -2.0, -2.0);
        assert_eq!(v * 2.0, Vector3::new(2.0, -4.0, -4.0));
        assert_eq!(v * Vector3::new(2.0, 0.5, 0.0), Vector3::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        let n = Vector3::ZERO.normalize_or_zero();
        assert_eq!(n, Vector3::ZERO);
        assert!(!n.is_nan());
    }

    #[test]
    fn test_reflect() {
        let incoming = Vector3::new(1.0, -1.0, 0.0);
        let reflected = reflect(incoming, Vector3::Y);
        assert_eq!(reflected, Vector3::new(1.0, 1.0, 0.0));
    }
}
