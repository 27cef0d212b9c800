//! Pinhole camera for primary rays.
//!
//! The camera sits at the scene's camera position and looks toward +z with
//! x to the right and y down. The image plane is one unit in front of the
//! camera and spans [-1, 1] horizontally; its vertical extent is scaled by
//! the aspect ratio so pixels stay square.

use prism_core::Scene;
use prism_math::{Point3, Ray, Vector3};

/// Camera for generating primary rays into the scene.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    center: Point3,
    aspect_ratio: f64,
}

impl Camera {
    /// Create a camera matching the scene's position and resolution.
    pub fn new(scene: &Scene) -> Self {
        Self {
            image_width: scene.width(),
            image_height: scene.height(),
            center: scene.camera,
            aspect_ratio: scene.aspect_ratio(),
        }
    }

    /// Screen-space coordinates of the center of pixel `(x, y)`.
    pub fn screen_coords(&self, x: u32, y: u32) -> (f64, f64) {
        let sx = (2.0 * x as f64 + 1.0) / self.image_width as f64 - 1.0;
        let sy = ((2.0 * y as f64 + 1.0) / self.image_height as f64 - 1.0) / self.aspect_ratio;
        (sx, sy)
    }

    /// Primary ray through the center of pixel `(x, y)`.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let (sx, sy) = self.screen_coords(x, y);
        Ray::new(self.center, Vector3::new(sx, sy, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(width: u32, height: u32) -> Camera {
        let scene = Scene::new(Point3::new(0.0, 0.0, -1.0), vec![], vec![], width, height).unwrap();
        Camera::new(&scene)
    }

    #[test]
    fn test_screen_coords_span() {
        let cam = camera(320, 200);

        let (x0, y0) = cam.screen_coords(0, 0);
        let (x1, y1) = cam.screen_coords(319, 199);
        assert!((x0 + 1.0 - 1.0 / 320.0).abs() < 1e-12);
        assert!((x1 - 1.0 + 1.0 / 320.0).abs() < 1e-12);

        // Vertical extent shrinks by the aspect ratio (1.6)
        assert!((y0 + (1.0 - 1.0 / 200.0) / 1.6).abs() < 1e-12);
        assert!((y1 - (1.0 - 1.0 / 200.0) / 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_top_row_looks_up() {
        // y points down, so the top row looks toward negative y
        let cam = camera(4, 4);
        assert!(cam.get_ray(0, 0).direction.y < 0.0);
        assert!(cam.get_ray(0, 3).direction.y > 0.0);
        assert!(cam.get_ray(0, 0).direction.x < 0.0);
        assert!(cam.get_ray(3, 0).direction.x > 0.0);
    }

    #[test]
    fn test_rays_start_at_camera_and_face_forward() {
        let cam = camera(7, 5);
        for y in 0..5 {
            for x in 0..7 {
                let ray = cam.get_ray(x, y);
                assert_eq!(ray.origin, Point3::new(0.0, 0.0, -1.0));
                assert!(ray.direction.z > 0.0);
                assert!((ray.direction.length() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_odd_resolution_center_is_straight_ahead() {
        let cam = camera(5, 3);
        assert_eq!(cam.get_ray(2, 1).direction, Vector3::Z);
    }
}
