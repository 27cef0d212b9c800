//! Scene model: camera, primitives, lights and output resolution.
//!
//! A scene is built once and only read while rendering, so it can be shared
//! between render workers by reference.

use prism_math::{Interval, Point3, Ray};

use crate::{Hit, Light, Primitive, SceneError, SceneResult};

/// Everything needed to render one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Camera position; the camera always looks toward +z
    pub camera: Point3,
    pub objects: Vec<Primitive>,
    pub lights: Vec<Light>,
    width: u32,
    height: u32,
}

impl Scene {
    /// Create a new scene. Width and height must both be non-zero.
    pub fn new(
        camera: Point3,
        objects: Vec<Primitive>,
        lights: Vec<Light>,
        width: u32,
        height: u32,
    ) -> SceneResult<Self> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidResolution { width, height });
        }

        Ok(Self {
            camera,
            objects,
            lights,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Change the output resolution, keeping the non-zero invariant.
    pub fn set_resolution(&mut self, width: u32, height: u32) -> SceneResult<()> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidResolution { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Nearest intersection inside `ray_t`, by linear scan over every object.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(t) = object.intersect(ray, interval) {
                closest_so_far = t;
                closest = Some(Hit {
                    t,
                    ray: *ray,
                    primitive: object,
                });
            }
        }

        closest
    }

    /// True if any object intersects the ray inside `ray_t`.
    pub fn any_hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.objects
            .iter()
            .any(|object| object.intersect(ray, ray_t).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use prism_math::{Color, Vector3};

    fn sphere_at(z: f64) -> Primitive {
        Sphere::new(Point3::new(0.0, 0.0, z), 0.5, Material::default()).into()
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let err = Scene::new(Point3::ORIGIN, vec![], vec![], 0, 10).unwrap_err();
        assert!(matches!(err, SceneError::InvalidResolution { width: 0, height: 10 }));
        assert!(Scene::new(Point3::ORIGIN, vec![], vec![], 10, 0).is_err());

        let mut scene = Scene::new(Point3::ORIGIN, vec![], vec![], 4, 3).unwrap();
        assert!(scene.set_resolution(0, 3).is_err());
        assert_eq!((scene.width(), scene.height()), (4, 3));
    }

    #[test]
    fn test_nearest_hit_wins() {
        let far = sphere_at(10.0);
        let near = sphere_at(3.0);
        let scene = Scene::new(
            Point3::ORIGIN,
            vec![far, near.clone()],
            vec![Light::new(Point3::ORIGIN, Color::WHITE)],
            4,
            4,
        )
        .unwrap();

        let ray = Ray::new(Point3::ORIGIN, Vector3::Z);
        let hit = scene.hit(&ray, Interval::FORWARD).unwrap();
        assert!((hit.t - 2.5).abs() < 1e-9);
        assert_eq!(hit.primitive, &near);
    }

    #[test]
    fn test_no_hit() {
        let scene = Scene::new(Point3::ORIGIN, vec![sphere_at(3.0)], vec![], 4, 4).unwrap();
        let ray = Ray::new(Point3::ORIGIN, -Vector3::Z);
        assert!(scene.hit(&ray, Interval::FORWARD).is_none());
        assert!(!scene.any_hit(&ray, Interval::FORWARD));
    }

    #[test]
    fn test_any_hit_respects_range() {
        let scene = Scene::new(Point3::ORIGIN, vec![sphere_at(3.0)], vec![], 4, 4).unwrap();
        let ray = Ray::new(Point3::ORIGIN, Vector3::Z);
        assert!(scene.any_hit(&ray, Interval::new(1e-4, 10.0)));
        assert!(!scene.any_hit(&ray, Interval::new(1e-4, 2.0)));
    }
}
