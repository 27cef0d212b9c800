//! Geometric primitives and ray intersection.

use prism_math::{Interval, Point3, Ray, Vector3};

use crate::{Material, SceneError, SceneResult};

/// Below this magnitude a ray is treated as parallel to a triangle's plane.
const PARALLEL_TOLERANCE: f64 = 1e-12;

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radii are clamped to zero, which gives a sphere that is
    /// never hit. Use [`Sphere::try_new`] to reject them instead.
    pub fn new(center: Point3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Create a new sphere, failing unless `radius` is positive and finite.
    pub fn try_new(center: Point3, radius: f64, material: Material) -> SceneResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius, material))
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Nearest root of `|o + t·d − c|² = r²` inside `ray_t`.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        if a < PARALLEL_TOLERANCE {
            return None;
        }
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        Some(root)
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Point3) -> Vector3 {
        (p - self.center).normalize_or_zero()
    }
}

/// A triangle primitive with a fixed face normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    v0: Point3,
    v1: Point3,
    v2: Point3,
    /// Unscaled `edge1 × edge2`, its length is twice the area
    area_normal: Vector3,
    normal: Vector3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding `v0 → v1 → v2`. Collinear vertices give
    /// a zero normal and a triangle that nothing intersects.
    pub fn new(v0: Point3, v1: Point3, v2: Point3, material: Material) -> Self {
        let area_normal = (v1 - v0).cross(v2 - v0);

        Self {
            v0,
            v1,
            v2,
            area_normal,
            normal: area_normal.normalize_or_zero(),
            material,
        }
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn centroid(&self) -> Point3 {
        Point3::from_vector((self.v0.to_vector() + self.v1.to_vector() + self.v2.to_vector()) / 3.0)
    }

    /// Plane intersection followed by a barycentric containment test.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let denom = self.normal.dot(ray.direction);

        // Ray is parallel to the plane, or the triangle is degenerate
        if denom.abs() < PARALLEL_TOLERANCE {
            return None;
        }

        let t = self.normal.dot(self.v0 - ray.origin) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        let [w0, w1, w2] = self.barycentric(ray.at(t))?;
        if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
            return None;
        }

        Some(t)
    }

    /// Barycentric weights of `p` (assumed on the triangle's plane) with
    /// respect to `v0`, `v1`, `v2`.
    ///
    /// Each weight is the signed area of the sub-triangle opposite its vertex,
    /// so a negative weight means `p` is on the outside of that edge.
    pub fn barycentric(&self, p: Point3) -> Option<[f64; 3]> {
        let area2 = self.area_normal.length_squared();
        if area2 < PARALLEL_TOLERANCE {
            return None;
        }

        let w0 = self.area_normal.dot((self.v2 - self.v1).cross(p - self.v1)) / area2;
        let w1 = self.area_normal.dot((self.v0 - self.v2).cross(p - self.v2)) / area2;
        let w2 = 1.0 - w0 - w1;

        Some([w0, w1, w2])
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }
}

/// Primitive variants the scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    /// Distance to the nearest intersection inside `ray_t`.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        match self {
            Primitive::Sphere(s) => s.intersect(ray, ray_t),
            Primitive::Triangle(t) => t.intersect(ray, ray_t),
        }
    }

    /// Outward surface normal at `p`.
    pub fn normal_at(&self, p: Point3) -> Vector3 {
        match self {
            Primitive::Sphere(s) => s.normal_at(p),
            Primitive::Triangle(t) => t.normal(),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => &s.material,
            Primitive::Triangle(t) => &t.material,
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

/// Record of a ray-primitive intersection.
///
/// Only the distance is computed during the search; the point and normal
/// are derived on demand for the winning hit.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    pub ray: Ray,
    pub primitive: &'a Primitive,
}

impl<'a> Hit<'a> {
    /// Point of intersection.
    pub fn point(&self) -> Point3 {
        self.ray.at(self.t)
    }

    /// Surface normal at the hit, flipped to point against the ray.
    pub fn normal(&self) -> Vector3 {
        let outward = self.primitive.normal_at(self.point());

        // If the ray and normal point in the same direction, we're behind the surface
        if self.ray.direction.dot(outward) > 0.0 {
            -outward
        } else {
            outward
        }
    }

    pub fn material(&self) -> &'a Material {
        self.primitive.material()
    }
}
