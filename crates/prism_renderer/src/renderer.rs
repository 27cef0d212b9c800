//! Core Whitted-style ray tracer.
//!
//! Implements:
//! - Nearest-hit search by linear scan over the scene
//! - Ambient, diffuse and Phong specular lighting from point lights
//! - Hard shadows via shadow rays
//! - Recursive mirror reflection with a depth limit

use std::ops::AddAssign;
use std::time::Instant;

use prism_core::{Hit, Scene};
use prism_math::{reflect, Color, Interval, Ray, EPSILON};

use crate::{Camera, Image, RenderError, RenderResult};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum number of recursive reflections per primary ray
    pub max_depth: u32,
    /// Background color when a ray doesn't hit anything
    pub background: Color,
    /// Phong specular exponent
    pub shininess: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            background: Color::BLACK,
            shininess: 50.0,
        }
    }
}

/// Counts of rays cast while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RayStats {
    pub primary: u64,
    pub shadow: u64,
    pub reflection: u64,
}

impl RayStats {
    pub fn total(&self) -> u64 {
        self.primary + self.shadow + self.reflection
    }
}

impl AddAssign for RayStats {
    fn add_assign(&mut self, rhs: RayStats) {
        self.primary += rhs.primary;
        self.shadow += rhs.shadow;
        self.reflection += rhs.reflection;
    }
}

/// Compute the color seen by a ray.
///
/// `depth` is the number of reflections already followed; once it reaches
/// `config.max_depth` only local lighting is returned.
pub fn ray_color(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    stats: &mut RayStats,
) -> Color {
    let Some(hit) = scene.hit(ray, Interval::FORWARD) else {
        return config.background;
    };

    let mut color = local_color(&hit, scene, config, stats);

    let reflection = hit.material().reflection();
    if reflection > 0.0 && depth < config.max_depth {
        let normal = hit.normal();
        let origin = hit.point() + normal * EPSILON;
        let reflected = Ray::new(origin, reflect(ray.direction, normal));

        stats.reflection += 1;
        color += reflection * ray_color(&reflected, scene, depth + 1, config, stats);
    }

    color
}

/// Ambient, diffuse and specular light at a hit, without reflections.
fn local_color(hit: &Hit<'_>, scene: &Scene, config: &RenderConfig, stats: &mut RayStats) -> Color {
    let material = hit.material();
    let finish = material.finish();
    let point = hit.point();
    let normal = hit.normal();
    let surface = material.surface_color(point);

    // Offset along the normal so shadow rays don't hit the surface itself
    let origin = point + normal * EPSILON;
    let to_viewer = -hit.ray.direction;

    let mut color = surface * finish.ambient;

    for light in &scene.lights {
        let to_light = light.position - origin;
        let distance = to_light.length();
        let light_dir = to_light.normalize_or_zero();

        stats.shadow += 1;
        let shadow_ray = Ray::new(origin, light_dir);
        if scene.any_hit(&shadow_ray, Interval::new(EPSILON, distance)) {
            continue;
        }

        let lambert = normal.dot(light_dir).max(0.0);
        if lambert <= 0.0 {
            continue;
        }
        color += surface * light.color * (lambert * finish.diffuse);

        // Light direction mirrored about the normal, compared against the viewer
        let highlight = reflect(light_dir, normal).dot(to_viewer).max(0.0);
        color += light.color * (highlight.powf(config.shininess) * finish.specular);
    }

    color
}

/// Final clamped color of pixel `(x, y)`.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    stats: &mut RayStats,
) -> RenderResult<Color> {
    let ray = camera.get_ray(x, y);
    stats.primary += 1;

    let color = ray_color(&ray, scene, 0, config, stats);
    if !color.is_finite() {
        return Err(RenderError::NonFinite { x, y });
    }

    Ok(color.clamped())
}

/// Render the entire scene on the calling thread.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<Image> {
    let start = Instant::now();
    let camera = Camera::new(scene);
    let mut image = Image::new(scene.width(), scene.height());
    let mut stats = RayStats::default();

    for y in 0..scene.height() {
        for x in 0..scene.width() {
            let color = render_pixel(&camera, scene, x, y, config, &mut stats)?;
            image.set_pixel(x, y, color)?;
        }
    }

    log::info!(
        "Rendered {}x{} in {:?} ({} rays: {} primary, {} shadow, {} reflection)",
        scene.width(),
        scene.height(),
        start.elapsed(),
        stats.total(),
        stats.primary,
        stats.shadow,
        stats.reflection
    );

    Ok(image)
}
