//! Surface materials.
//!
//! A material answers two questions for the shader: what color the surface
//! has at a point, and how strongly it responds to ambient, diffuse,
//! specular and mirror lighting (its [`Finish`]).

use prism_math::{Color, Point3};

/// Lighting coefficients shared by every material kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub reflection: f64,
}

impl Default for Finish {
    fn default() -> Self {
        Self {
            ambient: 0.05,
            diffuse: 1.0,
            specular: 1.0,
            reflection: 0.5,
        }
    }
}

impl Finish {
    pub fn with_ambient(mut self, ambient: f64) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_diffuse(mut self, diffuse: f64) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_reflection(mut self, reflection: f64) -> Self {
        self.reflection = reflection;
        self
    }
}

/// A single constant color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub color: Color,
    pub finish: Finish,
}

/// Two colors alternating on a grid projected onto the x/z plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkered {
    pub color1: Color,
    pub color2: Color,
    /// Cells per world unit
    pub scale: f64,
    pub finish: Finish,
}

impl Checkered {
    pub const DEFAULT_SCALE: f64 = 3.0;

    /// Pick a color by the parity of the scaled, floored x and z coordinates.
    pub fn color_at(&self, p: Point3) -> Color {
        let cell_x = (p.x * self.scale).floor() as i64;
        let cell_z = (p.z * self.scale).floor() as i64;

        if (cell_x + cell_z).rem_euclid(2) == 0 {
            self.color1
        } else {
            self.color2
        }
    }
}

/// Material variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Solid(Solid),
    Checkered(Checkered),
}

impl Material {
    /// Solid color with the default finish.
    pub fn solid(color: Color) -> Self {
        Material::Solid(Solid {
            color,
            finish: Finish::default(),
        })
    }

    /// Checker pattern with the default scale and finish.
    pub fn checkered(color1: Color, color2: Color) -> Self {
        Material::Checkered(Checkered {
            color1,
            color2,
            scale: Checkered::DEFAULT_SCALE,
            finish: Finish::default(),
        })
    }

    /// Replace the lighting coefficients.
    pub fn with_finish(mut self, finish: Finish) -> Self {
        match &mut self {
            Material::Solid(m) => m.finish = finish,
            Material::Checkered(m) => m.finish = finish,
        }
        self
    }

    /// Surface color at a point.
    pub fn surface_color(&self, p: Point3) -> Color {
        match self {
            Material::Solid(m) => m.color,
            Material::Checkered(m) => m.color_at(p),
        }
    }

    pub fn finish(&self) -> Finish {
        match self {
            Material::Solid(m) => m.finish,
            Material::Checkered(m) => m.finish,
        }
    }

    pub fn ambient(&self) -> f64 {
        self.finish().ambient
    }

    pub fn diffuse(&self) -> f64 {
        self.finish().diffuse
    }

    pub fn specular(&self) -> f64 {
        self.finish().specular
    }

    pub fn reflection(&self) -> f64 {
        self.finish().reflection
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::solid(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_everywhere() {
        let red = Color::new(1.0, 0.0, 0.0);
        let m = Material::solid(red);
        assert_eq!(m.surface_color(Point3::ORIGIN), red);
        assert_eq!(m.surface_color(Point3::new(-100.0, 3.0, 42.0)), red);
    }

    #[test]
    fn test_default_finish() {
        let m = Material::default();
        assert_eq!(m.ambient(), 0.05);
        assert_eq!(m.diffuse(), 1.0);
        assert_eq!(m.specular(), 1.0);
        assert_eq!(m.reflection(), 0.5);
    }

    #[test]
    fn test_with_finish() {
        let m = Material::checkered(Color::WHITE, Color::BLACK)
            .with_finish(Finish::default().with_ambient(0.2).with_reflection(0.2));
        assert_eq!(m.ambient(), 0.2);
        assert_eq!(m.reflection(), 0.2);
        assert_eq!(m.diffuse(), 1.0);
    }

    #[test]
    fn test_checker_alternates() {
        let m = Material::checkered(Color::WHITE, Color::BLACK);
        let cell = 1.0 / Checkered::DEFAULT_SCALE;

        // Adjacent cells along x and z differ, diagonal cells match
        let base = Point3::new(0.5 * cell, 0.0, 0.5 * cell);
        assert_eq!(m.surface_color(base), Color::WHITE);
        assert_eq!(m.surface_color(Point3::new(1.5 * cell, 0.0, 0.5 * cell)), Color::BLACK);
        assert_eq!(m.surface_color(Point3::new(0.5 * cell, 0.0, 1.5 * cell)), Color::BLACK);
        assert_eq!(m.surface_color(Point3::new(1.5 * cell, 0.0, 1.5 * cell)), Color::WHITE);
    }

    #[test]
    fn test_checker_ignores_height_and_handles_negatives() {
        let m = Material::checkered(Color::WHITE, Color::BLACK);
        let cell = 1.0 / Checkered::DEFAULT_SCALE;

        let p = Point3::new(-0.5 * cell, 0.0, 0.5 * cell);
        assert_eq!(m.surface_color(p), Color::BLACK);
        assert_eq!(m.surface_color(Point3::new(p.x, 57.0, p.z)), Color::BLACK);
        assert_eq!(m.surface_color(Point3::new(-0.5 * cell, 0.0, -0.5 * cell)), Color::WHITE);
    }
}
