//! Built-in scenes.

use std::fmt;
use std::str::FromStr;

use prism_math::{Color, Point3};

use crate::{Finish, Light, Material, Primitive, Scene, SceneError, SceneResult, Sphere};

/// Named built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// A single red sphere in front of the camera
    RedSphere,
    /// Two balls on a checkered ground
    TwoBalls,
    /// Three balls on a checkered ground
    ThreeBalls,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::RedSphere, Preset::TwoBalls, Preset::ThreeBalls];

    pub fn name(self) -> &'static str {
        match self {
            Preset::RedSphere => "red-sphere",
            Preset::TwoBalls => "two-balls",
            Preset::ThreeBalls => "three-balls",
        }
    }

    pub fn build(self) -> SceneResult<Scene> {
        match self {
            Preset::RedSphere => red_sphere(),
            Preset::TwoBalls => two_balls(),
            Preset::ThreeBalls => three_balls(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SceneError::UnknownPreset(s.to_string()))
    }
}

/// Red sphere of radius 0.5 at the origin, seen from (0, 0, -1), 320x200.
pub fn red_sphere() -> SceneResult<Scene> {
    Scene::new(
        Point3::new(0.0, 0.0, -1.0),
        vec![Sphere::new(Point3::ORIGIN, 0.5, Material::solid(Color::from_hex("#FF0000")?)).into()],
        vec![Light::new(Point3::new(1.5, -0.5, -10.0), Color::from_hex("#FFFFFF")?)],
        320,
        200,
    )
}

fn checkered_ground() -> SceneResult<Sphere> {
    let material = Material::checkered(Color::from_hex("#420500")?, Color::from_hex("#e6b87d")?)
        .with_finish(Finish::default().with_ambient(0.2).with_reflection(0.2));

    Ok(Sphere::new(Point3::new(0.0, 10000.5, 1.0), 10000.0, material))
}

fn ball_lights() -> SceneResult<Vec<Light>> {
    Ok(vec![
        Light::new(Point3::new(1.5, -0.5, -10.0), Color::from_hex("#FFFFFF")?),
        Light::new(Point3::new(-0.5, -10.5, 0.0), Color::from_hex("#E6E6E6")?),
    ])
}

/// Blue and pink balls on a checkered ground, 960x540.
pub fn two_balls() -> SceneResult<Scene> {
    let objects: Vec<Primitive> = vec![
        checkered_ground()?.into(),
        Sphere::new(
            Point3::new(0.75, -0.1, 1.0),
            0.6,
            Material::solid(Color::from_hex("#0000FF")?),
        )
        .into(),
        Sphere::new(
            Point3::new(-0.75, -0.1, 2.25),
            0.6,
            Material::solid(Color::from_hex("#803980")?),
        )
        .into(),
    ];

    Scene::new(Point3::new(0.0, -0.35, -1.0), objects, ball_lights()?, 960, 540)
}

/// Grey, green and gold balls on a checkered ground, 960x540.
pub fn three_balls() -> SceneResult<Scene> {
    let objects: Vec<Primitive> = vec![
        checkered_ground()?.into(),
        Sphere::new(
            Point3::new(0.75, -0.1, 1.0),
            0.6,
            Material::solid(Color::from_hex("#b3b2ab")?),
        )
        .into(),
        Sphere::new(
            Point3::new(-0.75, -0.1, 2.25),
            0.6,
            Material::solid(Color::from_hex("#59996a")?),
        )
        .into(),
        Sphere::new(
            Point3::new(-0.8, -0.1, 0.9),
            0.3,
            Material::solid(Color::from_hex("#D4AF37")?),
        )
        .into(),
    ];

    Scene::new(Point3::new(0.0, -0.35, -1.0), objects, ball_lights()?, 960, 540)
}
