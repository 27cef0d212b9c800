//! Data-driven scene description.
//!
//! Scenes are described as JSON documents and converted into a [`Scene`].
//! Colors are `#RRGGBB` strings and points are `[x, y, z]` arrays:
//!
//! ```json
//! {
//!   "width": 320, "height": 200, "output": "sphere.ppm",
//!   "camera": [0, 0, -1],
//!   "objects": [
//!     { "type": "sphere", "center": [0, 0, 0], "radius": 0.5,
//!       "material": { "type": "solid", "color": "#FF0000" } }
//!   ],
//!   "lights": [ { "position": [1.5, -0.5, -10], "color": "#FFFFFF" } ]
//! }
//! ```
//!
//! Finish coefficients (`ambient`, `diffuse`, `specular`, `reflection`) are
//! optional on every material and default to [`Finish::default`].

use std::path::Path;

use prism_math::{Color, Point3};
use serde::{Deserialize, Serialize};

use crate::material::{Checkered, Finish, Solid};
use crate::{Light, Material, Primitive, Scene, SceneResult, Sphere, Triangle};

/// Top-level scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    pub width: u32,
    pub height: u32,
    /// Suggested output file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub camera: [f64; 3],
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDescription {
    Sphere {
        center: [f64; 3],
        radius: f64,
        material: MaterialDescription,
    },
    Triangle {
        vertices: [[f64; 3]; 3],
        material: MaterialDescription,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescription {
    Solid {
        color: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ambient: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diffuse: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specular: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reflection: Option<f64>,
    },
    Checkered {
        #[serde(default = "default_color1")]
        color1: String,
        #[serde(default = "default_color2")]
        color2: String,
        #[serde(default = "default_scale")]
        scale: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ambient: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        diffuse: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        specular: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reflection: Option<f64>,
    },
}

fn default_color1() -> String {
    "#FFFFFF".to_string()
}

fn default_color2() -> String {
    "#000000".to_string()
}

fn default_scale() -> f64 {
    Checkered::DEFAULT_SCALE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: [f64; 3],
    #[serde(default = "default_color1")]
    pub color: String,
}

fn finish_from(
    ambient: Option<f64>,
    diffuse: Option<f64>,
    specular: Option<f64>,
    reflection: Option<f64>,
) -> Finish {
    let defaults = Finish::default();
    Finish {
        ambient: ambient.unwrap_or(defaults.ambient),
        diffuse: diffuse.unwrap_or(defaults.diffuse),
        specular: specular.unwrap_or(defaults.specular),
        reflection: reflection.unwrap_or(defaults.reflection),
    }
}

impl MaterialDescription {
    pub fn build(&self) -> SceneResult<Material> {
        let material = match self {
            MaterialDescription::Solid {
                color,
                ambient,
                diffuse,
                specular,
                reflection,
            } => Material::Solid(Solid {
                color: Color::from_hex(color)?,
                finish: finish_from(*ambient, *diffuse, *specular, *reflection),
            }),
            MaterialDescription::Checkered {
                color1,
                color2,
                scale,
                ambient,
                diffuse,
                specular,
                reflection,
            } => Material::Checkered(Checkered {
                color1: Color::from_hex(color1)?,
                color2: Color::from_hex(color2)?,
                scale: *scale,
                finish: finish_from(*ambient, *diffuse, *specular, *reflection),
            }),
        };
        Ok(material)
    }
}

impl ObjectDescription {
    pub fn build(&self) -> SceneResult<Primitive> {
        let primitive: Primitive = match self {
            ObjectDescription::Sphere {
                center,
                radius,
                material,
            } => {
                Sphere::try_new(Point3::from(*center), *radius, material.build()?)?.into()
            }
            ObjectDescription::Triangle { vertices, material } => {
                let [a, b, c] = *vertices;
                Triangle::new(a.into(), b.into(), c.into(), material.build()?).into()
            }
        };
        Ok(primitive)
    }
}

impl LightDescription {
    pub fn build(&self) -> SceneResult<Light> {
        Ok(Light::new(
            Point3::from(self.position),
            Color::from_hex(&self.color)?,
        ))
    }
}

impl SceneDescription {
    /// Parse a JSON scene document.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON scene document from disk.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene description from {}", path.display());

        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Convert into a renderable scene.
    pub fn build(&self) -> SceneResult<Scene> {
        let objects = self
            .objects
            .iter()
            .map(ObjectDescription::build)
            .collect::<SceneResult<Vec<_>>>()?;
        let lights = self
            .lights
            .iter()
            .map(LightDescription::build)
            .collect::<SceneResult<Vec<_>>>()?;

        log::debug!(
            "Built scene: {} objects, {} lights, {}x{}",
            objects.len(),
            lights.len(),
            self.width,
            self.height
        );

        Scene::new(
            Point3::from(self.camera),
            objects,
            lights,
            self.width,
            self.height,
        )
    }
}

/// Load a scene from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<Scene> {
    SceneDescription::load(path)?.build()
}
