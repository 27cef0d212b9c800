use prism_math::{Color, Point3};

/// A point light. Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Point3, color: Color) -> Self {
        Self { position, color }
    }
}
