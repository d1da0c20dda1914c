//! Primitive shapes used as LOD representations.

use serde::{Deserialize, Serialize};

/// A primitive centred at the local origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Sphere of the given radius.
    Sphere {
        /// Radius.
        radius: f32,
    },
    /// Cylinder along the local Z axis.
    Cylinder {
        /// Radius of the caps.
        radius: f32,
        /// Full height.
        height: f32,
    },
    /// Axis-aligned cube.
    Box {
        /// Full edge length.
        size: f32,
    },
}

impl Shape {
    /// Radius of the smallest origin-centred sphere enclosing the shape.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } => radius,
            Shape::Cylinder { radius, height } => (radius * radius + 0.25 * height * height).sqrt(),
            Shape::Box { size } => 0.5 * size * 3.0f32.sqrt(),
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Box { .. } => "box",
        }
    }
}

/// Phong surface parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Diffuse RGBA.
    pub diffuse: [f32; 4],
    /// Specular RGBA.
    pub specular: [f32; 4],
    /// Specular exponent.
    pub shininess: f32,
}

impl Material {
    /// Default shininess of scene materials.
    pub const DEFAULT_SHININESS: f32 = 64.0;

    /// A material with the given diffuse colour, white highlights and the default shininess.
    pub fn with_diffuse(diffuse: [f32; 4]) -> Self {
        Self {
            diffuse,
            specular: [1.0, 1.0, 1.0, 1.0],
            shininess: Self::DEFAULT_SHININESS,
        }
    }
}

/// One drawable representation: a shape with its colour and material.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    /// The primitive.
    pub shape: Shape,
    /// Vertex colour.
    pub color: [f32; 4],
    /// Surface material.
    pub material: Material,
}

impl Geometry {
    /// A coloured shape whose material diffuse matches the colour.
    pub fn new(shape: Shape, color: [f32; 4]) -> Self {
        Self {
            shape,
            color,
            material: Material::with_diffuse(color),
        }
    }
}
