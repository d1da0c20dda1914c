//! Scene lighting: one bright directional light with colour-material shading.

use glam::Vec3;

/// Light state applied to the whole scene.
///
/// The light sits infinitely far away along `direction`. Colour material is
/// enabled so vertex colours drive the diffuse term.
#[derive(Clone, Debug, PartialEq)]
pub struct Lighting {
    /// Normalized direction pointing TOWARD the light.
    pub direction: Vec3,
    /// Ambient RGBA.
    pub ambient: [f32; 4],
    /// Diffuse RGBA.
    pub diffuse: [f32; 4],
    /// Specular RGBA.
    pub specular: [f32; 4],
    /// Use vertex colours as material colours.
    pub color_material: bool,
}

impl Default for Lighting {
    fn default() -> Self {
        Self::bright()
    }
}

impl Lighting {
    /// Strong ambient and full diffuse from the (1, 1, 1) diagonal.
    pub fn bright() -> Self {
        Self::from_intensities(Vec3::ONE, 0.6, 1.0, 0.5)
    }

    /// Grey light terms of the given intensities from `direction`.
    ///
    /// A zero direction falls back to the (1, 1, 1) diagonal.
    pub fn from_intensities(direction: Vec3, ambient: f32, diffuse: f32, specular: f32) -> Self {
        let grey = |v: f32| [v, v, v, 1.0];
        Self {
            direction: direction.try_normalize().unwrap_or(Vec3::ONE.normalize()),
            ambient: grey(ambient),
            diffuse: grey(diffuse),
            specular: grey(specular),
            color_material: true,
        }
    }
}
