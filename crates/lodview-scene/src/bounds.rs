//! Bounding spheres.

use glam::Vec3;

/// A sphere enclosing some geometry. A negative radius marks an empty sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    /// Centre in world space.
    pub center: Vec3,
    /// Radius; negative when nothing has been added yet.
    pub radius: f32,
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingSphere {
    /// The empty sphere.
    pub const EMPTY: Self = Self {
        center: Vec3::ZERO,
        radius: -1.0,
    };

    /// A sphere with the given centre and radius.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether anything has been enclosed.
    pub fn is_valid(&self) -> bool {
        self.radius >= 0.0
    }

    /// Grow to enclose `other`, keeping the result as tight as a single sphere allows.
    pub fn expand_by(&mut self, other: &BoundingSphere) {
        if !other.is_valid() {
            return;
        }
        if !self.is_valid() {
            *self = *other;
            return;
        }

        let offset = other.center - self.center;
        let d = offset.length();

        if d + other.radius <= self.radius {
            return;
        }
        if d + self.radius <= other.radius {
            *self = *other;
            return;
        }

        let new_radius = 0.5 * (self.radius + d + other.radius);
        let shift = (new_radius - self.radius) / d;
        self.center += offset * shift;
        self.radius = new_radius;
    }

    /// Whether `other` lies entirely inside this sphere, within `tolerance`.
    pub fn contains(&self, other: &BoundingSphere, tolerance: f32) -> bool {
        self.is_valid() && self.center.distance(other.center) + other.radius <= self.radius + tolerance
    }
}
