//! Orbit camera and the automatic dolly sweep.
//!
//! The world is Z-up. At yaw -90 degrees and zero pitch the camera sits on
//! the -Y side of its target looking along +Y, which is where a freshly homed
//! view starts.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use lodview_scene::{BoundingSphere, FrameView, SceneGraph};

/// Closest the camera may get to its target.
pub const MIN_DISTANCE: f32 = 0.1;

/// A camera circling a target point.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    /// Point looked at.
    pub target: Vec3,
    /// Distance from the target.
    pub distance: f32,
    /// Heading around +Z, radians.
    pub yaw: f32,
    /// Elevation above the XY plane, radians.
    pub pitch: f32,
    home_target: Vec3,
    home_distance: f32,
}

impl OrbitCamera {
    /// A camera looking at `target` from `distance`, which also becomes home.
    pub fn new(target: Vec3, distance: f32) -> Self {
        let distance = distance.max(MIN_DISTANCE);
        Self {
            target,
            distance,
            yaw: -FRAC_PI_2,
            pitch: 0.0,
            home_target: target,
            home_distance: distance,
        }
    }

    /// A camera homed on `bounds` at `factor` times its radius.
    ///
    /// Invalid or degenerate bounds are treated as a unit sphere at the origin.
    pub fn homed(bounds: &BoundingSphere, factor: f32) -> Self {
        let (center, radius) = if bounds.is_valid() && bounds.radius > 0.0 {
            (bounds.center, bounds.radius)
        } else {
            (Vec3::ZERO, 1.0)
        };
        Self::new(center, factor * radius)
    }

    /// Return to the home target and distance, facing +Y.
    pub fn home(&mut self) {
        self.target = self.home_target;
        self.distance = self.home_distance;
        self.yaw = -FRAC_PI_2;
        self.pitch = 0.0;
    }

    /// Home distance.
    pub fn home_distance(&self) -> f32 {
        self.home_distance
    }

    /// Rotate around the target's vertical axis by `degrees`.
    pub fn orbit(&mut self, degrees: f32) {
        self.yaw = (self.yaw + degrees.to_radians()).rem_euclid(std::f32::consts::TAU);
    }

    /// Multiply the distance by `factor`. Values below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.set_distance(self.distance * factor);
        }
    }

    /// Set the distance, clamped to [`MIN_DISTANCE`].
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.max(MIN_DISTANCE);
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let direction = Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch);
        self.target + self.distance * direction
    }

    /// View for frame number `frame`.
    pub fn frame_view(&self, frame: u64) -> FrameView {
        FrameView {
            frame,
            eye: self.eye(),
            target: self.target,
        }
    }
}

/// Moves the camera in and out so every object passes through all its levels.
///
/// Distance follows a geometric ping-pong between `near` and `far`, so each
/// doubling of distance takes the same time.
#[derive(Clone, Debug, PartialEq)]
pub struct DollySweep {
    near: f32,
    far: f32,
    period: f32,
    phase: f32,
}

impl DollySweep {
    /// A sweep between `near` and `far` taking `period` seconds per round trip.
    pub fn new(near: f32, far: f32, period: f32) -> Self {
        let near = near.max(MIN_DISTANCE);
        Self {
            near,
            far: far.max(near),
            period: period.max(f32::EPSILON),
            phase: 0.0,
        }
    }

    /// A sweep from well inside `scene` to beyond its farthest visible range.
    pub fn for_scene(scene: &SceneGraph, period: f32) -> Self {
        let bounds = scene.bounding_sphere();
        let radius = if bounds.is_valid() { bounds.radius } else { 1.0 };
        let max_visible = scene
            .nodes
            .iter()
            .map(|n| n.lod.max_visible_distance())
            .fold(0.0, f32::max);
        Self::new(0.25 * radius, 1.1 * (max_visible + radius), period)
    }

    /// Nearest distance of the sweep.
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Farthest distance of the sweep.
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Jump to the outbound point of the sweep closest to `distance`.
    pub fn starting_at(mut self, distance: f32) -> Self {
        let span = (self.far / self.near).ln();
        if span > 0.0 {
            let t = ((distance.max(self.near) / self.near).ln() / span).clamp(0.0, 1.0);
            self.phase = 0.5 * t;
        }
        self
    }

    /// Distance at the current phase.
    pub fn distance(&self) -> f32 {
        let t = 1.0 - (2.0 * self.phase - 1.0).abs();
        self.near * (self.far / self.near).powf(t)
    }

    /// Advance by `dt` seconds and return the new distance.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.phase = (self.phase + dt / self.period).rem_euclid(1.0);
        self.distance()
    }
}
