//! Scene model for the LOD viewer.
//!
//! A scene is a flat list of positioned [`LodNode`]s, each owning a
//! [`LodSet`](lodview_lod::LodSet) of primitive [`Geometry`]. Loading and
//! drawing are seams ([`SceneLoader`], [`Renderer`]) so the viewer can run
//! against any backend.

pub mod bounds;
pub mod demo;
pub mod display_mode;
pub mod graph;
pub mod lighting;
pub mod loader;
pub mod renderer;
pub mod shape;

pub use bounds::BoundingSphere;
pub use demo::{DEMO_LEGEND, create_demo_scene, create_lod_node};
pub use display_mode::{DisplayMode, DisplayModeTarget};
pub use graph::{ActiveLevel, LodNode, SceneGraph};
pub use lighting::Lighting;
pub use loader::{CacheHint, LoadError, RonSceneLoader, SceneLoader};
pub use renderer::{FrameView, LevelBlend, Renderer, draw_selection, render_frame};
pub use shape::{Geometry, Material, Shape};
