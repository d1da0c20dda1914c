//! Scene loading.
//!
//! [`SceneLoader`] is the seam a full scene-graph backend plugs into. The
//! bundled [`RonSceneLoader`] reads LOD scenes written in RON:
//!
//! ```ron
//! (
//!     nodes: [
//!         (
//!             translation: (0.0, 0.0, 0.0),
//!             levels: [
//!                 (shape: Sphere(radius: 2.0), color: (0.2, 0.8, 0.2, 1.0), min_distance: 0.0, max_distance: 50.0),
//!                 (shape: Box(size: 2.5), color: (0.8, 0.2, 0.2, 1.0), min_distance: 50.0, max_distance: 500.0),
//!             ],
//!         ),
//!     ],
//! )
//! ```
//!
//! Binary photogrammetry descriptors (`.osgb`, `.osg`) are recognised but have
//! no reader here; loading one yields [`LoadError::UnsupportedFormat`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use glam::Vec3;
use lodview_lod::{LodError, LodSetBuilder};
use serde::Deserialize;
use tracing::{debug, info};

use crate::graph::{LodNode, SceneGraph};
use crate::shape::{Geometry, Material, Shape};

/// Whether a loader may keep loaded scenes for later requests of the same path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheHint {
    /// Always read from disk.
    #[default]
    None,
    /// Cache everything that was loaded.
    CacheAll,
}

/// Errors raised while loading a scene.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Nothing exists at the path.
    #[error("scene file not found: {}", .path.display())]
    NotFound {
        /// Requested path.
        path: PathBuf,
    },

    /// The file could not be read.
    #[error("failed to read scene {}: {source}", .path.display())]
    Io {
        /// Requested path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for a scene.
    #[error("failed to parse scene {}: {source}", .path.display())]
    Parse {
        /// Requested path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// A node's levels do not form a valid LOD set.
    #[error("invalid LOD levels in node {node} of {}: {source}", .path.display())]
    InvalidLevel {
        /// Requested path.
        path: PathBuf,
        /// Index of the offending node.
        node: usize,
        /// Underlying error.
        #[source]
        source: LodError,
    },

    /// No reader handles this file type.
    #[error("no reader for {} (format `{extension}`)", .path.display())]
    UnsupportedFormat {
        /// Requested path.
        path: PathBuf,
        /// File extension, empty if none.
        extension: String,
    },

    /// The scene contains no nodes.
    #[error("scene {} contains no nodes", .path.display())]
    Empty {
        /// Requested path.
        path: PathBuf,
    },
}

/// Produces a scene graph from a descriptor path.
pub trait SceneLoader {
    /// Load the scene at `path`. Called once per resolved path.
    fn load(&mut self, path: &Path, cache: CacheHint) -> Result<SceneGraph, LoadError>;
}

#[derive(Debug, Deserialize)]
struct SceneFile {
    nodes: Vec<NodeDesc>,
}

#[derive(Debug, Deserialize)]
struct NodeDesc {
    #[serde(default)]
    translation: [f32; 3],
    levels: Vec<LevelDesc>,
}

#[derive(Debug, Deserialize)]
struct LevelDesc {
    shape: Shape,
    color: [f32; 4],
    #[serde(default = "default_shininess")]
    shininess: f32,
    min_distance: f32,
    max_distance: f32,
}

fn default_shininess() -> f32 {
    Material::DEFAULT_SHININESS
}

/// Loads `.ron` scene descriptions, optionally caching them per path.
#[derive(Debug, Default)]
pub struct RonSceneLoader {
    cache: HashMap<PathBuf, SceneGraph>,
}

impl RonSceneLoader {
    /// File extension handled by this loader.
    pub const EXTENSION: &'static str = "ron";

    /// A loader with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached scenes.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Parse a scene from RON text. `path` is only used in error messages.
    pub fn parse(path: &Path, text: &str) -> Result<SceneGraph, LoadError> {
        let file: SceneFile = ron::from_str(text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if file.nodes.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        let mut nodes = Vec::with_capacity(file.nodes.len());
        for (index, desc) in file.nodes.into_iter().enumerate() {
            let mut builder = LodSetBuilder::new();
            for level in desc.levels {
                let mut geometry = Geometry::new(level.shape, level.color);
                geometry.material.shininess = level.shininess;
                builder = builder.level(geometry, level.min_distance, level.max_distance);
            }
            let lod = builder.build().map_err(|source| LoadError::InvalidLevel {
                path: path.to_path_buf(),
                node: index,
                source,
            })?;
            nodes.push(LodNode::new(Vec3::from_array(desc.translation), lod));
        }

        Ok(SceneGraph::new(nodes))
    }
}

impl SceneLoader for RonSceneLoader {
    fn load(&mut self, path: &Path, cache: CacheHint) -> Result<SceneGraph, LoadError> {
        if cache == CacheHint::CacheAll
            && let Some(scene) = self.cache.get(path)
        {
            debug!(path = %path.display(), "Scene served from cache");
            return Ok(scene.clone());
        }

        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !extension.eq_ignore_ascii_case(Self::EXTENSION) {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene = Self::parse(path, &text)?;
        info!(
            path = %path.display(),
            nodes = scene.nodes.len(),
            levels = scene.level_count(),
            "Loaded scene"
        );

        if cache == CacheHint::CacheAll {
            self.cache.insert(path.to_path_buf(), scene.clone());
        }
        Ok(scene)
    }
}
