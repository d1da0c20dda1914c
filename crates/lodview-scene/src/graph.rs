//! Scene graph: positioned LOD nodes and per-frame level selection.

use glam::Vec3;
use lodview_lod::{LodSet, distance_to_viewpoint};

use crate::bounds::BoundingSphere;
use crate::shape::Geometry;

/// One logical object: a translation and its detail levels.
#[derive(Clone, Debug, PartialEq)]
pub struct LodNode {
    /// World-space position of the object's reference point.
    pub translation: Vec3,
    /// Detail levels, all centred on `translation`.
    pub lod: LodSet<Geometry>,
}

impl LodNode {
    /// Place a LOD set at `translation`.
    pub fn new(translation: Vec3, lod: LodSet<Geometry>) -> Self {
        Self { translation, lod }
    }

    /// Sphere enclosing every level of this node.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let radius = self
            .lod
            .levels()
            .iter()
            .map(|level| level.representation.shape.bounding_radius())
            .fold(0.0, f32::max);
        BoundingSphere::new(self.translation, radius)
    }

    /// The representation visible from `eye`, if any.
    pub fn visible_geometry(&self, eye: Vec3) -> Option<&Geometry> {
        self.lod
            .select(distance_to_viewpoint(self.translation, eye))
    }
}

/// The level a node selected for the current viewpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveLevel {
    /// Index of the node in the scene.
    pub node: usize,
    /// Distance from the viewpoint to the node's reference point.
    pub distance: f32,
    /// Selected level, `None` when the node is out of every range.
    pub level: Option<usize>,
}

/// A loaded or generated scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneGraph {
    /// All LOD nodes.
    pub nodes: Vec<LodNode>,
}

impl SceneGraph {
    /// A scene with the given nodes.
    pub fn new(nodes: Vec<LodNode>) -> Self {
        Self { nodes }
    }

    /// Whether the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sphere enclosing every node; invalid for an empty scene.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let mut bs = BoundingSphere::EMPTY;
        for node in &self.nodes {
            bs.expand_by(&node.bounding_sphere());
        }
        bs
    }

    /// Select one level per node for a viewer at `eye`.
    pub fn select_levels(&self, eye: Vec3) -> Vec<ActiveLevel> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(node, n)| {
                let distance = distance_to_viewpoint(n.translation, eye);
                ActiveLevel {
                    node,
                    distance,
                    level: n.lod.select_index(distance),
                }
            })
            .collect()
    }

    /// Total number of levels across all nodes.
    pub fn level_count(&self) -> usize {
        self.nodes.iter().map(|n| n.lod.len()).sum()
    }
}
