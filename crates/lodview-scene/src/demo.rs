//! The built-in demo scene shown when no model can be loaded.

use glam::Vec3;
use lodview_lod::{LodError, LodSetBuilder};

use crate::graph::{LodNode, SceneGraph};
use crate::shape::{Geometry, Shape};

/// Distance between neighbouring demo objects.
const GRID_SPACING: f32 = 15.0;
/// Objects per grid row and column.
const GRID_SIZE: i32 = 3;

const GREEN: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
const YELLOW: [f32; 4] = [0.8, 0.8, 0.2, 1.0];
const RED: [f32; 4] = [0.8, 0.2, 0.2, 1.0];

/// Human-readable description of the demo levels, one line per level.
pub const DEMO_LEGEND: [&str; 3] = [
    "green sphere    = high detail   (distance 0-50)",
    "yellow cylinder = medium detail (distance 50-150)",
    "red box         = low detail    (distance 150-500)",
];

/// A three-level LOD node at `translation`: sphere, cylinder, box.
pub fn create_lod_node(translation: Vec3) -> Result<LodNode, LodError> {
    let lod = LodSetBuilder::new()
        .level(
            Geometry::new(Shape::Sphere { radius: 2.0 }, GREEN),
            0.0,
            50.0,
        )
        .level(
            Geometry::new(
                Shape::Cylinder {
                    radius: 1.5,
                    height: 3.0,
                },
                YELLOW,
            ),
            50.0,
            150.0,
        )
        .level(Geometry::new(Shape::Box { size: 2.5 }, RED), 150.0, 500.0)
        .build()?;
    Ok(LodNode::new(translation, lod))
}

/// A 3x3 grid of demo LOD nodes centred on the origin in the XY plane.
pub fn create_demo_scene() -> Result<SceneGraph, LodError> {
    let mut nodes = Vec::with_capacity((GRID_SIZE * GRID_SIZE) as usize);
    for i in 0..GRID_SIZE {
        for j in 0..GRID_SIZE {
            let x = (i - GRID_SIZE / 2) as f32 * GRID_SPACING;
            let y = (j - GRID_SIZE / 2) as f32 * GRID_SPACING;
            nodes.push(create_lod_node(Vec3::new(x, y, 0.0))?);
        }
    }
    Ok(SceneGraph::new(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lod_node_levels() {
        let node = create_lod_node(Vec3::ZERO).unwrap();
        assert_eq!(node.lod.len(), 3);
        assert_eq!(node.lod.range(0), Some((0.0, 50.0)));
        assert_eq!(node.lod.range(1), Some((50.0, 150.0)));
        assert_eq!(node.lod.range(2), Some((150.0, 500.0)));
    }

    #[test]
    fn test_lod_node_selection_by_distance() {
        let node = create_lod_node(Vec3::ZERO).unwrap();
        let name = |d: f32| node.lod.select(d).map(|g| g.shape.name());
        assert_eq!(name(10.0), Some("sphere"));
        assert_eq!(name(100.0), Some("cylinder"));
        assert_eq!(name(300.0), Some("box"));
        assert_eq!(name(600.0), None);
    }

    #[test]
    fn test_demo_grid_layout() {
        let scene = create_demo_scene().unwrap();
        assert_eq!(scene.nodes.len(), 9);

        let xs: Vec<f32> = scene.nodes.iter().map(|n| n.translation.x).collect();
        assert_eq!(xs, vec![-15.0, -15.0, -15.0, 0.0, 0.0, 0.0, 15.0, 15.0, 15.0]);
        let ys: Vec<f32> = scene.nodes.iter().map(|n| n.translation.y).collect();
        assert_eq!(ys, vec![-15.0, 0.0, 15.0, -15.0, 0.0, 15.0, -15.0, 0.0, 15.0]);
        assert!(scene.nodes.iter().all(|n| n.translation.z == 0.0));
    }

    #[test]
    fn test_demo_bounds_enclose_grid() {
        let scene = create_demo_scene().unwrap();
        let bs = scene.bounding_sphere();
        assert!(bs.is_valid());
        for node in &scene.nodes {
            assert!(bs.contains(&node.bounding_sphere(), 1e-3));
        }
        // Corner objects sit 15*sqrt(2) from the centre.
        assert!(bs.radius >= 15.0 * 2.0f32.sqrt());
    }
}
