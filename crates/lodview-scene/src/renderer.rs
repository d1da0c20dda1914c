//! The drawing seam between the viewer and a rendering backend.

use glam::Vec3;

use crate::display_mode::DisplayModeTarget;
use crate::graph::{ActiveLevel, LodNode, SceneGraph};
use crate::lighting::Lighting;

/// Camera state for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameView {
    /// Frame number, starting at 0.
    pub frame: u64,
    /// Viewpoint position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

/// How the selected level of a node is mixed with the level it replaced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelBlend {
    /// Level being faded out, if any.
    pub from: Option<usize>,
    /// Weight of the selected level in `[0, 1]`. The outgoing level gets the rest.
    pub weight: f32,
}

impl LevelBlend {
    /// The selected level alone at full weight.
    pub const SOLID: Self = Self {
        from: None,
        weight: 1.0,
    };

    /// A fade from `from` with `weight` on the selected level.
    pub fn fading(from: Option<usize>, weight: f32) -> Self {
        Self {
            from,
            weight: weight.clamp(0.0, 1.0),
        }
    }

    /// Weight of the outgoing level.
    pub fn outgoing_weight(&self) -> f32 {
        if self.from.is_some() {
            1.0 - self.weight
        } else {
            0.0
        }
    }

    /// Whether a second level takes part.
    pub fn is_fading(&self) -> bool {
        self.from.is_some() && self.weight < 1.0
    }
}

impl Default for LevelBlend {
    fn default() -> Self {
        Self::SOLID
    }
}

/// A rendering backend.
///
/// Per frame the viewer calls `begin_frame`, then `draw` once per node with
/// the level it selected and its blend, then `end_frame`. A `level` of `None`
/// must not be drawn, though the outgoing level of a fade still is.
pub trait Renderer: DisplayModeTarget {
    /// Replace the scene light.
    fn set_lighting(&mut self, lighting: &Lighting);

    /// Start a frame.
    fn begin_frame(&mut self, view: &FrameView);

    /// Draw the selected level of `node`, mixed with an outgoing level per `blend`.
    fn draw(&mut self, node: &LodNode, active: &ActiveLevel, blend: LevelBlend);

    /// Finish and present the frame.
    fn end_frame(&mut self);
}

/// Select levels for `view.eye` and push one whole frame of `scene` to `renderer`
/// without blending.
///
/// Returns the selection so callers can track level changes.
pub fn render_frame(
    scene: &SceneGraph,
    view: &FrameView,
    renderer: &mut (impl Renderer + ?Sized),
) -> Vec<ActiveLevel> {
    let active = scene.select_levels(view.eye);
    draw_selection(scene, view, &active, renderer, |_| LevelBlend::SOLID);
    active
}

/// Push one frame of an existing selection, asking `blend_for` how to mix each node.
pub fn draw_selection(
    scene: &SceneGraph,
    view: &FrameView,
    active: &[ActiveLevel],
    renderer: &mut (impl Renderer + ?Sized),
    mut blend_for: impl FnMut(&ActiveLevel) -> LevelBlend,
) {
    renderer.begin_frame(view);
    for selection in active {
        if let Some(node) = scene.nodes.get(selection.node) {
            renderer.draw(node, selection, blend_for(selection));
        }
    }
    renderer.end_frame();
}
