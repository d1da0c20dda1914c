//! A renderer that draws nothing and logs what it would draw.

use std::collections::HashMap;

use lodview_scene::{
    ActiveLevel, DisplayMode, DisplayModeTarget, FrameView, LevelBlend, Lighting, LodNode,
    Renderer,
};
use tracing::{debug, info, trace};

/// Records the active level of every node and logs level switches.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    mode: DisplayMode,
    lighting: Option<Lighting>,
    active: HashMap<usize, Option<usize>>,
    blends: HashMap<usize, LevelBlend>,
    frames: u64,
    draws: u64,
    switches: u64,
}

impl HeadlessRenderer {
    /// A renderer in fill mode with no light set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current polygon mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// The light last set, if any.
    pub fn lighting(&self) -> Option<&Lighting> {
        self.lighting.as_ref()
    }

    /// Level drawn for `node` in the last frame; `None` if hidden or never drawn.
    pub fn active_level(&self, node: usize) -> Option<usize> {
        self.active.get(&node).copied().flatten()
    }

    /// Blend `node` was drawn with in the last frame.
    pub fn blend(&self, node: usize) -> Option<LevelBlend> {
        self.blends.get(&node).copied()
    }

    /// Frames completed.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Geometries drawn over all frames, both halves of a fade included.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Number of times any node changed level.
    pub fn level_switches(&self) -> u64 {
        self.switches
    }
}

impl DisplayModeTarget for HeadlessRenderer {
    fn set_display_mode(&mut self, mode: DisplayMode) {
        if mode != self.mode {
            debug!(from = %self.mode, to = %mode, "Polygon mode changed");
        }
        self.mode = mode;
    }
}

impl Renderer for HeadlessRenderer {
    fn set_lighting(&mut self, lighting: &Lighting) {
        info!(
            direction = ?lighting.direction,
            ambient = lighting.ambient[0],
            diffuse = lighting.diffuse[0],
            specular = lighting.specular[0],
            "Lighting set"
        );
        self.lighting = Some(lighting.clone());
    }

    fn begin_frame(&mut self, view: &FrameView) {
        trace!(frame = view.frame, eye = ?view.eye, "Begin frame");
    }

    fn draw(&mut self, node: &LodNode, active: &ActiveLevel, blend: LevelBlend) {
        let previous = self.active.insert(active.node, active.level);
        if let Some(previous) = previous
            && previous != active.level
        {
            self.switches += 1;
            let shape = active
                .level
                .and_then(|i| node.lod.levels().get(i))
                .map_or("hidden", |level| level.representation.shape.name());
            debug!(
                node = active.node,
                from = ?previous,
                to = ?active.level,
                distance = active.distance,
                shape,
                "LOD switch"
            );
        }

        if let Some(outgoing) = blend.from.and_then(|i| node.lod.levels().get(i))
            && blend.outgoing_weight() > 0.0
        {
            self.draws += 1;
            trace!(
                node = active.node,
                shape = outgoing.representation.shape.name(),
                alpha = blend.outgoing_weight(),
                mode = %self.mode,
                "Draw outgoing"
            );
        }
        if let Some(geometry) = active.level.and_then(|i| node.lod.levels().get(i)) {
            self.draws += 1;
            trace!(
                node = active.node,
                shape = geometry.representation.shape.name(),
                alpha = blend.weight,
                mode = %self.mode,
                "Draw"
            );
        }
        self.blends.insert(active.node, blend);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use lodview_scene::{create_demo_scene, draw_selection, render_frame};

    fn view(frame: u64, eye: Vec3) -> FrameView {
        FrameView {
            frame,
            eye,
            target: Vec3::ZERO,
        }
    }

    #[test]
    fn test_records_levels_and_switches() {
        let scene = create_demo_scene().unwrap();
        let mut renderer = HeadlessRenderer::new();

        render_frame(&scene, &view(0, Vec3::new(0.0, 0.0, 100.0)), &mut renderer);
        assert_eq!(renderer.active_level(4), Some(1));
        assert_eq!(renderer.level_switches(), 0);
        assert_eq!(renderer.draws(), 9);

        render_frame(&scene, &view(1, Vec3::new(0.0, 0.0, 200.0)), &mut renderer);
        assert_eq!(renderer.active_level(4), Some(2));
        assert_eq!(renderer.level_switches(), 9);

        render_frame(&scene, &view(2, Vec3::new(0.0, 0.0, 1000.0)), &mut renderer);
        assert_eq!(renderer.active_level(4), None);
        assert_eq!(renderer.level_switches(), 18);
        assert_eq!(renderer.draws(), 18);
        assert_eq!(renderer.frames(), 3);
    }

    #[test]
    fn test_fade_draws_both_levels() {
        let scene = create_demo_scene().unwrap();
        let mut renderer = HeadlessRenderer::new();
        let active = scene.select_levels(Vec3::new(0.0, 0.0, 100.0));
        let view = view(0, Vec3::new(0.0, 0.0, 100.0));

        draw_selection(&scene, &view, &active, &mut renderer, |_| {
            LevelBlend::fading(Some(0), 0.5)
        });
        assert_eq!(renderer.draws(), 18);
        assert_eq!(renderer.blend(4), Some(LevelBlend::fading(Some(0), 0.5)));

        draw_selection(&scene, &view, &active, &mut renderer, |_| LevelBlend::SOLID);
        assert_eq!(renderer.draws(), 27);
        assert_eq!(renderer.blend(4), Some(LevelBlend::SOLID));
    }

    #[test]
    fn test_display_mode_and_lighting_recorded() {
        let mut renderer = HeadlessRenderer::new();
        assert_eq!(renderer.display_mode(), DisplayMode::Fill);
        DisplayMode::Point.apply(&mut renderer);
        assert_eq!(renderer.display_mode(), DisplayMode::Point);

        assert!(renderer.lighting().is_none());
        renderer.set_lighting(&Lighting::bright());
        assert_eq!(renderer.lighting(), Some(&Lighting::bright()));
    }
}
