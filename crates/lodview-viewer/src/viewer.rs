//! The interactive viewer: input, camera, per-frame LOD selection and drawing.

use std::path::PathBuf;
use std::time::Instant;

use crossbeam_channel::{Receiver, TryRecvError};
use glam::Vec3;
use lodview_config::{Config, LightingConfig};
use lodview_input::{DisplayModeHandler, KeyState, RawKeyEvent, ViewerAction};
use lodview_lod::{LodCrossfade, LodTransitionState};
use lodview_scene::{
    ActiveLevel, DisplayMode, LevelBlend, Lighting, Renderer, SceneGraph, draw_selection,
};
use tracing::{debug, info, warn};

use crate::camera::{DollySweep, OrbitCamera};
use crate::game_loop::{FramePacer, GameLoop};
use crate::stats::{FrameStats, LevelSummary};

/// Scene light described by the `lighting` config section.
pub fn lighting_from_config(config: &LightingConfig) -> Lighting {
    Lighting::from_intensities(
        Vec3::from_array(config.direction),
        config.ambient,
        config.diffuse,
        config.specular,
    )
}

/// The blend of `node` given its cross-fade state.
fn blend_for(crossfade: &LodCrossfade<usize>, node: usize) -> LevelBlend {
    match crossfade.state(&node) {
        Some(LodTransitionState::Transitioning { from, .. }) => {
            let (_, incoming) = crossfade.alphas(&node);
            LevelBlend::fading(*from, incoming)
        }
        _ => LevelBlend::SOLID,
    }
}

/// Why [`Viewer::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// A quit key was pressed.
    Quit,
    /// The configured frame budget was used up.
    FrameBudget,
    /// Key input closed and no frame budget was set.
    InputClosed,
}

/// Owns the scene, the camera and a renderer, and drives them frame by frame.
pub struct Viewer<R: Renderer> {
    scene: SceneGraph,
    renderer: R,
    camera: OrbitCamera,
    dolly: Option<DollySweep>,
    display: DisplayModeHandler,
    crossfade: LodCrossfade<usize>,
    config: Config,
    config_dir: Option<PathBuf>,
    last_active: Vec<ActiveLevel>,
    frame: u64,
    quit: bool,
}

impl<R: Renderer> Viewer<R> {
    /// Light the scene, start in fill mode and home the camera on the scene bounds.
    ///
    /// `config_dir` is where [`ViewerAction::ReloadConfig`] re-reads `config.ron`.
    pub fn new(
        scene: SceneGraph,
        mut renderer: R,
        config: Config,
        config_dir: Option<PathBuf>,
    ) -> Self {
        renderer.set_lighting(&lighting_from_config(&config.lighting));

        let display = DisplayModeHandler::new(DisplayMode::Fill);
        display.mode().apply(&mut renderer);

        let bounds = scene.bounding_sphere();
        let camera = OrbitCamera::homed(&bounds, config.camera.home_distance_factor);
        info!(
            center = ?bounds.center,
            radius = bounds.radius,
            distance = camera.distance,
            "Camera homed"
        );

        let dolly = config.camera.auto_dolly.then(|| {
            DollySweep::for_scene(&scene, config.camera.dolly_period_s)
                .starting_at(camera.distance)
        });

        Self {
            crossfade: LodCrossfade::new(config.render.crossfade_seconds),
            scene,
            renderer,
            camera,
            dolly,
            display,
            config,
            config_dir,
            last_active: Vec::new(),
            frame: 0,
            quit: false,
        }
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The camera.
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The scene being shown.
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Current display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.display.mode()
    }

    /// Whether the automatic dolly is running.
    pub fn is_dollying(&self) -> bool {
        self.dolly.is_some()
    }

    /// The level selection of the last rendered frame.
    pub fn last_active(&self) -> &[ActiveLevel] {
        &self.last_active
    }

    /// The cross-fade tracker fed by every rendered frame.
    pub fn crossfade(&self) -> &LodCrossfade<usize> {
        &self.crossfade
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Whether a quit was requested.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Route one key event: the display-mode toggle first, then the other bindings.
    pub fn handle_key(&mut self, event: &RawKeyEvent) {
        if self.display.handle(event, &mut self.renderer) {
            return;
        }
        if event.state != KeyState::Pressed || event.repeat {
            return;
        }
        if let Some(action) = ViewerAction::from_key(event.key) {
            self.apply(action);
        }
    }

    /// Perform `action`.
    pub fn apply(&mut self, action: ViewerAction) {
        debug!(?action, "Viewer action");
        let camera = &self.config.camera;
        match action {
            ViewerAction::CycleDisplayMode => {
                self.display.advance(&mut self.renderer);
            }
            ViewerAction::OrbitLeft => self.camera.orbit(camera.orbit_step_deg),
            ViewerAction::OrbitRight => self.camera.orbit(-camera.orbit_step_deg),
            ViewerAction::ZoomIn => {
                let factor = camera.zoom_factor;
                self.stop_dolly();
                self.camera.zoom(1.0 / factor);
            }
            ViewerAction::ZoomOut => {
                let factor = camera.zoom_factor;
                self.stop_dolly();
                self.camera.zoom(factor);
            }
            ViewerAction::Home => {
                self.stop_dolly();
                self.camera.home();
            }
            ViewerAction::ToggleDolly => {
                if self.dolly.is_some() {
                    self.stop_dolly();
                } else {
                    let sweep = DollySweep::for_scene(&self.scene, camera.dolly_period_s)
                        .starting_at(self.camera.distance);
                    self.dolly = Some(sweep);
                    info!("Auto dolly on");
                }
            }
            ViewerAction::ReloadConfig => self.reload_config(),
            ViewerAction::Quit => self.quit = true,
        }
    }

    fn stop_dolly(&mut self) {
        if self.dolly.take().is_some() {
            info!("Auto dolly off");
        }
    }

    /// Re-read `config.ron` and apply its camera and lighting sections.
    pub fn reload_config(&mut self) {
        let Some(dir) = &self.config_dir else {
            warn!("No config directory, nothing to reload");
            return;
        };
        match self.config.reload(dir) {
            Ok(Some(new)) => {
                self.renderer.set_lighting(&lighting_from_config(&new.lighting));
                self.config.lighting = new.lighting;
                self.config.camera = new.camera;
                info!("Applied reloaded camera and lighting settings");
            }
            Ok(None) => info!("Config unchanged"),
            Err(e) => warn!("Failed to reload config: {e}"),
        }
    }

    /// One fixed simulation step of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(dolly) = &mut self.dolly {
            self.camera.set_distance(dolly.advance(dt));
        }
        self.crossfade.update(dt);
    }

    /// Select levels for the current camera and draw one frame.
    ///
    /// Level changes are fed to the cross-fade tracker before drawing, so a
    /// switch is blended from the frame it happens on.
    pub fn render(&mut self) -> &[ActiveLevel] {
        let view = self.camera.frame_view(self.frame);
        self.last_active = self.scene.select_levels(view.eye);
        for selection in &self.last_active {
            if self.crossfade.observe(selection.node, selection.level) {
                debug!(node = selection.node, to = ?selection.level, "Cross-fade started");
            }
        }

        let crossfade = &self.crossfade;
        draw_selection(
            &self.scene,
            &view,
            &self.last_active,
            &mut self.renderer,
            |selection| blend_for(crossfade, selection.node),
        );
        self.frame += 1;
        &self.last_active
    }

    /// Run until quit, until the frame budget is spent, or until `keys`
    /// disconnects when there is no frame budget.
    pub fn run(&mut self, keys: &Receiver<RawKeyEvent>) -> ExitReason {
        let max_frames = self.config.render.max_frames;
        let mut game_loop = GameLoop::new();
        let mut pacer = FramePacer::new(self.config.render.target_fps);
        let mut stats = FrameStats::new(self.config.render.stats_interval_s);
        let mut input_open = true;

        info!(
            max_frames,
            target_fps = self.config.render.target_fps,
            "Entering frame loop"
        );
        loop {
            while input_open {
                match keys.try_recv() {
                    Ok(event) => self.handle_key(&event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        debug!("Key input closed");
                        input_open = false;
                    }
                }
            }
            if self.quit {
                info!(frames = self.frame, "Quit requested");
                return ExitReason::Quit;
            }

            game_loop.tick(|dt| self.update(dt as f32));
            self.render();

            if let Some(fps) = stats.record_frame(Instant::now()) {
                let summary = LevelSummary::from_active(&self.last_active);
                info!(
                    fps = %format!("{fps:.1}"),
                    sim_time = %format!("{:.1}s", game_loop.total_sim_time()),
                    distance = self.camera.distance,
                    fading = self.crossfade.transitioning_count(),
                    mode = %self.display.mode(),
                    "Levels {summary}"
                );
            }

            if max_frames > 0 && self.frame >= max_frames {
                info!(frames = self.frame, "Frame budget reached");
                return ExitReason::FrameBudget;
            }
            if !input_open && max_frames == 0 {
                info!(frames = self.frame, "Key input closed, leaving");
                return ExitReason::InputClosed;
            }
            pacer.wait();
        }
    }
}
