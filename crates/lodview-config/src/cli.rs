//! Command-line argument parsing for the viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// LOD viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(
    name = "lodview",
    about = "Level-of-detail scene viewer for tiled photogrammetry datasets",
    after_help = "Examples:\n  lodview Data/model-osgb\n  lodview Data/model-osgb/Model.osgb\n  lodview scenes/demo.ron"
)]
pub struct CliArgs {
    /// Model file or dataset directory. Without it the configured default model is tried.
    pub model: Option<PathBuf>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Stop after this many frames.
    #[arg(long)]
    pub frames: Option<u64>,

    /// LOD cross-fade duration in seconds (0 = hard cutover).
    #[arg(long)]
    pub crossfade: Option<f32>,

    /// Sweep the camera through every LOD range automatically.
    #[arg(long)]
    pub auto_dolly: Option<bool>,

    /// Pick loose descriptors in name order instead of filesystem order.
    #[arg(long)]
    pub sorted_scan: Option<bool>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(frames) = args.frames {
            self.render.max_frames = frames;
        }
        if let Some(seconds) = args.crossfade {
            self.render.crossfade_seconds = seconds.max(0.0);
        }
        if let Some(dolly) = args.auto_dolly {
            self.camera.auto_dolly = dolly;
        }
        if let Some(sorted) = args.sorted_scan {
            self.dataset.lexicographic_scan = sorted;
        }
    }
}
