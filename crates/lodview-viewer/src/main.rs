use std::path::PathBuf;

use clap::Parser;
use lodview_config::{CliArgs, Config};
use lodview_dataset::{executable_dir, resolve};
use lodview_input::ViewerAction;
use lodview_scene::RonSceneLoader;
use lodview_viewer::headless::HeadlessRenderer;
use lodview_viewer::platform::PlatformDirs;
use lodview_viewer::startup::{self, SceneSource};
use lodview_viewer::stdin_keys::spawn_stdin_reader;
use lodview_viewer::viewer::Viewer;
use tracing::{error, info, warn};

fn print_usage() {
    println!("Usage: lodview [model file or dataset directory]");
    println!("  e.g. lodview Data/model-osgb");
    println!("       lodview Data/model-osgb/Model.osgb");
    println!("Controls:");
    for line in ViewerAction::help_lines() {
        println!("  {line}");
    }
}

fn main() {
    let args = CliArgs::parse();

    let dirs = match args.config.clone() {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to initialize platform directories: {e}");
                std::process::exit(1);
            }
        },
    };

    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    lodview_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    info!(config_dir = %dirs.config_dir.display(), "lodview starting");
    print_usage();

    let argv0 = std::env::args_os().next().map(PathBuf::from).unwrap_or_default();
    let exe_dir = executable_dir(&argv0);
    let model = startup::model_path(args.model.as_deref(), &config.dataset, &exe_dir);
    let location = resolve(&model, &startup::resolver_options(&config.dataset));

    let mut loader = RonSceneLoader::new();
    let (scene, source) = match startup::load_scene(&mut loader, &location) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to build demo scene: {e}");
            std::process::exit(1);
        }
    };
    if let SceneSource::Loaded(path) = &source {
        info!(path = %path.display(), nodes = scene.nodes.len(), "Viewing model");
    }

    let keys = spawn_stdin_reader().unwrap_or_else(|e| {
        warn!("Keyboard input unavailable: {e}");
        crossbeam_channel::unbounded().1
    });

    let mut viewer = Viewer::new(
        scene,
        HeadlessRenderer::new(),
        config,
        Some(dirs.config_dir.clone()),
    );
    let reason = viewer.run(&keys);
    info!(
        ?reason,
        frames = viewer.frame_count(),
        level_switches = viewer.renderer().level_switches(),
        "lodview exiting"
    );
}
