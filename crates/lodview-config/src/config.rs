//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where to look for a model and how datasets are laid out.
    pub dataset: DatasetConfig,
    /// Orbit camera settings.
    pub camera: CameraConfig,
    /// Frame loop settings.
    pub render: RenderConfig,
    /// Scene light settings.
    pub lighting: LightingConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Model lookup and dataset layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Model opened when no path is given on the command line.
    pub default_model: String,
    /// Descriptor extension without the leading dot.
    pub extension: String,
    /// Stem of the root descriptor file (`Model` for `Model.osgb`).
    pub descriptor_stem: String,
    /// Subdirectory holding the tiles.
    pub data_dir: String,
    /// Sort loose descriptors by name instead of taking filesystem order.
    pub lexicographic_scan: bool,
    /// Locations probed for relative model paths, in order.
    /// `{path}` is the model path, `{exe_dir}` the executable's directory.
    pub search_templates: Vec<String>,
}

/// Orbit camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Home distance as a multiple of the scene's bounding radius.
    pub home_distance_factor: f32,
    /// Degrees of yaw per orbit key press.
    pub orbit_step_deg: f32,
    /// Distance multiplier per zoom key press.
    pub zoom_factor: f32,
    /// Sweep the camera distance back and forth through every LOD range.
    pub auto_dolly: bool,
    /// Seconds for one full in-and-out dolly sweep.
    pub dolly_period_s: f32,
}

/// Frame loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// LOD cross-fade duration in seconds (0 = hard cutover).
    pub crossfade_seconds: f32,
    /// Target frame rate (0 = unlimited).
    pub target_fps: u32,
    /// Stop after this many frames (0 = run until quit).
    pub max_frames: u64,
    /// Seconds between frame statistics log lines.
    pub stats_interval_s: f32,
}

/// Scene light configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Direction towards the light.
    pub direction: [f32; 3],
    /// Ambient intensity.
    pub ambient: f32,
    /// Diffuse intensity.
    pub diffuse: f32,
    /// Specular intensity.
    pub specular: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            default_model: "Data/model-osgb/Model.osgb".to_string(),
            extension: "osgb".to_string(),
            descriptor_stem: "Model".to_string(),
            data_dir: "Data".to_string(),
            lexicographic_scan: false,
            search_templates: vec![
                "{path}".to_string(),
                "{exe_dir}/{path}".to_string(),
                "{exe_dir}/../{path}".to_string(),
                "{exe_dir}/../../{path}".to_string(),
            ],
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            home_distance_factor: 3.5,
            orbit_step_deg: 15.0,
            zoom_factor: 1.25,
            auto_dolly: false,
            dolly_period_s: 20.0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            crossfade_seconds: 0.0,
            target_fps: 60,
            max_frames: 0,
            stats_interval_s: 1.0,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            direction: [1.0, 1.0, 1.0],
            ambient: 0.6,
            diffuse: 1.0,
            specular: 0.5,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::Read)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("extension: \"osgb\""));
        assert!(ron_str.contains("home_distance_factor: 3.5"));
    }

    #[test]
    fn test_defaults_match_viewer_conventions() {
        let config = Config::default();
        assert_eq!(config.dataset.descriptor_stem, "Model");
        assert_eq!(config.dataset.search_templates.len(), 4);
        assert_eq!(config.dataset.search_templates[0], "{path}");
        assert!((config.lighting.ambient - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.render.crossfade_seconds, 0.0);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(dataset: (), camera: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.lighting, LightingConfig::default());
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let ron_str = "(dataset: (extension: \"osg\"))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.dataset.extension, "osg");
        assert_eq!(config.dataset.data_dir, "Data");
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.dataset.default_model = "/srv/city/Model.osgb".to_string();
        config.camera.auto_dolly = true;
        config.render.max_frames = 600;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.camera.zoom_factor = 2.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().camera.zoom_factor, 2.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
