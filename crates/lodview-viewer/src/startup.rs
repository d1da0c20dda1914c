//! Finding and loading the model at startup.

use std::path::{Path, PathBuf};

use lodview_config::DatasetConfig;
use lodview_dataset::{CandidateSearch, DatasetLocation, PathTemplate, ResolverOptions, ScanOrder};
use lodview_lod::LodError;
use lodview_scene::{CacheHint, DEMO_LEGEND, SceneGraph, SceneLoader, create_demo_scene};
use tracing::{info, warn};

/// Where the running scene came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneSource {
    /// Loaded from this descriptor.
    Loaded(PathBuf),
    /// Built in after loading failed.
    Demo,
}

/// Resolver conventions from the `dataset` config section.
pub fn resolver_options(dataset: &DatasetConfig) -> ResolverOptions {
    ResolverOptions {
        extension: dataset.extension.clone(),
        descriptor_stem: dataset.descriptor_stem.clone(),
        data_dir: dataset.data_dir.clone(),
        scan_order: if dataset.lexicographic_scan {
            ScanOrder::Lexicographic
        } else {
            ScanOrder::Filesystem
        },
    }
}

/// Candidate search over the configured templates, or the defaults if none are set.
pub fn candidate_search(dataset: &DatasetConfig) -> CandidateSearch {
    if dataset.search_templates.is_empty() {
        return CandidateSearch::default();
    }
    CandidateSearch::new(dataset.search_templates.iter().map(PathTemplate::new))
}

/// The model path to resolve: the command-line path if given, else the
/// configured default, located relative to the working and executable directories.
pub fn model_path(requested: Option<&Path>, dataset: &DatasetConfig, exe_dir: &Path) -> PathBuf {
    let requested = requested
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&dataset.default_model));
    candidate_search(dataset).locate(&requested, exe_dir)
}

/// Load `location` once with caching, falling back to the demo scene.
///
/// # Errors
///
/// Only if the demo scene itself cannot be built.
pub fn load_scene(
    loader: &mut impl SceneLoader,
    location: &DatasetLocation,
) -> Result<(SceneGraph, SceneSource), LodError> {
    match loader.load(&location.path, CacheHint::CacheAll) {
        Ok(scene) => {
            let bounds = scene.bounding_sphere();
            info!(
                path = %location.path.display(),
                center = ?bounds.center,
                radius = bounds.radius,
                "Model loaded"
            );
            Ok((scene, SceneSource::Loaded(location.path.clone())))
        }
        Err(e) => {
            warn!("Failed to load model: {e}");
            info!("Using demo scene");
            for line in DEMO_LEGEND {
                info!("  {line}");
            }
            Ok((create_demo_scene()?, SceneSource::Demo))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodview_dataset::{LocationKind, resolve};
    use lodview_scene::RonSceneLoader;

    const ONE_NODE: &str = "(nodes: [(levels: [(shape: Sphere(radius: 1.0), color: (1.0, 1.0, 1.0, 1.0), min_distance: 0.0, max_distance: 10.0)])])";

    #[test]
    fn test_options_follow_config() {
        let mut dataset = DatasetConfig::default();
        assert_eq!(resolver_options(&dataset), ResolverOptions::default());

        dataset.lexicographic_scan = true;
        dataset.extension = "osg".to_string();
        let options = resolver_options(&dataset);
        assert_eq!(options.scan_order, ScanOrder::Lexicographic);
        assert_eq!(options.descriptor_name(), "Model.osg");
    }

    #[test]
    fn test_empty_templates_use_defaults() {
        let dataset = DatasetConfig {
            search_templates: Vec::new(),
            ..DatasetConfig::default()
        };
        assert_eq!(candidate_search(&dataset), CandidateSearch::default());
    }

    #[test]
    fn test_default_model_found_two_levels_above_executable() {
        let tmp = tempfile::tempdir().unwrap();
        let model_dir = tmp.path().join("Data").join("model-osgb");
        std::fs::create_dir_all(&model_dir).unwrap();
        std::fs::write(model_dir.join("Model.osgb"), b"").unwrap();
        let exe_dir = tmp.path().join("bin").join("release");
        std::fs::create_dir_all(&exe_dir).unwrap();

        let found = model_path(None, &DatasetConfig::default(), &exe_dir);
        assert!(found.is_absolute());
        assert!(found.ends_with(Path::new("Data").join("model-osgb").join("Model.osgb")));
        assert!(found.exists());
    }

    #[test]
    fn test_cli_path_wins_over_default() {
        let tmp = tempfile::tempdir().unwrap();
        let scene = tmp.path().join("scene.ron");
        std::fs::write(&scene, ONE_NODE).unwrap();
        let found = model_path(Some(&scene), &DatasetConfig::default(), tmp.path());
        assert_eq!(found, scene);
    }

    #[test]
    fn test_missing_model_falls_back_to_demo() {
        let location = resolve("/nonexistent/model/dir", &ResolverOptions::default());
        assert_eq!(location.kind, LocationKind::SingleFile);

        let mut loader = RonSceneLoader::new();
        let (scene, source) = load_scene(&mut loader, &location).unwrap();
        assert_eq!(source, SceneSource::Demo);
        assert_eq!(scene.nodes.len(), 9);
    }

    #[test]
    fn test_ron_scene_is_loaded_and_cached() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scene.ron");
        std::fs::write(&path, ONE_NODE).unwrap();
        let location = resolve(&path, &ResolverOptions::default());

        let mut loader = RonSceneLoader::new();
        let (scene, source) = load_scene(&mut loader, &location).unwrap();
        assert_eq!(source, SceneSource::Loaded(path));
        assert_eq!(scene.nodes.len(), 1);
        assert_eq!(loader.cached_count(), 1);
    }
}
