//! Probing candidate locations for a relative model path.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// A candidate location with `{path}` and `{exe_dir}` placeholders.
///
/// `{exe_dir}/../{path}` expands to the model path one level above the
/// directory holding the executable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathTemplate(String);

impl PathTemplate {
    /// Wrap a template string.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute both placeholders.
    pub fn expand(&self, path: &Path, exe_dir: &Path) -> PathBuf {
        let expanded = self
            .0
            .replace("{exe_dir}", &exe_dir.to_string_lossy())
            .replace("{path}", &path.to_string_lossy());
        PathBuf::from(expanded)
    }
}

/// Ordered list of templates tried when locating a model path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSearch {
    templates: Vec<PathTemplate>,
}

impl Default for CandidateSearch {
    /// The working directory first, then the executable directory and two of
    /// its ancestors, which covers running from `target/<profile>/`.
    fn default() -> Self {
        Self::new(
            ["{path}", "{exe_dir}/{path}", "{exe_dir}/../{path}", "{exe_dir}/../../{path}"]
                .into_iter()
                .map(PathTemplate::new),
        )
    }
}

impl CandidateSearch {
    /// Build a search from templates, tried in the given order.
    pub fn new(templates: impl IntoIterator<Item = PathTemplate>) -> Self {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    /// The templates in probe order.
    pub fn templates(&self) -> &[PathTemplate] {
        &self.templates
    }

    /// Expand every template for `path` without touching the filesystem.
    pub fn candidates(&self, path: &Path, exe_dir: &Path) -> Vec<PathBuf> {
        self.templates
            .iter()
            .map(|t| t.expand(path, exe_dir))
            .collect()
    }

    /// Return the first existing candidate as an absolute path.
    ///
    /// Absolute inputs are returned untouched. When no candidate exists the
    /// input comes back unchanged so the caller can still try to load it.
    pub fn locate(&self, path: &Path, exe_dir: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }

        for candidate in self.candidates(path, exe_dir) {
            if candidate.exists() {
                let found = std::path::absolute(&candidate).unwrap_or(candidate);
                info!(path = %found.display(), "Found model path");
                return found;
            }
            debug!(candidate = %candidate.display(), "Candidate does not exist");
        }

        debug!(path = %path.display(), "No candidate matched, keeping path as given");
        path.to_path_buf()
    }
}

/// Directory containing the executable named by `argv0`, or `.` when it has none.
pub fn executable_dir(argv0: &Path) -> PathBuf {
    match argv0.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
