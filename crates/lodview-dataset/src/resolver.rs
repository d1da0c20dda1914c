//! Dataset root resolution.
//!
//! Resolution never fails. When nothing better is found the input path comes
//! back unchanged, and it is up to the scene loader to report that it cannot
//! be opened.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// How a [`DatasetLocation`] was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationKind {
    /// The input named a file, or nothing could be resolved.
    SingleFile,
    /// A descriptor inside the input directory.
    DatasetRoot,
    /// Tile directories were found; the conventional root descriptor is assumed.
    TileCollectionRoot,
}

/// The descriptor file a scene loader should open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetLocation {
    /// Path to the descriptor. Only the file and directory rules guarantee it exists.
    pub path: PathBuf,
    /// Which rule produced the path.
    pub kind: LocationKind,
}

impl DatasetLocation {
    fn new(path: PathBuf, kind: LocationKind) -> Self {
        Self { path, kind }
    }
}

/// Order in which directory entries are considered during the loose-file scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// Whatever order the filesystem yields. Not stable across platforms.
    #[default]
    Filesystem,
    /// Sorted by file name before picking the first match.
    Lexicographic,
}

/// Naming conventions of the dataset layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Descriptor extension without the leading dot.
    pub extension: String,
    /// File stem of the conventional root descriptor.
    pub descriptor_stem: String,
    /// Name of the subdirectory holding tiles.
    pub data_dir: String,
    /// Ordering of the loose-file scan.
    pub scan_order: ScanOrder,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            extension: "osgb".to_string(),
            descriptor_stem: "Model".to_string(),
            data_dir: "Data".to_string(),
            scan_order: ScanOrder::Filesystem,
        }
    }
}

impl ResolverOptions {
    /// `Model.<ext>` for the configured stem and extension.
    pub fn descriptor_name(&self) -> String {
        format!("{}.{}", self.descriptor_stem, self.extension)
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(&self.extension))
    }
}

/// Resolve `input` to the descriptor a scene loader should open.
///
/// Rules, first match wins:
/// 1. an existing regular file is returned as is;
/// 2. for an existing directory, in order: `Model.<ext>`, `Data/Model.<ext>`,
///    the first loose `*.<ext>` file, and finally, if any `Data/T/T.<ext>`
///    tile exists, `Model.<ext>` in the directory whether or not it exists;
/// 3. anything else returns `input` unchanged.
pub fn resolve(input: impl AsRef<Path>, options: &ResolverOptions) -> DatasetLocation {
    let input = input.as_ref();
    let location = resolve_inner(input, options);
    info!(
        input = %input.display(),
        resolved = %location.path.display(),
        kind = ?location.kind,
        "Resolved dataset location"
    );
    location
}

fn resolve_inner(input: &Path, options: &ResolverOptions) -> DatasetLocation {
    if input.is_file() {
        return DatasetLocation::new(input.to_path_buf(), LocationKind::SingleFile);
    }

    if input.is_dir()
        && let Some(location) = resolve_directory(input, options)
    {
        return location;
    }

    debug!(input = %input.display(), "No descriptor found, passing input through");
    DatasetLocation::new(input.to_path_buf(), LocationKind::SingleFile)
}

fn resolve_directory(dir: &Path, options: &ResolverOptions) -> Option<DatasetLocation> {
    let descriptor = options.descriptor_name();

    let root = dir.join(&descriptor);
    if root.exists() {
        debug!(path = %root.display(), "Found root descriptor");
        return Some(DatasetLocation::new(root, LocationKind::DatasetRoot));
    }

    let data_dir = dir.join(&options.data_dir);
    let data_root = data_dir.join(&descriptor);
    if data_root.exists() {
        debug!(path = %data_root.display(), "Found descriptor in data directory");
        return Some(DatasetLocation::new(data_root, LocationKind::DatasetRoot));
    }

    if let Some(loose) = first_loose_descriptor(dir, options) {
        debug!(path = %loose.display(), "Using first loose descriptor");
        return Some(DatasetLocation::new(loose, LocationKind::DatasetRoot));
    }

    if data_dir.is_dir() && has_tile_directory(&data_dir, options) {
        // The root descriptor is assumed, not checked.
        debug!(dir = %data_dir.display(), "Tile directories found, assuming root descriptor");
        return Some(DatasetLocation::new(
            dir.join(&descriptor),
            LocationKind::TileCollectionRoot,
        ));
    }

    None
}

fn first_loose_descriptor(dir: &Path, options: &ResolverOptions) -> Option<PathBuf> {
    let mut candidates = list_dir(dir)
        .into_iter()
        .filter(|path| options.has_extension(path) && path.is_file());

    match options.scan_order {
        ScanOrder::Filesystem => candidates.next(),
        ScanOrder::Lexicographic => candidates.min_by(|a, b| a.file_name().cmp(&b.file_name())),
    }
}

/// Whether any subdirectory `T` of `data_dir` contains `T/T.<ext>`.
fn has_tile_directory(data_dir: &Path, options: &ResolverOptions) -> bool {
    list_dir(data_dir).into_iter().any(|tile_dir| {
        let Some(name) = tile_dir.file_name() else {
            return false;
        };
        if !tile_dir.is_dir() {
            return false;
        }
        let mut tile_file = name.to_os_string();
        tile_file.push(".");
        tile_file.push(&options.extension);
        tile_dir.join(tile_file).exists()
    })
}

/// Direct children of `dir` in filesystem order. Unreadable entries are skipped.
fn list_dir(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect(),
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Cannot list directory");
            Vec::new()
        }
    }
}
