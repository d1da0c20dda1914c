//! Locating the entry descriptor of a tiled photogrammetry dataset.
//!
//! [`resolve`] turns a user-supplied file or directory into the one file a
//! scene loader should open. [`CandidateSearch`] finds a relative model path
//! by probing an ordered list of locations around the executable.

mod resolver;
mod search;

pub use resolver::{DatasetLocation, LocationKind, ResolverOptions, ScanOrder, resolve};
pub use search::{CandidateSearch, PathTemplate, executable_dir};
