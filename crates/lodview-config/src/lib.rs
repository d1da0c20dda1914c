//! Configuration for the LOD viewer.
//!
//! Settings persist to disk as `config.ron`, every section falls back to its
//! defaults when missing, and command-line flags override the loaded values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DatasetConfig, DebugConfig, LightingConfig, RenderConfig,
};
pub use error::ConfigError;
