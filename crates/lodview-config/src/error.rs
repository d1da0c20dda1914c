//! Errors from reading and writing the viewer's `config.ron`.

use std::io;

/// A `config.ron` that could not be read, written or understood.
///
/// The viewer treats all of these as non-fatal and runs on defaults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("cannot read config.ron: {0}")]
    Read(#[source] io::Error),

    /// The config directory or `config.ron` could not be written.
    #[error("cannot write config.ron: {0}")]
    Write(#[source] io::Error),

    /// `config.ron` is not valid RON for the viewer's settings.
    #[error("config.ron is malformed: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The settings could not be turned into RON.
    #[error("cannot serialize viewer settings: {0}")]
    Serialize(#[source] ron::Error),
}
