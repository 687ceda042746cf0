//! Fatal errors of an evaluation run.

use std::{io, path::PathBuf};

/// The errors aborting a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file cannot be loaded.
    #[error("Config error: {0}")]
    Config(String),

    /// The directory cannot be listed.
    #[error("Cannot read the directory {0:?}: {1}")]
    ReadDirectory(PathBuf, #[source] io::Error),
}
