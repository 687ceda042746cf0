//! Evaluator configuration.

pub use crate::{error::Error, evaluate::Evaluator, metric::*};
pub use burn::config::Config;

use std::path::Path;

/// The results folder written by the `pyramidpix2pix` test run.
pub const DEFAULT_DIRECTORY_PATH: &str =
    "./results/pyramidpix2pix/test_latest/images";

/// The configuration of an [`Evaluator`].
#[derive(Config, Debug, PartialEq)]
pub struct EvaluatorConfig {
    /// Root folder holding the generated and real images.
    #[config(default = "DEFAULT_DIRECTORY_PATH.into()")]
    pub directory_path: String,
}

impl EvaluatorConfig {
    /// Initialize the evaluator with its metrics on the device.
    pub fn init<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Evaluator<B> {
        Evaluator {
            config: self.to_owned(),
            device: device.to_owned(),
            metric_psnr: Psnr::init(device),
            metric_ssim: MeanStructuralSimilarity::init(device),
        }
    }

    /// Loading the config from a JSON file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        Self::load(path).map_err(|err| {
            Error::Config(format!("{}: {err}", path.display()))
        })
    }

    /// Resolving the config from the optional overrides.
    ///
    /// The directory takes precedence over the config file,
    /// which takes precedence over the default config.
    pub fn resolve(
        config_file: Option<&Path>,
        directory: Option<&Path>,
    ) -> Result<Self, Error> {
        let config = match config_file {
            Some(path) => Self::load_from(path)?,
            None => Self::new(),
        };

        Ok(match directory {
            Some(directory) => config
                .with_directory_path(directory.to_string_lossy().into_owned()),
            None => config,
        })
    }

    /// The root folder as a path.
    #[inline]
    pub fn directory_path(&self) -> &Path {
        Path::new(&self.directory_path)
    }
}

impl Default for EvaluatorConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
