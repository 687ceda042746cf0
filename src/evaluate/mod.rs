//! Scoring the pairs of a directory and aggregating the scores.

pub mod report;

pub use crate::{
    config::EvaluatorConfig,
    error::Error,
    function::{decode_rgb, get_tensor_from_image, ImageError, RgbImage},
    metric::*,
    pair::ImagePair,
};
pub use report::*;

use std::{fmt, path::Path};

/// The minimum side length of an image to be scored.
pub const MINIMUM_SIDE: u32 = WINDOW_SIZE as u32;

/// The outcome of scoring one pair.
pub type PairOutcome = Result<MetricSample, SkipReason>;

/// Scoring the image pairs with PSNR and SSIM.
pub struct Evaluator<B: Backend> {
    /// The config it is initialized from.
    pub config: EvaluatorConfig,
    /// The device holding the image tensors.
    pub device: B::Device,
    /// PSNR metric.
    pub metric_psnr: Psnr<B>,
    /// SSIM metric over the RGB channels.
    pub metric_ssim: MeanStructuralSimilarity<B, 3>,
}

/// The reason a pair is left out of the averages.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// An image is missing or cannot be decoded.
    #[error("Could not read {file_name}: {source}")]
    Unreadable {
        /// The file that cannot be read.
        file_name: String,
        /// The decoding error.
        #[source]
        source: ImageError,
    },

    /// An image has a side shorter than [`MINIMUM_SIDE`].
    #[error(
        "Image size too small: {file_name} is {width}x{height}, \
         the minimum is {minimum}x{minimum}",
        minimum = MINIMUM_SIDE
    )]
    TooSmall {
        /// The file of the image.
        file_name: String,
        /// The image width.
        width: u32,
        /// The image height.
        height: u32,
    },

    /// The images differ in size.
    #[error(
        "Mismatched image dimensions: generated is {}x{}, real is {}x{}",
        .generated.0, .generated.1, .real.0, .real.1
    )]
    MismatchedDimensions {
        /// `(width, height)` of the generated image.
        generated: (u32, u32),
        /// `(width, height)` of the real image.
        real: (u32, u32),
    },
}

impl<B: Backend> Evaluator<B> {
    /// Scoring every pair in the configured directory.
    #[inline]
    pub fn run(&self) -> Result<Report, Error> {
        self.run_on(self.config.directory_path())
    }

    /// Scoring every pair in the directory.
    #[inline]
    pub fn run_on<P: AsRef<Path>>(
        &self,
        directory: P,
    ) -> Result<Report, Error> {
        self.run_with(directory, |_, _| {})
    }

    /// Scoring every pair in the directory,
    /// and observing each outcome with `inspect` before it is recorded.
    ///
    /// ## Errors
    ///
    /// Only the failure to read the directory is returned.
    /// Every failure of a pair is recorded in the report as a [`Skip`].
    pub fn run_with<P: AsRef<Path>, F: FnMut(&ImagePair, &PairOutcome)>(
        &self,
        directory: P,
        inspect: F,
    ) -> Result<Report, Error> {
        Ok(self.run_pairs(ImagePair::scan(directory)?, inspect))
    }

    /// Scoring the pairs already scanned,
    /// and observing each outcome with `inspect` before it is recorded.
    pub fn run_pairs<F: FnMut(&ImagePair, &PairOutcome)>(
        &self,
        pairs: Vec<ImagePair>,
        mut inspect: F,
    ) -> Report {
        let mut report = Report::default();

        for pair in pairs {
            let outcome = self.evaluate_pair(&pair);
            inspect(&pair, &outcome);

            match outcome {
                Ok(sample) => {
                    #[cfg(debug_assertions)]
                    log::debug!(
                        target: "ihc_evaluator::evaluate",
                        "Evaluator::run_pairs > {:?} > {sample:?}",
                        pair.generated_file_name,
                    );

                    report.samples.push(sample);
                },
                Err(reason) => {
                    log::warn!(
                        target: "ihc_evaluator::evaluate",
                        "Skipping {}: {reason}",
                        pair.generated_file_name,
                    );

                    report.skips.push(Skip {
                        file_name: pair.generated_file_name,
                        reason,
                    });
                },
            }
        }

        log::info!(
            target: "ihc_evaluator::evaluate",
            "Scored {} pairs, skipped {}",
            report.samples.len(),
            report.skips.len(),
        );

        report
    }

    /// Decoding and scoring the pair.
    pub fn evaluate_pair(
        &self,
        pair: &ImagePair,
    ) -> PairOutcome {
        let generated = Self::decode(&pair.generated_file_name, &pair.generated_path)?;
        let real = Self::decode(&pair.real_file_name, &pair.real_path)?;

        Self::check_size(&pair.generated_file_name, &generated)?;
        Self::check_size(&pair.real_file_name, &real)?;

        if generated.dimensions() != real.dimensions() {
            return Err(SkipReason::MismatchedDimensions {
                generated: generated.dimensions(),
                real: real.dimensions(),
            });
        }

        Ok(self.evaluate_images(&generated, &real))
    }

    /// Scoring the generated image against the real image.
    ///
    /// Both images should have the same dimensions,
    /// with sides no shorter than [`MINIMUM_SIDE`].
    pub fn evaluate_images(
        &self,
        generated: &RgbImage,
        real: &RgbImage,
    ) -> MetricSample {
        debug_assert_eq!(generated.dimensions(), real.dimensions());

        // [1, 3, H, W]
        let generated =
            get_tensor_from_image::<B>(generated, &self.device).unsqueeze::<4>();
        let real = get_tensor_from_image::<B>(real, &self.device).unsqueeze::<4>();

        let psnr = self
            .metric_psnr
            .evaluate_scalar(generated.to_owned(), real.to_owned());
        let ssim = self.metric_ssim.evaluate_scalar(generated, real);

        MetricSample { psnr, ssim }
    }

    fn decode(
        file_name: &str,
        path: &Path,
    ) -> Result<RgbImage, SkipReason> {
        decode_rgb(path).map_err(|source| SkipReason::Unreadable {
            file_name: file_name.to_owned(),
            source,
        })
    }

    fn check_size(
        file_name: &str,
        image: &RgbImage,
    ) -> Result<(), SkipReason> {
        let (width, height) = image.dimensions();
        if width.min(height) < MINIMUM_SIDE {
            return Err(SkipReason::TooSmall {
                file_name: file_name.to_owned(),
                width,
                height,
            });
        }
        Ok(())
    }
}

impl<B: Backend> fmt::Debug for Evaluator<B> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("config", &self.config)
            .field("device", &self.device)
            .field("metric_psnr", &self.metric_psnr)
            .field("metric_ssim", &self.metric_ssim)
            .finish()
    }
}

impl<B: Backend> Default for Evaluator<B> {
    #[inline]
    fn default() -> Self {
        EvaluatorConfig::default().init(&Default::default())
    }
}
