//! The scores and skips of a run.

pub use super::SkipReason;

use std::fmt;

/// The scores of one pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSample {
    /// Peak signal-to-noise ratio in decibels, `+inf` for identical images.
    pub psnr: f64,
    /// Mean structural similarity in `[-1, 1]`.
    pub ssim: f64,
}

/// A pair left out of the averages.
#[derive(Debug)]
pub struct Skip {
    /// The generated file name of the pair.
    pub file_name: String,
    /// Why the pair is skipped.
    pub reason: SkipReason,
}

/// The arithmetic means over all scored pairs.
///
/// An infinite PSNR sample makes the PSNR mean infinite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Average {
    /// The number of scored pairs.
    pub count: usize,
    /// Mean PSNR in decibels.
    pub psnr: f64,
    /// Mean SSIM.
    pub ssim: f64,
}

/// The outcomes of a run.
#[derive(Debug, Default)]
pub struct Report {
    /// The scores of the scored pairs.
    pub samples: Vec<MetricSample>,
    /// The skipped pairs, in scan order.
    pub skips: Vec<Skip>,
}

impl Report {
    /// Averaging the samples.
    ///
    /// ## Returns
    ///
    /// `None` if no pair was scored.
    pub fn average(&self) -> Option<Average> {
        if self.samples.is_empty() {
            return None;
        }

        let count = self.samples.len();
        let (psnr_sum, ssim_sum) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(psnr, ssim), sample| {
                (psnr + sample.psnr, ssim + sample.ssim)
            });

        Some(Average {
            count,
            psnr: psnr_sum / count as f64,
            ssim: ssim_sum / count as f64,
        })
    }
}

impl fmt::Display for Skip {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Skipping {}: {}", self.file_name, self.reason)
    }
}

impl fmt::Display for Average {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Average PSNR: {}", self.psnr)?;
        write!(f, "Average SSIM: {}", self.ssim)
    }
}

/// The closing lines of a run, without the skips.
impl fmt::Display for Report {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.average() {
            Some(average) => fmt::Display::fmt(&average, f),
            None => f.write_str("No valid images found or processed."),
        }
    }
}
