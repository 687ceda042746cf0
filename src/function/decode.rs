//! Image file decoding.

pub use image::{ImageError, RgbImage};

use std::path::Path;

/// Decoding the image file as 8-bit RGB.
///
/// Grayscale images are expanded to three channels and alpha is dropped.
pub fn decode_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage, ImageError> {
    Ok(image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .into_rgb8())
}
