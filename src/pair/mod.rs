//! Pairing generated and real images by their file names.

pub use crate::error::Error;

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// The file name marker of the generated images.
pub const GENERATED_MARKER: &str = "merged_Generated IHC";

/// The file name marker of the real images.
pub const REAL_MARKER: &str = "merged_IHC";

/// A generated image and its real counterpart in the same directory.
///
/// The pairing is textual: the real file may not exist.
#[derive(Clone, Eq, Ord, PartialEq, PartialOrd)]
pub struct ImagePair {
    /// The file name containing [`GENERATED_MARKER`].
    pub generated_file_name: String,
    /// The path to the generated image.
    pub generated_path: PathBuf,
    /// The file name with [`REAL_MARKER`] in place of [`GENERATED_MARKER`].
    pub real_file_name: String,
    /// The path to the real image.
    pub real_path: PathBuf,
}

impl ImagePair {
    /// Pairing the file by its name if it is a generated image.
    pub fn from_file_name<P: AsRef<Path>>(
        directory: P,
        file_name: &str,
    ) -> Option<Self> {
        if !file_name.contains(GENERATED_MARKER) {
            return None;
        }

        let directory = directory.as_ref();
        let real_file_name = file_name.replace(GENERATED_MARKER, REAL_MARKER);

        Some(Self {
            generated_file_name: file_name.to_owned(),
            generated_path: directory.join(file_name),
            real_path: directory.join(&real_file_name),
            real_file_name,
        })
    }

    /// Scanning the directory for all generated images.
    ///
    /// The pairs are sorted by the generated file name.
    pub fn scan<P: AsRef<Path>>(directory: P) -> Result<Vec<Self>, Error> {
        let directory = directory.as_ref();
        let read_error =
            |err| Error::ReadDirectory(directory.to_owned(), err);

        let mut pairs = Vec::new();
        for entry in fs::read_dir(directory).map_err(read_error)? {
            let file_name = entry.map_err(read_error)?.file_name();
            let Some(file_name) = file_name.to_str() else {
                log::debug!(
                    target: "ihc_evaluator::pair",
                    "Ignoring non UTF-8 file name {file_name:?}",
                );
                continue;
            };

            pairs.extend(Self::from_file_name(directory, file_name));
        }
        pairs.sort();

        #[cfg(all(debug_assertions, not(test)))]
        log::debug!(
            target: "ihc_evaluator::pair",
            "ImagePair::scan > {} pairs in {directory:?}",
            pairs.len(),
        );

        Ok(pairs)
    }
}

impl fmt::Debug for ImagePair {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("ImagePair")
            .field("generated_file_name", &self.generated_file_name)
            .field("real_file_name", &self.real_file_name)
            .finish()
    }
}
