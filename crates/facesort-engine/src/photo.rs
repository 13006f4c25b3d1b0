//! Photo loading — decodes an image file into an interleaved RGB buffer.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded input photo: the source path plus interleaved RGB8 pixels.
///
/// The file on disk is read-only as far as the sorter is concerned; the
/// buffer is dropped once the photo has been routed.
#[derive(Debug)]
pub struct Photo {
    pub path: PathBuf,
    pub rgb: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Photo {
    /// Decode the image file at `path` into RGB8.
    ///
    /// Any decode failure propagates; a corrupt or non-image file aborts
    /// the run rather than being silently skipped.
    pub fn load(path: &Path) -> Result<Self, PhotoError> {
        let decoded = image::open(path).map_err(|source| PhotoError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        Ok(Self {
            path: path.to_path_buf(),
            rgb: rgb.into_raw(),
            width,
            height,
        })
    }

    /// File name component of the photo's path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
