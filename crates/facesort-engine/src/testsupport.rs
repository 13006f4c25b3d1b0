//! Shared helpers for engine tests: a stub encoder keyed by file name and
//! tiny on-disk photos, so no ONNX models are needed.

use crate::encoder::{EncoderError, FaceEncoder};
use crate::photo::Photo;
use facesort_core::Embedding;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Returns canned embeddings per photo file name; unknown names yield no
/// faces.
pub(crate) struct StubEncoder {
    by_name: HashMap<String, Vec<Embedding>>,
}

impl StubEncoder {
    pub(crate) fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    pub(crate) fn set(&mut self, file_name: &str, embeddings: Vec<Embedding>) {
        self.by_name.insert(file_name.to_string(), embeddings);
    }
}

impl FaceEncoder for StubEncoder {
    fn encode(&mut self, photo: &Photo) -> Result<Vec<Embedding>, EncoderError> {
        Ok(self
            .by_name
            .get(&photo.file_name())
            .cloned()
            .unwrap_or_default())
    }
}

pub(crate) fn emb(values: &[f32]) -> Embedding {
    Embedding {
        values: values.to_vec(),
    }
}

/// Write a small decodable photo named `name` into `dir`.
pub(crate) fn write_photo(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(4, 4, image::Rgb([120, 140, 160]))
        .save(&path)
        .unwrap();
    path
}
