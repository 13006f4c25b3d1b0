//! Face encoding seam.
//!
//! The sorter consumes face detection and embedding extraction through the
//! [`FaceEncoder`] trait, keeping the matching loop independent of the
//! inference stack. [`OnnxFaceEncoder`] is the production implementation
//! backed by facesort-core's SCRFD detector and ArcFace recognizer.

use crate::photo::Photo;
use facesort_core::{
    DetectorError, Embedding, FaceDetector, FaceRecognizer, RecognizerError, DETECTOR_MODEL_FILE,
    RECOGNIZER_MODEL_FILE,
};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("detector: {0}")]
    Detector(#[from] DetectorError),
    #[error("recognizer: {0}")]
    Recognizer(#[from] RecognizerError),
}

/// Extracts one embedding per detected face in a photo, best face first.
pub trait FaceEncoder {
    fn encode(&mut self, photo: &Photo) -> Result<Vec<Embedding>, EncoderError>;
}

/// ONNX-backed encoder: SCRFD detection followed by per-face ArcFace
/// embedding extraction.
pub struct OnnxFaceEncoder {
    detector: FaceDetector,
    recognizer: FaceRecognizer,
}

impl OnnxFaceEncoder {
    /// Load both ONNX models from `model_dir`.
    pub fn load(model_dir: &Path) -> Result<Self, EncoderError> {
        let detector = FaceDetector::load(&model_dir.join(DETECTOR_MODEL_FILE))?;
        let recognizer = FaceRecognizer::load(&model_dir.join(RECOGNIZER_MODEL_FILE))?;
        Ok(Self {
            detector,
            recognizer,
        })
    }
}

impl FaceEncoder for OnnxFaceEncoder {
    fn encode(&mut self, photo: &Photo) -> Result<Vec<Embedding>, EncoderError> {
        let faces = self
            .detector
            .detect(&photo.rgb, photo.width, photo.height)?;

        let mut embeddings = Vec::with_capacity(faces.len());
        for face in &faces {
            embeddings.push(
                self.recognizer
                    .extract(&photo.rgb, photo.width, photo.height, face)?,
            );
        }

        tracing::debug!(
            photo = %photo.path.display(),
            faces = embeddings.len(),
            "encoded photo"
        );

        Ok(embeddings)
    }
}
