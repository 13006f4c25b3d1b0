//! facesort-core — Face detection and embedding extraction for photo sorting.
//!
//! Uses SCRFD for face detection and ArcFace for face embeddings,
//! both running via ONNX Runtime for CPU inference. Callers treat this
//! crate as an opaque capability: detect faces, extract an embedding per
//! face, compare embeddings against a reference set.

use std::path::PathBuf;

pub mod alignment;
pub mod detector;
pub mod recognizer;
pub mod types;

pub use detector::{DetectorError, FaceDetector};
pub use recognizer::{FaceRecognizer, RecognizerError};
pub use types::{CosineMatcher, Embedding, FaceBox, MatchOutcome, Matcher};

/// Library default match criterion: minimum cosine similarity for a
/// positive match against a reference embedding.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.40;

/// SCRFD detection model file name.
pub const DETECTOR_MODEL_FILE: &str = "det_10g.onnx";

/// ArcFace recognition model file name.
pub const RECOGNIZER_MODEL_FILE: &str = "w600k_r50.onnx";

/// Default directory for ONNX model files:
/// `$XDG_DATA_HOME/facesort/models`, falling back to
/// `$HOME/.local/share/facesort/models`.
pub fn default_model_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local/share")
        })
        .join("facesort/models")
}
