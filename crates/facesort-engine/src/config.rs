//! Sorter configuration, loaded from `FACESORT_*` environment variables.

use std::path::PathBuf;

pub struct Config {
    /// Directory containing the ONNX model files.
    pub model_dir: PathBuf,
    /// Minimum cosine similarity for a positive match.
    pub similarity_threshold: f32,
}

impl Config {
    /// Load configuration from environment variables with library defaults.
    pub fn from_env() -> Self {
        Self {
            model_dir: std::env::var("FACESORT_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| facesort_core::default_model_dir()),
            similarity_threshold: env_f32(
                "FACESORT_SIMILARITY_THRESHOLD",
                facesort_core::DEFAULT_SIMILARITY_THRESHOLD,
            ),
        }
    }

    /// Path to the SCRFD detection model.
    pub fn detector_model_path(&self) -> PathBuf {
        self.model_dir.join(facesort_core::DETECTOR_MODEL_FILE)
    }

    /// Path to the ArcFace recognition model.
    pub fn recognizer_model_path(&self) -> PathBuf {
        self.model_dir.join(facesort_core::RECOGNIZER_MODEL_FILE)
    }
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
