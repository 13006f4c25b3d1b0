//! facesort-engine — the batch face sorter.
//!
//! Builds a reference gallery from a directory of known people, routes each
//! input photo to the first matching person's output folder (or `no_match`
//! when nobody matches), and returns a structured report of the run.
//!
//! The engine is presentation-free: progress is emitted as [`SortEvent`]s
//! and results come back as data, so the matching logic can be tested
//! without a terminal and rendered by any front end. Face detection and
//! embedding extraction are consumed through the [`FaceEncoder`] seam.

pub mod config;
pub mod encoder;
mod fsops;
pub mod gallery;
pub mod photo;
pub mod report;
pub mod sorter;

pub use config::Config;
pub use encoder::{EncoderError, FaceEncoder, OnnxFaceEncoder};
pub use gallery::{build_gallery, list_people, KnownPerson};
pub use photo::{Photo, PhotoError};
pub use report::{Destination, PersonSummary, PhotoOutcome, SortReport};
pub use sorter::{sort_photos, SortError, SortEvent, SortPaths, NO_MATCH_DIR};

#[cfg(test)]
pub(crate) mod testsupport;
