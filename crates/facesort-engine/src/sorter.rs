//! The batch face sorter — directory bookkeeping and the match/copy loop.
//!
//! One pass over the input directory: each photo is decoded and encoded
//! exactly once, tested against every known person's reference set in
//! enumeration order, and copied to the first matching person's folder or
//! to `no_match` when nobody matches.

use crate::encoder::{EncoderError, FaceEncoder};
use crate::fsops;
use crate::gallery;
use crate::photo::{Photo, PhotoError};
use crate::report::{Destination, PersonSummary, PhotoOutcome, SortReport};
use facesort_core::{CosineMatcher, Matcher};
use std::path::PathBuf;
use thiserror::Error;

/// Fixed name of the catch-all output folder for unmatched photos.
pub const NO_MATCH_DIR: &str = "no_match";

/// The three directories a run operates on.
#[derive(Debug, Clone)]
pub struct SortPaths {
    /// Folder with the photos to be filtered.
    pub input_dir: PathBuf,
    /// Folder receiving the filtered photos.
    pub output_dir: PathBuf,
    /// Folder with one subfolder of reference photos per known person.
    pub known_faces_dir: PathBuf,
}

/// Progress notifications emitted while a run is in flight.
#[derive(Debug, Clone)]
pub enum SortEvent {
    /// A photo was copied to its destination.
    Routed {
        file_name: String,
        destination: Destination,
    },
    /// Input-pass progress; `processed` counts completed photos out of a
    /// constant `total`.
    Progress { processed: usize, total: usize },
}

#[derive(Error, Debug)]
pub enum SortError {
    #[error("input directory does not exist: {0}")]
    MissingInputDir(PathBuf),
    #[error("known faces directory does not exist: {0}")]
    MissingKnownFacesDir(PathBuf),
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error(transparent)]
    Encoder(#[from] EncoderError),
}

/// Run the sorter.
///
/// Validates the input and known-faces directories before any side effect,
/// prepares the output layout, builds the reference gallery, then routes
/// every input photo. A photo matches a person when any of its face
/// embeddings matches any reference embedding of that person under
/// `threshold`; the first matching person in lexicographic order wins.
///
/// Copies are additive and non-destructive: sources are never modified and
/// re-running overwrites same-named copies rather than deduplicating.
pub fn sort_photos(
    paths: &SortPaths,
    encoder: &mut dyn FaceEncoder,
    threshold: f32,
    mut on_event: impl FnMut(SortEvent),
) -> Result<SortReport, SortError> {
    if !paths.input_dir.is_dir() {
        return Err(SortError::MissingInputDir(paths.input_dir.clone()));
    }
    if !paths.known_faces_dir.is_dir() {
        return Err(SortError::MissingKnownFacesDir(
            paths.known_faces_dir.clone(),
        ));
    }

    fsops::ensure_dir(&paths.output_dir)?;
    let no_match_dir = paths.output_dir.join(NO_MATCH_DIR);
    fsops::ensure_dir(&no_match_dir)?;

    let people = gallery::build_gallery(&paths.known_faces_dir, encoder)?;
    for person in &people {
        fsops::ensure_dir(&paths.output_dir.join(&person.name))?;
    }

    let photos = fsops::sorted_files(&paths.input_dir)?;
    let total = photos.len();
    tracing::info!(
        photos = total,
        people = people.len(),
        threshold,
        "starting input pass"
    );

    let matcher = CosineMatcher;
    let mut outcomes: Vec<PhotoOutcome> = Vec::with_capacity(total);
    let mut matched_counts = vec![0usize; people.len()];

    for (index, path) in photos.iter().enumerate() {
        let photo = Photo::load(path)?;
        let embeddings = encoder.encode(&photo)?;

        let mut destination = Destination::NoMatch;
        let mut similarity = None;
        'people: for (pi, person) in people.iter().enumerate() {
            for embedding in &embeddings {
                let outcome = matcher.compare(embedding, &person.references, threshold);
                if outcome.matched {
                    destination = Destination::Person(person.name.clone());
                    similarity = Some(outcome.best_similarity);
                    matched_counts[pi] += 1;
                    break 'people;
                }
            }
        }

        let target_dir = match &destination {
            Destination::Person(name) => paths.output_dir.join(name),
            Destination::NoMatch => no_match_dir.clone(),
        };
        fsops::copy_into(&target_dir, path)?;
        tracing::info!(
            file = %photo.file_name(),
            to = %target_dir.display(),
            "photo copied"
        );

        outcomes.push(PhotoOutcome {
            file_name: photo.file_name(),
            faces: embeddings.len(),
            destination: destination.clone(),
            similarity,
        });
        on_event(SortEvent::Routed {
            file_name: photo.file_name(),
            destination,
        });
        on_event(SortEvent::Progress {
            processed: index + 1,
            total,
        });
    }

    let no_match = outcomes
        .iter()
        .filter(|o| o.destination == Destination::NoMatch)
        .count();
    let people_summaries = people
        .into_iter()
        .zip(matched_counts)
        .map(|(p, matched)| PersonSummary {
            name: p.name,
            reference_images: p.reference_images,
            references: p.references.len(),
            matched,
        })
        .collect();

    Ok(SortReport {
        outcomes,
        people: people_summaries,
        total_photos: total,
        no_match,
        completed_at: chrono::Local::now().to_rfc3339(),
    })
}
