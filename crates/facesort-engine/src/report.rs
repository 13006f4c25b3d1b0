//! Structured results of a sorting run.

use serde::Serialize;

/// Where a photo was copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Copied into the named person's output folder.
    Person(String),
    /// Copied into the `no_match` folder.
    NoMatch,
}

/// Outcome for one input photo.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoOutcome {
    pub file_name: String,
    /// Number of faces detected in the photo.
    pub faces: usize,
    pub destination: Destination,
    /// Best similarity against the matched person's reference set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
}

/// Per-person totals for the run.
#[derive(Debug, Clone, Serialize)]
pub struct PersonSummary {
    pub name: String,
    /// Reference image files scanned for this person.
    pub reference_images: usize,
    /// Reference embeddings extracted from those files.
    pub references: usize,
    /// Input photos routed to this person.
    pub matched: usize,
}

/// The full result of one sorting run.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub outcomes: Vec<PhotoOutcome>,
    pub people: Vec<PersonSummary>,
    pub total_photos: usize,
    /// Photos routed to the `no_match` folder.
    pub no_match: usize,
    pub completed_at: String,
}
