//! Reference gallery — known people and their reference embeddings.
//!
//! Each immediate subdirectory of the known-faces directory names one
//! person; every image inside it is a reference photo. All embeddings
//! extracted from a person's reference photos form one flat reference set,
//! rebuilt from scratch on every run and never persisted.

use crate::encoder::FaceEncoder;
use crate::fsops;
use crate::photo::Photo;
use crate::sorter::SortError;
use facesort_core::Embedding;
use std::path::Path;

/// One known person: directory name plus the flat reference set.
pub struct KnownPerson {
    pub name: String,
    pub references: Vec<Embedding>,
    /// Number of reference image files scanned (including zero-face ones).
    pub reference_images: usize,
}

/// Build the gallery from `known_faces_dir`.
///
/// Subdirectories are visited in lexicographic order — the order in which
/// the sorter later tests people against each photo. Non-directory entries
/// are skipped silently. Reference images in which no face is found
/// contribute nothing and are not an error; decode and inference failures
/// propagate and abort the run.
pub fn build_gallery(
    known_faces_dir: &Path,
    encoder: &mut dyn FaceEncoder,
) -> Result<Vec<KnownPerson>, SortError> {
    let mut people = Vec::new();

    for dir in fsops::sorted_entries(known_faces_dir)? {
        if !dir.is_dir() {
            continue;
        }
        let Some(name) = dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        let mut references = Vec::new();
        let mut reference_images = 0;
        for file in fsops::sorted_files(&dir)? {
            reference_images += 1;
            let photo = Photo::load(&file)?;
            let embeddings = encoder.encode(&photo)?;
            if embeddings.is_empty() {
                tracing::debug!(file = %file.display(), "no face found in reference image");
                continue;
            }
            references.extend(embeddings);
        }

        tracing::info!(
            person = %name,
            reference_images,
            references = references.len(),
            "reference set built"
        );

        people.push(KnownPerson {
            name,
            references,
            reference_images,
        });
    }

    Ok(people)
}

/// List the people a known-faces directory defines, with reference image
/// counts, without touching any models.
pub fn list_people(known_faces_dir: &Path) -> Result<Vec<(String, usize)>, SortError> {
    if !known_faces_dir.is_dir() {
        return Err(SortError::MissingKnownFacesDir(
            known_faces_dir.to_path_buf(),
        ));
    }

    let mut people = Vec::new();
    for dir in fsops::sorted_entries(known_faces_dir)? {
        if !dir.is_dir() {
            continue;
        }
        let Some(name) = dir.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let images = fsops::sorted_files(&dir)?.len();
        people.push((name, images));
    }
    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{emb, write_photo, StubEncoder};
    use tempfile::TempDir;

    #[test]
    fn test_build_gallery_sorted_people_skip_non_dirs() {
        let known = TempDir::new().unwrap();
        std::fs::create_dir(known.path().join("bob")).unwrap();
        std::fs::create_dir(known.path().join("alice")).unwrap();
        // Stray file at the top level is ignored
        std::fs::write(known.path().join("readme.txt"), b"x").unwrap();
        write_photo(&known.path().join("alice"), "ref.png");
        write_photo(&known.path().join("bob"), "ref.png");

        let mut encoder = StubEncoder::new();
        encoder.set("ref.png", vec![emb(&[1.0, 0.0])]);

        let people = build_gallery(known.path(), &mut encoder).unwrap();
        let names: Vec<_> = people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[test]
    fn test_build_gallery_accumulates_flat_reference_set() {
        let known = TempDir::new().unwrap();
        let alice = known.path().join("alice");
        std::fs::create_dir(&alice).unwrap();
        write_photo(&alice, "one.png");
        write_photo(&alice, "two.png");

        let mut encoder = StubEncoder::new();
        // Two faces in the first reference photo, one in the second
        encoder.set("one.png", vec![emb(&[1.0, 0.0]), emb(&[0.9, 0.1])]);
        encoder.set("two.png", vec![emb(&[0.8, 0.2])]);

        let people = build_gallery(known.path(), &mut encoder).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].references.len(), 3);
        assert_eq!(people[0].reference_images, 2);
    }

    #[test]
    fn test_build_gallery_zero_face_reference_is_not_an_error() {
        let known = TempDir::new().unwrap();
        let alice = known.path().join("alice");
        std::fs::create_dir(&alice).unwrap();
        write_photo(&alice, "blurry.png");

        let mut encoder = StubEncoder::new(); // encodes nothing

        let people = build_gallery(known.path(), &mut encoder).unwrap();
        assert_eq!(people.len(), 1);
        assert!(people[0].references.is_empty());
        assert_eq!(people[0].reference_images, 1);
    }

    #[test]
    fn test_list_people_counts_reference_images() {
        let known = TempDir::new().unwrap();
        let alice = known.path().join("alice");
        std::fs::create_dir(&alice).unwrap();
        write_photo(&alice, "one.png");
        write_photo(&alice, "two.png");
        std::fs::create_dir(known.path().join("empty")).unwrap();

        let people = list_people(known.path()).unwrap();
        assert_eq!(
            people,
            vec![("alice".to_string(), 2), ("empty".to_string(), 0)]
        );
    }

    #[test]
    fn test_list_people_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        let err = list_people(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, SortError::MissingKnownFacesDir(_)));
    }
}
