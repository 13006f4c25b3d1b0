//! Filesystem helpers shared by the gallery and sorter loops.

use crate::sorter::SortError;
use std::path::{Path, PathBuf};

pub(crate) fn io_err(path: &Path, source: std::io::Error) -> SortError {
    SortError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Immediate entries of `dir`, sorted by path.
///
/// Sorting pins the enumeration order: known people are evaluated and
/// input photos processed in lexicographic name order on every platform.
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SortError> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}

/// Immediate regular files of `dir`, sorted by path.
pub(crate) fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>, SortError> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file())
        .collect())
}

/// Create `dir` (and parents) if absent. Idempotent.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), SortError> {
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))
}

/// Copy `src` into `dir`, keeping its file name. An existing copy with the
/// same name is overwritten; the source is never modified.
pub(crate) fn copy_into(dir: &Path, src: &Path) -> Result<PathBuf, SortError> {
    let file_name = src.file_name().unwrap_or_default();
    let dest = dir.join(file_name);
    std::fs::copy(src, &dest).map_err(|e| io_err(src, e))?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sorted_entries_are_ordered() {
        let dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        let entries = sorted_entries(dir.path()).unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_sorted_files_skips_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("a.txt"), b"x").unwrap();

        let files = sorted_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }

    #[test]
    fn test_sorted_entries_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        let err = sorted_entries(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, SortError::Io { .. }));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out/nested");
        ensure_dir(&target).unwrap();
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_copy_into_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("photo.png");
        std::fs::write(&src, b"new contents").unwrap();

        let out = dir.path().join("out");
        ensure_dir(&out).unwrap();
        std::fs::write(out.join("photo.png"), b"old").unwrap();

        let dest = copy_into(&out, &src).unwrap();
        assert_eq!(std::fs::read(dest).unwrap(), b"new contents");
    }
}
