//! Atomic I/O operations with file locking

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a destination file is never observed
/// half-written, and creates missing parent directories.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, treating a missing file as `None`.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }
    read_text(path).map(Some)
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Create a directory and its parents if absent.
///
/// Safe to call redundantly.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native = path.to_native();
    fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))
}

/// Remove a file, returning whether anything was removed.
pub fn remove_file_if_exists(path: &NormalizedPath) -> Result<bool> {
    let native = path.to_native();
    if !native.is_file() {
        return Ok(false);
    }
    fs::remove_file(&native).map_err(|e| Error::io(&native, e))?;
    Ok(true)
}

/// Remove a directory tree, returning the number of files it contained.
pub fn remove_dir_if_exists(path: &NormalizedPath) -> Result<usize> {
    let native = path.to_native();
    if !native.is_dir() {
        return Ok(0);
    }
    let count = count_files(path)?;
    fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))?;
    Ok(count)
}

/// List the immediate entries of a directory.
///
/// A missing directory yields an empty list.
pub fn list_dir(path: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
    let native = path.to_native();
    if !native.is_dir() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;
    let mut paths: Vec<NormalizedPath> = entries
        .flatten()
        .map(|entry| NormalizedPath::new(entry.path()))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Count regular files below `path`, recursively.
pub fn count_files(path: &NormalizedPath) -> Result<usize> {
    let mut count = 0;
    for entry in list_dir(path)? {
        if entry.is_dir() {
            count += count_files(&entry)?;
        } else {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_text_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("a/b/c.md");

        write_text(&path, "hello").unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("a/b/c.md")).unwrap(), "hello");
    }

    #[test]
    fn test_write_text_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("out.md");

        write_text(&path, "one").unwrap();
        write_text(&path, "two").unwrap();

        let entries = list_dir(&NormalizedPath::new(temp.path())).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(read_text(&path).unwrap(), "two");
    }

    #[test]
    fn test_read_text_if_exists() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("missing.md");
        assert!(read_text_if_exists(&path).unwrap().is_none());

        fs::write(temp.path().join("missing.md"), "now here").unwrap();
        assert_eq!(read_text_if_exists(&path).unwrap().as_deref(), Some("now here"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = NormalizedPath::new(temp.path()).join("x/y");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_remove_dir_counts_files() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        write_text(&root.join("ns/a.md"), "a").unwrap();
        write_text(&root.join("ns/sub/b.md"), "b").unwrap();

        assert_eq!(remove_dir_if_exists(&root.join("ns")).unwrap(), 2);
        assert_eq!(remove_dir_if_exists(&root.join("ns")).unwrap(), 0);
    }

    #[test]
    fn test_remove_file_if_exists() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path()).join("f.md");
        assert!(!remove_file_if_exists(&path).unwrap());
        write_text(&path, "x").unwrap();
        assert!(remove_file_if_exists(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_list_dir_missing_is_empty() {
        let temp = TempDir::new().unwrap();
        let missing = NormalizedPath::new(temp.path()).join("nope");
        assert!(list_dir(&missing).unwrap().is_empty());
    }
}
