//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! Each call opens, uses and closes its own handle.

use std::io::Write as _;
use std::path::Path;

use crate::error::ScanError;

/// Permission bits given to files this tool has to create.
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o644;

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads the whole file as raw bytes.
  pub fn read_bytes(path: &Path) -> Result<Vec<u8>, ScanError> {
    std::fs::read(path).map_err(|source| ScanError::Read {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Returns the file length in bytes.
  pub fn file_len(path: &Path) -> Result<u64, ScanError> {
    std::fs::metadata(path)
      .map(|m| m.len())
      .map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
      })
  }

  /// Replaces the file content with `content`.
  ///
  /// The file is truncated and rewritten in one pass. Existing files keep
  /// their permissions; new files are created with mode `0644` on Unix.
  pub fn write_file(path: &Path, content: &[u8]) -> Result<(), ScanError> {
    let write_err = |source| ScanError::Write {
      path: path.to_path_buf(),
      source,
    };

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
      use std::os::unix::fs::OpenOptionsExt as _;
      options.mode(FILE_MODE);
    }

    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(content).map_err(write_err)?;
    file.flush().map_err(write_err)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileIO::read_bytes(&dir.path().join("missing.go")).unwrap_err();
    assert!(matches!(err, ScanError::Read { .. }));
  }

  #[test]
  fn test_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.sh");
    std::fs::write(&path, "a much longer original body\n").unwrap();

    FileIO::write_file(&path, b"short\n").unwrap();

    assert_eq!(FileIO::read_bytes(&path).unwrap(), b"short\n");
    assert_eq!(FileIO::file_len(&path).unwrap(), 6);
  }

  #[test]
  fn test_write_into_missing_directory_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("a.go");

    let err = FileIO::write_file(&path, b"package a\n").unwrap_err();
    assert!(matches!(err, ScanError::Write { .. }));
    assert_eq!(err.path(), path);
  }

  #[cfg(unix)]
  #[test]
  fn test_existing_file_mode_is_kept() {
    use std::os::unix::fs::PermissionsExt as _;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("private.sh");
    std::fs::write(&path, "echo hi\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();

    FileIO::write_file(&path, b"# header\necho hi\n").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
  }

  #[cfg(unix)]
  #[test]
  fn test_new_file_mode() {
    use std::os::unix::fs::PermissionsExt as _;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.go");
    FileIO::write_file(&path, b"package main\n").unwrap();

    // The process umask can only clear bits
    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode & !FILE_MODE, 0);
  }
}
