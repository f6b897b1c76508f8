//! # File Collector Module
//!
//! This module walks a directory tree depth-first in file-name order and
//! prunes excluded directories together with everything below them.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::file_filter::Classifier;

/// Something the walker reports to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
  /// A directory matched the exclude list; nothing beneath it is visited
  ExcludedDir(PathBuf),
  /// A regular file
  File(PathBuf),
}

/// Iterator over the files of a tree.
///
/// Symlinks are not followed and are not reported. The first traversal error
/// is yielded as `Err`; callers that stop there get fail-fast behavior.
pub struct FileCollector<'a> {
  inner: walkdir::IntoIter,
  classifier: &'a Classifier,
  root: PathBuf,
}

impl<'a> FileCollector<'a> {
  /// Creates a walker over `root`.
  pub fn new(root: &Path, classifier: &'a Classifier) -> Self {
    debug!("Scanning directory: {}", root.display());
    Self {
      inner: WalkDir::new(root).sort_by_file_name().into_iter(),
      classifier,
      root: root.to_path_buf(),
    }
  }
}

impl Iterator for FileCollector<'_> {
  type Item = Result<WalkEvent, ScanError>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let entry = match self.inner.next()? {
        Ok(entry) => entry,
        Err(source) => {
          let path = source.path().unwrap_or(&self.root).to_path_buf();
          return Some(Err(ScanError::Traversal { path, source }));
        }
      };

      let file_type = entry.file_type();
      if file_type.is_dir() {
        if self.classifier.is_excluded_dir(entry.file_name()) {
          self.inner.skip_current_dir();
          return Some(Ok(WalkEvent::ExcludedDir(entry.into_path())));
        }
        continue;
      }

      if file_type.is_file() {
        return Some(Ok(WalkEvent::File(entry.into_path())));
      }

      trace!("Skipping: {} (not a regular file)", entry.path().display());
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;
  use crate::config::ScanRules;

  fn collect(root: &Path, excludes: &[&str]) -> Vec<WalkEvent> {
    let excludes: Vec<String> = excludes.iter().map(|s| s.to_string()).collect();
    let classifier = Classifier::new(&ScanRules::default(), &excludes);
    FileCollector::new(root, &classifier)
      .collect::<Result<Vec<_>, _>>()
      .unwrap()
  }

  #[test]
  fn test_walk_is_sorted_depth_first() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b/inner")).unwrap();
    fs::write(root.join("c.go"), "").unwrap();
    fs::write(root.join("a.go"), "").unwrap();
    fs::write(root.join("b/inner/z.go"), "").unwrap();
    fs::write(root.join("b/y.go"), "").unwrap();

    let events = collect(root, &[]);
    assert_eq!(
      events,
      vec![
        WalkEvent::File(root.join("a.go")),
        WalkEvent::File(root.join("b/inner/z.go")),
        WalkEvent::File(root.join("b/y.go")),
        WalkEvent::File(root.join("c.go")),
      ]
    );
  }

  #[test]
  fn test_excluded_dir_prunes_subtree() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("vendor/nested/deeper")).unwrap();
    fs::write(root.join("vendor/c.go"), "").unwrap();
    fs::write(root.join("vendor/nested/deeper/d.go"), "").unwrap();
    fs::write(root.join("a.go"), "").unwrap();

    let events = collect(root, &["vendor"]);
    assert_eq!(
      events,
      vec![
        WalkEvent::File(root.join("a.go")),
        WalkEvent::ExcludedDir(root.join("vendor")),
      ]
    );
  }

  #[test]
  fn test_nested_excluded_dir_is_matched_by_base_name() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("pkg/vendor")).unwrap();
    fs::write(root.join("pkg/vendor/x.go"), "").unwrap();
    fs::write(root.join("pkg/ok.go"), "").unwrap();

    let events = collect(root, &["vendor"]);
    assert_eq!(
      events,
      vec![
        WalkEvent::File(root.join("pkg/ok.go")),
        WalkEvent::ExcludedDir(root.join("pkg/vendor")),
      ]
    );
  }

  #[test]
  fn test_excluded_file_name_is_not_pruned() {
    // Only directories are excluded by name
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("vendor"), "").unwrap();

    let events = collect(root, &["vendor"]);
    assert_eq!(events, vec![WalkEvent::File(root.join("vendor"))]);
  }

  #[test]
  fn test_missing_root_is_traversal_error() {
    let dir = tempfile::tempdir().unwrap();
    let classifier = Classifier::new(&ScanRules::default(), &[]);
    let missing = dir.path().join("nope");
    let mut walker = FileCollector::new(&missing, &classifier);

    match walker.next() {
      Some(Err(ScanError::Traversal { path, .. })) => assert_eq!(path, missing),
      other => panic!("expected traversal error, got {other:?}"),
    }
  }

  #[cfg(unix)]
  #[test]
  fn test_symlinks_are_not_reported() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("real.go"), "").unwrap();
    std::os::unix::fs::symlink(root.join("real.go"), root.join("link.go")).unwrap();

    let events = collect(root, &[]);
    assert_eq!(events, vec![WalkEvent::File(root.join("real.go"))]);
  }
}
