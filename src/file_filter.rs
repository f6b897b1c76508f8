//! # File Filter Module
//!
//! Decides which filesystem entries take part in a scan: files are in scope by
//! extension or exact base name, and directories are excluded by base name.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use crate::config::ScanRules;

/// Classifier for files and directories met during a walk.
///
/// Both predicates are pure; the classifier never touches the filesystem.
#[derive(Debug, Clone)]
pub struct Classifier {
  /// Lowercase extensions with leading dot
  extensions: HashSet<String>,
  /// Case-sensitive base names
  basenames: HashSet<String>,
  /// Directory base names to prune
  excluded_dirs: HashSet<String>,
}

impl Classifier {
  /// Creates a classifier from scan rules and an exclude list.
  ///
  /// Extensions are normalized to lowercase with a leading dot, so `go`,
  /// `.go` and `.GO` are all accepted.
  pub fn new(rules: &ScanRules, exclude_dirs: &[String]) -> Self {
    let extensions = rules
      .extensions
      .iter()
      .map(|ext| {
        let ext = ext.to_lowercase();
        if ext.starts_with('.') { ext } else { format!(".{ext}") }
      })
      .collect();

    Self {
      extensions,
      basenames: rules.basenames.iter().cloned().collect(),
      excluded_dirs: exclude_dirs.iter().cloned().collect(),
    }
  }

  /// Returns `true` if the file should carry a license header.
  pub fn is_in_scope(&self, path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(OsStr::to_str) else {
      return false;
    };

    if self.basenames.contains(name) {
      return true;
    }

    dot_extension(name).is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()))
  }

  /// Returns `true` if a directory with this base name must be pruned.
  pub fn is_excluded_dir(&self, name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| self.excluded_dirs.contains(name))
  }
}

/// Extension of a file name, dot included, taken from the last `.`.
///
/// Unlike [`Path::extension`] this treats a dotfile such as `.sh` as having
/// the extension `.sh`.
fn dot_extension(name: &str) -> Option<&str> {
  name.rfind('.').map(|idx| &name[idx..])
}
