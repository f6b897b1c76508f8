//! # Error Module
//!
//! Errors raised while walking a tree and adding license headers. Every
//! variant is fatal to the run: the processor stops at the first one and hands
//! it back to the caller.

use std::path::PathBuf;

/// Error type for scan and injection operations.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
  /// A directory could not be listed or an entry could not be stat'ed.
  #[error("Failed to traverse '{path}': {source}")]
  Traversal { path: PathBuf, source: walkdir::Error },

  /// A source file could not be read for inspection or injection.
  #[error("Failed to read file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The boilerplate template for a file type is missing or unreadable.
  #[error("Failed to read license template '{path}': {source}")]
  TemplateRead { path: PathBuf, source: std::io::Error },

  /// The file could not be rewritten with its new header.
  #[error("Failed to write file '{path}': {source}")]
  Write { path: PathBuf, source: std::io::Error },
}

impl ScanError {
  /// The path the failing operation was working on.
  pub fn path(&self) -> &std::path::Path {
    match self {
      Self::Traversal { path, .. } | Self::Read { path, .. } | Self::TemplateRead { path, .. } | Self::Write { path, .. } => {
        path
      }
    }
  }
}
