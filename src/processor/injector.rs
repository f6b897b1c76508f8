//! # Header Injector Module
//!
//! Prepends a rendered license template to a file. The new content is the
//! header, one newline, then the original bytes unchanged.

use std::path::Path;

use tracing::debug;

use super::file_io::FileIO;
use crate::error::ScanError;
use crate::templates::{LicenseData, TemplateManager};

/// Result of a successful injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
  /// The header was written to the file
  Written,
  /// The file was empty and left untouched
  SkippedEmpty,
}

/// A header insertion computed without touching the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedInjection {
  /// File content before insertion
  pub original: Vec<u8>,
  /// File content after insertion
  pub updated: Vec<u8>,
}

/// Builds new file content from a header and the original bytes.
pub fn compose(header: &[u8], original: &[u8]) -> Vec<u8> {
  let mut content = Vec::with_capacity(header.len() + 1 + original.len());
  content.extend_from_slice(header);
  content.push(b'\n');
  content.extend_from_slice(original);
  content
}

/// Writes license headers into files.
pub struct HeaderInjector {
  template_manager: TemplateManager,
  license_data: LicenseData,
}

impl HeaderInjector {
  pub const fn new(template_manager: TemplateManager, license_data: LicenseData) -> Self {
    Self {
      template_manager,
      license_data,
    }
  }

  /// Computes the content `path` would have after injection.
  ///
  /// The template is read before the file, so a missing template is reported
  /// even for empty files. Returns `None` for an empty file.
  pub fn plan(&self, path: &Path) -> Result<Option<PlannedInjection>, ScanError> {
    let header = self.template_manager.render_for(path, &self.license_data)?;

    if FileIO::file_len(path)? == 0 {
      debug!("File is empty, no header needed: {}", path.display());
      return Ok(None);
    }

    let original = FileIO::read_bytes(path)?;
    let updated = compose(&header, &original);
    Ok(Some(PlannedInjection { original, updated }))
  }

  /// Prepends the header to `path`.
  ///
  /// Empty files are never modified; that is a success, not an error.
  ///
  /// # Errors
  ///
  /// Returns an error if the template cannot be read, or the file cannot be
  /// read or rewritten.
  pub fn inject(&self, path: &Path) -> Result<InjectOutcome, ScanError> {
    match self.plan(path)? {
      Some(planned) => {
        FileIO::write_file(path, &planned.updated)?;
        Ok(InjectOutcome::Written)
      }
      None => Ok(InjectOutcome::SkippedEmpty),
    }
  }
}
