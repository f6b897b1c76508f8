//! # Content Inspector Module
//!
//! Reads a file and reports whether it is generated and whether it already
//! carries a license header.

use std::path::Path;

use tracing::trace;

use super::file_io::FileIO;
use crate::error::ScanError;
use crate::license_detection::{GeneratedDetector, LicenseDetector};

/// What the inspector found in a file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inspection {
  /// Marker that flags the file as generated, if one was found
  pub generated_marker: Option<String>,
  /// Whether the license signature is present
  pub already_licensed: bool,
}

impl Inspection {
  pub const fn is_generated(&self) -> bool {
    self.generated_marker.is_some()
  }
}

/// Runs the configured detectors over file content.
pub struct ContentInspector {
  license_detector: Box<dyn LicenseDetector>,
  generated_detector: Box<dyn GeneratedDetector>,
}

impl ContentInspector {
  pub fn new(license_detector: Box<dyn LicenseDetector>, generated_detector: Box<dyn GeneratedDetector>) -> Self {
    Self {
      license_detector,
      generated_detector,
    }
  }

  /// Reads `path` in full and inspects it.
  ///
  /// Non-UTF-8 bytes are replaced before matching, so binary-ish files are
  /// inspected rather than rejected.
  ///
  /// # Errors
  ///
  /// Returns [`ScanError::Read`] if the file cannot be read.
  pub fn inspect(&self, path: &Path) -> Result<Inspection, ScanError> {
    let bytes = FileIO::read_bytes(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let inspection = self.inspect_content(&content);
    trace!(
      "Inspected {}: generated={}, licensed={}",
      path.display(),
      inspection.is_generated(),
      inspection.already_licensed
    );
    Ok(inspection)
  }

  /// Inspects content that is already in memory.
  pub fn inspect_content(&self, content: &str) -> Inspection {
    Inspection {
      generated_marker: self.generated_detector.generated_marker(content).map(str::to_string),
      already_licensed: self.license_detector.has_license(content),
    }
  }
}
