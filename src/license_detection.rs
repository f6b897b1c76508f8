//! # License Detection Module
//!
//! This module contains the interfaces and implementations for recognizing
//! existing license headers and generated files. Both checks are plain
//! substring searches over the whole file so they work for any language; the
//! traits let the processor take other detectors without changing the walk.

/// Trait for license detectors.
///
/// Implementations of this trait are responsible for determining whether a file
/// already contains a license header based on its content.
pub trait LicenseDetector: Send + Sync {
  /// Checks if the content already has a license header.
  ///
  /// # Parameters
  ///
  /// * `content` - The file content to check
  ///
  /// # Returns
  ///
  /// `true` if the content appears to have a license header, `false` otherwise.
  fn has_license(&self, content: &str) -> bool;
}

/// Trait for detectors of machine-generated files.
pub trait GeneratedDetector: Send + Sync {
  /// Returns the marker that flags `content` as generated, if any.
  fn generated_marker<'a>(&'a self, content: &str) -> Option<&'a str>;
}

/// Detects an Apache License header.
///
/// A file counts as licensed when it contains both `Copyright` and
/// `Licensed under the Apache License` anywhere in its content. Matching is
/// case-sensitive.
pub struct ApacheLicenseDetector;

/// Words that must all appear for a file to count as licensed.
const APACHE_SIGNATURE: [&str; 2] = ["Copyright", "Licensed under the Apache License"];

impl ApacheLicenseDetector {
  /// Creates a new ApacheLicenseDetector.
  pub const fn new() -> Self {
    ApacheLicenseDetector
  }
}

impl Default for ApacheLicenseDetector {
  fn default() -> Self {
    Self::new()
  }
}

impl LicenseDetector for ApacheLicenseDetector {
  fn has_license(&self, content: &str) -> bool {
    APACHE_SIGNATURE.iter().all(|needle| content.contains(needle))
  }
}

/// Detects generated files by a list of exact marker strings.
pub struct MarkerGeneratedDetector {
  markers: Vec<String>,
}

impl MarkerGeneratedDetector {
  /// Creates a detector that looks for any of `markers`.
  pub const fn new(markers: Vec<String>) -> Self {
    Self { markers }
  }
}

impl GeneratedDetector for MarkerGeneratedDetector {
  fn generated_marker<'a>(&'a self, content: &str) -> Option<&'a str> {
    self
      .markers
      .iter()
      .find(|marker| content.contains(marker.as_str()))
      .map(String::as_str)
  }
}
