//! # Templates Module
//!
//! This module picks the boilerplate template for a file and renders it.
//!
//! The module includes:
//! - [`TemplateCatalog`], the ordered table mapping file types to template
//!   file names
//! - [`TemplateManager`] for reading templates from the templates directory
//!   and substituting the year
//! - [`LicenseData`] for providing data to fill in templates
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use k_license::templates::{LicenseData, TemplateCatalog, TemplateManager};
//!
//! # fn main() -> anyhow::Result<()> {
//! let manager = TemplateManager::new("hack/boilerplate", TemplateCatalog::default());
//! let data = LicenseData {
//!   year: "2025".to_string(),
//! };
//!
//! // Reads hack/boilerplate/boilerplate.go.txt and fills in the year
//! let header = manager.render_for(Path::new("cmd/main.go"), &data)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::verbose_log;

/// Placeholder replaced by the copyright year.
pub const YEAR_PLACEHOLDER: &str = "YEAR";

/// Template used when no catalog entry matches.
pub const DEFAULT_TEMPLATE: &str = "boilerplate.tf.txt";

/// Data used to fill out a license template.
pub struct LicenseData {
  /// The copyright year to use in the license
  pub year: String,
}

/// One row of the template table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRule {
  /// Matched against the base name exactly, or as a suffix of the path
  pub pattern: String,
  /// File name of the template inside the templates directory
  pub template: String,
}

impl TemplateRule {
  pub fn new(pattern: &str, template: &str) -> Self {
    Self {
      pattern: pattern.to_string(),
      template: template.to_string(),
    }
  }

  /// Returns `true` if `path` ends with the pattern or its base name equals it.
  pub fn matches(&self, path: &Path) -> bool {
    let base_matches = path
      .file_name()
      .is_some_and(|name| name.to_string_lossy() == self.pattern.as_str());

    base_matches || path.to_string_lossy().ends_with(self.pattern.as_str())
  }
}

/// Ordered mapping from file types to template names.
///
/// Rules are tried in order and the first match wins, so the order of the
/// table is significant. Resolution never fails: anything unmatched gets the
/// default template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
  rules: Vec<TemplateRule>,
  default_template: String,
}

impl Default for TemplateCatalog {
  fn default() -> Self {
    Self::new(
      vec![
        TemplateRule::new(".sh", "boilerplate.sh.txt"),
        TemplateRule::new("Makefile", "boilerplate.Makefile.txt"),
        TemplateRule::new("Dockerfile", "boilerplate.Dockerfile.txt"),
        TemplateRule::new(".py", "boilerplate.py.txt"),
        TemplateRule::new(".go", "boilerplate.go.txt"),
      ],
      DEFAULT_TEMPLATE,
    )
  }
}

impl TemplateCatalog {
  /// Creates a catalog from an ordered rule list and a fallback name.
  pub fn new(rules: Vec<TemplateRule>, default_template: &str) -> Self {
    Self {
      rules,
      default_template: default_template.to_string(),
    }
  }

  /// The rules in matching order.
  pub fn rules(&self) -> &[TemplateRule] {
    &self.rules
  }

  /// Returns the template file name for `path`.
  pub fn resolve(&self, path: &Path) -> &str {
    self
      .rules
      .iter()
      .find(|rule| rule.matches(path))
      .map_or(self.default_template.as_str(), |rule| rule.template.as_str())
  }
}

/// Substitutes every `YEAR` in `template` with `year`.
///
/// Works on raw bytes; the template does not have to be valid UTF-8.
pub fn render(template: &[u8], data: &LicenseData) -> Vec<u8> {
  let placeholder = YEAR_PLACEHOLDER.as_bytes();
  let mut rendered = Vec::with_capacity(template.len());
  let mut rest = template;

  while let Some(pos) = rest.windows(placeholder.len()).position(|w| w == placeholder) {
    rendered.extend_from_slice(&rest[..pos]);
    rendered.extend_from_slice(data.year.as_bytes());
    rest = &rest[pos + placeholder.len()..];
  }
  rendered.extend_from_slice(rest);
  rendered
}

/// Manager for loading and rendering license templates.
///
/// Templates are read from disk each time they are needed; nothing is cached
/// between files.
pub struct TemplateManager {
  /// Directory holding the `boilerplate.<type>.txt` files
  templates_dir: PathBuf,
  /// Table used to pick a template per file
  catalog: TemplateCatalog,
}

impl TemplateManager {
  /// Creates a manager reading from `templates_dir`.
  pub fn new(templates_dir: impl Into<PathBuf>, catalog: TemplateCatalog) -> Self {
    Self {
      templates_dir: templates_dir.into(),
      catalog,
    }
  }

  /// Path of the template that applies to `file`.
  pub fn template_path_for(&self, file: &Path) -> PathBuf {
    self.templates_dir.join(self.catalog.resolve(file))
  }

  /// Reads the raw template that applies to `file`.
  ///
  /// # Errors
  ///
  /// Returns [`ScanError::TemplateRead`] if the template file does not exist
  /// or cannot be read.
  pub fn load_for(&self, file: &Path) -> Result<Vec<u8>, ScanError> {
    let template_path = self.template_path_for(file);
    verbose_log!("Loading template from: {}", template_path.display());

    std::fs::read(&template_path).map_err(|source| ScanError::TemplateRead {
      path: template_path,
      source,
    })
  }

  /// Reads and renders the template that applies to `file`.
  pub fn render_for(&self, file: &Path, data: &LicenseData) -> Result<Vec<u8>, ScanError> {
    let template = self.load_for(file)?;
    Ok(render(&template, data))
  }
}
