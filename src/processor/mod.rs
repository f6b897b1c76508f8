//! # Processor Module
//!
//! This module walks a source tree and adds license headers to the files that
//! lack one.
//!
//! The module is organized into several submodules:
//! - [`file_collector`] - Sorted depth-first traversal with directory pruning
//! - [`inspector`] - Generated-file and license detection over file content
//! - [`injector`] - Rendering and prepending the header
//! - [`file_io`] - File reading and writing operations
//!
//! The [`Processor`] ties them together. It runs on the calling thread, one
//! file at a time, and stops at the first error.

mod file_collector;
mod file_io;
mod injector;
mod inspector;

use std::path::Path;

pub use file_collector::{FileCollector, WalkEvent};
pub use file_io::FileIO;
pub use injector::{HeaderInjector, InjectOutcome, PlannedInjection, compose};
pub use inspector::{ContentInspector, Inspection};
use tracing::{debug, trace};

use crate::config::{ScanConfiguration, ScanRules};
use crate::diff::DiffManager;
use crate::error::ScanError;
use crate::file_filter::Classifier;
use crate::license_detection::{ApacheLicenseDetector, GeneratedDetector, LicenseDetector, MarkerGeneratedDetector};
use crate::output;
use crate::report::{FileAction, FileVerdict, ScanReport};
use crate::templates::{LicenseData, TemplateCatalog, TemplateManager};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub scan: ScanConfiguration,
  pub license_data: LicenseData,
  pub rules: ScanRules,
  pub catalog: TemplateCatalog,

  // Optional components
  pub license_detector: Option<Box<dyn LicenseDetector>>,
  pub generated_detector: Option<Box<dyn GeneratedDetector>>,
  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a ProcessorConfig with the built-in rules and template table.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     rules: my_rules,
  ///     ..ProcessorConfig::new(scan, license_data)
  /// }
  /// ```
  pub fn new(scan: ScanConfiguration, license_data: LicenseData) -> Self {
    Self {
      scan,
      license_data,
      rules: ScanRules::default(),
      catalog: TemplateCatalog::default(),
      license_detector: None,
      generated_detector: None,
      diff_manager: None,
    }
  }
}

/// Processor for adding license headers across a tree.
///
/// The `Processor` is responsible for:
/// - Walking the tree and pruning excluded directories
/// - Classifying files as in or out of scope
/// - Skipping generated and already-licensed files
/// - Writing headers in confirm mode, or recording them in a dry run
pub struct Processor {
  /// The immutable scan input
  scan: ScanConfiguration,

  /// In-scope and exclusion decisions
  classifier: Classifier,

  /// Generated and license detection
  inspector: ContentInspector,

  /// Header rendering and writing
  injector: HeaderInjector,

  /// Dry-run diff preview
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    let classifier = Classifier::new(&config.rules, &config.scan.exclude_dirs);

    let license_detector = config
      .license_detector
      .unwrap_or_else(|| Box::new(ApacheLicenseDetector::new()));
    let generated_detector = config
      .generated_detector
      .unwrap_or_else(|| Box::new(MarkerGeneratedDetector::new(config.rules.generated_markers.clone())));

    let template_manager = TemplateManager::new(config.scan.templates_dir.clone(), config.catalog);

    Self {
      classifier,
      inspector: ContentInspector::new(license_detector, generated_detector),
      injector: HeaderInjector::new(template_manager, config.license_data),
      diff_manager: config.diff_manager.unwrap_or_else(|| DiffManager::new(false, None)),
      scan: config.scan,
    }
  }

  pub const fn scan_configuration(&self) -> &ScanConfiguration {
    &self.scan
  }

  /// Walks the tree and returns the report.
  ///
  /// # Errors
  ///
  /// The walk stops at the first traversal, read, template or write error and
  /// returns it. Files handled before the error keep their changes.
  pub fn run(&self) -> Result<ScanReport, ScanError> {
    let mut report = ScanReport::new();
    self.run_into(&mut report)?;
    Ok(report)
  }

  /// Walks the tree, recording every outcome in `report`.
  ///
  /// On error `report` holds everything recorded before the failing file, so
  /// callers can still print what was done.
  pub fn run_into(&self, report: &mut ScanReport) -> Result<(), ScanError> {
    let start_time = std::time::Instant::now();

    for event in FileCollector::new(&self.scan.root, &self.classifier) {
      match event? {
        WalkEvent::ExcludedDir(path) => {
          debug!("Pruned excluded directory: {}", path.display());
          output::print_excluded_dir(&path);
          report.record_excluded_dir(path);
        }
        WalkEvent::File(path) => {
          let verdict = self.process_file(&path)?;
          report.record(verdict);
        }
      }
    }

    debug!(
      "Visited {} files, {} eligible, in {}ms",
      report.verdicts.len(),
      report.eligible_count(),
      start_time.elapsed().as_millis()
    );

    Ok(())
  }

  /// Classifies, inspects and, in confirm mode, updates a single file.
  pub fn process_file(&self, path: &Path) -> Result<FileVerdict, ScanError> {
    if !self.classifier.is_in_scope(path) {
      trace!("Skipping: {} (not a recognized file type)", path.display());
      return Ok(FileVerdict::out_of_scope(path.to_path_buf()));
    }

    let inspection = self.inspector.inspect(path)?;

    let mut verdict = FileVerdict {
      path: path.to_path_buf(),
      in_scope: true,
      already_licensed: inspection.already_licensed,
      generated: inspection.is_generated(),
      action: FileAction::None,
    };

    if let Some(marker) = &inspection.generated_marker {
      output::print_generated_file(path, marker);
      return Ok(verdict);
    }

    if inspection.already_licensed {
      output::print_already_licensed(path);
      return Ok(verdict);
    }

    verdict.action = if self.scan.confirm {
      self.add_header(path)?
    } else {
      self.plan_header(path)?
    };

    Ok(verdict)
  }

  fn add_header(&self, path: &Path) -> Result<FileAction, ScanError> {
    match self.injector.inject(path)? {
      InjectOutcome::Written => {
        output::print_modified_file(path);
        Ok(FileAction::Modified)
      }
      InjectOutcome::SkippedEmpty => {
        output::print_empty_file(path);
        Ok(FileAction::None)
      }
    }
  }

  /// Dry-run counterpart of [`add_header`](Self::add_header).
  ///
  /// Templates are only read when a diff was requested.
  fn plan_header(&self, path: &Path) -> Result<FileAction, ScanError> {
    if !self.diff_manager.is_enabled() {
      if FileIO::file_len(path)? == 0 {
        output::print_empty_file(path);
        return Ok(FileAction::None);
      }
      return Ok(FileAction::WouldModify);
    }

    let Some(planned) = self.injector.plan(path)? else {
      output::print_empty_file(path);
      return Ok(FileAction::None);
    };

    let original = String::from_utf8_lossy(&planned.original);
    let updated = String::from_utf8_lossy(&planned.updated);
    if let Err(e) = self.diff_manager.display_diff(path, &original, &updated) {
      eprintln!("Warning: Failed to display diff for {}: {}", path.display(), e);
    }

    Ok(FileAction::WouldModify)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  const GO_TEMPLATE: &str = "/*\nCopyright YEAR The Authors.\n\nLicensed under the Apache License, Version 2.0\n*/\n";

  fn processor(root: &Path, templates: &Path, confirm: bool) -> Processor {
    Processor::new(ProcessorConfig::new(
      ScanConfiguration {
        confirm,
        ..ScanConfiguration::new(root, templates)
      },
      LicenseData {
        year: "2024".to_string(),
      },
    ))
  }

  fn setup() -> (tempfile::TempDir, tempfile::TempDir) {
    let tree = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    fs::write(templates.path().join("boilerplate.go.txt"), GO_TEMPLATE).unwrap();
    (tree, templates)
  }

  #[test]
  fn test_out_of_scope_file_is_not_read() {
    let (tree, templates) = setup();
    // A path that does not exist would fail inspection; classification comes first
    let verdict = processor(tree.path(), templates.path(), true)
      .process_file(&tree.path().join("missing.md"))
      .unwrap();
    assert!(!verdict.in_scope);
    assert_eq!(verdict.action, FileAction::None);
  }

  #[test]
  fn test_dry_run_marks_would_modify() {
    let (tree, templates) = setup();
    let file = tree.path().join("a.go");
    fs::write(&file, "package a\n").unwrap();

    let verdict = processor(tree.path(), templates.path(), false)
      .process_file(&file)
      .unwrap();
    assert_eq!(verdict.action, FileAction::WouldModify);
    assert!(verdict.is_eligible());
    assert_eq!(fs::read_to_string(&file).unwrap(), "package a\n");
  }

  #[test]
  fn test_confirm_writes_header() {
    let (tree, templates) = setup();
    let file = tree.path().join("a.go");
    fs::write(&file, "package a\n").unwrap();

    let verdict = processor(tree.path(), templates.path(), true)
      .process_file(&file)
      .unwrap();
    assert_eq!(verdict.action, FileAction::Modified);
    let content = fs::read_to_string(&file).unwrap();
    assert!(content.starts_with("/*\nCopyright 2024 The Authors."));
    assert!(content.ends_with("*/\n\npackage a\n"));
  }

  #[test]
  fn test_generated_file_takes_precedence() {
    let (tree, templates) = setup();
    let file = tree.path().join("zz_generated.deepcopy.go");
    fs::write(&file, "// Code generated by deepcopy-gen. DO NOT EDIT.\n\npackage v1\n").unwrap();

    let verdict = processor(tree.path(), templates.path(), true)
      .process_file(&file)
      .unwrap();
    assert!(verdict.generated);
    assert!(!verdict.is_eligible());
    assert_eq!(verdict.action, FileAction::None);
  }

  #[test]
  fn test_empty_file_is_eligible_but_untouched() {
    let (tree, templates) = setup();
    let file = tree.path().join("doc.go");
    fs::write(&file, "").unwrap();

    let verdict = processor(tree.path(), templates.path(), true)
      .process_file(&file)
      .unwrap();
    assert!(verdict.is_eligible());
    assert_eq!(verdict.action, FileAction::None);
    assert_eq!(fs::metadata(&file).unwrap().len(), 0);
  }

  #[test]
  fn test_dry_run_needs_templates_only_for_diffs() {
    let (tree, templates) = setup();
    let file = tree.path().join("run.sh");
    fs::write(&file, "echo hi\n").unwrap();

    let verdict = processor(tree.path(), templates.path(), false)
      .process_file(&file)
      .unwrap();
    assert_eq!(verdict.action, FileAction::WouldModify);

    let with_diff = Processor::new(ProcessorConfig {
      diff_manager: Some(DiffManager::new(false, Some(tree.path().join("out.diff")))),
      ..ProcessorConfig::new(
        ScanConfiguration::new(tree.path(), templates.path()),
        LicenseData {
          year: "2024".to_string(),
        },
      )
    });
    let result = with_diff.process_file(&file);
    assert!(matches!(result, Err(ScanError::TemplateRead { .. })));
  }

  #[test]
  fn test_missing_template_fails_confirm() {
    let (tree, templates) = setup();
    let file = tree.path().join("run.sh");
    fs::write(&file, "echo hi\n").unwrap();

    let result = processor(tree.path(), templates.path(), true).process_file(&file);
    assert!(matches!(result, Err(ScanError::TemplateRead { .. })));
    assert_eq!(fs::read_to_string(&file).unwrap(), "echo hi\n");
  }
}
