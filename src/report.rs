//! # Report Module
//!
//! This module records the outcome of a scan: one [`FileVerdict`] per visited
//! file, folded into a [`ScanReport`]. The report can be summarized and written
//! out as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// What was done to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileAction {
  /// Nothing was or would be written
  None,
  /// The file lacks a header and a dry run left it alone
  WouldModify,
  /// The header was written
  Modified,
}

/// Outcome for a single visited file.
///
/// Built once by the processor and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileVerdict {
  /// Path to the file
  #[serde(with = "path_serialization")]
  pub path: PathBuf,
  /// Whether the file type is recognized
  pub in_scope: bool,
  /// Whether the license signature is present
  pub already_licensed: bool,
  /// Whether a generator marker is present
  pub generated: bool,
  /// Action taken on the file
  pub action: FileAction,
}

impl FileVerdict {
  /// Verdict for a file whose type is not recognized.
  pub fn out_of_scope(path: PathBuf) -> Self {
    Self {
      path,
      in_scope: false,
      already_licensed: false,
      generated: false,
      action: FileAction::None,
    }
  }

  /// Returns `true` if the file is in scope and lacks a header.
  pub const fn is_eligible(&self) -> bool {
    self.in_scope && !self.generated && !self.already_licensed
  }
}

/// Helper module for serializing/deserializing PathBuf
mod path_serialization {
  use std::path::PathBuf;

  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(path: &std::path::Path, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&path.to_string_lossy())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    Ok(PathBuf::from(s))
  }
}

/// Aggregate result of a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
  /// Every visited file in walk order
  pub verdicts: Vec<FileVerdict>,
  /// Files missing a header, in walk order
  pub eligible: Vec<PathBuf>,
  /// Directories pruned by the exclude list
  pub excluded_dirs: Vec<PathBuf>,
}

impl ScanReport {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a verdict, tracking it as eligible when it lacks a header.
  pub fn record(&mut self, verdict: FileVerdict) {
    if verdict.is_eligible() {
      self.eligible.push(verdict.path.clone());
    }
    self.verdicts.push(verdict);
  }

  pub fn record_excluded_dir(&mut self, path: PathBuf) {
    self.excluded_dirs.push(path);
  }

  /// Number of files that need, or received, a header.
  pub fn eligible_count(&self) -> usize {
    self.eligible.len()
  }

  /// Files whose header was written in this run.
  pub fn modified(&self) -> impl Iterator<Item = &Path> {
    self
      .verdicts
      .iter()
      .filter(|v| v.action == FileAction::Modified)
      .map(|v| v.path.as_path())
  }
}

/// Summary of the scan results
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
  /// Whether files were rewritten
  pub confirm: bool,
  /// Files seen by the walk
  pub files_visited: usize,
  /// Files with a recognized type
  pub files_in_scope: usize,
  /// In-scope files carrying a generator marker
  pub files_generated: usize,
  /// In-scope, non-generated files that already have a header
  pub files_licensed: usize,
  /// Files missing a header
  pub files_eligible: usize,
  /// Files rewritten in this run
  pub files_modified: usize,
  /// Directories skipped by the exclude list
  pub dirs_excluded: usize,
  /// Timestamp when the summary was generated
  pub timestamp: i64,
}

impl ScanSummary {
  pub fn from_report(report: &ScanReport, confirm: bool) -> Self {
    let in_scope = report.verdicts.iter().filter(|v| v.in_scope);

    let mut summary = Self {
      confirm,
      files_visited: report.verdicts.len(),
      files_in_scope: 0,
      files_generated: 0,
      files_licensed: 0,
      files_eligible: report.eligible_count(),
      files_modified: report.modified().count(),
      dirs_excluded: report.excluded_dirs.len(),
      timestamp: Local::now().timestamp(),
    };

    for verdict in in_scope {
      summary.files_in_scope += 1;
      if verdict.generated {
        summary.files_generated += 1;
      } else if verdict.already_licensed {
        summary.files_licensed += 1;
      }
    }

    summary
  }
}

#[derive(Serialize)]
struct JsonReport<'a> {
  summary: &'a ScanSummary,
  files: &'a [FileVerdict],
  excluded_dirs: Vec<String>,
}

/// Writes the report and its summary as pretty-printed JSON.
pub fn write_json_report(path: &Path, report: &ScanReport, summary: &ScanSummary) -> Result<()> {
  let content = render_json_report(report, summary)?;
  fs::write(path, content).with_context(|| format!("Failed to write report to {}", path.display()))
}

/// Renders the JSON report to a string.
pub fn render_json_report(report: &ScanReport, summary: &ScanSummary) -> Result<String> {
  let json = JsonReport {
    summary,
    files: &report.verdicts,
    excluded_dirs: report
      .excluded_dirs
      .iter()
      .map(|p| p.to_string_lossy().to_string())
      .collect(),
  };
  serde_json::to_string_pretty(&json).context("Failed to serialize report to JSON")
}
