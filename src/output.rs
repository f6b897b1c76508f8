//! # Output Module
//!
//! This module centralizes all user-facing output for the k-license tool.
//!
//! Per-file messages are printed while the walk runs; the closing summary is
//! printed once the walk is over. In quiet mode only the list of files that
//! need a header is printed, one path per line, so the output can be piped.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::{ScanReport, ScanSummary};

/// Symbols used in output
pub mod symbols {
  /// Success/has license
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing license
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Skipped
  pub const SKIPPED: &str = "-";
}

fn files_word(count: usize) -> &'static str {
  if count == 1 { "file" } else { "files" }
}

/// Print a skipped excluded directory.
pub fn print_excluded_dir(path: &Path) {
  if is_quiet() {
    return;
  }
  println!(
    "{} Skipping {} as it is part of the exclude list",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    path.display()
  );
}

/// Print a skipped generated file.
pub fn print_generated_file(path: &Path, marker: &str) {
  if is_quiet() {
    return;
  }
  println!(
    "{} Skipping {}: generated file ({})",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    path.display(),
    marker.trim()
  );
}

/// Print a file that already has a license header.
pub fn print_already_licensed(path: &Path) {
  if is_quiet() {
    return;
  }
  println!(
    "{} Skipping {}: license header already present",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    path.display()
  );
}

/// Print a file that received a header.
pub fn print_modified_file(path: &Path) {
  if is_quiet() {
    return;
  }
  println!(
    "{} Modified {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    path.display()
  );
}

/// Print an empty file left untouched. Only shown in verbose mode.
pub fn print_empty_file(path: &Path) {
  if !is_verbose() {
    return;
  }
  println!(
    "{} Skipping {}: file is empty, no modification required",
    symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    path.display()
  );
}

/// Print the end-of-run summary.
///
/// - Confirm mode: the number of files that needed a header, with the empty
///   ones among them called out since they are never written.
/// - Dry run: a reminder to use `--confirm`, then either the all-clear or the
///   list of files that would be modified.
pub fn print_summary(report: &ScanReport, summary: &ScanSummary) {
  if is_quiet() {
    if !summary.confirm {
      for path in &report.eligible {
        println!("{}", path.display());
      }
    }
    return;
  }

  println!();

  if summary.confirm {
    let count = report.eligible_count();
    println!(
      "Modified {} {}",
      count.if_supports_color(Stream::Stdout, |n| n.cyan()),
      files_word(count)
    );
    let unchanged_empty = count.saturating_sub(summary.files_modified);
    if unchanged_empty > 0 {
      println!(
        "{} {} empty {} left unchanged",
        symbols::SKIPPED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        unchanged_empty,
        files_word(unchanged_empty)
      );
    }
  } else {
    println!(
      "{}",
      "DRY RUN: No file changes will be made! To make file modifications, rerun the command with the \"--confirm\" flag"
        .if_supports_color(Stream::Stdout, |s| s.yellow())
    );

    let count = report.eligible_count();
    if count == 0 {
      println!(
        "{} All files have appropriate license headers. No changes required.",
        symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
      );
    } else {
      println!(
        "{} {} {} will be modified to add license headers",
        symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
        count,
        files_word(count)
      );
      println!("Listing files to be modified:");
      for path in &report.eligible {
        println!("  {}", path.display());
      }
    }
  }

  if is_verbose() {
    println!(
      "Summary: {} visited, {} in scope, {} generated, {} licensed, {} excluded {}",
      summary.files_visited,
      summary.files_in_scope,
      summary.files_generated,
      summary.files_licensed,
      summary.dirs_excluded,
      if summary.dirs_excluded == 1 { "directory" } else { "directories" }
    );
  }
}
