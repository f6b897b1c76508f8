//! # Diff Module
//!
//! Renders the change a dry run would make to a file as a line diff, so a
//! header can be reviewed before re-running with `--confirm`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for dry runs.
///
/// This struct handles:
/// - Generating diffs between original and modified content
/// - Displaying diffs to stderr with colorization
/// - Appending diffs to a file
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// File that collects every diff of the run
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Returns `true` if diffs need to be computed at all.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the save file so a run starts from an empty diff.
  pub fn init(&self) -> Result<()> {
    if let Some(ref path) = self.save_diff_path {
      std::fs::write(path, "").with_context(|| format!("Failed to create diff file {}", path.display()))?;
    }
    Ok(())
  }

  /// Shows and/or saves the diff between `original` and `new`.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    if !self.is_enabled() {
      return Ok(());
    }

    let diff_content = render_diff(path, original, new);

    if self.show_diff {
      for line in diff_content.lines() {
        let colored = if line.starts_with('+') {
          line.if_supports_color(Stream::Stderr, |l| l.green()).to_string()
        } else if line.starts_with('-') {
          line.if_supports_color(Stream::Stderr, |l| l.red()).to_string()
        } else {
          line.to_string()
        };
        eprintln!("{colored}");
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file {}", diff_path.display()))?;
      file
        .write_all(diff_content.as_bytes())
        .with_context(|| format!("Failed to write diff file {}", diff_path.display()))?;
    }

    Ok(())
  }
}

/// Renders a plain-text line diff with a `Diff for <path>:` header.
pub fn render_diff(path: &Path, original: &str, new: &str) -> String {
  let diff = TextDiff::from_lines(original, new);

  let mut diff_content = format!("Diff for {}:\n", path.display());
  for change in diff.iter_all_changes() {
    let sign = match change.tag() {
      ChangeTag::Delete => "-",
      ChangeTag::Insert => "+",
      ChangeTag::Equal => " ",
    };
    diff_content.push_str(sign);
    diff_content.push_str(change.value());
    if change.missing_newline() {
      diff_content.push('\n');
    }
  }
  diff_content.push('\n');
  diff_content
}
