//! # Add Command
//!
//! This module implements the `add` command, which lists or adds missing
//! license headers under a directory.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Args;
use tracing::debug;

use k_license::config::{DEFAULT_TEMPLATES_DIR, RulesFile, ScanConfiguration, ScanRules, load_config};
use k_license::diff::DiffManager;
use k_license::info_log;
use k_license::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use k_license::output::print_summary;
use k_license::processor::{Processor, ProcessorConfig};
use k_license::report::{ScanReport, ScanSummary, write_json_report};
use k_license::templates::LicenseData;

/// Arguments for the add command
#[derive(Args, Debug)]
pub struct AddArgs {
  /// Directory holding the boilerplate.<type>.txt templates
  #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATES_DIR)]
  pub templates: PathBuf,

  /// Directory base names to skip (comma-separated or repeated). Replaces the
  /// default list when given
  #[arg(long, short = 'e', value_name = "DIR", value_delimiter = ',')]
  pub exclude: Option<Vec<String>>,

  /// Root of the tree to scan
  #[arg(long, value_name = "PATH", default_value = ".")]
  pub path: PathBuf,

  /// Write the headers. Without this flag nothing is modified
  #[arg(long)]
  pub confirm: bool,

  /// Copyright year to substitute for YEAR in the templates
  #[arg(long)]
  pub year: Option<String>,

  /// Path to config file (default: .k-license.toml in the scanned root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Show diff of the headers that would be added in dry run mode
  #[arg(long)]
  pub show_diff: bool,

  /// Save diff of the headers that would be added to a file in dry run mode
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,

  /// Write a JSON report of every visited file to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Only print the files that need a header
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the add command with the given arguments
pub fn run_add(args: AddArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let rules_file = load_config(args.config.as_deref(), &args.path, args.no_config)?;
  if rules_file.is_some() {
    debug!("Using configuration file for scan rules");
  }

  let rules = match &rules_file {
    Some(file) => file.apply_to(ScanRules::default()),
    None => ScanRules::default(),
  };
  let exclude_dirs = RulesFile::resolve_excludes(rules_file.as_ref(), args.exclude);

  let year = args.year.unwrap_or_else(|| chrono::Local::now().year().to_string());

  let diff_manager = DiffManager::new(args.show_diff, args.save_diff);
  diff_manager.init()?;

  let scan = ScanConfiguration {
    root: args.path,
    exclude_dirs,
    templates_dir: args.templates,
    confirm: args.confirm,
  };
  debug!(
    "Scanning {} with templates from {} (confirm: {})",
    scan.root.display(),
    scan.templates_dir.display(),
    scan.confirm
  );

  let processor = Processor::new(ProcessorConfig {
    rules,
    diff_manager: Some(diff_manager),
    ..ProcessorConfig::new(scan, LicenseData { year })
  });

  let start_time = Instant::now();
  let mut report = ScanReport::new();
  let result = processor.run_into(&mut report);
  debug!("Scan finished in {}ms", start_time.elapsed().as_millis());

  // The summary covers the files handled before any error
  let summary = ScanSummary::from_report(&report, processor.scan_configuration().confirm);
  print_summary(&report, &summary);

  let root = &processor.scan_configuration().root;
  result.with_context(|| format!("Failed to add license headers under {}", root.display()))?;

  if let Some(ref output_path) = args.report_json {
    write_json_report(output_path, &report, &summary)
      .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  Ok(())
}
