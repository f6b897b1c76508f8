//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing with one subcommand, `add`.

mod add;

pub use add::{AddArgs, run_add};
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  name = "k-license",
  version,
  about = "Tool for adding license headers",
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # List the files that are missing a license header
  k-license add --templates hack/boilerplate

  # Add the headers
  k-license add --templates hack/boilerplate --confirm

  # Scan a subdirectory and prune extra directories
  k-license add --path pkg --exclude vendor,testdata --templates hack/boilerplate

  # Preview every header as a diff
  k-license add --templates hack/boilerplate --show-diff
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Add headers to files
  Add(AddArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_add_defaults() {
    let cli = Cli::try_parse_from(["k-license", "add"]).unwrap();
    let Command::Add(args) = cli.command;
    assert_eq!(args.templates, PathBuf::from("../../hack/boilerplate"));
    assert_eq!(args.path, PathBuf::from("."));
    assert!(args.exclude.is_none());
    assert!(!args.confirm);
  }

  #[test]
  fn test_exclude_accepts_commas_and_repeats() {
    let cli = Cli::try_parse_from(["k-license", "add", "-e", "vendor,.git", "--exclude", "out"]).unwrap();
    let Command::Add(args) = cli.command;
    assert_eq!(
      args.exclude,
      Some(vec!["vendor".to_string(), ".git".to_string(), "out".to_string()])
    );
  }

  #[test]
  fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["k-license"]).is_err());
  }
}
