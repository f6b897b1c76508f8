//! # k-license
//!
//! A tool that adds license headers to source files.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, Command, run_add};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  match cli.command {
    Command::Add(args) => run_add(args),
  }
}
