#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use k_license::config::ScanConfiguration;
use k_license::processor::{Processor, ProcessorConfig};
use k_license::templates::LicenseData;

pub const GO_TEMPLATE: &str = "/*\nCopyright YEAR The Kubernetes Authors.\n\nLicensed under the Apache License, Version 2.0 (the \"License\");\n*/\n";
pub const HASH_TEMPLATE: &str = "# Copyright YEAR The Kubernetes Authors.\n#\n# Licensed under the Apache License, Version 2.0 (the \"License\");\n";

/// Writes a full set of boilerplate templates into `dir`.
pub fn write_templates(dir: &Path) -> Result<()> {
  fs::write(dir.join("boilerplate.go.txt"), GO_TEMPLATE)?;
  fs::write(dir.join("boilerplate.sh.txt"), HASH_TEMPLATE)?;
  fs::write(dir.join("boilerplate.py.txt"), HASH_TEMPLATE)?;
  fs::write(dir.join("boilerplate.Makefile.txt"), HASH_TEMPLATE)?;
  fs::write(dir.join("boilerplate.Dockerfile.txt"), HASH_TEMPLATE)?;
  fs::write(dir.join("boilerplate.tf.txt"), GO_TEMPLATE)?;
  Ok(())
}

/// Writes `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) -> Result<PathBuf> {
  let path = root.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Builds the tree used by most scenarios:
///
/// ```text
/// a.go          unlicensed
/// b.go          licensed
/// vendor/c.go   unlicensed, excluded
/// ```
pub fn write_basic_tree(root: &Path) -> Result<()> {
  write_file(root, "a.go", "package a\n")?;
  write_file(
    root,
    "b.go",
    "// Copyright 2020 X\n// Licensed under the Apache License, Version 2.0\npackage b\n",
  )?;
  write_file(root, "vendor/c.go", "package c\n")?;
  Ok(())
}

/// Creates a processor over `root` with year 2024.
pub fn processor(root: &Path, templates: &Path, confirm: bool) -> Processor {
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
