//! # Configuration Module
//!
//! This module holds the immutable inputs of a scan: the [`ScanConfiguration`]
//! built from command-line flags and the [`ScanRules`] that decide which files
//! are in scope and which ones are generated.
//!
//! The built-in rules can be overridden by a `.k-license.toml` file in the
//! scan root, a file named by the `K_LICENSE_CONFIG` environment variable, or
//! an explicit `--config` path.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// The default config file name, looked up in the scan root.
pub const DEFAULT_CONFIG_FILENAME: &str = ".k-license.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "K_LICENSE_CONFIG";

/// Default location of the `boilerplate.<type>.txt` templates.
pub const DEFAULT_TEMPLATES_DIR: &str = "../../hack/boilerplate";

/// Directory names pruned from the walk unless overridden.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
  "external/bazel_tools",
  ".git",
  "node_modules",
  "_output",
  "third_party",
  "vendor",
  "verify/boilerplate/test",
];

/// Extensions (compared lowercase, leading dot included) of code files.
pub const DEFAULT_CODE_EXTENSIONS: &[&str] = &[".go", ".c", ".h", ".ipynb", ".py", ".java", ".cpp", ".sh"];

/// Exact base names of build files.
pub const DEFAULT_BUILD_BASENAMES: &[&str] = &["Makefile", "Dockerfile"];

/// Markers left behind by code generators.
pub const DEFAULT_GENERATED_MARKERS: &[&str] = &[
  "// Code generated by client-gen. DO NOT EDIT.",
  "// Code generated by controller-gen. DO NOT EDIT.",
  "// Code generated by counterfeiter. DO NOT EDIT.",
  "// Code generated by deepcopy-gen. DO NOT EDIT.",
  "// Code generated by informer-gen. DO NOT EDIT.",
  "// Code generated by lister-gen. DO NOT EDIT.",
  "// Code generated by protoc-gen-go. DO NOT EDIT.",
];

fn to_owned_vec(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| (*s).to_string()).collect()
}

/// Immutable input of a scan.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfiguration {
  /// Root of the tree to walk
  pub root: PathBuf,
  /// Directory base names whose subtrees are skipped
  pub exclude_dirs: Vec<String>,
  /// Directory holding the boilerplate templates
  pub templates_dir: PathBuf,
  /// `true` to rewrite files, `false` for a dry run
  pub confirm: bool,
}

impl ScanConfiguration {
  /// Creates a dry-run configuration with the default exclude list.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ScanConfiguration {
  ///     confirm: true,
  ///     ..ScanConfiguration::new(root, templates_dir)
  /// }
  /// ```
  pub fn new(root: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      exclude_dirs: to_owned_vec(DEFAULT_EXCLUDE_DIRS),
      templates_dir: templates_dir.into(),
      confirm: false,
    }
  }
}

/// Rules that decide which files get a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
  /// File extensions considered code, with leading dot
  pub extensions: Vec<String>,
  /// Exact base names considered build files
  pub basenames: Vec<String>,
  /// Substrings that mark a file as generated
  pub generated_markers: Vec<String>,
}

impl Default for ScanRules {
  fn default() -> Self {
    Self {
      extensions: to_owned_vec(DEFAULT_CODE_EXTENSIONS),
      basenames: to_owned_vec(DEFAULT_BUILD_BASENAMES),
      generated_markers: to_owned_vec(DEFAULT_GENERATED_MARKERS),
    }
  }
}

/// Contents of a `.k-license.toml` file.
///
/// Every key is optional; a present key replaces the built-in list wholesale.
///
/// ```toml
/// extensions = [".go", ".rs"]
/// basenames = ["Makefile", "Dockerfile", "Justfile"]
/// exclude = ["vendor", ".git"]
/// generated-markers = ["// Code generated by mockgen. DO NOT EDIT."]
/// ```
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RulesFile {
  #[serde(default)]
  pub extensions: Option<Vec<String>>,

  #[serde(default)]
  pub basenames: Option<Vec<String>>,

  #[serde(default)]
  pub exclude: Option<Vec<String>>,

  #[serde(default)]
  pub generated_markers: Option<Vec<String>>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A list in the config file contains an empty entry.
  #[error("Invalid value in '{key}': entries must not be empty")]
  EmptyEntry { key: &'static str },
}

impl RulesFile {
  /// Load a rules file from disk.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::parse(&content).map_err(|e| match e {
      ConfigError::ParseError { source, .. } => ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
      },
      other => other,
    })
  }

  /// Parse a rules file from a TOML string.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let rules: RulesFile = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: PathBuf::new(),
      source: e,
    })?;
    rules.validate()?;
    Ok(rules)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    let lists = [
      ("extensions", &self.extensions),
      ("basenames", &self.basenames),
      ("exclude", &self.exclude),
      ("generated-markers", &self.generated_markers),
    ];
    for (key, list) in lists {
      if let Some(items) = list
        && items.iter().any(|s| s.trim().is_empty())
      {
        return Err(ConfigError::EmptyEntry { key });
      }
    }
    Ok(())
  }

  /// Returns the rules with every list present in this file swapped in.
  pub fn apply_to(&self, mut rules: ScanRules) -> ScanRules {
    if let Some(extensions) = &self.extensions {
      rules.extensions = extensions.clone();
    }
    if let Some(basenames) = &self.basenames {
      rules.basenames = basenames.clone();
    }
    if let Some(markers) = &self.generated_markers {
      rules.generated_markers = markers.clone();
    }
    rules
  }

  /// Resolves the exclude list: CLI value first, then this file, then the
  /// built-in default.
  pub fn resolve_excludes(file: Option<&Self>, cli: Option<Vec<String>>) -> Vec<String> {
    cli
      .or_else(|| file.and_then(|f| f.exclude.clone()))
      .unwrap_or_else(|| to_owned_vec(DEFAULT_EXCLUDE_DIRS))
  }
}

/// Locate and load the rules file, if any.
///
/// Lookup order: the explicit path, then `K_LICENSE_CONFIG`, then
/// `.k-license.toml` in `root`. An explicit or environment path that does not
/// exist is an error; a missing default file is not.
pub fn load_config(explicit: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<RulesFile>, ConfigError> {
  if no_config {
    verbose_log!("Config file loading disabled");
    return Ok(None);
  }

  if let Some(path) = explicit {
    return RulesFile::load(path).map(Some);
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
    && !env_path.is_empty()
  {
    return RulesFile::load(Path::new(&env_path)).map(Some);
  }

  let default_path = root.join(DEFAULT_CONFIG_FILENAME);
  if default_path.is_file() {
    return RulesFile::load(&default_path).map(Some);
  }

  Ok(None)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_rules_match_builtin_lists() {
    let rules = ScanRules::default();
    assert_eq!(rules.extensions.len(), 8);
    assert!(rules.extensions.contains(&".ipynb".to_string()));
    assert_eq!(rules.basenames, vec!["Makefile", "Dockerfile"]);
    assert_eq!(rules.generated_markers.len(), 7);
  }

  #[test]
  fn test_scan_configuration_defaults_to_dry_run() {
    let config = ScanConfiguration::new(".", DEFAULT_TEMPLATES_DIR);
    assert!(!config.confirm);
    assert!(config.exclude_dirs.contains(&"vendor".to_string()));
    assert_eq!(config.templates_dir, PathBuf::from("../../hack/boilerplate"));
  }

  #[test]
  fn test_parse_rules_file() {
    let rules = RulesFile::parse(
      r#"
extensions = [".rs"]
generated-markers = ["// @generated"]
"#,
    )
    .unwrap();

    let merged = rules.apply_to(ScanRules::default());
    assert_eq!(merged.extensions, vec![".rs"]);
    assert_eq!(merged.generated_markers, vec!["// @generated"]);
    // Untouched lists keep their defaults
    assert_eq!(merged.basenames, vec!["Makefile", "Dockerfile"]);
  }

  #[test]
  fn test_parse_rejects_unknown_keys() {
    let result = RulesFile::parse("colour = \"red\"\n");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
  }

  #[test]
  fn test_parse_rejects_empty_entries() {
    let result = RulesFile::parse("exclude = [\"vendor\", \"  \"]\n");
    assert!(matches!(result, Err(ConfigError::EmptyEntry { key: "exclude" })));
  }

  #[test]
  fn test_resolve_excludes_precedence() {
    let file = RulesFile {
      exclude: Some(vec!["build".to_string()]),
      ..RulesFile::default()
    };

    let from_cli = RulesFile::resolve_excludes(Some(&file), Some(vec!["out".to_string()]));
    assert_eq!(from_cli, vec!["out"]);

    let from_file = RulesFile::resolve_excludes(Some(&file), None);
    assert_eq!(from_file, vec!["build"]);

    let builtin = RulesFile::resolve_excludes(None, None);
    assert_eq!(builtin.len(), DEFAULT_EXCLUDE_DIRS.len());
  }

  #[test]
  fn test_load_config_reads_default_file_from_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILENAME), "basenames = [\"Justfile\"]\n").unwrap();

    let loaded = load_config(None, dir.path(), false).unwrap();
    assert_eq!(loaded.and_then(|f| f.basenames), Some(vec!["Justfile".to_string()]));

    let disabled = load_config(None, dir.path(), true).unwrap();
    assert!(disabled.is_none());
  }

  #[test]
  fn test_load_config_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config(Some(&dir.path().join("nope.toml")), dir.path(), false);
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
  }
}
